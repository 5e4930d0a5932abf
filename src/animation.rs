//! Frame snapshots and twist animation sequences.
//!
//! A [`Frame`] is the wire-facing snapshot of the complex at one
//! progression value: vertex coordinates, the constant edge index pairs,
//! and per-face resolved coordinates. The sequencer emits frames; keeping
//! or discarding them is the caller's business.

use serde::{Deserialize, Serialize};

use crate::complex::{OctahedralComplex, VertexSet};
use crate::error::{InputError, Result};
use crate::topology::{EDGES, VERTEX_COUNT};
use crate::twist::{bailar_twist, ray_dutt_twist, TwistKind};

/// Request-body default when no twist kind is supplied.
pub const DEFAULT_TWIST_TYPE: &str = "ray_dutt";

/// Request-body default twist angle in degrees.
pub const DEFAULT_ANGLE_DEGREES: f64 = 45.0;

/// Request-body default frame count.
pub const DEFAULT_FRAME_COUNT: u32 = 30;

/// Coordinates of one triangular face, split per axis.
///
/// The three values in each array correspond to the face's three
/// vertices in [`FACES`](crate::topology::FACES) triple order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneCoords {
    pub x: [f64; 3],
    pub y: [f64; 3],
    pub z: [f64; 3],
}

/// One snapshot of the complex geometry at a given progression value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// The six vertex positions as `[x, y, z]` triples, in index order.
    pub positions: [[f64; 3]; VERTEX_COUNT],
    /// The eleven edge index pairs (constant across all frames).
    pub edges: [[usize; 2]; 11],
    /// The eight resolved triangular faces.
    pub planes: [PlaneCoords; 8],
}

impl Frame {
    /// Packages a vertex set with the edge table and resolved faces.
    #[must_use]
    pub fn from_vertices(vertices: &VertexSet) -> Self {
        let positions = vertices.map(|p| [p.x, p.y, p.z]);
        let planes = OctahedralComplex::faces_as_coordinates(vertices)
            .map(|face| PlaneCoords {
                x: face.map(|p| p.x),
                y: face.map(|p| p.y),
                z: face.map(|p| p.z),
            });
        Self {
            positions,
            edges: EDGES,
            planes,
        }
    }
}

/// Snapshots the complex in whatever state `current` is in (the
/// undistorted initial state until a twist has been applied).
#[must_use]
pub fn initial_frame(complex: &OctahedralComplex) -> Frame {
    Frame::from_vertices(complex.current())
}

/// Generates the frame sequence for one twist animation.
///
/// Produces `frame_count + 1` frames at progression values
/// `i / frame_count` for `i` in `0..=frame_count`, so the sequence
/// always starts at the undistorted geometry and ends exactly at the
/// full requested angle. Every frame is evaluated from `initial`
/// independently of the others.
///
/// # Errors
///
/// Returns an error if `frame_count` is zero, or if a twist evaluation
/// fails.
pub fn generate_sequence(
    initial: &VertexSet,
    kind: TwistKind,
    max_angle_degrees: f64,
    frame_count: u32,
) -> Result<Vec<Frame>> {
    if frame_count < 1 {
        return Err(InputError::FrameCount(frame_count).into());
    }

    let mut frames = Vec::with_capacity(frame_count as usize + 1);
    for i in 0..=frame_count {
        let progression = f64::from(i) / f64::from(frame_count);
        let vertices = match kind {
            TwistKind::RayDutt => ray_dutt_twist(initial, max_angle_degrees, progression)?,
            TwistKind::Bailar => bailar_twist(initial, max_angle_degrees, progression)?,
        };
        frames.push(Frame::from_vertices(&vertices));
    }
    Ok(frames)
}

/// Boundary parameters of one animation request.
///
/// Field names and defaults mirror the consuming layer's request body;
/// the core accepts whatever values arrive. The twist kind is carried as
/// a raw string and resolved through the permissive
/// [`TwistKind::parse_lenient`] policy; strict callers should parse the
/// kind themselves and use [`generate_sequence`].
#[derive(Debug, Clone, Deserialize)]
pub struct TwistRequest {
    #[serde(default = "default_twist_type")]
    pub twist_type: String,
    #[serde(default = "default_angle")]
    pub angle: f64,
    #[serde(default = "default_frames")]
    pub frames: u32,
}

fn default_twist_type() -> String {
    DEFAULT_TWIST_TYPE.to_owned()
}

fn default_angle() -> f64 {
    DEFAULT_ANGLE_DEGREES
}

fn default_frames() -> u32 {
    DEFAULT_FRAME_COUNT
}

impl TwistRequest {
    /// Resolves the requested twist kind through the lenient boundary
    /// policy.
    #[must_use]
    pub fn kind(&self) -> TwistKind {
        TwistKind::parse_lenient(&self.twist_type)
    }

    /// Runs the requested animation against the given complex.
    ///
    /// # Errors
    ///
    /// Returns an error if the requested frame count is zero, or if a
    /// twist evaluation fails.
    pub fn run(&self, complex: &OctahedralComplex) -> Result<Vec<Frame>> {
        generate_sequence(complex.initial(), self.kind(), self.angle, self.frames)
    }
}
