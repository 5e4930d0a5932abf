//! The two named twist distortion pathways.
//!
//! Both transforms are pure functions of the reference configuration, a
//! target angle in degrees, and a progression fraction. Progression 0 is
//! the undistorted geometry and 1 the full target angle; values outside
//! [0, 1] are accepted and extrapolate (no clamping). Negative angles
//! reverse handedness, and angles beyond 360 wrap through the trigonometry
//! with no special-casing.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::complex::VertexSet;
use crate::error::{InputError, OctatwistError, Result};
use crate::math::rotation::{normalize, rotate};
use crate::math::Vector3;

/// Vertex indices of the face counter-rotated by `+theta` in a Bailar
/// twist.
pub const BAILAR_TOP: [usize; 3] = [0, 2, 4];

/// Vertex indices of the face counter-rotated by `-theta` in a Bailar
/// twist.
pub const BAILAR_BOTTOM: [usize; 3] = [1, 3, 5];

/// The recognized twist distortion families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwistKind {
    /// Rigid rotation of all six ligands about the three-fold
    /// (body-diagonal) symmetry axis.
    RayDutt,
    /// Counter-rotation of the two opposing triangular ligand faces
    /// about the principal axis.
    Bailar,
}

impl TwistKind {
    /// Parses a twist kind with the permissive boundary policy: any
    /// string other than the `"ray_dutt"` marker selects [`Bailar`].
    ///
    /// This exists for wire compatibility with clients that rely on the
    /// fallback; it is not validation. Use [`FromStr`] to reject
    /// unrecognized values.
    ///
    /// [`Bailar`]: TwistKind::Bailar
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        if s == "ray_dutt" {
            Self::RayDutt
        } else {
            Self::Bailar
        }
    }
}

impl FromStr for TwistKind {
    type Err = OctatwistError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ray_dutt" => Ok(Self::RayDutt),
            "bailar" => Ok(Self::Bailar),
            other => Err(InputError::UnknownTwistKind(other.to_owned()).into()),
        }
    }
}

/// Evaluates a Ray-Dutt twist: the whole complex rotated by
/// `max_angle_degrees * progression` about the C3 axis.
///
/// The axis is fixed at `normalize((1, 1, 1))`, which is the three-fold
/// axis only for the canonical axis-aligned configuration. A
/// non-canonical `initial` would need the axis derived from its actual
/// symmetry; that generalization is deliberately not attempted here.
///
/// # Errors
///
/// Propagates errors from axis normalization.
pub fn ray_dutt_twist(
    initial: &VertexSet,
    max_angle_degrees: f64,
    progression: f64,
) -> Result<VertexSet> {
    let theta = (max_angle_degrees * progression).to_radians();
    let axis = normalize(Vector3::new(1.0, 1.0, 1.0))?;
    Ok(rotate(initial, theta, &axis))
}

/// Evaluates a Bailar twist: the top face (indices 0, 2, 4) rotated by
/// `+theta` and the bottom face (indices 1, 3, 5) by `-theta` about the
/// principal (+z) axis, with `theta = max_angle_degrees * progression`
/// in radians.
///
/// Both rotations act on the *initial* coordinates, never on a previous
/// evaluation, so the twist is restartable from any progression value.
/// The grouping is by index convention and is independent of the edge
/// and face tables.
///
/// # Errors
///
/// Infallible for the fixed +z axis; returns `Result` for uniformity
/// with the other twist entry points.
pub fn bailar_twist(
    initial: &VertexSet,
    max_angle_degrees: f64,
    progression: f64,
) -> Result<VertexSet> {
    let theta = (max_angle_degrees * progression).to_radians();
    let axis = Vector3::z_axis();

    let top = rotate(&BAILAR_TOP.map(|i| initial[i]), theta, &axis);
    let bottom = rotate(&BAILAR_BOTTOM.map(|i| initial[i]), -theta, &axis);

    let mut twisted = *initial;
    for (slot, point) in BAILAR_TOP.iter().zip(top) {
        twisted[*slot] = point;
    }
    for (slot, point) in BAILAR_BOTTOM.iter().zip(bottom) {
        twisted[*slot] = point;
    }
    Ok(twisted)
}
