use crate::error::{InputError, Result};
use crate::math::Point3;
use crate::topology::{EDGES, FACES, VERTEX_COUNT};
use crate::twist::{bailar_twist, ray_dutt_twist, TwistKind};

/// Ordered positions of the six ligand vertices, index-addressed 0..5.
pub type VertexSet = [Point3; VERTEX_COUNT];

/// A six-ligand coordination complex.
///
/// Holds the immutable reference configuration (`initial`, fixed at
/// construction) and the result of the most recent twist evaluation
/// (`current`). Twists are always evaluated from `initial`, so any
/// progression value can be recomputed without accumulating error.
///
/// Each concurrent session should own its own instance; twist
/// application takes `&mut self`, so a shared instance requires the
/// caller's own synchronization.
#[derive(Debug, Clone)]
pub struct OctahedralComplex {
    initial: VertexSet,
    current: VertexSet,
}

impl OctahedralComplex {
    /// Creates a complex in the canonical configuration: unit ligands
    /// on +x, -x, +y, -y, +z, -z in index order.
    #[must_use]
    pub fn new() -> Self {
        let initial = [
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, -1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, -1.0),
        ];
        Self {
            initial,
            current: initial,
        }
    }

    /// Creates a complex from caller-supplied ligand positions.
    ///
    /// The points are not checked for octahedral shape; indices keep
    /// their topological role only (antipodal pairing, face membership),
    /// and the twist grouping conventions still apply by index.
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly six points are supplied.
    pub fn from_points(points: &[Point3]) -> Result<Self> {
        let initial: VertexSet = points.try_into().map_err(|_| InputError::VertexCount {
            expected: VERTEX_COUNT,
            actual: points.len(),
        })?;
        Ok(Self {
            initial,
            current: initial,
        })
    }

    /// Returns the immutable reference configuration.
    #[must_use]
    pub fn initial(&self) -> &VertexSet {
        &self.initial
    }

    /// Returns the result of the most recent twist evaluation.
    #[must_use]
    pub fn current(&self) -> &VertexSet {
        &self.current
    }

    /// Restores `current` to the reference configuration.
    pub fn reset(&mut self) {
        self.current = self.initial;
    }

    /// Returns the constant edge index pairs, independent of geometry.
    #[must_use]
    pub fn edges() -> &'static [[usize; 2]; 11] {
        &EDGES
    }

    /// Resolves the eight triangular faces to coordinates.
    ///
    /// Pure function of the supplied vertex set (not of `current`), so a
    /// caller can resolve faces for any historical frame. Triple order
    /// follows [`FACES`](crate::topology::FACES).
    #[must_use]
    pub fn faces_as_coordinates(vertices: &VertexSet) -> [[Point3; 3]; 8] {
        FACES.map(|face| face.map(|i| vertices[i]))
    }

    /// Evaluates a Ray-Dutt twist from `initial` and stores the result
    /// in `current`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying twist evaluation.
    pub fn apply_ray_dutt(
        &mut self,
        max_angle_degrees: f64,
        progression: f64,
    ) -> Result<&VertexSet> {
        self.current = ray_dutt_twist(&self.initial, max_angle_degrees, progression)?;
        Ok(&self.current)
    }

    /// Evaluates a Bailar twist from `initial` and stores the result in
    /// `current`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying twist evaluation.
    pub fn apply_bailar(
        &mut self,
        max_angle_degrees: f64,
        progression: f64,
    ) -> Result<&VertexSet> {
        self.current = bailar_twist(&self.initial, max_angle_degrees, progression)?;
        Ok(&self.current)
    }

    /// Evaluates the given twist kind from `initial` and stores the
    /// result in `current`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying twist evaluation.
    pub fn apply(
        &mut self,
        kind: TwistKind,
        max_angle_degrees: f64,
        progression: f64,
    ) -> Result<&VertexSet> {
        match kind {
            TwistKind::RayDutt => self.apply_ray_dutt(max_angle_degrees, progression),
            TwistKind::Bailar => self.apply_bailar(max_angle_degrees, progression),
        }
    }
}

impl Default for OctahedralComplex {
    fn default() -> Self {
        Self::new()
    }
}
