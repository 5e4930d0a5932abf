//! Fixed connectivity of the octahedral complex.
//!
//! The six ligand vertices are index-addressed 0..5. In the default
//! configuration 0=+x, 1=-x, 2=+y, 3=-y, 4=+z, 5=-z; a caller-supplied
//! vertex set keeps only the topological role of each index (antipodal
//! pairing, face membership). These tables are constant metadata, never
//! derived from geometry.

/// Number of ligand vertices in an octahedral complex.
pub const VERTEX_COUNT: usize = 6;

/// Unordered vertex index pairs forming the drawn edges.
///
/// The first three pairs are the antipodal coordination axes; the
/// remaining eight connect non-antipodal vertices along face boundaries.
pub const EDGES: [[usize; 2]; 11] = [
    [0, 1],
    [2, 3],
    [4, 5],
    [0, 2],
    [0, 4],
    [1, 3],
    [1, 5],
    [2, 4],
    [2, 5],
    [3, 4],
    [3, 5],
];

/// Ordered vertex index triples bounding the eight triangular faces,
/// one per octant sign combination.
pub const FACES: [[usize; 3]; 8] = [
    [0, 2, 4],
    [0, 2, 5],
    [0, 3, 4],
    [0, 3, 5],
    [1, 2, 4],
    [1, 2, 5],
    [1, 3, 4],
    [1, 3, 5],
];
