use thiserror::Error;

/// Top-level error type for the octatwist geometry engine.
#[derive(Debug, Error)]
pub enum OctatwistError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to invalid caller input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("expected {expected} vertices, got {actual}")]
    VertexCount { expected: usize, actual: usize },

    #[error("unknown twist kind: {0:?}")]
    UnknownTwistKind(String),

    #[error("frame count must be at least 1, got {0}")]
    FrameCount(u32),
}

/// Convenience type alias for results using [`OctatwistError`].
pub type Result<T> = std::result::Result<T, OctatwistError>;
