pub mod animation;
pub mod complex;
pub mod error;
pub mod math;
pub mod topology;
pub mod twist;

pub use error::{OctatwistError, Result};
