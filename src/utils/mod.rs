//! Small shared utilities.

pub mod angle;
pub use angle::{atan_yx, wrap_to_2pi, DEG2RAD, RAD2DEG, TWO_PI};
