//! Model transform state and fixed cameras.
//!
//! `TransformParams` is the whole mutable state of a tutorial window: three
//! rotation angles in degrees and a uniform scale, all unbounded.

mod camera;
mod params;

pub use camera::Camera;
pub use params::{Param, TransformParams, ROTATION_STEP, SCALE_STEP};
