//! cdawq render crate.
//!
//! Platform, GPU and per-window plumbing shared by the tutorial windows,
//! plus the transform and control logic that drives them.

pub mod assets;
pub mod controls;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod scene;
pub mod time;
pub mod transform;
pub mod window;
