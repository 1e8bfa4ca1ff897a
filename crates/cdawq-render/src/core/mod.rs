//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the windows it drives, plus the per-frame context handed to them.

mod app;
mod ctx;
mod lifecycle;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
pub use lifecycle::{Lifecycle, LifecycleError, Phase, Transition};
