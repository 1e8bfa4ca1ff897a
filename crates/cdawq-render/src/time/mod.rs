//! Frame timing.
//!
//! Each tutorial window owns one `FrameClock`, ticked once per redraw. The
//! transform steps are per frame rather than per second, so timing is only
//! reported (logs, `FrameTime::elapsed`), never used to scale input.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
