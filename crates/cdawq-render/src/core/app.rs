use anyhow::Result;

use crate::input::{InputFrame, InputState};
use crate::render::RenderCtx;
use crate::time::FrameTime;

use super::ctx::FrameCtx;

/// Returned from per-frame callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    /// Close this window; the runtime moves on to the next one.
    Exit,
}

/// One window's behavior, driven by the runtime through four transitions.
///
/// Order per window: `init` once, then `update` / `render` alternating once
/// per frame, then `shutdown` once. [`Lifecycle`](super::Lifecycle) enforces
/// this.
pub trait App {
    /// Creates GPU resources. An error closes the window and ends the run.
    fn init(&mut self, ctx: &RenderCtx<'_>) -> Result<()>;

    /// Reads input and advances state. No GPU access.
    fn update(&mut self, input: &InputState, frame: &InputFrame, time: FrameTime) -> AppControl;

    /// Records and presents one frame.
    fn render(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl>;

    /// Called after the surface was reconfigured to `ctx.size`.
    fn resize(&mut self, ctx: &RenderCtx<'_>) {
        let _ = ctx;
    }

    /// Releases GPU resources. The device is still alive at this point.
    fn shutdown(&mut self);
}
