//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the window currently on screen, and wires
//! them to the GPU layer. Windows run one at a time, in order.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, WindowSlot};
