//! Keyboard input.
//!
//! Public types are platform-agnostic. The runtime feeds winit events through
//! [`platform::winit::translate_window_event`] into an [`InputState`] (what is
//! held right now) and an [`InputFrame`] (what changed since the last frame).

mod frame;
pub mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};
