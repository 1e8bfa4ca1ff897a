//! Key → effect tables.
//!
//! Each tutorial window carries one [`ControlTable`]. Once per frame the table
//! is evaluated against the held-key snapshot and every matching binding takes
//! effect; bindings never exclude each other.

mod table;

pub use table::{Binding, ControlTable, Effect, FrameEffects, TextureSlot};
