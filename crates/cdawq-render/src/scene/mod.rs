//! Data-driven tutorial windows.
//!
//! A [`SceneDesc`] names the geometry, shaders, textures, camera and key
//! bindings of one window; [`SceneWindow`] turns it into an [`App`](crate::core::App).

mod desc;
mod state;
mod window;

pub use desc::{SceneDesc, SceneError, TextureSet};
pub use state::SceneState;
pub use window::SceneWindow;
