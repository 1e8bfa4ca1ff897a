//! Files read at window setup: WGSL shader sources and texture images.

mod error;
mod loader;

pub use error::AssetError;
pub use loader::{decode_rgba_image, load_rgba_image, read_shader_source, AssetRoot};
