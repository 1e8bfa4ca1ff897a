//! GPU resources for the tutorial scenes.
//!
//! Every window owns one vertex buffer, at most one index buffer, one shader
//! pair compiled into a [`ScenePipeline`], at most one [`Texture`], and a
//! uniform buffer holding its [`TransformUniform`].
//!
//! Convention: vertex positions are in model space; the vertex shader applies
//! `projection * view * model`. Texture coordinate `(0, 0)` is bottom-left.

mod color;
mod ctx;
mod depth;
mod mesh;
mod pipeline;
mod shader;
mod texture;
mod uniforms;

pub use color::Color;
pub use ctx::{RenderCtx, RenderTarget};
pub use depth::DepthBuffer;
pub use mesh::{Geometry, GeometryError, Mesh, VertexFormat};
pub use pipeline::{PipelineDesc, ScenePipeline};
pub use shader::{ShaderPair, ShaderPaths, FRAGMENT_ENTRY, VERTEX_ENTRY};
pub use texture::Texture;
pub use uniforms::TransformUniform;
