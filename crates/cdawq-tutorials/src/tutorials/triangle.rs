use anyhow::Result;
use cdawq_render::assets::AssetRoot;
use cdawq_render::controls::ControlTable;
use cdawq_render::render::{Color, Geometry, ShaderPaths, VertexFormat};
use cdawq_render::scene::SceneDesc;
use cdawq_render::transform::Camera;

#[rustfmt::skip]
const VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0, // bottom left
     0.5, -0.5, 0.0, // bottom right
     0.0,  0.5, 0.0, // top
];

/// One untextured triangle in clip space.
pub fn desc(assets: &AssetRoot) -> Result<SceneDesc> {
    Ok(SceneDesc {
        title: "Triangle".to_string(),
        geometry: Geometry::new(VertexFormat::Position, VERTICES.to_vec(), None)?,
        shaders: ShaderPaths::named(assets, "plain"),
        textures: None,
        depth_test: false,
        camera: Camera::Flat,
        controls: ControlTable::escape_only(),
        clear: Color::TUTORIAL_CLEAR,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_vertices_drawn_directly() {
        let desc = desc(&AssetRoot::new("/assets")).unwrap();
        assert_eq!(desc.geometry.vertex_count(), 3);
        assert_eq!(desc.geometry.indices(), None);
        assert_eq!(desc.geometry.draw_count(), 3);
        assert!(!desc.is_textured());
        assert!(desc.check().is_ok());
    }
}
