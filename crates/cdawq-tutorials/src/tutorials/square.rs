use anyhow::Result;
use cdawq_render::assets::AssetRoot;
use cdawq_render::controls::ControlTable;
use cdawq_render::render::{Color, Geometry, ShaderPaths, VertexFormat};
use cdawq_render::scene::SceneDesc;
use cdawq_render::transform::Camera;

#[rustfmt::skip]
const VERTICES: [f32; 12] = [
     0.5,  0.5, 0.0, // top right
     0.5, -0.5, 0.0, // bottom right
    -0.5, -0.5, 0.0, // bottom left
    -0.5,  0.5, 0.0, // top left
];

/// Two triangles sharing the bottom-right / top-left diagonal.
pub(super) const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// Untextured square drawn through an index buffer.
pub fn desc(assets: &AssetRoot) -> Result<SceneDesc> {
    Ok(SceneDesc {
        title: "Square".to_string(),
        geometry: Geometry::new(
            VertexFormat::Position,
            VERTICES.to_vec(),
            Some(QUAD_INDICES.to_vec()),
        )?,
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
    fn four_vertices_six_indices() {
        let desc = desc(&AssetRoot::new("/assets")).unwrap();
        assert_eq!(desc.geometry.vertex_count(), 4);
        assert_eq!(desc.geometry.indices(), Some(&[0, 1, 3, 1, 2, 3][..]));
        assert_eq!(desc.geometry.draw_count(), 6);
    }
}
