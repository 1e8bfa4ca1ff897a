use anyhow::Result;
use cdawq_render::assets::AssetRoot;
use cdawq_render::controls::ControlTable;
use cdawq_render::render::{Color, Geometry, ShaderPaths, VertexFormat};
use cdawq_render::scene::SceneDesc;
use cdawq_render::transform::Camera;

use super::texture_set;

/// Six faces, two triangles each, position + tex coord. No index buffer.
#[rustfmt::skip]
const VERTICES: [f32; 36 * 5] = [
    -0.5, -0.5, -0.5,   0.0, 0.0,
     0.5, -0.5, -0.5,   1.0, 0.0,
     0.5,  0.5, -0.5,   1.0, 1.0,
     0.5,  0.5, -0.5,   1.0, 1.0,
    -0.5,  0.5, -0.5,   0.0, 1.0,
    -0.5, -0.5, -0.5,   0.0, 0.0,

    -0.5, -0.5,  0.5,   0.0, 0.0,
     0.5, -0.5,  0.5,   1.0, 0.0,
     0.5,  0.5,  0.5,   1.0, 1.0,
     0.5,  0.5,  0.5,   1.0, 1.0,
    -0.5,  0.5,  0.5,   0.0, 1.0,
    -0.5, -0.5,  0.5,   0.0, 0.0,

    -0.5,  0.5,  0.5,   1.0, 0.0,
    -0.5,  0.5, -0.5,   1.0, 1.0,
    -0.5, -0.5, -0.5,   0.0, 1.0,
    -0.5, -0.5, -0.5,   0.0, 1.0,
    -0.5, -0.5,  0.5,   0.0, 0.0,
    -0.5,  0.5,  0.5,   1.0, 0.0,

     0.5,  0.5,  0.5,   1.0, 0.0,
     0.5,  0.5, -0.5,   1.0, 1.0,
     0.5, -0.5, -0.5,   0.0, 1.0,
     0.5, -0.5, -0.5,   0.0, 1.0,
     0.5, -0.5,  0.5,   0.0, 0.0,
     0.5,  0.5,  0.5,   1.0, 0.0,

    -0.5, -0.5, -0.5,   0.0, 1.0,
     0.5, -0.5, -0.5,   1.0, 1.0,
     0.5, -0.5,  0.5,   1.0, 0.0,
     0.5, -0.5,  0.5,   1.0, 0.0,
    -0.5, -0.5,  0.5,   0.0, 0.0,
    -0.5, -0.5, -0.5,   0.0, 1.0,

    -0.5,  0.5, -0.5,   0.0, 1.0,
     0.5,  0.5, -0.5,   1.0, 1.0,
     0.5,  0.5,  0.5,   1.0, 0.0,
     0.5,  0.5,  0.5,   1.0, 0.0,
    -0.5,  0.5,  0.5,   0.0, 0.0,
    -0.5,  0.5, -0.5,   0.0, 1.0,
];

/// Textured unit cube seen through a perspective camera, with depth testing
/// and the full key table.
pub fn desc(assets: &AssetRoot) -> Result<SceneDesc> {
    Ok(SceneDesc {
        title: "Cube".to_string(),
        geometry: Geometry::new(VertexFormat::PositionTexCoord, VERTICES.to_vec(), None)?,
        shaders: ShaderPaths::named(assets, "tex"),
        textures: Some(texture_set(assets)),
        depth_test: true,
        camera: Camera::tutorial_perspective(),
        controls: ControlTable::full(),
        clear: Color::TUTORIAL_CLEAR,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_six_vertices_non_indexed() {
        let desc = desc(&AssetRoot::new("/assets")).unwrap();
        assert_eq!(desc.geometry.vertex_count(), 36);
        assert_eq!(desc.geometry.indices(), None);
        assert_eq!(desc.geometry.draw_count(), 36);
        assert!(desc.depth_test);
        assert_eq!(desc.camera, Camera::tutorial_perspective());
    }

    #[test]
    fn every_corner_is_half_unit_from_origin() {
        for vertex in VERTICES.chunks(5) {
            assert!(vertex[..3].iter().all(|c| c.abs() == 0.5));
            assert!(vertex[3..].iter().all(|t| *t == 0.0 || *t == 1.0));
        }
    }

    #[test]
    fn full_controls() {
        let desc = desc(&AssetRoot::new("/assets")).unwrap();
        assert_eq!(desc.controls, ControlTable::full());
    }
}
