use anyhow::Result;
use cdawq_render::assets::AssetRoot;
use cdawq_render::controls::ControlTable;
use cdawq_render::render::{Color, Geometry, ShaderPaths, VertexFormat};
use cdawq_render::scene::SceneDesc;
use cdawq_render::transform::Camera;

use super::square::QUAD_INDICES;
use super::texture_set;

#[rustfmt::skip]
const VERTICES: [f32; 20] = [
    // position          tex coord
     0.5,  0.5, 0.0,     1.0, 1.0, // top right
     0.5, -0.5, 0.0,     1.0, 0.0, // bottom right
    -0.5, -0.5, 0.0,     0.0, 0.0, // bottom left
    -0.5,  0.5, 0.0,     0.0, 1.0, // top left
];

/// Textured quad that spins about Z and scales.
pub fn desc(assets: &AssetRoot) -> Result<SceneDesc> {
    Ok(SceneDesc {
        title: "Texture".to_string(),
        geometry: Geometry::new(
            VertexFormat::PositionTexCoord,
            VERTICES.to_vec(),
            Some(QUAD_INDICES.to_vec()),
        )?,
        shaders: ShaderPaths::named(assets, "tex"),
        textures: Some(texture_set(assets)),
        depth_test: false,
        camera: Camera::Flat,
        controls: ControlTable::spin_and_scale(),
        clear: Color::TUTORIAL_CLEAR,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdawq_render::input::Key;

    #[test]
    fn quad_with_tex_coords() {
        let desc = desc(&AssetRoot::new("/assets")).unwrap();
        assert_eq!(desc.geometry.vertex_count(), 4);
        assert_eq!(desc.geometry.draw_count(), 6);
        assert!(desc.is_textured());
        assert!(desc.check().is_ok());
    }

    #[test]
    fn no_pitch_or_yaw_keys() {
        let desc = desc(&AssetRoot::new("/assets")).unwrap();
        let keys: Vec<Key> = desc.controls.bindings().iter().map(|b| b.key).collect();
        assert!(keys.contains(&Key::A));
        assert!(!keys.contains(&Key::Q));
        assert!(!keys.contains(&Key::W));
    }
}
