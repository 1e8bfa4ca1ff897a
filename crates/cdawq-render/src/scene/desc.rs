use std::path::{Path, PathBuf};

use crate::controls::{ControlTable, TextureSlot};
use crate::render::{Color, Geometry, ShaderPaths};
use crate::transform::Camera;
use crate::window::RuntimeConfig;

/// The two images a textured window can switch between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureSet {
    pub primary: PathBuf,
    pub secondary: PathBuf,
}

impl TextureSet {
    pub fn path(&self, slot: TextureSlot) -> &Path {
        match slot {
            TextureSlot::Primary => &self.primary,
            TextureSlot::Secondary => &self.secondary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("'{title}' binds textures but its vertices carry no texture coordinates")]
    MissingTexCoords { title: String },
}

/// Everything that distinguishes one tutorial window from another.
#[derive(Debug, Clone)]
pub struct SceneDesc {
    pub title: String,
    pub geometry: Geometry,
    pub shaders: ShaderPaths,
    pub textures: Option<TextureSet>,
    pub depth_test: bool,
    pub camera: Camera,
    pub controls: ControlTable,
    pub clear: Color,
}

impl SceneDesc {
    pub fn is_textured(&self) -> bool {
        self.textures.is_some()
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig::titled(self.title.clone())
    }

    pub fn check(&self) -> Result<(), SceneError> {
        if self.is_textured() && !self.geometry.format().has_tex_coords() {
            return Err(SceneError::MissingTexCoords {
                title: self.title.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetRoot;
    use crate::render::VertexFormat;

    fn desc(format: VertexFormat, textures: Option<TextureSet>) -> SceneDesc {
        let vertices = match format {
            VertexFormat::Position => vec![0.0; 9],
            VertexFormat::PositionTexCoord => vec![0.0; 15],
        };
        let root = AssetRoot::new("/assets");
        SceneDesc {
            title: "t".into(),
            geometry: Geometry::new(format, vertices, None).unwrap(),
            shaders: ShaderPaths::named(&root, "plain"),
            textures,
            depth_test: false,
            camera: Camera::Flat,
            controls: ControlTable::escape_only(),
            clear: Color::TUTORIAL_CLEAR,
        }
    }

    fn set() -> TextureSet {
        TextureSet {
            primary: "a.png".into(),
            secondary: "b.png".into(),
        }
    }

    #[test]
    fn textures_need_tex_coords() {
        let err = desc(VertexFormat::Position, Some(set())).check().unwrap_err();
        assert_eq!(err, SceneError::MissingTexCoords { title: "t".into() });
        assert!(desc(VertexFormat::PositionTexCoord, Some(set())).check().is_ok());
        assert!(desc(VertexFormat::PositionTexCoord, None).check().is_ok());
    }

    #[test]
    fn slot_paths() {
        let s = set();
        assert_eq!(s.path(TextureSlot::Primary), Path::new("a.png"));
        assert_eq!(s.path(TextureSlot::Secondary), Path::new("b.png"));
    }
}
