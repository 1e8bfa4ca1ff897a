//! The four tutorial windows, in the order they open.

mod cube;
mod square;
mod textured;
mod triangle;

use anyhow::Result;
use cdawq_render::assets::AssetRoot;
use cdawq_render::scene::{SceneDesc, SceneWindow, TextureSet};
use cdawq_render::window::WindowSlot;

/// `assets/` next to this crate's manifest.
pub fn default_assets() -> AssetRoot {
    AssetRoot::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
}

/// Wooden crate first; Enter switches to the power symbol, right Shift back.
fn texture_set(assets: &AssetRoot) -> TextureSet {
    TextureSet {
        primary: assets.resolve("textures/container.png"),
        secondary: assets.resolve("textures/power.png"),
    }
}

pub fn descs(assets: &AssetRoot) -> Result<Vec<SceneDesc>> {
    Ok(vec![
        triangle::desc(assets)?,
        square::desc(assets)?,
        textured::desc(assets)?,
        cube::desc(assets)?,
    ])
}

pub fn slots(assets: &AssetRoot) -> Result<Vec<WindowSlot>> {
    let slots = descs(assets)?
        .into_iter()
        .map(|desc| WindowSlot::new(desc.runtime_config(), SceneWindow::new(desc)))
        .collect();
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_open_in_tutorial_order() {
        let titles: Vec<String> = descs(&AssetRoot::new("/assets"))
            .unwrap()
            .into_iter()
            .map(|d| d.title)
            .collect();
        assert_eq!(titles, ["Triangle", "Square", "Texture", "Cube"]);
    }

    #[test]
    fn bundled_assets_exist() {
        let assets = default_assets();
        for desc in descs(&assets).unwrap() {
            assert!(desc.shaders.vertex.is_file(), "{}", desc.shaders.vertex.display());
            assert!(desc.shaders.fragment.is_file(), "{}", desc.shaders.fragment.display());
            if let Some(set) = &desc.textures {
                assert!(set.primary.is_file());
                assert!(set.secondary.is_file());
            }
        }
    }

    #[test]
    fn bundled_textures_decode() {
        let set = texture_set(&default_assets());
        for path in [&set.primary, &set.secondary] {
            let image = cdawq_render::assets::load_rgba_image(path).unwrap();
            assert!(image.width() > 0 && image.height() > 0);
        }
    }
}
