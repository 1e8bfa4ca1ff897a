use std::path::Path;

use crate::controls::{ControlTable, TextureSlot};
use crate::core::AppControl;
use crate::input::Key;
use crate::transform::TransformParams;

use super::desc::TextureSet;

/// CPU-side state of a tutorial window; no GPU handles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneState {
    pub params: TransformParams,
    active_texture: TextureSlot,
    pending_texture: Option<TextureSlot>,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_texture(&self) -> TextureSlot {
        self.active_texture
    }

    /// Slot the next render should upload, if it differs from the bound one.
    pub fn pending_texture(&self) -> Option<TextureSlot> {
        self.pending_texture
    }

    /// Records that `slot` is now bound.
    pub fn commit_texture(&mut self, slot: TextureSlot) {
        self.active_texture = slot;
        self.pending_texture = None;
    }

    /// Loads the image of the pending slot with `load` and, only if that
    /// succeeds, records the slot as bound. A failed load leaves both the
    /// bound and the pending slot unchanged.
    pub fn swap_texture<T, E>(
        &mut self,
        set: &TextureSet,
        load: impl FnOnce(&Path) -> Result<T, E>,
    ) -> Result<Option<T>, E> {
        let Some(slot) = self.pending_texture else {
            return Ok(None);
        };
        let loaded = load(set.path(slot))?;
        self.commit_texture(slot);
        Ok(Some(loaded))
    }

    /// One frame of input: adjusts the accumulators for every held key and
    /// queues a texture swap.
    pub fn update<F>(&mut self, controls: &ControlTable, is_down: F) -> AppControl
    where
        F: Fn(Key) -> bool,
    {
        let effects = controls.apply(is_down, &mut self.params);

        if let Some(slot) = effects.texture {
            self.pending_texture = (slot != self.active_texture).then_some(slot);
        }

        if effects.exit {
            AppControl::Exit
        } else {
            AppControl::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{load_rgba_image, AssetError};
    use crate::transform::Param;
    use image::{Rgba, RgbaImage};
    use std::path::PathBuf;

    fn held(keys: &[Key]) -> impl Fn(Key) -> bool + '_ {
        move |k| keys.contains(&k)
    }

    #[test]
    fn swap_is_queued_without_touching_params() {
        let mut state = SceneState::new();
        let controls = ControlTable::full();

        assert_eq!(state.update(&controls, held(&[Key::Enter])), AppControl::Continue);
        assert_eq!(state.pending_texture(), Some(TextureSlot::Secondary));
        assert_eq!(state.params, TransformParams::default());
    }

    #[test]
    fn swap_to_bound_slot_is_not_queued() {
        let mut state = SceneState::new();
        let controls = ControlTable::full();

        state.update(&controls, held(&[Key::ShiftRight]));
        assert_eq!(state.pending_texture(), None);

        state.update(&controls, held(&[Key::Enter]));
        state.commit_texture(TextureSlot::Secondary);
        assert_eq!(state.active_texture(), TextureSlot::Secondary);
        assert_eq!(state.pending_texture(), None);

        // Holding Enter keeps the secondary image; no reload every frame.
        state.update(&controls, held(&[Key::Enter]));
        assert_eq!(state.pending_texture(), None);
    }

    #[test]
    fn hundred_frames_of_up_scale_to_1_1() {
        let mut state = SceneState::new();
        let controls = ControlTable::spin_and_scale();
        for _ in 0..100 {
            state.update(&controls, held(&[Key::ArrowUp]));
        }
        assert!((state.params.get(Param::Scale) - 1.1).abs() < 1e-4);
    }

    #[test]
    fn escape_exits_but_still_applies_held_keys() {
        let mut state = SceneState::new();
        let controls = ControlTable::full();
        let control = state.update(&controls, held(&[Key::Escape, Key::D]));
        assert_eq!(control, AppControl::Exit);
        assert!((state.params.turn - 0.05).abs() < 1e-6);
    }

    #[test]
    fn escape_only_ignores_motion_keys() {
        let mut state = SceneState::new();
        let controls = ControlTable::escape_only();
        state.update(&controls, held(&[Key::A, Key::ArrowUp, Key::Enter]));
        assert_eq!(state, SceneState::new());
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cdawq-scene-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn solid_png(path: &Path, color: Rgba<u8>) {
        RgbaImage::from_pixel(2, 2, color).save(path).unwrap();
    }

    #[test]
    fn swap_without_pending_slot_loads_nothing() {
        let mut state = SceneState::new();
        let set = TextureSet {
            primary: "a.png".into(),
            secondary: "b.png".into(),
        };
        let loaded = state.swap_texture(&set, |_| -> Result<(), ()> { panic!("no load expected") });
        assert_eq!(loaded, Ok(None));
    }

    #[test]
    fn swap_loads_secondary_image_and_commits() {
        let dir = scratch_dir("swap");
        let set = TextureSet {
            primary: dir.join("primary.png"),
            secondary: dir.join("secondary.png"),
        };
        let blue = Rgba([0, 0, 255, 255]);
        solid_png(&set.primary, Rgba([255, 0, 0, 255]));
        solid_png(&set.secondary, blue);

        let mut state = SceneState::new();
        state.update(&ControlTable::full(), held(&[Key::Enter]));

        let image = state.swap_texture(&set, load_rgba_image).unwrap().unwrap();
        assert_eq!(*image.get_pixel(0, 0), blue);
        assert_eq!(state.active_texture(), TextureSlot::Secondary);
        assert_eq!(state.pending_texture(), None);
        assert_eq!(state.params, TransformParams::default());

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn failed_swap_keeps_primary_bound() {
        let dir = scratch_dir("missing");
        let set = TextureSet {
            primary: dir.join("primary.png"),
            secondary: dir.join("not-there.png"),
        };
        solid_png(&set.primary, Rgba([255, 0, 0, 255]));

        let mut state = SceneState::new();
        state.update(&ControlTable::full(), held(&[Key::Enter]));

        let err = state.swap_texture(&set, load_rgba_image).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
        assert_eq!(state.active_texture(), TextureSlot::Primary);
        assert_eq!(state.pending_texture(), Some(TextureSlot::Secondary));

        std::fs::remove_dir_all(dir).ok();
    }
}
