use crate::input::Key;
use crate::transform::{Param, TransformParams, ROTATION_STEP, SCALE_STEP};

/// Which of a window's two texture images is bound.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TextureSlot {
    #[default]
    Primary,
    Secondary,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Effect {
    /// Close the window.
    Exit,
    /// Add `delta` to one accumulator.
    Adjust(Param, f32),
    /// Rebind the window's texture to the given image.
    SwapTexture(TextureSlot),
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Binding {
    pub key: Key,
    pub effect: Effect,
}

impl Binding {
    pub const fn new(key: Key, effect: Effect) -> Self {
        Self { key, effect }
    }
}

/// Non-transform effects collected during one evaluation.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameEffects {
    pub exit: bool,
    /// Last swap binding (in table order) whose key was held.
    pub texture: Option<TextureSlot>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlTable {
    bindings: Vec<Binding>,
}

impl ControlTable {
    pub fn new(bindings: Vec<Binding>) -> Self {
        Self { bindings }
    }

    /// Escape closes the window; nothing else.
    pub fn escape_only() -> Self {
        Self::new(vec![Binding::new(Key::Escape, Effect::Exit)])
    }

    /// Escape, Z-rotation (A/D), scale (Up/Down) and texture swap
    /// (Enter / right Shift).
    pub fn spin_and_scale() -> Self {
        Self::new(vec![
            Binding::new(Key::Escape, Effect::Exit),
            Binding::new(Key::Enter, Effect::SwapTexture(TextureSlot::Secondary)),
            Binding::new(Key::ShiftRight, Effect::SwapTexture(TextureSlot::Primary)),
            Binding::new(Key::A, Effect::Adjust(Param::Turn, -ROTATION_STEP)),
            Binding::new(Key::D, Effect::Adjust(Param::Turn, ROTATION_STEP)),
            Binding::new(Key::ArrowUp, Effect::Adjust(Param::Scale, SCALE_STEP)),
            Binding::new(Key::ArrowDown, Effect::Adjust(Param::Scale, -SCALE_STEP)),
        ])
    }

    /// `spin_and_scale` plus pitch (Q/E) and yaw (W/S).
    pub fn full() -> Self {
        let mut table = Self::spin_and_scale();
        table.bindings.extend([
            Binding::new(Key::Q, Effect::Adjust(Param::Pitch, ROTATION_STEP)),
            Binding::new(Key::E, Effect::Adjust(Param::Pitch, -ROTATION_STEP)),
            Binding::new(Key::W, Effect::Adjust(Param::Yaw, ROTATION_STEP)),
            Binding::new(Key::S, Effect::Adjust(Param::Yaw, -ROTATION_STEP)),
        ]);
        table
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Applies every binding whose key is held. Adjustments go straight into
    /// `params`; exit and texture requests are returned.
    pub fn apply<F>(&self, is_down: F, params: &mut TransformParams) -> FrameEffects
    where
        F: Fn(Key) -> bool,
    {
        let mut effects = FrameEffects::default();

        for binding in self.bindings.iter().filter(|b| is_down(b.key)) {
            match binding.effect {
                Effect::Exit => effects.exit = true,
                Effect::Adjust(param, delta) => params.adjust(param, delta),
                Effect::SwapTexture(slot) => effects.texture = Some(slot),
            }
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(keys: &[Key]) -> impl Fn(Key) -> bool + '_ {
        move |k| keys.contains(&k)
    }

    fn run(table: &ControlTable, keys: &[Key], frames: usize) -> TransformParams {
        let mut params = TransformParams::default();
        for _ in 0..frames {
            table.apply(held(keys), &mut params);
        }
        params
    }

    #[test]
    fn turn_accumulates_per_frame() {
        let table = ControlTable::full();
        for n in [1usize, 10, 250] {
            let p = run(&table, &[Key::D], n);
            assert!((p.turn - 0.05 * n as f32).abs() < 1e-3, "n = {n}: {}", p.turn);

            let p = run(&table, &[Key::A], n);
            assert!((p.turn + 0.05 * n as f32).abs() < 1e-3, "n = {n}: {}", p.turn);
        }
    }

    #[test]
    fn scale_accumulates_per_frame() {
        let table = ControlTable::full();
        let p = run(&table, &[Key::ArrowUp], 40);
        assert!((p.scale - (1.0 + 0.001 * 40.0)).abs() < 1e-5);

        let p = run(&table, &[Key::ArrowDown], 40);
        assert!((p.scale - (1.0 - 0.001 * 40.0)).abs() < 1e-5);
    }

    #[test]
    fn hundred_frames_of_scale_up_reaches_one_point_one() {
        let p = run(&ControlTable::full(), &[Key::ArrowUp], 100);
        assert!((p.scale - 1.1).abs() < 1e-4, "{}", p.scale);
        assert_eq!((p.pitch, p.yaw, p.turn), (0.0, 0.0, 0.0));
    }

    #[test]
    fn simultaneous_keys_do_not_interfere() {
        let table = ControlTable::full();
        let p = run(&table, &[Key::D, Key::ArrowUp, Key::Q, Key::S], 20);
        assert!((p.turn - 1.0).abs() < 1e-4);
        assert!((p.scale - 1.02).abs() < 1e-5);
        assert!((p.pitch - 1.0).abs() < 1e-4);
        assert!((p.yaw + 1.0).abs() < 1e-4);
    }

    #[test]
    fn opposite_keys_cancel() {
        let p = run(&ControlTable::full(), &[Key::W, Key::S, Key::Q, Key::E], 30);
        assert!(p.yaw.abs() < 1e-5);
        assert!(p.pitch.abs() < 1e-5);
    }

    #[test]
    fn escape_requests_exit_alongside_other_effects() {
        let mut params = TransformParams::default();
        let fx = ControlTable::full().apply(held(&[Key::Escape, Key::D]), &mut params);
        assert!(fx.exit);
        assert!(params.turn > 0.0);
    }

    #[test]
    fn escape_only_ignores_transform_keys() {
        let p = run(&ControlTable::escape_only(), &[Key::D, Key::ArrowUp, Key::Enter], 10);
        assert_eq!(p, TransformParams::default());
    }

    #[test]
    fn swap_keys_report_slot_without_touching_params() {
        let table = ControlTable::full();
        let mut params = TransformParams::default();

        let fx = table.apply(held(&[Key::Enter]), &mut params);
        assert_eq!(fx.texture, Some(TextureSlot::Secondary));

        let fx = table.apply(held(&[Key::ShiftRight]), &mut params);
        assert_eq!(fx.texture, Some(TextureSlot::Primary));

        assert_eq!(params, TransformParams::default());
    }

    #[test]
    fn later_swap_binding_wins() {
        let mut params = TransformParams::default();
        let fx = ControlTable::full().apply(held(&[Key::Enter, Key::ShiftRight]), &mut params);
        assert_eq!(fx.texture, Some(TextureSlot::Primary));
    }

    #[test]
    fn spin_and_scale_has_no_pitch_or_yaw() {
        let p = run(&ControlTable::spin_and_scale(), &[Key::Q, Key::W], 10);
        assert_eq!(p, TransformParams::default());
    }

    #[test]
    fn nothing_held_is_a_no_op() {
        let mut params = TransformParams::default();
        let fx = ControlTable::full().apply(|_| false, &mut params);
        assert_eq!(fx, FrameEffects::default());
        assert_eq!(params, TransformParams::default());
    }
}
