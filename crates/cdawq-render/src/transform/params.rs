use glam::{Mat4, Vec3};

/// Degrees added to a rotation angle per frame while its key is held.
pub const ROTATION_STEP: f32 = 0.05;

/// Added to `scale` per frame while its key is held.
pub const SCALE_STEP: f32 = 0.001;

/// Which accumulator a control adjusts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Param {
    Scale,
    /// Rotation about X, degrees.
    Pitch,
    /// Rotation about Y, degrees.
    Yaw,
    /// Rotation about Z, degrees.
    Turn,
}

/// Per-window transform accumulators.
///
/// No clamping or wrapping: angles grow without bound and `scale` may cross
/// zero, which mirrors the geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformParams {
    pub scale: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub turn: f32,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pitch: 0.0,
            yaw: 0.0,
            turn: 0.0,
        }
    }
}

impl TransformParams {
    pub fn adjust(&mut self, param: Param, delta: f32) {
        let slot = match param {
            Param::Scale => &mut self.scale,
            Param::Pitch => &mut self.pitch,
            Param::Yaw => &mut self.yaw,
            Param::Turn => &mut self.turn,
        };
        *slot += delta;
    }

    pub fn get(&self, param: Param) -> f32 {
        match param {
            Param::Scale => self.scale,
            Param::Pitch => self.pitch,
            Param::Yaw => self.yaw,
            Param::Turn => self.turn,
        }
    }

    /// Column-vector model matrix: `Scale * RotateY(yaw) * RotateZ(turn) * RotateX(pitch)`.
    ///
    /// This is the row-vector product `RotateX · RotateZ · RotateY · Scale`
    /// written for `model * v`: a vertex is pitched first, then turned, then
    /// yawed, then scaled. Rotations do not commute, so the order is fixed.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(self.scale))
            * Mat4::from_rotation_y(self.yaw.to_radians())
            * Mat4::from_rotation_z(self.turn.to_radians())
            * Mat4::from_rotation_x(self.pitch.to_radians())
    }
}
