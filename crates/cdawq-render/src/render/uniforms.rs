use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// `model`, `view`, `projection` as column-major `mat4x4<f32>`s, matching
/// the `Transforms` struct declared in every tutorial vertex shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TransformUniform {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl TransformUniform {
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    pub fn new(model: Mat4, view: Mat4, projection: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
        }
    }

    /// Size for the bind group layout entry; never zero.
    pub fn min_binding_size() -> Option<std::num::NonZeroU64> {
        std::num::NonZeroU64::new(Self::SIZE)
    }
}

impl Default for TransformUniform {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn three_mat4_no_padding() {
        assert_eq!(TransformUniform::SIZE, 3 * 64);
        assert!(TransformUniform::min_binding_size().is_some());
    }

    #[test]
    fn matrices_stored_column_major() {
        let model = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let u = TransformUniform::new(model, Mat4::IDENTITY, Mat4::IDENTITY);
        // Translation lives in the fourth column.
        assert_eq!(u.model[3], [1.0, 2.0, 3.0, 1.0]);

        let bytes: &[u8] = bytemuck::bytes_of(&u);
        let floats: &[f32] = bytemuck::cast_slice(&bytes[..64]);
        assert_eq!(&floats[12..16], &[1.0, 2.0, 3.0, 1.0]);
    }
}
