use glam::{Mat4, Vec3};

/// Fixed view + projection for a tutorial window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Camera {
    /// Geometry is already in clip space: identity view and projection.
    Flat,

    /// Camera pulled back `distance` units along +Z looking down -Z, with a
    /// right-handed perspective projection.
    Perspective {
        fov_y_degrees: f32,
        near: f32,
        far: f32,
        distance: f32,
    },
}

impl Camera {
    /// 45° vertical field of view, clip planes 0.1 / 100, three units back.
    pub const fn tutorial_perspective() -> Self {
        Camera::Perspective {
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
            distance: 3.0,
        }
    }

    pub fn view(&self) -> Mat4 {
        match *self {
            Camera::Flat => Mat4::IDENTITY,
            Camera::Perspective { distance, .. } => Mat4::from_translation(Vec3::new(0.0, 0.0, -distance)),
        }
    }

    /// Projection for a `width`×`height` surface. A degenerate size (minimized
    /// window) falls back to a square aspect.
    pub fn projection(&self, width: u32, height: u32) -> Mat4 {
        match *self {
            Camera::Flat => Mat4::IDENTITY,
            Camera::Perspective {
                fov_y_degrees,
                near,
                far,
                ..
            } => Mat4::perspective_rh(fov_y_degrees.to_radians(), aspect(width, height), near, far),
        }
    }
}

fn aspect(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn flat_camera_is_identity() {
        let cam = Camera::Flat;
        assert_eq!(cam.view(), Mat4::IDENTITY);
        assert_eq!(cam.projection(800, 600), Mat4::IDENTITY);
    }

    #[test]
    fn perspective_view_moves_world_back() {
        let cam = Camera::tutorial_perspective();
        let p = cam.view().transform_point3(Vec3::ZERO);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -3.0), 1e-6));
    }

    #[test]
    fn cube_center_lands_inside_clip_volume() {
        let cam = Camera::tutorial_perspective();
        let clip = cam.projection(800, 600) * cam.view() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(clip.w > 0.0);
        assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
        // wgpu depth range is [0, 1].
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn zero_height_does_not_produce_nan() {
        let m = Camera::tutorial_perspective().projection(800, 0);
        assert!(m.is_finite());
    }

    #[test]
    fn aspect_follows_surface() {
        let cam = Camera::tutorial_perspective();
        let wide = cam.projection(1600, 600);
        let square = cam.projection(600, 600);
        // x scale shrinks as the surface widens.
        assert!(wide.x_axis.x < square.x_axis.x);
    }
}
