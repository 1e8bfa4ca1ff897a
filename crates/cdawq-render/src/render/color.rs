/// Straight-alpha RGBA color in sRGB space, as written in the tutorials.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Dark teal used as the clear color by every tutorial window.
    pub const TUTORIAL_CLEAR: Color = Color::new(0.2, 0.3, 0.3, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Converts to a wgpu clear value for a surface of `format`.
    ///
    /// sRGB surfaces encode on write, so the channels are linearized first;
    /// otherwise the value would be gamma-encoded twice and look washed out.
    pub fn to_wgpu(self, format: wgpu::TextureFormat) -> wgpu::Color {
        let (r, g, b) = if format.is_srgb() {
            (srgb_to_linear(self.r), srgb_to_linear(self.g), srgb_to_linear(self.b))
        } else {
            (self.r, self.g, self.b)
        };
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: self.a as f64,
        }
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_surface_passes_channels_through() {
        let c = Color::TUTORIAL_CLEAR.to_wgpu(wgpu::TextureFormat::Bgra8Unorm);
        assert!((c.r - 0.2).abs() < 1e-6);
        assert!((c.g - 0.3).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn srgb_surface_linearizes_rgb_only() {
        let c = Color::new(0.5, 0.0, 1.0, 0.5).to_wgpu(wgpu::TextureFormat::Bgra8UnormSrgb);
        assert!((c.r - 0.214).abs() < 1e-3);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 1.0).abs() < 1e-6);
        assert_eq!(c.a, 0.5);
    }
}
