/// One acquired swapchain image plus the encoder recording into it.
///
/// Presentation happens when `surface_texture` is dropped after submit, so a
/// frame must not be held across redraws.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
