use anyhow::Result;
use winit::window::Window;

use crate::device::{Gpu, SurfaceErrorAction};
use crate::render::{Color, RenderCtx, RenderTarget};
use crate::time::FrameTime;

use super::app::AppControl;

/// Handle to the window being drawn.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

/// Per-frame context passed to [`App::render`](super::App::render).
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Device handles for resource work done outside the draw closure.
    pub fn render_ctx(&self) -> RenderCtx<'_> {
        self.gpu.render_ctx()
    }

    /// Clears the surface with `clear` (and `depth` to 1.0 if given), calls
    /// `draw` with a ready [`RenderCtx`] and [`RenderTarget`], then presents.
    ///
    /// A lost or outdated surface skips the frame; only an out-of-memory
    /// surface returns [`AppControl::Exit`].
    pub fn render<F>(
        &mut self,
        clear: Color,
        depth: Option<&wgpu::TextureView>,
        draw: F,
    ) -> Result<AppControl>
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>) -> Result<()>,
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                log::debug!("surface acquire failed: {err}");
                let action = self.gpu.handle_surface_error(err);
                if action == SurfaceErrorAction::Fatal {
                    log::error!("surface unusable, closing window");
                    return Ok(AppControl::Exit);
                }
                return Ok(AppControl::Continue);
            }
        };

        let clear = clear.to_wgpu(self.gpu.surface_format());

        // Clear pass; dropped before the encoder is moved into submit().
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("cdawq clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: depth.map(|view| wgpu::RenderPassDepthStencilAttachment {
                    view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let rctx = self.gpu.render_ctx();

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        let drawn = {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view, depth);
            draw(&rctx, &mut target)
        };

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        drawn.map(|()| AppControl::Continue)
    }
}
