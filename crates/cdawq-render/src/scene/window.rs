use std::path::Path;

use anyhow::{Context, Result};

use crate::assets::load_rgba_image;
use crate::core::{App, AppControl, FrameCtx};
use crate::input::{InputFrame, InputState};
use crate::render::{
    DepthBuffer, Mesh, PipelineDesc, RenderCtx, ScenePipeline, ShaderPair, Texture, TransformUniform,
};
use crate::time::FrameTime;

use super::desc::SceneDesc;
use super::state::SceneState;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Resource {
    Depth,
    BindGroup,
    Texture,
    Pipeline,
    Uniforms,
    Mesh,
}

/// Each resource is released before the ones it references.
const RELEASE_ORDER: [Resource; 6] = [
    Resource::Depth,
    Resource::BindGroup,
    Resource::Texture,
    Resource::Pipeline,
    Resource::Uniforms,
    Resource::Mesh,
];

/// GPU resources of one scene.
struct SceneGpu {
    depth: Option<DepthBuffer>,
    bind_group: wgpu::BindGroup,
    texture: Option<Texture>,
    pipeline: ScenePipeline,
    uniforms: wgpu::Buffer,
    mesh: Mesh,
}

impl SceneGpu {
    fn release(self, title: &str) {
        let SceneGpu {
            mut depth,
            bind_group,
            mut texture,
            pipeline,
            uniforms,
            mesh,
        } = self;
        let mut bind_group = Some(bind_group);
        let mut pipeline = Some(pipeline);
        let mut uniforms = Some(uniforms);
        let mut mesh = Some(mesh);

        for resource in RELEASE_ORDER {
            match resource {
                Resource::Depth => drop(depth.take()),
                Resource::BindGroup => drop(bind_group.take()),
                Resource::Texture => drop(texture.take()),
                Resource::Pipeline => drop(pipeline.take()),
                Resource::Uniforms => drop(uniforms.take()),
                Resource::Mesh => drop(mesh.take()),
            }
            log::trace!("{title}: released {resource:?}");
        }
    }
}

/// Generic tutorial window: one mesh, one shader pair, an optional texture
/// and a transform driven by a [`ControlTable`](crate::controls::ControlTable).
pub struct SceneWindow {
    desc: SceneDesc,
    state: SceneState,
    gpu: Option<SceneGpu>,
}

impl SceneWindow {
    pub fn new(desc: SceneDesc) -> Self {
        Self {
            desc,
            state: SceneState::new(),
            gpu: None,
        }
    }
}

fn load_texture(ctx: &RenderCtx<'_>, path: &Path, title: &str) -> Result<Texture> {
    let image = load_rgba_image(path)?;
    log::debug!(
        "{title}: texture {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(Texture::from_image(ctx.device, ctx.queue, &image, &format!("{title} texture")))
}

impl App for SceneWindow {
    fn init(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let desc = &self.desc;
        desc.check()?;

        let title = desc.title.as_str();
        let mesh = Mesh::upload(ctx.device, &desc.geometry, title);
        let shaders = ShaderPair::load(ctx.device, &desc.shaders)
            .with_context(|| format!("{title}: loading shaders"))?;

        let texture = match &desc.textures {
            Some(set) => Some(load_texture(ctx, set.path(self.state.active_texture()), title)?),
            None => None,
        };

        let pipeline = ScenePipeline::new(
            ctx.device,
            &PipelineDesc {
                label: title,
                shaders: &shaders,
                vertex_format: desc.geometry.format(),
                textured: texture.is_some(),
                depth_test: desc.depth_test,
                surface_format: ctx.surface_format,
            },
        );

        let uniforms = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{title} transforms")),
            size: TransformUniform::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = pipeline.bind_group(ctx.device, &uniforms, texture.as_ref())?;
        let depth = desc.depth_test.then(|| DepthBuffer::new(ctx.device, ctx.size));

        self.gpu = Some(SceneGpu {
            depth,
            bind_group,
            texture,
            pipeline,
            uniforms,
            mesh,
        });
        Ok(())
    }

    fn update(&mut self, input: &InputState, frame: &InputFrame, time: FrameTime) -> AppControl {
        let desc = &self.desc;
        for binding in desc.controls.bindings() {
            if frame.pressed(binding.key) {
                log::trace!("{}: {:?} -> {:?}", desc.title, binding.key, binding.effect);
            }
        }

        let control = self.state.update(&desc.controls, |key| input.key_down(key));
        if let Some(slot) = self.state.pending_texture() {
            log::debug!(
                "{}: texture swap to {slot:?} queued at frame {} ({:.2}s)",
                desc.title,
                time.frame_index,
                time.elapsed
            );
        }
        control
    }

    fn render(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        let Some(gpu) = self.gpu.as_mut() else {
            anyhow::bail!("{}: render before init", self.desc.title);
        };
        let desc = &self.desc;

        if let Some(set) = &desc.textures {
            let rctx = ctx.render_ctx();
            let swapped = self.state.swap_texture(set, |path| -> Result<_> {
                let texture = load_texture(&rctx, path, &desc.title)?;
                let bind_group = gpu.pipeline.bind_group(rctx.device, &gpu.uniforms, Some(&texture))?;
                log::info!("{}: now showing {}", desc.title, path.display());
                Ok((texture, bind_group))
            })?;
            if let Some((texture, bind_group)) = swapped {
                gpu.bind_group = bind_group;
                gpu.texture = Some(texture);
            }
        }

        let size = ctx.gpu.size();
        let uniform = TransformUniform::new(
            self.state.params.model_matrix(),
            desc.camera.view(),
            desc.camera.projection(size.width, size.height),
        );
        ctx.gpu
            .queue()
            .write_buffer(&gpu.uniforms, 0, bytemuck::bytes_of(&uniform));

        let gpu = &*gpu;
        ctx.render(desc.clear, gpu.depth.as_ref().map(DepthBuffer::view), |_rctx, target| {
            let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("cdawq scene"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: target.depth_view.map(|view| {
                    wgpu::RenderPassDepthStencilAttachment {
                        view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    }
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            rpass.set_pipeline(gpu.pipeline.raw());
            rpass.set_bind_group(0, &gpu.bind_group, &[]);
            gpu.mesh.draw(&mut rpass);
            Ok(())
        })
    }

    fn resize(&mut self, ctx: &RenderCtx<'_>) {
        if let Some(depth) = self.gpu.as_mut().and_then(|gpu| gpu.depth.as_mut()) {
            depth.resize(ctx.device, ctx.size);
        }
    }

    fn shutdown(&mut self) {
        if let Some(gpu) = self.gpu.take() {
            gpu.release(&self.desc.title);
            log::debug!("{}: GPU resources released", self.desc.title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(resource: Resource) -> usize {
        RELEASE_ORDER
            .iter()
            .position(|r| *r == resource)
            .unwrap()
    }

    #[test]
    fn every_resource_is_released_once() {
        for resource in RELEASE_ORDER {
            let count = RELEASE_ORDER.iter().filter(|r| **r == resource).count();
            assert_eq!(count, 1, "{resource:?}");
        }
    }

    #[test]
    fn bind_group_goes_before_texture_then_pipeline_then_buffers() {
        assert!(position(Resource::BindGroup) < position(Resource::Texture));
        assert!(position(Resource::Texture) < position(Resource::Pipeline));
        assert!(position(Resource::Pipeline) < position(Resource::Uniforms));
        assert!(position(Resource::Pipeline) < position(Resource::Mesh));
    }
}
