use anyhow::Result;

use super::depth::DepthBuffer;
use super::mesh::VertexFormat;
use super::shader::{ShaderPair, FRAGMENT_ENTRY, VERTEX_ENTRY};
use super::texture::Texture;
use super::uniforms::TransformUniform;

/// Inputs for building a [`ScenePipeline`].
pub struct PipelineDesc<'a> {
    pub label: &'a str,
    pub shaders: &'a ShaderPair,
    pub vertex_format: VertexFormat,
    pub textured: bool,
    pub depth_test: bool,
    pub surface_format: wgpu::TextureFormat,
}

/// Render pipeline plus the layout of its single bind group:
///
/// - binding 0: `TransformUniform` (vertex stage)
/// - binding 1: texture view (fragment stage, textured only)
/// - binding 2: sampler (fragment stage, textured only)
pub struct ScenePipeline {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    textured: bool,
}

impl ScenePipeline {
    pub fn new(device: &wgpu::Device, desc: &PipelineDesc<'_>) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(&format!("{} bgl", desc.label)),
            entries: &layout_entries(desc.textured),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{} pipeline layout", desc.label)),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("{} pipeline", desc.label)),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &desc.shaders.vertex,
                entry_point: Some(VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[desc.vertex_format.layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &desc.shaders.fragment,
                entry_point: Some(FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: desc.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            // No culling: the flat tutorials rotate their back faces into view.
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: desc.depth_test.then(DepthBuffer::stencil_state),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!(
            "{}: pipeline built (textured: {}, depth: {})",
            desc.label,
            desc.textured,
            desc.depth_test
        );

        Self {
            pipeline,
            bind_group_layout,
            textured: desc.textured,
        }
    }

    pub fn raw(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    /// Builds the bind group for `uniforms` and, for textured pipelines,
    /// `texture`.
    pub fn bind_group(
        &self,
        device: &wgpu::Device,
        uniforms: &wgpu::Buffer,
        texture: Option<&Texture>,
    ) -> Result<wgpu::BindGroup> {
        let mut entries = vec![wgpu::BindGroupEntry {
            binding: 0,
            resource: uniforms.as_entire_binding(),
        }];

        match (self.textured, texture) {
            (true, Some(tex)) => {
                entries.push(wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&tex.view),
                });
                entries.push(wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&tex.sampler),
                });
            }
            (false, None) => {}
            (true, None) => anyhow::bail!("textured pipeline needs a texture to bind"),
            (false, Some(_)) => anyhow::bail!("pipeline has no texture binding"),
        }

        Ok(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cdawq scene bind group"),
            layout: &self.bind_group_layout,
            entries: &entries,
        }))
    }
}

fn layout_entries(textured: bool) -> Vec<wgpu::BindGroupLayoutEntry> {
    let mut entries = vec![wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility: wgpu::ShaderStages::VERTEX,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: TransformUniform::min_binding_size(),
        },
        count: None,
    }];

    if textured {
        entries.push(wgpu::BindGroupLayoutEntry {
            binding: 1,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        });
        entries.push(wgpu::BindGroupLayoutEntry {
            binding: 2,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_layout_has_only_uniforms() {
        let entries = layout_entries(false);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].binding, 0);
        assert_eq!(entries[0].visibility, wgpu::ShaderStages::VERTEX);
    }

    #[test]
    fn textured_layout_adds_view_and_sampler() {
        let entries = layout_entries(true);
        let bindings: Vec<u32> = entries.iter().map(|e| e.binding).collect();
        assert_eq!(bindings, [0, 1, 2]);
        assert!(entries[1..].iter().all(|e| e.visibility == wgpu::ShaderStages::FRAGMENT));
    }
}
