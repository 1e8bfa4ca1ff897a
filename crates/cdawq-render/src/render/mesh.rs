use wgpu::util::DeviceExt;

/// Interleaved vertex layouts used by the tutorials.
///
/// | format             | stride | location 0 (pos) | location 1 (uv) |
/// |--------------------|--------|------------------|-----------------|
/// | `Position`         | 12 B   | offset 0, 3×f32  | –               |
/// | `PositionTexCoord` | 20 B   | offset 0, 3×f32  | offset 12, 2×f32 |
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VertexFormat {
    Position,
    PositionTexCoord,
}

impl VertexFormat {
    const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
    const TEXTURED_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x2  // tex coord
    ];

    pub const fn floats_per_vertex(self) -> usize {
        match self {
            VertexFormat::Position => 3,
            VertexFormat::PositionTexCoord => 5,
        }
    }

    pub const fn stride(self) -> u64 {
        (self.floats_per_vertex() * std::mem::size_of::<f32>()) as u64
    }

    pub const fn has_tex_coords(self) -> bool {
        matches!(self, VertexFormat::PositionTexCoord)
    }

    pub fn attributes(self) -> &'static [wgpu::VertexAttribute] {
        match self {
            VertexFormat::Position => &Self::POSITION_ATTRS,
            VertexFormat::PositionTexCoord => &Self::TEXTURED_ATTRS,
        }
    }

    pub fn layout(self) -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: self.stride(),
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: self.attributes(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("geometry has no vertices")]
    Empty,

    #[error("{len} floats is not a whole number of {floats_per_vertex}-float vertices")]
    RaggedVertices { len: usize, floats_per_vertex: usize },

    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: u32 },

    #[error("{count} elements do not form whole triangles")]
    PartialTriangle { count: usize },
}

/// CPU-side mesh: interleaved `f32` vertex data plus optional `u32` indices.
///
/// Validated on construction so the upload and draw never see ragged data.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    format: VertexFormat,
    vertices: Vec<f32>,
    indices: Option<Vec<u32>>,
}

impl Geometry {
    pub fn new(
        format: VertexFormat,
        vertices: Vec<f32>,
        indices: Option<Vec<u32>>,
    ) -> Result<Self, GeometryError> {
        let per_vertex = format.floats_per_vertex();
        if vertices.is_empty() {
            return Err(GeometryError::Empty);
        }
        if vertices.len() % per_vertex != 0 {
            return Err(GeometryError::RaggedVertices {
                len: vertices.len(),
                floats_per_vertex: per_vertex,
            });
        }

        let vertex_count = (vertices.len() / per_vertex) as u32;
        match &indices {
            Some(idx) => {
                if idx.is_empty() || idx.len() % 3 != 0 {
                    return Err(GeometryError::PartialTriangle { count: idx.len() });
                }
                if let Some(&index) = idx.iter().find(|&&i| i >= vertex_count) {
                    return Err(GeometryError::IndexOutOfRange { index, vertex_count });
                }
            }
            None if vertex_count % 3 != 0 => {
                return Err(GeometryError::PartialTriangle {
                    count: vertex_count as usize,
                });
            }
            None => {}
        }

        Ok(Self {
            format,
            vertices,
            indices,
        })
    }

    pub fn format(&self) -> VertexFormat {
        self.format
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    pub fn vertex_count(&self) -> u32 {
        (self.vertices.len() / self.format.floats_per_vertex()) as u32
    }

    /// Elements covered by the single draw call: indices when present,
    /// otherwise vertices.
    pub fn draw_count(&self) -> u32 {
        match &self.indices {
            Some(idx) => idx.len() as u32,
            None => self.vertex_count(),
        }
    }
}

/// GPU buffers for one `Geometry`.
pub struct Mesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: Option<wgpu::Buffer>,
    draw_count: u32,
}

impl Mesh {
    pub fn upload(device: &wgpu::Device, geometry: &Geometry, label: &str) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} vbo")),
            contents: bytemuck::cast_slice(geometry.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = geometry.indices().map(|indices| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} ibo")),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            })
        });

        log::debug!(
            "{label}: uploaded {} vertices ({} B stride), {}",
            geometry.vertex_count(),
            geometry.format().stride(),
            match geometry.indices() {
                Some(idx) => format!("{} indices", idx.len()),
                None => "no index buffer".to_string(),
            }
        );

        Self {
            vertex_buffer,
            index_buffer,
            draw_count: geometry.draw_count(),
        }
    }

    /// Binds the buffers and issues one draw over the whole mesh.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        match &self.index_buffer {
            Some(ibo) => {
                rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..self.draw_count, 0, 0..1);
            }
            None => rpass.draw(0..self.draw_count, 0..1),
        }
    }
}
