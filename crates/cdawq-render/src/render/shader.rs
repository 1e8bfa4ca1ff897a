use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::assets::{read_shader_source, AssetRoot};

/// Entry point names every tutorial shader uses.
pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Locations of a vertex + fragment WGSL pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl ShaderPaths {
    /// `shaders/<stem>.vert.wgsl` and `shaders/<stem>.frag.wgsl` under `root`.
    pub fn named(root: &AssetRoot, stem: &str) -> Self {
        Self {
            vertex: root.resolve(format!("shaders/{stem}.vert.wgsl")),
            fragment: root.resolve(format!("shaders/{stem}.frag.wgsl")),
        }
    }
}

/// Compiled vertex and fragment modules.
///
/// Compile and validation errors surface through wgpu's uncaptured-error
/// handler and end the process; only missing files come back as `Err`.
pub struct ShaderPair {
    pub vertex: wgpu::ShaderModule,
    pub fragment: wgpu::ShaderModule,
}

impl ShaderPair {
    pub fn load(device: &wgpu::Device, paths: &ShaderPaths) -> Result<Self> {
        let vertex = compile(device, &paths.vertex).context("vertex shader")?;
        let fragment = compile(device, &paths.fragment).context("fragment shader")?;
        Ok(Self { vertex, fragment })
    }
}

fn compile(device: &wgpu::Device, path: &Path) -> Result<wgpu::ShaderModule> {
    let source = read_shader_source(path)?;
    let label = path.file_name().and_then(|n| n.to_str()).unwrap_or("shader");
    log::debug!("compiling {}", path.display());

    Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    }))
}
