mod tutorials;

use anyhow::Result;
use cdawq_render::device::GpuInit;
use cdawq_render::logging::{init_logging, LoggingConfig};
use cdawq_render::window::Runtime;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let assets = tutorials::default_assets();
    log::info!("assets from {}", assets.path().display());

    let slots = tutorials::slots(&assets)?;
    log::info!("running {} tutorial windows", slots.len());

    Runtime::run_sequence(GpuInit::default(), slots)
}
