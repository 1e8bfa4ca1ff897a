//! GPU device and surface.
//!
//! One [`Gpu`] exists per open window. It owns the wgpu instance, adapter,
//! device, queue and the configured surface, and hands out [`GpuFrame`]s.

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
