//! GPU abstractions for wgpu.

pub mod context;

pub use context::GpuContext;
