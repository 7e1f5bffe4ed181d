//! Stretch Badge Render Library
//!
//! Renderer abstraction and implementations for the stretchy badge.
//! The default implementation uses Vello for GPU-accelerated rendering.

pub mod burst;
pub mod label;
mod recording;
mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use burst::{burst_fragments, BURST_DURATION_MS};
pub use label::label_pill;
pub use recording::{DrawCommand, RecordingSurface};
pub use renderer::{paint_badge, FillStyle, RenderContext, RenderResult, Renderer, RendererError, Surface};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
