//! Stretch Badge Application
//!
//! Native window shell hosting a single stretchy badge: winit input,
//! Vello rendering and the label/burst overlays.

#[cfg(feature = "native")]
mod app;
mod event_handler;
mod overlays;

#[cfg(feature = "native")]
pub use app::{App, AppConfig};
pub use event_handler::EventHandler;
pub use overlays::{BurstOverlay, LabelOverlay, WindowHost};
