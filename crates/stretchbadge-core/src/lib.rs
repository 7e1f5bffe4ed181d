//! Stretch Badge Core Library
//!
//! Platform-agnostic geometry and interaction logic for a draggable badge that
//! stretches into a rubber band, shrinks with distance, and bursts past a
//! threshold.

pub mod config;
pub mod controller;
pub mod frame;
pub mod geometry;
pub mod host;
pub mod input;
pub mod state;

pub use config::{BadgeConfig, BadgeStyle, ConfigError, ConfigResult, RearmPolicy, SerializableColor};
pub use controller::{InteractionController, Transition};
pub use frame::{BadgeFrame, BadgeShapes};
pub use geometry::{stretch, Outline, StretchGeometry, StretchParams, BASE_RADIUS, MIN_RADIUS, SHRINK_FACTOR};
pub use host::{BadgeHost, BurstElement, LabelElement, RedrawRequester};
pub use input::{MouseButton, PointerEvent};
pub use state::{AnchorState, BadgePhase, DragState};
