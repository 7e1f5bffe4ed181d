//! Pointer events delivered to the badge.
//!
//! Positions are in the surface's local coordinate space, the same space the
//! anchor is configured in and the renderer paints in.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// The button that drives drags (also used for touch).
    pub const PRIMARY: MouseButton = MouseButton::Left;
}

/// Pointer event type for unified mouse/touch handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
}

impl PointerEvent {
    /// Primary-button press.
    pub fn press(position: Point) -> Self {
        Self::Down { position, button: MouseButton::PRIMARY }
    }

    /// Primary-button release.
    pub fn release(position: Point) -> Self {
        Self::Up { position, button: MouseButton::PRIMARY }
    }

    pub fn moved(position: Point) -> Self {
        Self::Move { position }
    }

    /// Position carried by the event.
    pub fn position(&self) -> Point {
        match *self {
            Self::Down { position, .. } | Self::Up { position, .. } | Self::Move { position } => position,
        }
    }

    /// Whether this event comes from the primary button (moves always do).
    pub fn is_primary(&self) -> bool {
        match *self {
            Self::Down { button, .. } | Self::Up { button, .. } => button == MouseButton::PRIMARY,
            Self::Move { .. } => true,
        }
    }
}
