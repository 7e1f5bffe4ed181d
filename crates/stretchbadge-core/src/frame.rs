//! What one redraw of the badge paints.

use crate::geometry::StretchGeometry;
use kurbo::{BezPath, Circle};

/// Shapes of a stretched badge, all sharing the current radius.
#[derive(Debug, Clone)]
pub struct BadgeShapes {
    pub anchor: Circle,
    pub pointer: Circle,
    /// Closed rubber-band outline joining the two circles.
    pub outline: BezPath,
}

impl BadgeShapes {
    pub fn from_geometry(geometry: &StretchGeometry) -> Self {
        Self {
            anchor: geometry.anchor_circle(),
            pointer: geometry.pointer_circle(),
            outline: geometry.outline.to_path(),
        }
    }
}

/// Draw list for one frame. Empty while idle or after a burst.
#[derive(Debug, Clone, Default)]
pub struct BadgeFrame {
    pub shapes: Option<BadgeShapes>,
}

impl BadgeFrame {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_none()
    }
}
