//! Badge state definitions.

use kurbo::Point;

/// Where the badge is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgePhase {
    /// Resting at the anchor, or released before bursting.
    #[default]
    Idle,
    /// Being stretched by the pointer.
    Dragging,
    /// Stretched past the threshold; the burst overlay owns the visuals.
    Burst,
}

/// Fixed origin of the badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorState {
    pub center: Point,
    pub base_radius: f64,
}

impl AnchorState {
    pub fn new(center: Point, base_radius: f64) -> Self {
        Self { center, base_radius }
    }

    /// Square hit region of half-width `base_radius` around the anchor.
    ///
    /// Both coordinates of `point` are compared in the same local space.
    pub fn hit_test(&self, point: Point) -> bool {
        (point.x - self.center.x).abs() < self.base_radius
            && (point.y - self.center.y).abs() < self.base_radius
    }
}

/// Mutable state of one badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Last pointer position seen, tracked even when not dragging.
    pub current_point: Point,
    /// Radius of both circles; never grows during a session.
    pub current_radius: f64,
    pub is_dragging: bool,
    pub has_burst: bool,
}

impl DragState {
    pub fn new(anchor: &AnchorState) -> Self {
        Self {
            current_point: anchor.center,
            current_radius: anchor.base_radius,
            is_dragging: false,
            has_burst: false,
        }
    }

    /// Start a fresh drag session at `point`.
    pub fn begin_session(&mut self, point: Point, base_radius: f64) {
        self.current_point = point;
        self.current_radius = base_radius;
        self.is_dragging = true;
        self.has_burst = false;
    }

    /// Lower the radius; a larger value is ignored.
    pub fn shrink_to(&mut self, radius: f64) {
        self.current_radius = self.current_radius.min(radius);
    }

    pub fn phase(&self) -> BadgePhase {
        if self.has_burst {
            BadgePhase::Burst
        } else if self.is_dragging {
            BadgePhase::Dragging
        } else {
            BadgePhase::Idle
        }
    }
}
