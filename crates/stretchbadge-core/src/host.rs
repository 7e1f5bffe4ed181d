//! Capabilities the badge needs from whatever hosts it.
//!
//! The controller never talks to a toolkit directly. A host hands it these
//! traits for the duration of one event or one redraw.

use kurbo::Point;

/// Schedules a repaint. Hosts may coalesce several requests into one frame.
pub trait RedrawRequester {
    fn request_redraw(&mut self);
}

/// Positionable text overlay (the counter shown on the badge).
pub trait LabelElement {
    /// Center the label on `center`.
    fn set_center(&mut self, center: Point);
    fn set_visible(&mut self, visible: bool);
}

/// Pre-built dismissal animation.
pub trait BurstElement {
    /// Center the animation on `center`.
    fn set_center(&mut self, center: Point);
    fn set_visible(&mut self, visible: bool);
    /// Start playback. The element runs it to completion on its own.
    fn start(&mut self);
}

/// Everything the controller drives.
pub trait BadgeHost: RedrawRequester {
    fn label(&mut self) -> &mut dyn LabelElement;
    fn burst(&mut self) -> &mut dyn BurstElement;
}
