//! Label and burst overlays, plus the host handed to the controller.

use kurbo::Point;
use std::time::{Duration, Instant};
use stretchbadge_core::{BadgeHost, BurstElement, LabelElement, RedrawRequester};
use stretchbadge_render::BURST_DURATION_MS;
use winit::window::Window;

/// Text overlay that sits on the badge.
#[derive(Debug, Clone)]
pub struct LabelOverlay {
    pub text: String,
    pub center: Point,
    pub visible: bool,
}

impl LabelOverlay {
    pub fn new(text: impl Into<String>, center: Point) -> Self {
        Self {
            text: text.into(),
            center,
            visible: true,
        }
    }
}

impl LabelElement for LabelOverlay {
    fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Timed burst animation. Plays once per `start`, then hides itself.
#[derive(Debug, Clone)]
pub struct BurstOverlay {
    pub center: Point,
    /// Badge radius the fragments are scaled from.
    pub size: f64,
    visible: bool,
    started_at: Option<Instant>,
    duration: Duration,
}

impl BurstOverlay {
    pub fn new(size: f64) -> Self {
        Self {
            center: Point::ZERO,
            size,
            visible: false,
            started_at: None,
            duration: Duration::from_millis(BURST_DURATION_MS),
        }
    }

    /// Playback progress at `now`, or `None` when there is nothing to draw.
    pub fn progress_at(&self, now: Instant) -> Option<f64> {
        if !self.visible {
            return None;
        }
        let started = self.started_at?;
        let t = now.saturating_duration_since(started).as_secs_f64() / self.duration.as_secs_f64();
        (t < 1.0).then_some(t)
    }

    pub fn progress(&self) -> Option<f64> {
        self.progress_at(Instant::now())
    }
}

impl BurstElement for BurstOverlay {
    fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.started_at = None;
        }
    }

    fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }
}

/// Borrowed view of the window and overlays for one event or redraw.
pub struct WindowHost<'a> {
    pub window: &'a Window,
    pub label: &'a mut LabelOverlay,
    pub burst: &'a mut BurstOverlay,
}

impl RedrawRequester for WindowHost<'_> {
    fn request_redraw(&mut self) {
        self.window.request_redraw();
    }
}

impl BadgeHost for WindowHost<'_> {
    fn label(&mut self) -> &mut dyn LabelElement {
        &mut *self.label
    }

    fn burst(&mut self) -> &mut dyn BurstElement {
        &mut *self.burst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_hidden_until_started() {
        let burst = BurstOverlay::new(30.0);
        assert!(burst.progress().is_none());
    }

    #[test]
    fn test_burst_progress_and_finish() {
        let mut burst = BurstOverlay::new(30.0);
        BurstElement::set_visible(&mut burst, true);
        burst.start();
        let started = burst.started_at.unwrap();

        let half = burst.progress_at(started + Duration::from_millis(BURST_DURATION_MS / 2)).unwrap();
        assert!((half - 0.5).abs() < 1e-6);
        assert!(burst.progress_at(started + Duration::from_millis(BURST_DURATION_MS)).is_none());
    }

    #[test]
    fn test_hiding_burst_stops_playback() {
        let mut burst = BurstOverlay::new(30.0);
        BurstElement::set_visible(&mut burst, true);
        burst.start();
        BurstElement::set_visible(&mut burst, false);
        assert!(burst.progress().is_none());
    }

    #[test]
    fn test_label_overlay() {
        let mut label = LabelOverlay::new("99+", Point::new(200.0, 30.0));
        LabelElement::set_center(&mut label, Point::new(10.0, 20.0));
        LabelElement::set_visible(&mut label, false);
        assert_eq!(label.center, Point::new(10.0, 20.0));
        assert!(!label.visible);
    }
}
