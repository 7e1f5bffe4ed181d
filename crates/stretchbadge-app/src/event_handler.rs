//! Translation of winit input into badge pointer events.
//!
//! Positions stay in physical surface pixels, the space the badge anchor is
//! configured in and the renderer paints in.

use kurbo::Point;
use stretchbadge_core::{MouseButton, PointerEvent};
use winit::event::{ElementState, TouchPhase};

/// Tracks the cursor and the one touch that drives the badge.
#[derive(Debug, Clone, Default)]
pub struct EventHandler {
    /// Last known cursor position.
    cursor: Point,
    /// Finger currently driving the badge, if any.
    active_touch: Option<u64>,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) -> PointerEvent {
        self.cursor = Point::new(x, y);
        PointerEvent::moved(self.cursor)
    }

    pub fn mouse_input(&mut self, state: ElementState, button: winit::event::MouseButton) -> Option<PointerEvent> {
        let button = match button {
            winit::event::MouseButton::Left => MouseButton::Left,
            winit::event::MouseButton::Right => MouseButton::Right,
            winit::event::MouseButton::Middle => MouseButton::Middle,
            _ => return None,
        };
        let position = self.cursor;
        Some(match state {
            ElementState::Pressed => PointerEvent::Down { position, button },
            ElementState::Released => PointerEvent::Up { position, button },
        })
    }

    /// Single-touch mapping; fingers after the first are ignored.
    pub fn touch(&mut self, id: u64, phase: TouchPhase, x: f64, y: f64) -> Option<PointerEvent> {
        let position = Point::new(x, y);
        match phase {
            TouchPhase::Started => {
                if self.active_touch.is_some() {
                    return None;
                }
                self.active_touch = Some(id);
                Some(PointerEvent::press(position))
            }
            TouchPhase::Moved if self.active_touch == Some(id) => Some(PointerEvent::moved(position)),
            TouchPhase::Ended | TouchPhase::Cancelled if self.active_touch == Some(id) => {
                self.active_touch = None;
                Some(PointerEvent::release(position))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_press_uses_last_cursor() {
        let mut handler = EventHandler::new();
        handler.cursor_moved(210.0, 40.0);
        let event = handler
            .mouse_input(ElementState::Pressed, winit::event::MouseButton::Left)
            .unwrap();
        assert_eq!(event, PointerEvent::press(Point::new(210.0, 40.0)));
    }

    #[test]
    fn test_mouse_release() {
        let mut handler = EventHandler::new();
        handler.cursor_moved(5.0, 6.0);
        let event = handler
            .mouse_input(ElementState::Released, winit::event::MouseButton::Left)
            .unwrap();
        assert_eq!(event, PointerEvent::release(Point::new(5.0, 6.0)));
    }

    #[test]
    fn test_other_buttons_dropped() {
        let mut handler = EventHandler::new();
        assert!(handler
            .mouse_input(ElementState::Pressed, winit::event::MouseButton::Back)
            .is_none());
    }

    #[test]
    fn test_second_finger_ignored() {
        let mut handler = EventHandler::new();
        assert!(handler.touch(1, TouchPhase::Started, 200.0, 30.0).is_some());
        assert!(handler.touch(2, TouchPhase::Started, 50.0, 50.0).is_none());
        assert!(handler.touch(2, TouchPhase::Moved, 60.0, 60.0).is_none());
        assert_eq!(
            handler.touch(1, TouchPhase::Moved, 220.0, 90.0),
            Some(PointerEvent::moved(Point::new(220.0, 90.0)))
        );
        assert_eq!(
            handler.touch(1, TouchPhase::Ended, 220.0, 90.0),
            Some(PointerEvent::release(Point::new(220.0, 90.0)))
        );
        assert!(handler.touch(2, TouchPhase::Started, 10.0, 10.0).is_some());
    }
}
