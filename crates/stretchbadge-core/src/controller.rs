//! Pointer-driven state machine for one badge.
//!
//! Every event runs to completion against [`DragState`] before the next one is
//! accepted. Geometry is evaluated as soon as the pointer moves, so a redraw
//! always sees the state of the most recent event no matter when the host
//! schedules it.

use crate::config::{BadgeConfig, ConfigResult, RearmPolicy};
use crate::frame::{BadgeFrame, BadgeShapes};
use crate::geometry::{stretch, Outline, StretchGeometry, StretchParams};
use crate::host::BadgeHost;
use crate::input::PointerEvent;
use crate::state::{AnchorState, BadgePhase, DragState};
use kurbo::Point;

/// What an event did to the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Not a primary-button event; nothing changed.
    Ignored,
    /// Press inside the hit region started a drag session.
    Pressed,
    /// Press outside the hit region; only the pointer position was tracked.
    Missed,
    /// Press on a burst badge under [`RearmPolicy::SingleUse`].
    Consumed,
    Moved,
    Released,
    /// The radius reached its floor and the badge burst.
    Burst,
}

/// Translates pointer events into badge state and host side effects.
#[derive(Debug, Clone)]
pub struct InteractionController {
    anchor: AnchorState,
    params: StretchParams,
    rearm: RearmPolicy,
    state: DragState,
}

impl InteractionController {
    /// Create a controller, rejecting configs that fail [`BadgeConfig::validate`].
    pub fn new(config: &BadgeConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::with_params(config.anchor, config.stretch_params(), config.rearm))
    }

    fn with_params(anchor: Point, params: StretchParams, rearm: RearmPolicy) -> Self {
        let anchor = AnchorState::new(anchor, params.base_radius);
        Self {
            state: DragState::new(&anchor),
            anchor,
            params,
            rearm,
        }
    }

    pub fn anchor(&self) -> &AnchorState {
        &self.anchor
    }

    pub fn params(&self) -> &StretchParams {
        &self.params
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn phase(&self) -> BadgePhase {
        self.state.phase()
    }

    /// Process one pointer event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent, host: &mut dyn BadgeHost) -> Transition {
        if !event.is_primary() {
            return Transition::Ignored;
        }

        let transition = match event {
            PointerEvent::Down { position, .. } => self.press(position, host),
            PointerEvent::Move { position } => self.drag_to(position, host),
            PointerEvent::Up { position, .. } => self.release(position),
        };

        host.request_redraw();
        transition
    }

    fn press(&mut self, position: Point, host: &mut dyn BadgeHost) -> Transition {
        self.state.current_point = position;

        if self.state.has_burst && self.rearm == RearmPolicy::SingleUse {
            log::debug!("Press at {:?} ignored: badge already burst", position);
            return Transition::Consumed;
        }
        if !self.anchor.hit_test(position) {
            return Transition::Missed;
        }

        let was_burst = self.state.has_burst;
        self.state.begin_session(position, self.params.base_radius);
        if was_burst {
            host.burst().set_visible(false);
            host.label().set_visible(true);
        }
        log::debug!("Drag started at {:?}", position);

        if self.evaluate(host) {
            Transition::Burst
        } else {
            Transition::Pressed
        }
    }

    fn drag_to(&mut self, position: Point, host: &mut dyn BadgeHost) -> Transition {
        self.state.current_point = position;

        if self.state.is_dragging && !self.state.has_burst && self.evaluate(host) {
            Transition::Burst
        } else {
            Transition::Moved
        }
    }

    fn release(&mut self, position: Point) -> Transition {
        self.state.current_point = position;
        if self.state.is_dragging {
            log::debug!("Drag released at {:?}, radius {}", position, self.state.current_radius);
        }
        self.state.is_dragging = false;
        Transition::Released
    }

    /// Re-evaluate geometry for the current point. Returns true if this burst the badge.
    fn evaluate(&mut self, host: &mut dyn BadgeHost) -> bool {
        let geometry = stretch(self.anchor.center, self.state.current_point, &self.params);
        self.state.shrink_to(geometry.radius);

        if geometry.reached_floor && !self.state.has_burst {
            self.burst(host);
            return true;
        }
        false
    }

    fn burst(&mut self, host: &mut dyn BadgeHost) {
        self.state.has_burst = true;
        self.state.is_dragging = false;

        let center = self.state.current_point;
        let burst = host.burst();
        burst.set_center(center);
        burst.set_visible(true);
        burst.start();
        host.label().set_visible(false);

        log::info!("Badge burst at {:?}", center);
    }

    /// Geometry for painting, using the session radius.
    ///
    /// `None` unless a drag is live.
    pub fn geometry(&self) -> Option<StretchGeometry> {
        if !self.state.is_dragging || self.state.has_burst {
            return None;
        }

        let anchor = self.anchor.center;
        let pointer = self.state.current_point;
        let radius = self.state.current_radius;
        Some(StretchGeometry {
            anchor,
            pointer,
            distance: anchor.distance(pointer),
            radius,
            reached_floor: false,
            outline: Outline::new(anchor, pointer, radius),
        })
    }

    /// Lay out the label for this frame and return what to paint.
    pub fn on_redraw(&self, host: &mut dyn BadgeHost) -> BadgeFrame {
        if self.state.has_burst {
            return BadgeFrame::empty();
        }

        match self.geometry() {
            Some(geometry) => {
                host.label().set_center(self.state.current_point);
                BadgeFrame {
                    shapes: Some(BadgeShapes::from_geometry(&geometry)),
                }
            }
            None => {
                host.label().set_center(self.anchor.center);
                BadgeFrame::empty()
            }
        }
    }
}
