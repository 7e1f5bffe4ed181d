//! Surface that records draw calls instead of painting them.

use crate::renderer::{paint_badge, FillStyle, RenderContext, Renderer, Surface};
use kurbo::{BezPath, Circle, Rect, Size};

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    PushClip(Rect),
    PopClip,
    Circle(Circle, FillStyle),
    Path(BezPath, FillStyle),
}

/// Headless surface, handy for tests and for hosts that replay commands.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Size,
    commands: Vec<DrawCommand>,
    depth: usize,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
            depth: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands, keeping the size.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.depth = 0;
    }

    /// Clip layers pushed but not yet popped.
    pub fn open_clips(&self) -> usize {
        self.depth
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn push_clip(&mut self, bounds: Rect) {
        self.depth += 1;
        self.commands.push(DrawCommand::PushClip(bounds));
    }

    fn pop_clip(&mut self) {
        if self.depth == 0 {
            log::warn!("pop_clip without matching push_clip");
            return;
        }
        self.depth -= 1;
        self.commands.push(DrawCommand::PopClip);
    }

    fn draw_circle(&mut self, circle: Circle, style: &FillStyle) {
        self.commands.push(DrawCommand::Circle(circle, *style));
    }

    fn draw_closed_path(&mut self, path: &BezPath, style: &FillStyle) {
        self.commands.push(DrawCommand::Path(path.clone(), *style));
    }
}

impl Renderer for RecordingSurface {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.clear();
        self.size = ctx.viewport_size;
        paint_badge(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{PathEl, Point};
    use peniko::Color;
    use stretchbadge_core::{BadgeConfig, BadgeFrame, BadgeHost, BurstElement, InteractionController, LabelElement, PointerEvent, RedrawRequester};

    #[derive(Default)]
    struct NullHost;

    impl LabelElement for NullHost {
        fn set_center(&mut self, _center: Point) {}
        fn set_visible(&mut self, _visible: bool) {}
    }

    impl BurstElement for NullHost {
        fn set_center(&mut self, _center: Point) {}
        fn set_visible(&mut self, _visible: bool) {}
        fn start(&mut self) {}
    }

    impl RedrawRequester for NullHost {
        fn request_redraw(&mut self) {}
    }

    impl BadgeHost for NullHost {
        fn label(&mut self) -> &mut dyn LabelElement {
            self
        }

        fn burst(&mut self) -> &mut dyn BurstElement {
            self
        }
    }

    fn viewport() -> Size {
        Size::new(800.0, 600.0)
    }

    #[test]
    fn test_empty_frame_only_brackets() {
        let frame = BadgeFrame::empty();
        let mut surface = RecordingSurface::new(viewport());
        surface.build_scene(&RenderContext::new(&frame, viewport()));

        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::PushClip(Rect::new(0.0, 0.0, 800.0, 600.0)),
                DrawCommand::PopClip,
            ]
        );
        assert_eq!(surface.open_clips(), 0);
    }

    #[test]
    fn test_dragging_frame_draw_order() {
        let mut ctrl = InteractionController::new(&BadgeConfig::default()).unwrap();
        let mut host = NullHost;
        ctrl.handle_pointer_event(PointerEvent::press(Point::new(200.0, 30.0)), &mut host);
        ctrl.handle_pointer_event(PointerEvent::moved(Point::new(300.0, 100.0)), &mut host);
        let frame = ctrl.on_redraw(&mut host);

        let fill = FillStyle::new(Color::from_rgba8(255, 0, 0, 255));
        let mut surface = RecordingSurface::new(viewport());
        surface.build_scene(&RenderContext::new(&frame, viewport()).with_fill(fill));

        let commands = surface.commands();
        assert_eq!(commands.len(), 5);
        assert!(matches!(commands[0], DrawCommand::PushClip(_)));
        match &commands[1] {
            DrawCommand::Circle(c, style) => {
                assert_eq!(c.center, Point::new(200.0, 30.0));
                assert_eq!(*style, fill);
            }
            other => panic!("expected anchor circle, got {other:?}"),
        }
        match &commands[2] {
            DrawCommand::Circle(c, _) => assert_eq!(c.center, Point::new(300.0, 100.0)),
            other => panic!("expected pointer circle, got {other:?}"),
        }
        match &commands[3] {
            DrawCommand::Path(path, _) => {
                assert!(matches!(path.elements().last(), Some(PathEl::ClosePath)));
            }
            other => panic!("expected outline, got {other:?}"),
        }
        assert_eq!(commands[4], DrawCommand::PopClip);
    }

    #[test]
    fn test_nothing_drawn_after_burst() {
        let mut ctrl = InteractionController::new(&BadgeConfig::default()).unwrap();
        let mut host = NullHost;
        ctrl.handle_pointer_event(PointerEvent::press(Point::new(200.0, 30.0)), &mut host);
        ctrl.handle_pointer_event(PointerEvent::moved(Point::new(200.0, 230.0)), &mut host);
        ctrl.handle_pointer_event(PointerEvent::moved(Point::new(200.0, 400.0)), &mut host);
        let frame = ctrl.on_redraw(&mut host);

        let mut surface = RecordingSurface::new(viewport());
        surface.build_scene(&RenderContext::new(&frame, viewport()));
        assert_eq!(surface.commands().len(), 2);
    }

    #[test]
    fn test_unbalanced_pop_ignored() {
        let mut surface = RecordingSurface::new(viewport());
        surface.pop_clip();
        assert!(surface.commands().is_empty());
    }
}
