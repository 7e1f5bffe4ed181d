//! Vello-based renderer implementation.

use crate::burst::burst_fragments;
use crate::label::label_pill;
use crate::renderer::{paint_badge, FillStyle, RenderContext, Renderer, Surface};
use kurbo::{Affine, BezPath, Circle, Point, Rect, Size};
use parley::layout::PositionedLayoutItem;
use parley::{FontContext, LayoutContext, StyleProperty};
use peniko::{Brush, Color, Fill};
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// Size of the current viewport.
    viewport_size: Size,
    /// Font context for label text (system fonts).
    font_cx: FontContext,
    /// Layout context for label text.
    layout_cx: LayoutContext<Brush>,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            viewport_size: Size::ZERO,
            font_cx: FontContext::new(),
            layout_cx: LayoutContext::new(),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Draw the label pill with centered text.
    pub fn render_label(&mut self, center: Point, text: &str, font_size: f64, background: Color, text_color: Color) {
        let brush = Brush::Solid(text_color);
        let mut builder = self.layout_cx.ranged_builder(&mut self.font_cx, text, 1.0, false);
        builder.push_default(StyleProperty::FontSize(font_size as f32));
        builder.push_default(StyleProperty::Brush(brush.clone()));
        builder.push_default(StyleProperty::FontWeight(parley::FontWeight::BOLD));
        builder.push_default(StyleProperty::FontStack(parley::FontStack::Source(
            "system-ui, sans-serif".into(),
        )));
        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, parley::Alignment::Start, parley::AlignmentOptions::default());

        let text_size = Size::new(layout.width() as f64, layout.height() as f64);
        let pill = label_pill(center, text_size);
        self.scene.fill(Fill::NonZero, Affine::IDENTITY, background, None, &pill);

        let origin = Point::new(center.x - text_size.width / 2.0, center.y - text_size.height / 2.0);
        let text_transform = Affine::translate(origin.to_vec2());

        let mut glyph_count = 0;
        for line in layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let font = run.font();
                let font_size = run.font_size();
                let synthesis = run.synthesis();
                let glyph_xform = synthesis
                    .skew()
                    .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));

                let glyphs: Vec<vello::Glyph> = glyph_run
                    .glyphs()
                    .map(|glyph| {
                        let gx = x + glyph.x;
                        let gy = y - glyph.y;
                        x += glyph.advance;
                        glyph_count += 1;
                        vello::Glyph { id: glyph.id, x: gx, y: gy }
                    })
                    .collect();

                if !glyphs.is_empty() {
                    self.scene
                        .draw_glyphs(font)
                        .brush(&brush)
                        .hint(true)
                        .transform(text_transform)
                        .glyph_transform(glyph_xform)
                        .font_size(font_size)
                        .normalized_coords(run.normalized_coords())
                        .draw(Fill::NonZero, glyphs.into_iter());
                }
            }
        }

        if glyph_count == 0 && !text.is_empty() {
            log::warn!("No glyphs rendered for label {:?}; no system font matched", text);
        }
    }

    /// Draw the burst animation at `progress` (0 to 1).
    pub fn render_burst(&mut self, center: Point, size: f64, progress: f64, color: Color) {
        for fragment in burst_fragments(center, size, progress) {
            self.scene.fill(Fill::NonZero, Affine::IDENTITY, color, None, &fragment);
        }
    }
}

impl Surface for VelloRenderer {
    fn size(&self) -> Size {
        self.viewport_size
    }

    fn push_clip(&mut self, bounds: Rect) {
        self.scene.push_clip_layer(Affine::IDENTITY, &bounds);
    }

    fn pop_clip(&mut self) {
        self.scene.pop_layer();
    }

    fn draw_circle(&mut self, circle: Circle, style: &FillStyle) {
        self.scene.fill(Fill::NonZero, Affine::IDENTITY, style.color, None, &circle);
    }

    fn draw_closed_path(&mut self, path: &BezPath, style: &FillStyle) {
        self.scene.fill(Fill::NonZero, Affine::IDENTITY, style.color, None, path);
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        // Clear the scene
        self.scene.reset();
        self.viewport_size = ctx.viewport_size;

        paint_badge(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stretchbadge_core::BadgeFrame;

    #[test]
    fn test_renderer_creation() {
        let renderer = VelloRenderer::new();
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_empty_scene() {
        let mut renderer = VelloRenderer::new();
        let frame = BadgeFrame::empty();
        let ctx = RenderContext::new(&frame, Size::new(800.0, 600.0));

        renderer.build_scene(&ctx);
        assert_eq!(renderer.size(), Size::new(800.0, 600.0));
    }

    #[test]
    fn test_take_scene_resets() {
        let mut renderer = VelloRenderer::new();
        renderer.render_burst(Point::new(50.0, 50.0), 30.0, 0.5, Color::from_rgba8(255, 0, 0, 255));
        assert!(!renderer.scene().encoding().is_empty());
        let _scene = renderer.take_scene();
        assert!(renderer.scene().encoding().is_empty());
    }
}
