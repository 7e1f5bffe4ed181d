//! Renderer trait abstraction.

use kurbo::{BezPath, Circle, Point, Rect, Size};
use peniko::Color;
use stretchbadge_core::frame::BadgeFrame;
use stretchbadge_core::BadgeStyle;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// How a shape is filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillStyle {
    pub color: Color,
}

impl FillStyle {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Default for FillStyle {
    fn default() -> Self {
        Self::new(BadgeStyle::default().fill.into())
    }
}

/// Drawing primitives the badge needs from a backend.
///
/// Coordinates are the same local space pointer events arrive in.
pub trait Surface {
    /// Size of the drawable area.
    fn size(&self) -> Size;

    /// Start a layer clipped to `bounds`. Paired with [`Surface::pop_clip`].
    fn push_clip(&mut self, bounds: Rect);

    fn pop_clip(&mut self);

    fn draw_circle(&mut self, circle: Circle, style: &FillStyle);

    /// Fill a closed path.
    fn draw_closed_path(&mut self, path: &BezPath, style: &FillStyle);
}

/// Context passed to renderers for one frame.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// What the controller wants painted.
    pub frame: &'a BadgeFrame,
    /// Viewport size in local coordinates.
    pub viewport_size: Size,
    /// Scale factor for HiDPI displays.
    pub scale_factor: f64,
    /// Background color.
    pub background_color: Color,
    /// Fill for circles and outline.
    pub fill: FillStyle,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(frame: &'a BadgeFrame, viewport_size: Size) -> Self {
        Self {
            frame,
            viewport_size,
            scale_factor: 1.0,
            background_color: Color::from_rgba8(250, 250, 250, 255),
            fill: FillStyle::default(),
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the badge fill.
    pub fn with_fill(mut self, fill: FillStyle) -> Self {
        self.fill = fill;
        self
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the scene/command buffer for a frame.
    ///
    /// Called once per frame; should prepare all drawing commands.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

/// Paint one badge frame inside a clip bracket covering the surface.
///
/// Draw order is anchor circle, pointer circle, then the outline. An empty
/// frame still opens and closes the bracket.
pub fn paint_badge<S: Surface + ?Sized>(surface: &mut S, ctx: &RenderContext) {
    let bounds = Rect::from_origin_size(Point::ZERO, surface.size());
    surface.push_clip(bounds);

    if let Some(shapes) = &ctx.frame.shapes {
        surface.draw_circle(shapes.anchor, &ctx.fill);
        surface.draw_circle(shapes.pointer, &ctx.fill);
        surface.draw_closed_path(&shapes.outline, &ctx.fill);
    }

    surface.pop_clip();
}
