//! Label pill layout.

use kurbo::{Point, Rect, RoundedRect, Size};

/// Padding between the label text and the pill edge.
pub const LABEL_PADDING: f64 = 6.0;

/// Pill behind a label of `text_size`, centered on `center`.
///
/// The pill is never narrower than it is tall, so short labels come out round.
pub fn label_pill(center: Point, text_size: Size) -> RoundedRect {
    let height = text_size.height + LABEL_PADDING * 2.0;
    let width = (text_size.width + LABEL_PADDING * 2.0).max(height);
    let rect = Rect::from_center_size(center, Size::new(width, height));
    RoundedRect::from_rect(rect, height / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pill_centered() {
        let pill = label_pill(Point::new(200.0, 30.0), Size::new(30.0, 18.0));
        let rect = pill.rect();
        assert!((rect.center().x - 200.0).abs() < f64::EPSILON);
        assert!((rect.center().y - 30.0).abs() < f64::EPSILON);
        assert!((rect.width() - 42.0).abs() < f64::EPSILON);
        assert!((rect.height() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_short_label_is_round() {
        let pill = label_pill(Point::ZERO, Size::new(8.0, 18.0));
        let rect = pill.rect();
        assert!((rect.width() - rect.height()).abs() < f64::EPSILON);
    }
}
