//! Procedural burst animation frames.
//!
//! The burst is a ring of fragments flung out from the burst point that
//! shrink to nothing as they travel.

use kurbo::{Circle, Point};
use std::f64::consts::TAU;

/// Number of fragments in the ring.
pub const FRAGMENT_COUNT: usize = 10;
/// How long one burst plays, in milliseconds.
pub const BURST_DURATION_MS: u64 = 400;

/// Fragments for a burst at `progress` (clamped to `0..=1`).
///
/// `size` is the badge radius at the moment it burst. Progress 1 yields no
/// fragments.
pub fn burst_fragments(center: Point, size: f64, progress: f64) -> Vec<Circle> {
    let t = progress.clamp(0.0, 1.0);
    let fragment_radius = size * 0.3 * (1.0 - t);
    if fragment_radius <= 0.0 {
        return Vec::new();
    }

    // ease-out so fragments leave fast and settle
    let eased = 1.0 - (1.0 - t).powi(3);
    let travel = size * (0.4 + 1.6 * eased);

    (0..FRAGMENT_COUNT)
        .map(|i| {
            let angle = TAU * i as f64 / FRAGMENT_COUNT as f64;
            let offset = Point::new(angle.cos() * travel, angle.sin() * travel);
            Circle::new(Point::new(center.x + offset.x, center.y + offset.y), fragment_radius)
        })
        .collect()
}
