//! Collision and bounds checks
//!
//! Everything in the arena is a circle, so overlap is a center distance test
//! against the sum of radii.

use glam::Vec2;

use crate::distance;

/// Check whether two circles overlap (touching does not count)
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    distance(a_pos, b_pos) < a_radius + b_radius
}

/// Check whether a point has left the `[0, width] x [0, height]` field.
/// NaN coordinates count as outside.
#[inline]
pub fn outside_field(pos: Vec2, width: f32, height: f32) -> bool {
    !((0.0..=width).contains(&pos.x) && (0.0..=height).contains(&pos.y))
}

/// Clamp a circle's center so the circle stays inside the field
#[inline]
pub fn clamp_to_field(pos: Vec2, radius: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        pos.x.clamp(radius, width - radius),
        pos.y.clamp(radius, height - radius),
    )
}

/// Index of the first circle in `targets` overlapped by the circle at `center`, in slice order
pub fn first_overlap<T>(
    center: Vec2,
    center_radius: f32,
    targets: &[T],
    circle: impl Fn(&T) -> (Vec2, f32),
) -> Option<usize> {
    targets.iter().position(|t| {
        let (pos, radius) = circle(t);
        circles_overlap(center, center_radius, pos, radius)
    })
}
