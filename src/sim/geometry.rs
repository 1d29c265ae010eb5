//! Point and segment geometry helpers
//!
//! Pure functions shared by the collision passes. Everything operates on
//! `glam::Vec2`; nothing here holds state.

use glam::Vec2;

use crate::consts::DEGENERATE_SEGMENT_EPS;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Closest point on the segment `[start, end]` to `point`, together with the
/// clamped parameter `t` in `[0, 1]`.
///
/// Returns `None` for degenerate segments (squared length under
/// [`DEGENERATE_SEGMENT_EPS`]) instead of dividing by near-zero.
pub fn closest_point_on_segment(point: Vec2, start: Vec2, end: Vec2) -> Option<(Vec2, f32)> {
    let seg = end - start;
    let len_sq = seg.length_squared();
    if len_sq < DEGENERATE_SEGMENT_EPS {
        return None;
    }

    let t = ((point - start).dot(seg) / len_sq).clamp(0.0, 1.0);
    Some((start + seg * t, t))
}

/// Tangent of a unit normal: the normal rotated 90 degrees counter-clockwise.
///
/// Any velocity decomposes as `v = (v.dot(n)) * n + (v.dot(tangent(n))) * tangent(n)`.
#[inline]
pub fn tangent(normal: Vec2) -> Vec2 {
    Vec2::new(-normal.y, normal.x)
}
