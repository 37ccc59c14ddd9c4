//! Kinematics, orientation, and axis-aligned collision rectangles
//!
//! All collision tests run against the AABB of a sprite rotated around its
//! logical center. Rotating a w x h sprite by theta yields the extent
//! (w|cos| + h|sin|, w|sin| + h|cos|), which is exactly the bounding surface
//! a rotate-and-measure renderer would hand back, so the simulation computes
//! it in closed form and stays headless.

use glam::Vec2;

/// Unit heading vector for a rotation angle in degrees.
///
/// 0 degrees points along +Y; the forward-motion sign is applied by callers.
#[inline]
pub fn heading_from_degrees(deg: f32) -> Vec2 {
    let rad = deg.to_radians();
    Vec2::new(rad.sin(), rad.cos())
}

/// Bounding extent of a `size` sprite rotated by `deg` degrees.
#[inline]
pub fn rotated_extent(size: Vec2, deg: f32) -> Vec2 {
    let (sin, cos) = deg.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    Vec2::new(size.x * cos + size.y * sin, size.x * sin + size.y * cos)
}

/// Top-left draw position that keeps rotation pivoting on the logical center.
#[inline]
pub fn draw_position(pos: Vec2, extent: Vec2) -> Vec2 {
    pos - extent / 2.0
}

/// Axis-aligned collision rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect covering `extent` with its top-left corner at `top_left`.
    pub fn from_pos_extent(top_left: Vec2, extent: Vec2) -> Self {
        Self::new(top_left.x, top_left.y, extent.x, extent.y)
    }

    /// Overlap test. Rects with a non-positive extent never intersect, so a
    /// degenerate rotated sprite cannot produce phantom collisions.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.w <= 0.0 || self.h <= 0.0 || other.w <= 0.0 || other.h <= 0.0 {
            return false;
        }
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_points_up_the_y_axis_at_zero() {
        let h = heading_from_degrees(0.0);
        assert!(h.x.abs() < 1e-6);
        assert!((h.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn heading_is_unit_length() {
        for deg in [0.0, 37.0, 90.0, 180.0, 271.5, 360.0, 725.0] {
            let len = heading_from_degrees(deg).length();
            assert!((len - 1.0).abs() < 1e-5, "deg {deg} gave length {len}");
        }
    }

    #[test]
    fn extent_unchanged_at_zero_rotation() {
        let size = Vec2::new(51.0, 41.0);
        assert!((rotated_extent(size, 0.0) - size).length() < 1e-4);
    }

    #[test]
    fn extent_swaps_axes_at_ninety_degrees() {
        let size = Vec2::new(51.0, 41.0);
        let e = rotated_extent(size, 90.0);
        assert!((e.x - 41.0).abs() < 1e-3);
        assert!((e.y - 51.0).abs() < 1e-3);
    }

    #[test]
    fn extent_grows_at_forty_five_degrees() {
        let size = Vec2::new(10.0, 10.0);
        let e = rotated_extent(size, 45.0);
        let expected = 10.0 * 2.0_f32.sqrt();
        assert!((e.x - expected).abs() < 1e-3);
        assert!((e.y - expected).abs() < 1e-3);
    }

    #[test]
    fn draw_position_centers_the_extent() {
        let pos = Vec2::new(100.0, 80.0);
        let extent = Vec2::new(40.0, 20.0);
        assert_eq!(draw_position(pos, extent), Vec2::new(80.0, 70.0));
    }

    #[test]
    fn rects_overlap_and_separate() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 20.0, 5.0, 5.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn degenerate_rects_never_intersect() {
        let a = Rect::new(0.0, 0.0, 0.0, 10.0);
        let b = Rect::new(-5.0, -5.0, 20.0, 20.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }
}
