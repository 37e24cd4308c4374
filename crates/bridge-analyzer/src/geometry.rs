//! Plain geometric values used by the transform pipeline.

use serde::{Deserialize, Serialize};

/// A 2D point with single-precision coordinates.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Point2f {
    pub x: f32,
    pub y: f32,
}

impl Point2f {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height in pixels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered.
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// An axis-aligned rectangle; the origin may lie outside an image.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin covering `size`.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub const fn is_empty(&self) -> bool {
        self.size().is_empty()
    }
}

/// A 2×3 affine matrix in row-major order, mapping `(x, y)` to
/// `(m0·x + m1·y + m2, m3·x + m4·y + m5)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine(pub [f64; 6]);

impl Affine {
    pub const IDENTITY: Self = Self([1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);

    /// Rotation by `angle` degrees around `center`, with uniform `scale`.
    ///
    /// Positive angles turn counter-clockwise on screen (the y axis points
    /// down), matching the usual image-processing convention.
    pub fn rotation(center: Point2f, angle: f64, scale: f64) -> Self {
        let radians = angle.to_radians();
        let alpha = radians.cos() * scale;
        let beta = radians.sin() * scale;
        let (cx, cy) = (f64::from(center.x), f64::from(center.y));

        Self([
            alpha,
            beta,
            (1.0 - alpha) * cx - beta * cy,
            -beta,
            alpha,
            beta * cx + (1.0 - alpha) * cy,
        ])
    }

    /// The inverse transform. A singular matrix maps everything to the
    /// origin.
    pub fn invert(&self) -> Self {
        let [a, b, c, d, e, f] = self.0;
        let det = a * e - b * d;
        let det = if det != 0.0 { 1.0 / det } else { 0.0 };

        let (a, b, d, e) = (e * det, -b * det, -d * det, a * det);
        Self([a, b, -a * c - b * f, d, e, -d * c - e * f])
    }

    /// Map a point through the transform.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let [a, b, c, d, e, f] = self.0;
        (a * x + b * y + c, d * x + e * y + f)
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn test_rotation_keeps_center_fixed() {
        let center = Point2f::new(1.5, 1.5);
        let m = Affine::rotation(center, 37.0, 1.0);
        assert_close(m.apply(1.5, 1.5), (1.5, 1.5));
    }

    #[test]
    fn test_quarter_turn() {
        let m = Affine::rotation(Point2f::new(1.5, 1.5), 90.0, 1.0);
        // x' = y, y' = 3 - x
        assert_close(m.apply(0.0, 0.0), (0.0, 3.0));
        assert_close(m.apply(3.0, 0.0), (0.0, 0.0));
        assert_close(m.apply(1.0, 2.0), (2.0, 2.0));
    }

    #[test]
    fn test_invert_round_trip() {
        let m = Affine::rotation(Point2f::new(4.0, -2.0), 123.0, 1.5);
        let inv = m.invert();
        let (x, y) = m.apply(7.0, 3.0);
        assert_close(inv.apply(x, y), (7.0, 3.0));
    }

    #[test]
    fn test_invert_singular() {
        let m = Affine([0.0; 6]);
        assert_eq!(m.invert(), Affine([0.0, 0.0, 0.0, 0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_rect_size() {
        let roi = Rect::new(-1, 2, 3, 4);
        assert_eq!(roi.size(), Size::new(3, 4));
        assert!(!roi.is_empty());
        assert!(Rect::new(0, 0, 0, 4).is_empty());
        assert_eq!(Rect::from_size(Size::new(5, 6)), Rect::new(0, 0, 5, 6));
    }
}
