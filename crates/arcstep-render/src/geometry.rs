#![forbid(unsafe_code)]

//! Floating-point geometry: rectangles and 2-D affine transforms.

/// Axis-aligned rectangle in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    /// Left edge.
    pub left: f32,
    /// Top edge (y grows downward).
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl RectF {
    /// Create a rectangle from its edges.
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square of half-size `r` centered on the origin.
    #[inline]
    pub const fn centered(r: f32) -> Self {
        Self::new(-r, -r, r, r)
    }

    /// Horizontal extent. Negative when the edges are swapped.
    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Vertical extent.
    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Check if the rectangle has no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// 2-D affine transform mapping `(x, y)` to
/// `(a·x + c·y + tx, b·x + d·y + ty)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// x scale / rotation cosine.
    pub a: f32,
    /// y shear / rotation sine.
    pub b: f32,
    /// x shear / negated rotation sine.
    pub c: f32,
    /// y scale / rotation cosine.
    pub d: f32,
    /// x translation.
    pub tx: f32,
    /// y translation.
    pub ty: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Transform that leaves every point in place.
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Append a translation (applied before the existing transform).
    #[must_use]
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self {
            tx: self.a * dx + self.c * dy + self.tx,
            ty: self.b * dx + self.d * dy + self.ty,
            ..self
        }
    }

    /// Append a rotation by `degrees`, clockwise on a y-down surface.
    #[must_use]
    pub fn rotated(self, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            a: self.a * cos + self.c * sin,
            b: self.b * cos + self.d * sin,
            c: self.c * cos - self.a * sin,
            d: self.d * cos - self.b * sin,
            ..self
        }
    }

    /// Map a local point to surface coordinates.
    #[inline]
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.tx,
            self.b * x + self.d * y + self.ty,
        )
    }

    /// Rotation angle in degrees, in `(-180, 180]`.
    #[inline]
    pub fn rotation_degrees(&self) -> f32 {
        self.b.atan2(self.a).to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-4 && (a.1 - b.1).abs() < 1e-4
    }

    #[test]
    fn rect_dimensions() {
        let r = RectF::new(-2.0, -1.0, 4.0, 3.0);
        assert_eq!(r.width(), 6.0);
        assert_eq!(r.height(), 4.0);
        assert_eq!(r.center(), (1.0, 1.0));
        assert!(!r.is_empty());
        assert!(RectF::new(0.0, 0.0, 5.0, 0.0).is_empty());
    }

    #[test]
    fn centered_square() {
        assert_eq!(RectF::centered(3.0), RectF::new(-3.0, -3.0, 3.0, 3.0));
    }

    #[test]
    fn identity_maps_points_unchanged() {
        assert_eq!(Transform::IDENTITY.apply(3.0, -7.0), (3.0, -7.0));
    }

    #[test]
    fn translations_accumulate() {
        let t = Transform::IDENTITY.translated(10.0, 5.0).translated(1.0, 2.0);
        assert_eq!(t.apply(0.0, 0.0), (11.0, 7.0));
    }

    #[test]
    fn rotation_is_clockwise_y_down() {
        let t = Transform::IDENTITY.rotated(90.0);
        assert!(close(t.apply(1.0, 0.0), (0.0, 1.0)));
        assert!((t.rotation_degrees() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn translate_then_rotate_rotates_about_new_origin() {
        let t = Transform::IDENTITY.translated(10.0, 0.0).rotated(180.0);
        assert!(close(t.apply(2.0, 0.0), (8.0, 0.0)));
    }
}
