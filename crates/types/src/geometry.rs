//! Integer 2D geometry: points/sizes and axis-aligned rectangles.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Integer 2D point or size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0, 0);
    pub const ONE: Vec2 = Vec2::new(1, 1);
    /// Toward row 0.
    pub const UP: Vec2 = Vec2::new(0, -1);
    pub const DOWN: Vec2 = Vec2::new(0, 1);
    pub const LEFT: Vec2 = Vec2::new(-1, 0);
    pub const RIGHT: Vec2 = Vec2::new(1, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Componentwise product.
impl Mul for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x * rhs.x, self.y * rhs.y)
    }
}

/// Componentwise quotient (truncating).
impl Div for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Mul<i32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: i32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<i32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: i32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vec2 {
    fn mul_assign(&mut self, rhs: Vec2) {
        *self = *self * rhs;
    }
}

impl DivAssign for Vec2 {
    fn div_assign(&mut self, rhs: Vec2) {
        *self = *self / rhs;
    }
}

impl MulAssign<i32> for Vec2 {
    fn mul_assign(&mut self, rhs: i32) {
        *self = *self * rhs;
    }
}

impl DivAssign<i32> for Vec2 {
    fn div_assign(&mut self, rhs: i32) {
        *self = *self / rhs;
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
///
/// Extents are half-open: a point on the right or bottom edge is outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub const fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(width, height))
    }

    /// Smallest rectangle spanning two corner points.
    pub fn from_points(a: Vec2, b: Vec2) -> Self {
        Self::new(
            Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            Vec2::new((a.x - b.x).abs(), (a.y - b.y).abs()),
        )
    }

    pub fn left_top(&self) -> Vec2 {
        self.position
    }

    pub fn right_top(&self) -> Vec2 {
        Vec2::new(self.position.x + self.size.x, self.position.y)
    }

    pub fn left_bottom(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.y + self.size.y)
    }

    pub fn right_bottom(&self) -> Vec2 {
        self.position + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.position.x
            && point.x < self.position.x + self.size.x
            && point.y >= self.position.y
            && point.y < self.position.y + self.size.y
    }

    /// True when every corner of `other` lies inside `self`.
    ///
    /// Corners are tested with the same half-open rule as [`Rect::contains`],
    /// so `other` must end strictly inside `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains(other.left_top())
            && self.contains(other.right_top())
            && self.contains(other.left_bottom())
            && self.contains(other.right_bottom())
    }

    /// Strict overlap; rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.position.x + self.size.x <= other.position.x
            || other.position.x + other.size.x <= self.position.x
            || self.position.y + self.size.y <= other.position.y
            || other.position.y + other.size.y <= self.position.y)
    }
}
