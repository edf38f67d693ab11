use crate::scalar::Scalar;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Two-component coordinate or vector.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Vec2<T> {
    pub fn splat(value: T) -> Self {
        Self { x: value, y: value }
    }

    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    // Component-wise comparisons; each holds only if it holds on both axes.

    pub fn all_lt(&self, other: &Self) -> bool {
        self.x < other.x && self.y < other.y
    }

    pub fn all_le(&self, other: &Self) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    pub fn all_gt(&self, other: &Self) -> bool {
        self.x > other.x && self.y > other.y
    }

    pub fn all_ge(&self, other: &Self) -> bool {
        self.x >= other.x && self.y >= other.y
    }

    pub fn min(self, other: Self) -> Self {
        Self {
            x: if other.x < self.x { other.x } else { self.x },
            y: if other.y < self.y { other.y } else { self.y },
        }
    }

    pub fn max(self, other: Self) -> Self {
        Self {
            x: if other.x > self.x { other.x } else { self.x },
            y: if other.y > self.y { other.y } else { self.y },
        }
    }

    /// Midpoint between two points, rounded towards the smaller component for
    /// integer types. Never forms `self + other`, so it cannot overflow while
    /// the distance between the points is representable.
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: midpoint_of(self.x, other.x),
            y: midpoint_of(self.y, other.y),
        }
    }

    /// Uniformly random point inside the half-open region `[min, max)`.
    pub fn random_in<R: Rng>(min: Self, max: Self, rng: &mut R) -> Self
    where
        T: SampleUniform,
    {
        Self {
            x: rng.gen_range(min.x..max.x),
            y: rng.gen_range(min.y..max.y),
        }
    }
}

#[inline(always)]
fn midpoint_of<T: Scalar>(a: T, b: T) -> T {
    if a <= b {
        a + (b - a) / T::TWO
    } else {
        b + (a - b) / T::TWO
    }
}

impl<T: Scalar> Add for Vec2<T> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar> AddAssign for Vec2<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: Scalar> Sub for Vec2<T> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar> SubAssign for Vec2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: Scalar> Mul for Vec2<T> {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Scalar> MulAssign for Vec2<T> {
    fn mul_assign(&mut self, rhs: Self) {
        self.x *= rhs.x;
        self.y *= rhs.y;
    }
}

impl<T: Scalar> Div for Vec2<T> {
    type Output = Self;

    fn div(mut self, rhs: Self) -> Self {
        self /= rhs;
        self
    }
}

impl<T: Scalar> DivAssign for Vec2<T> {
    fn div_assign(&mut self, rhs: Self) {
        self.x /= rhs.x;
        self.y /= rhs.y;
    }
}

impl<T: fmt::Display> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}
