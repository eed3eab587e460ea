//! Minimal 2D vector math.
//!
//! The engine only needs axis-aligned arithmetic, so [`Vec2`] stays small:
//! component-wise add/sub and scalar scaling.

use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A 2D vector of f32 components in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Scale both components by a scalar.
    pub fn scale_by(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        self.scale_by(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_scale() {
        let v = Vec2::new(1.0, 2.0) + Vec2::new(3.0, -2.0);
        assert_eq!(v, Vec2::new(4.0, 0.0));
        assert_eq!(v.scale_by(0.5), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_zero() {
        assert_eq!(Vec2::ZERO + Vec2::new(5.0, 7.0), Vec2::new(5.0, 7.0));
    }
}
