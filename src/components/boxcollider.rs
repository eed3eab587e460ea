//! Axis-aligned rectangular collider and AABB geometry.
//!
//! [`Rect`] carries the pure overlap math; [`BoxCollider`] is the component
//! that gives a game object its collision extent. Overlap tests use strict
//! inequalities on all four sides, so rectangles that merely share an edge
//! (zero-area contact) do not count as intersecting.

use bevy_ecs::prelude::Component;
use serde::Serialize;

use crate::math::Vec2;

/// An axis-aligned rectangle in world space, `(x, y)` top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
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

    /// AABB vs AABB overlap test. Strict on every side: touching edges
    /// produce no collision.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Minimum penetration depth along each axis.
    ///
    /// Computed unconditionally; values are only meaningful when
    /// [`intersects`](Rect::intersects) holds and may be negative otherwise.
    pub fn overlap_depths(&self, other: &Rect) -> (f32, f32) {
        let overlap_x = (self.x + self.w - other.x).min(other.x + other.w - self.x);
        let overlap_y = (self.y + self.h - other.y).min(other.y + other.h - self.y);
        (overlap_x, overlap_y)
    }
}

/// Collision extent of a game object. The rectangle spans from the entity's
/// [`MapPosition`](super::mapposition::MapPosition) to `position + size`.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
}

impl BoxCollider {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    /// World-space rectangle of this collider for a given entity position.
    pub fn rect(&self, position: Vec2) -> Rect {
        Rect::new(position.x, position.y, self.size.x, self.size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlapping() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_intersects_is_symmetric() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(8.0, -3.0, 4.0, 20.0);
        let c = Rect::new(100.0, 100.0, 1.0, 1.0);
        assert_eq!(a.intersects(&b), b.intersects(&a));
        assert_eq!(a.intersects(&c), c.intersects(&a));
    }

    #[test]
    fn test_edge_touching_is_not_a_collision() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_disjoint_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 5.0, 5.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_overlap_depths() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(40.0, 0.0, 50.0, 50.0);
        let (ox, oy) = a.overlap_depths(&b);
        assert_eq!(ox, 10.0);
        assert_eq!(oy, 50.0);
    }

    #[test]
    fn test_overlap_depths_negative_when_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(30.0, 0.0, 10.0, 10.0);
        let (ox, _) = a.overlap_depths(&b);
        assert!(ox < 0.0);
    }

    #[test]
    fn test_collider_rect_follows_position() {
        let collider = BoxCollider::new(8.0, 4.0);
        let rect = collider.rect(Vec2::new(3.0, 7.0));
        assert_eq!(rect, Rect::new(3.0, 7.0, 8.0, 4.0));
    }
}
