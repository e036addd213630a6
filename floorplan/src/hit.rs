#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::room::{Rect, Room};

/// Anything that occupies a rectangle on the floor and can be picked.
pub trait HitTarget {
    /// Identifier reported when this target is hit.
    fn target_id(&self) -> &str;
    /// World-space bounds.
    fn bounds(&self) -> Rect;
}

impl HitTarget for Room {
    fn target_id(&self) -> &str {
        &self.id
    }

    fn bounds(&self) -> Rect {
        self.rect()
    }
}

/// Topmost target containing `world_pt`.
///
/// Targets are drawn in slice order, so the last one containing the point is
/// the one on top. Edges are inclusive.
#[must_use]
pub fn hit_test<T: HitTarget>(world_pt: Point, targets: &[T]) -> Option<&T> {
    targets.iter().rev().find(|t| t.bounds().contains(world_pt))
}

/// [`hit_test`] for a screen-space point under `camera`.
#[must_use]
pub fn hit_test_screen<'a, T: HitTarget>(screen_pt: Point, camera: &Camera, targets: &'a [T]) -> Option<&'a T> {
    hit_test(camera.screen_to_world(screen_pt), targets)
}
