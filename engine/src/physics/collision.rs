//! Collision Resolution
//!
//! Moves the character capsule by a proposed displacement and corrects it
//! against static world geometry.
//!
//! # Algorithm
//!
//! 1. Translate the capsule by the full displacement
//! 2. Ask the world for the capsule's penetration (`normal`, `depth`)
//! 3. On a hit, translate again by `normal * depth` and report grounded
//!
//! This is a single positional correction per tick. The world is static and
//! the character is the only moving body, so no iterative contact solving is
//! done; several deep simultaneous penetrations are only corrected as far as
//! the world's aggregate answer goes.
//!
//! # Example
//!
//! ```ignore
//! use stride_engine::physics::{Capsule, CollisionResolver, TriangleWorld};
//! use glam::Vec3;
//!
//! let world = TriangleWorld::from_triangles(floor_triangles);
//! let (capsule, grounded) = CollisionResolver::resolve(capsule, Vec3::NEG_Y, Some(&world));
//! ```

use glam::Vec3;

use super::capsule::Capsule;

/// Penetration of the capsule into world geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Direction in which the capsule must move to stop overlapping (unit length)
    pub normal: Vec3,
    /// How far the capsule must move along `normal` (never negative)
    pub depth: f32,
}

impl CollisionResult {
    /// Create a result from a direction and a depth.
    pub fn new(normal: Vec3, depth: f32) -> Self {
        Self {
            normal,
            depth: depth.max(0.0),
        }
    }

    /// Offset that removes the penetration.
    #[inline]
    pub fn pushout(&self) -> Vec3 {
        self.normal * self.depth
    }
}

/// Read-only query surface over static world geometry.
///
/// Implemented by whatever spatial index the world loader produces.
pub trait WorldQuery {
    /// Penetration of `capsule` into the world, or `None` when it is clear.
    fn capsule_intersect(&self, capsule: &Capsule) -> Option<CollisionResult>;
}

impl<T: WorldQuery + ?Sized> WorldQuery for &T {
    fn capsule_intersect(&self, capsule: &Capsule) -> Option<CollisionResult> {
        (**self).capsule_intersect(capsule)
    }
}

impl<T: WorldQuery + ?Sized> WorldQuery for Box<T> {
    fn capsule_intersect(&self, capsule: &Capsule) -> Option<CollisionResult> {
        (**self).capsule_intersect(capsule)
    }
}

/// Single-pass capsule mover.
pub struct CollisionResolver;

impl CollisionResolver {
    /// Move `capsule` by `displacement` and push it out of the world.
    ///
    /// A missing world (still loading) is treated as empty space.
    ///
    /// # Returns
    /// The corrected capsule and whether it touched geometry this tick.
    pub fn resolve<W: WorldQuery + ?Sized>(
        mut capsule: Capsule,
        displacement: Vec3,
        world: Option<&W>,
    ) -> (Capsule, bool) {
        capsule.translate(displacement);

        let hit = world.and_then(|world| world.capsule_intersect(&capsule));
        match hit {
            Some(result) if result.normal.is_finite() && result.depth.is_finite() => {
                capsule.translate(result.pushout());
                (capsule, true)
            }
            Some(result) => {
                tracing::warn!(?result, "ignoring non-finite collision result");
                (capsule, false)
            }
            None => (capsule, false),
        }
    }
}
