//! Static Triangle World
//!
//! A minimal static-geometry index implementing [`WorldQuery`] over a
//! triangle soup. Built once by the world loader and read-only afterwards.
//!
//! # Capsule vs Triangle
//!
//! For each triangle whose bounds overlap the capsule bounds:
//!
//! 1. Signed distances of both capsule endpoints to the triangle plane,
//!    minus the radius. Both above [`CONTACT_TOLERANCE`] (fully in front)
//!    or both below `-radius` (fully behind) means no contact.
//! 2. Interpolate the axis point where the plane is crossed. Inside the
//!    triangle: contact along the plane normal, depth `-min(d1, d2)`
//!    (zero when merely touching).
//! 3. Otherwise test the capsule axis against each triangle edge; an edge
//!    closer than the radius pushes out along the closest-point direction.
//!
//! Every contact pushes a working copy of the capsule out before the next
//! triangle is tested. The reported result is the total displacement between
//! the pushed copy and the original capsule.

use glam::Vec3;

use super::capsule::{Capsule, closest_points_between_segments};
use super::collision::{CollisionResult, WorldQuery};

/// Gap below which a capsule counts as touching a plane.
pub const CONTACT_TOLERANCE: f32 = 1e-4;

/// A single world triangle with cached plane and bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    /// Unit plane normal (counter-clockwise winding faces it)
    normal: Vec3,
    min: Vec3,
    max: Vec3,
}

impl Triangle {
    /// Create a triangle. Returns `None` for degenerate (zero-area) input.
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Option<Self> {
        let normal = (b - a).cross(c - a).try_normalize()?;
        Some(Self {
            a,
            b,
            c,
            normal,
            min: a.min(b).min(c),
            max: a.max(b).max(c),
        })
    }

    /// Unit normal of the triangle's plane.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Signed distance from `point` to the triangle plane.
    #[inline]
    fn plane_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point - self.a)
    }

    /// Whether `point` (assumed on the plane) lies inside the triangle.
    fn contains_point(&self, point: Vec3) -> bool {
        // Barycentric test
        let v0 = self.c - self.a;
        let v1 = self.b - self.a;
        let v2 = point - self.a;

        let dot00 = v0.dot(v0);
        let dot01 = v0.dot(v1);
        let dot02 = v0.dot(v2);
        let dot11 = v1.dot(v1);
        let dot12 = v1.dot(v2);

        let denom = dot00 * dot11 - dot01 * dot01;
        if denom == 0.0 {
            return false;
        }
        let inv = 1.0 / denom;
        let u = (dot11 * dot02 - dot01 * dot12) * inv;
        let v = (dot00 * dot12 - dot01 * dot02) * inv;

        // Points on a shared edge must land in at least one neighbour
        let eps = 1e-5;
        u >= -eps && v >= -eps && u + v <= 1.0 + eps
    }

    fn overlaps_bounds(&self, min: Vec3, max: Vec3) -> bool {
        self.min.cmple(max).all() && self.max.cmpge(min).all()
    }

    /// Penetration of `capsule` into this triangle alone.
    pub fn capsule_intersect(&self, capsule: &Capsule) -> Option<CollisionResult> {
        let radius = capsule.radius;
        let d1 = self.plane_distance(capsule.start) - radius;
        let d2 = self.plane_distance(capsule.end) - radius;

        if (d1 > CONTACT_TOLERANCE && d2 > CONTACT_TOLERANCE) || (d1 < -radius && d2 < -radius) {
            return None;
        }

        let total = d1.abs() + d2.abs();
        let delta = if total > 0.0 { (d1 / total).abs() } else { 0.0 };
        let crossing = capsule.start.lerp(capsule.end, delta);
        if self.contains_point(crossing - self.normal * self.plane_distance(crossing)) {
            return Some(CollisionResult::new(self.normal, (-d1.min(d2)).max(0.0)));
        }

        let r2 = radius * radius;
        for (edge_start, edge_end) in [(self.a, self.b), (self.b, self.c), (self.c, self.a)] {
            let (on_axis, on_edge) =
                closest_points_between_segments(capsule.start, capsule.end, edge_start, edge_end);
            let gap = on_axis - on_edge;
            if gap.length_squared() < r2 {
                let distance = gap.length();
                let normal = gap.try_normalize().unwrap_or(self.normal);
                return Some(CollisionResult::new(normal, radius - distance));
            }
        }

        None
    }
}

/// Static triangle soup answering capsule queries.
#[derive(Debug, Clone, Default)]
pub struct TriangleWorld {
    triangles: Vec<Triangle>,
}

impl TriangleWorld {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `[a, b, c]` corner triples, dropping degenerate ones.
    pub fn from_triangles(corners: impl IntoIterator<Item = [Vec3; 3]>) -> Self {
        let mut world = Self::new();
        for [a, b, c] in corners {
            world.push_triangle(a, b, c);
        }
        world
    }

    /// Build from an indexed mesh. Index triples that point outside
    /// `vertices` are skipped.
    pub fn from_indexed_mesh(vertices: &[Vec3], indices: &[u32]) -> Self {
        let mut world = Self::new();
        let mut skipped = 0usize;
        for tri in indices.chunks_exact(3) {
            let corner = |i: u32| vertices.get(i as usize).copied();
            match (corner(tri[0]), corner(tri[1]), corner(tri[2])) {
                (Some(a), Some(b), Some(c)) => {
                    world.push_triangle(a, b, c);
                }
                _ => skipped += 1,
            }
        }
        if skipped > 0 {
            tracing::warn!(skipped, "indexed mesh referenced missing vertices");
        }
        world
    }

    /// Add one triangle. Returns `false` if it was degenerate and dropped.
    pub fn push_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) -> bool {
        match Triangle::new(a, b, c) {
            Some(triangle) => {
                self.triangles.push(triangle);
                true
            }
            None => false,
        }
    }

    /// Add an axis-aligned quad facing `+Y` at height `y`.
    pub fn push_floor(&mut self, min_xz: (f32, f32), max_xz: (f32, f32), y: f32) {
        let (x0, z0) = min_xz;
        let (x1, z1) = max_xz;
        let p00 = Vec3::new(x0, y, z0);
        let p10 = Vec3::new(x1, y, z0);
        let p11 = Vec3::new(x1, y, z1);
        let p01 = Vec3::new(x0, y, z1);
        self.push_triangle(p00, p01, p11);
        self.push_triangle(p00, p11, p10);
    }

    /// Number of stored triangles.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the world holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Stored triangles.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
}

impl WorldQuery for TriangleWorld {
    fn capsule_intersect(&self, capsule: &Capsule) -> Option<CollisionResult> {
        let mut working = *capsule;
        let mut first_normal = None;

        for triangle in &self.triangles {
            let (min, max) = working.bounds();
            let slack = Vec3::splat(CONTACT_TOLERANCE);
            if !triangle.overlaps_bounds(min - slack, max + slack) {
                continue;
            }
            if let Some(hit) = triangle.capsule_intersect(&working) {
                if first_normal.is_none() {
                    first_normal = Some(hit.normal);
                }
                working.translate(hit.pushout());
            }
        }

        let first_normal = first_normal?;
        let total = working.center() - capsule.center();
        let depth = total.length();
        match total.try_normalize() {
            Some(normal) => Some(CollisionResult::new(normal, depth)),
            // Resting contact: touching without penetration
            None => Some(CollisionResult::new(first_normal, 0.0)),
        }
    }
}
