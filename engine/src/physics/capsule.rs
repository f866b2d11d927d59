//! Character Capsule
//!
//! A swept-sphere segment (`start`, `end`, `radius`) that stands in for the
//! character in every collision query. The capsule is built once from the
//! character's bounding box and afterwards only ever translated.
//!
//! # Sizing
//!
//! - Diameter: bounding-box depth (Z extent)
//! - Height: `height_factor` x bounding-box height (4.5 by default)
//! - Bottom sphere centre sits at `radius` above the origin

use glam::Vec3;

use crate::error::StrideError;

/// Default ratio between capsule height and character bounding-box height.
pub const DEFAULT_HEIGHT_FACTOR: f32 = 4.5;

/// Swept-sphere collision volume in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    /// Centre of the bottom hemisphere
    pub start: Vec3,
    /// Centre of the top hemisphere
    pub end: Vec3,
    /// Sphere radius, constant after creation
    pub radius: f32,
}

impl Capsule {
    /// Create a capsule from explicit endpoints.
    ///
    /// Rejects non-positive radii and capsules that are not upright
    /// (`end.y` must be above `start.y`).
    pub fn new(start: Vec3, end: Vec3, radius: f32) -> Result<Self, StrideError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(StrideError::InvalidCapsule(format!(
                "radius must be positive, got {radius}"
            )));
        }
        if !start.is_finite() || !end.is_finite() || end.y <= start.y {
            return Err(StrideError::InvalidCapsule(format!(
                "capsule must be upright (start {start:?}, end {end:?})"
            )));
        }
        Ok(Self { start, end, radius })
    }

    /// Build the character capsule from bounding-box dimensions.
    ///
    /// # Arguments
    /// * `size` - Bounding-box extents (`max - min`) of the character model
    /// * `height_factor` - Capsule height as a multiple of `size.y`
    pub fn from_bounding_box(size: Vec3, height_factor: f32) -> Result<Self, StrideError> {
        let height = height_factor * size.y;
        let diameter = size.z;
        let radius = diameter / 2.0;

        Self::new(
            Vec3::new(0.0, radius, 0.0),
            Vec3::new(0.0, height - radius, 0.0),
            radius,
        )
    }

    /// Move both endpoints by `offset`.
    #[inline]
    pub fn translate(&mut self, offset: Vec3) {
        self.start += offset;
        self.end += offset;
    }

    /// Copy of this capsule moved by `offset`.
    #[inline]
    pub fn translated(mut self, offset: Vec3) -> Self {
        self.translate(offset);
        self
    }

    /// Midpoint of the axis segment.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.start + self.end) * 0.5
    }

    /// Full vertical extent including both hemispheres.
    #[inline]
    pub fn height(&self) -> f32 {
        self.end.y - self.start.y + self.radius * 2.0
    }

    /// Position at which the character model is drawn for this capsule.
    ///
    /// Sits on the capsule axis, half of `height - radius` above the
    /// capsule's lowest point.
    pub fn render_position(&self) -> Vec3 {
        let height = self.height();
        Vec3::new(
            self.start.x,
            self.start.y - self.radius + (height - self.radius) / 2.0,
            self.start.z,
        )
    }

    /// Axis-aligned bounds `(min, max)` enclosing the whole capsule.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let r = Vec3::splat(self.radius);
        (self.start.min(self.end) - r, self.start.max(self.end) + r)
    }
}

/// Closest points between segments `p1-q1` and `p2-q2`.
///
/// Returns `(on_first, on_second)`. Degenerate (zero-length) segments are
/// treated as points.
pub fn closest_points_between_segments(p1: Vec3, q1: Vec3, p2: Vec3, q2: Vec3) -> (Vec3, Vec3) {
    const EPSILON: f32 = 1e-10;

    let d1 = q1 - p1;
    let d2 = q2 - p2;
    let r = p1 - p2;
    let a = d1.length_squared();
    let e = d2.length_squared();
    let f = d2.dot(r);

    let (s, t) = if a <= EPSILON && e <= EPSILON {
        (0.0, 0.0)
    } else if a <= EPSILON {
        (0.0, (f / e).clamp(0.0, 1.0))
    } else {
        let c = d1.dot(r);
        if e <= EPSILON {
            ((-c / a).clamp(0.0, 1.0), 0.0)
        } else {
            let b = d1.dot(d2);
            let denom = a * e - b * b;

            // Parallel segments: any s works, pick the start
            let mut s = if denom > EPSILON {
                ((b * f - c * e) / denom).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let mut t = (b * s + f) / e;

            if t < 0.0 {
                t = 0.0;
                s = (-c / a).clamp(0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = ((b - c) / a).clamp(0.0, 1.0);
            }
            (s, t)
        }
    };

    (p1 + d1 * s, p2 + d2 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bounding_box_dimensions() {
        let capsule = Capsule::from_bounding_box(Vec3::new(40.0, 20.0, 30.0), DEFAULT_HEIGHT_FACTOR)
            .unwrap();
        assert_eq!(capsule.radius, 15.0);
        assert_eq!(capsule.start, Vec3::new(0.0, 15.0, 0.0));
        // 4.5 * 20 = 90, minus radius
        assert_eq!(capsule.end, Vec3::new(0.0, 75.0, 0.0));
        assert_eq!(capsule.height(), 90.0);
    }

    #[test]
    fn test_rejects_zero_depth() {
        let result = Capsule::from_bounding_box(Vec3::new(1.0, 1.0, 0.0), DEFAULT_HEIGHT_FACTOR);
        assert!(matches!(result, Err(StrideError::InvalidCapsule(_))));
    }

    #[test]
    fn test_rejects_squat_box() {
        // Height 4.5 is smaller than the 10 unit diameter
        let result = Capsule::from_bounding_box(Vec3::new(1.0, 1.0, 10.0), DEFAULT_HEIGHT_FACTOR);
        assert!(result.is_err());
    }

    #[test]
    fn test_translate_keeps_radius() {
        let mut capsule = Capsule::new(Vec3::ZERO, Vec3::Y * 2.0, 0.5).unwrap();
        capsule.translate(Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(capsule.start, Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(capsule.end, Vec3::new(1.0, 0.0, 3.0));
        assert_eq!(capsule.radius, 0.5);
    }

    #[test]
    fn test_render_position() {
        let capsule =
            Capsule::new(Vec3::new(2.0, 1.0, 3.0), Vec3::new(2.0, 5.0, 3.0), 1.0).unwrap();
        // height = 4 + 2 = 6, y = 1 - 1 + (6 - 1) / 2
        assert_eq!(capsule.render_position(), Vec3::new(2.0, 2.5, 3.0));
    }

    #[test]
    fn test_bounds() {
        let capsule = Capsule::new(Vec3::ZERO, Vec3::Y * 2.0, 0.5).unwrap();
        let (min, max) = capsule.bounds();
        assert_eq!(min, Vec3::new(-0.5, -0.5, -0.5));
        assert_eq!(max, Vec3::new(0.5, 2.5, 0.5));
    }

    #[test]
    fn test_closest_points_crossing_segments() {
        let (a, b) = closest_points_between_segments(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(-1.0, 0.0, 2.0),
            Vec3::new(1.0, 0.0, 2.0),
        );
        assert!((a - Vec3::ZERO).length() < 1e-5);
        assert!((b - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn test_closest_points_parallel_segments() {
        let (a, b) = closest_points_between_segments(
            Vec3::ZERO,
            Vec3::Y,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        );
        assert!(((a - b).length() - 1.0).abs() < 1e-5);
    }
}
