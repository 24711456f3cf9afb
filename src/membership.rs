use crate::error::{Result, StopError};
use crate::surface::ConvexDomainSurface;

use geom::prelude::*;
use geom::Vec3;

/// Slack for points numerically on a face, which count as inside.
pub const MEMBERSHIP_EPS: f32 = 1e-4;

/// Answers whether a point lies inside a fixed convex region.
pub trait ConvexMembership {
    fn contains(&self, point: Vec3) -> bool;
}

/// Convex region as the intersection of closed half-spaces `(p - anchor) · normal <= 0`.
#[derive(Debug, Clone)]
pub struct HalfSpaces {
    anchors: Vec<Vec3>,
    normals: Vec<Vec3>,
}

impl HalfSpaces {
    /// Pairs up anchors and outward normals, which must come in equal numbers.
    pub fn new(anchors: Vec<Vec3>, normals: Vec<Vec3>) -> Result<Self> {
        if anchors.len() != normals.len() {
            return Err(StopError::NormalCountMismatch {
                triangles: anchors.len(),
                normals: normals.len(),
            });
        }
        Ok(HalfSpaces { anchors, normals })
    }

    /// One half-space per triangle, anchored at its first vertex.
    pub fn from_surface(surface: &ConvexDomainSurface) -> Self {
        // A surface holds exactly one normal per triangle
        HalfSpaces {
            anchors: surface.anchors(),
            normals: surface.normals().to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Largest signed distance of `point` to any of the supporting planes.
    ///
    /// Non-positive inside the region. Outside, it is a lower bound on the
    /// euclidean distance to the region, exact when the closest point of the
    /// region lies in the interior of a face.
    pub fn max_violation(&self, point: Vec3) -> f32 {
        self.anchors
            .iter()
            .zip(&self.normals)
            .map(|(&anchor, &normal)| (point - anchor).dot(normal))
            .fold(f32::NEG_INFINITY, f32::max)
    }
}

impl ConvexMembership for HalfSpaces {
    fn contains(&self, point: Vec3) -> bool {
        self.anchors
            .iter()
            .zip(&self.normals)
            .all(|(&anchor, &normal)| (point - anchor).dot(normal) <= MEMBERSHIP_EPS)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::surface::test::cube;

    #[test]
    fn test_centroid_inside() {
        let surface = cube(10.0);
        let region = HalfSpaces::from_surface(&surface);

        assert_eq!(12, region.len());
        assert!(region.contains(surface.centroid()));
        assert!(region.contains(Vec3::new(4.9, -4.9, 4.9)));
    }

    #[test]
    fn test_surface_points_inside() {
        let region = HalfSpaces::from_surface(&cube(10.0));

        assert!(region.contains(Vec3::new(5.0, 0.0, 0.0)));
        assert!(region.contains(Vec3::new(5.0, 5.0, 5.0)));
        assert!(region.contains(Vec3::new(-5.0, 2.0, -1.0)));
    }

    #[test]
    fn test_outside_points() {
        let region = HalfSpaces::from_surface(&cube(10.0));

        assert!(!region.contains(Vec3::new(5.1, 0.0, 0.0)));
        assert!(!region.contains(Vec3::new(0.0, -6.0, 0.0)));
        assert!(!region.contains(Vec3::new(1e6, 1e6, 1e6)));
    }

    #[test]
    fn test_max_violation() {
        let region = HalfSpaces::from_surface(&cube(10.0));

        assert!((region.max_violation(Vec3::new(0.0, 0.0, 0.0)) + 5.0).abs() < 1e-5);
        assert!((region.max_violation(Vec3::new(8.0, 1.0, 0.0)) - 3.0).abs() < 1e-5);
        // Diagonal excursion, true distance is sqrt(2), the bound is 1
        assert!((region.max_violation(Vec3::new(6.0, 6.0, 0.0)) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let err = HalfSpaces::new(
            vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)],
            vec![Vec3::new(1.0, 0.0, 0.0)],
        )
        .unwrap_err();

        assert_eq!(
            StopError::NormalCountMismatch {
                triangles: 2,
                normals: 1
            },
            err
        );
    }

    #[test]
    fn test_explicit_half_spaces() {
        let region = HalfSpaces::new(
            vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)],
            vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)],
        )
        .unwrap();

        assert_eq!(2, region.len());
        assert!(region.contains(Vec3::new(-0.5, 7.0, -3.0)));
        assert!(!region.contains(Vec3::new(0.5, 0.0, 0.0)));
        assert!(!region.contains(Vec3::new(-100.0, 0.0, 0.0)));
    }
}
