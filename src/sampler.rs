use crate::config::DEFAULT_BIN_COUNT;
use crate::surface::ConvexDomainSurface;
use crate::triangle_bins::TriangleBins;
use crate::uniform::Uniform;

use geom::Vec3;
use rand::Rng;

/// Upper bound on the up-front reservation, larger requests grow as they fill.
const MAX_RESERVED_SAMPLES: usize = 1 << 16;

/// Places points on a triangulated surface.
pub trait SurfaceSampler {
    /// Generates `count` points on `surface`, fewer only if the surface has no area.
    fn sample<R: Rng + ?Sized>(&self, surface: &ConvexDomainSurface, count: usize, rng: &mut R) -> Vec<Vec3>;
}

/// Samples with density proportional to area.
///
/// Each point first picks a triangle with probability proportional to its area
/// and is then placed uniformly inside it, so larger triangles receive
/// proportionally more points and the density is uniform over the surface.
#[derive(Debug, Clone, Copy)]
pub struct AreaWeighted {
    /// Number of power-of-two area classes, triangles smaller than
    /// `2^-bin_count` times the largest one are never sampled.
    pub bin_count: usize,
}

impl Default for AreaWeighted {
    fn default() -> Self {
        AreaWeighted {
            bin_count: DEFAULT_BIN_COUNT,
        }
    }
}

impl SurfaceSampler for AreaWeighted {
    fn sample<R: Rng + ?Sized>(&self, surface: &ConvexDomainSurface, count: usize, rng: &mut R) -> Vec<Vec3> {
        let bins = TriangleBins::new(surface.triangle_iter().collect(), self.bin_count);

        let mut samples = Vec::with_capacity(count.min(MAX_RESERVED_SAMPLES));
        for _ in 0..count {
            match bins.sample(rng) {
                Some(tri) => samples.push(tri.uniform(rng)),
                None => break,
            }
        }
        samples
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::membership::{ConvexMembership, HalfSpaces};
    use crate::surface::test::cuboid;
    use rand::{SeedableRng, XorShiftRng};

    #[test]
    fn test_sample_count() {
        let surface = cuboid(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 3.0));
        let mut rng = XorShiftRng::from_seed([1, 2, 3, 4]);

        assert_eq!(500, AreaWeighted::default().sample(&surface, 500, &mut rng).len());
        assert!(AreaWeighted::default().sample(&surface, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_samples_lie_on_surface() {
        let surface = cuboid(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
        let region = HalfSpaces::from_surface(&surface);
        let mut rng = XorShiftRng::from_seed([9, 8, 7, 6]);

        for p in AreaWeighted::default().sample(&surface, 1000, &mut rng) {
            assert!(region.contains(p));
            // On the boundary, at least one coordinate touches a face
            let on_face = (p.x.abs() - 1.0).abs() < 1e-4
                || (p.y.abs() - 2.0).abs() < 1e-4
                || (p.z.abs() - 3.0).abs() < 1e-4;
            assert!(on_face, "{:?} is not on the surface", p);
        }
    }

    #[test]
    fn test_density_proportional_to_face_area() {
        // Faces orthogonal to z have area 1*2 = 2, faces orthogonal to x have 2*4 = 8
        let surface = cuboid(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 4.0));
        let mut rng = XorShiftRng::from_seed([42, 43, 44, 45]);
        let samples = AreaWeighted::default().sample(&surface, 28_000, &mut rng);

        let on_z_faces = samples
            .iter()
            .filter(|p| p.z.abs() < 1e-4 || (p.z - 4.0).abs() < 1e-4)
            .count();
        let on_x_faces = samples
            .iter()
            .filter(|p| p.x.abs() < 1e-4 || (p.x - 1.0).abs() < 1e-4)
            .count();

        // Total area is 2 * (2 + 4 + 8) = 28
        let z_ratio = on_z_faces as f32 / samples.len() as f32;
        let x_ratio = on_x_faces as f32 / samples.len() as f32;
        assert!((z_ratio - 4.0 / 28.0).abs() < 0.01, "z_ratio={}", z_ratio);
        assert!((x_ratio - 16.0 / 28.0).abs() < 0.01, "x_ratio={}", x_ratio);
    }
}
