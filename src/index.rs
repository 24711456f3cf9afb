use crate::error::{Result, StopError};
use crate::sampler::SurfaceSampler;
use crate::surface::ConvexDomainSurface;

use geom::Vec3;

use kdtree::distance::squared_euclidean;
use kdtree::KdTree;
use log::debug;
use rand::Rng;

/// Points sampled on a domain surface, indexed for nearest neighbour queries.
///
/// The distance to the nearest sample approximates the distance to the surface.
/// Since all samples lie on the surface it never underestimates the true distance,
/// and overestimates it by at most the radius of the largest sample-free disk on
/// the surface. Denser sampling tightens the bound at the cost of construction time.
pub struct SurfaceIndex {
    samples: Vec<Vec3>,
    /// Maps sample positions to their index in `samples`
    tree: KdTree<usize, [f64; 3]>,
}

impl SurfaceIndex {
    /// Samples `samples_per_vertex` times the vertex count of `surface` and indexes the result.
    pub fn build<S, R>(
        surface: &ConvexDomainSurface,
        samples_per_vertex: usize,
        sampler: &S,
        rng: &mut R,
    ) -> Result<Self>
    where
        S: SurfaceSampler + ?Sized,
        R: Rng + ?Sized,
    {
        if samples_per_vertex == 0 {
            return Err(StopError::InvalidSampleDensity(samples_per_vertex));
        }

        let target = surface
            .vertex_count()
            .checked_mul(samples_per_vertex)
            .ok_or(StopError::InvalidSampleDensity(samples_per_vertex))?;
        let samples = sampler.sample(surface, target, rng);

        debug!(
            "Sampled {} of {} requested points on surface with {} vertices and {} triangles",
            samples.len(),
            target,
            surface.vertex_count(),
            surface.triangle_count()
        );

        SurfaceIndex::from_samples(samples)
    }

    /// Indexes an existing point cloud.
    pub fn from_samples(samples: Vec<Vec3>) -> Result<Self> {
        if samples.is_empty() {
            return Err(StopError::EmptySampleSet);
        }

        let mut tree = KdTree::new(3);
        for (idx, sample) in samples.iter().enumerate() {
            tree.add(vec_to_arr(*sample), idx)?;
        }

        Ok(SurfaceIndex { samples, tree })
    }

    /// Distance to the closest sample and the sample itself.
    pub fn nearest(&self, point: Vec3) -> Result<(f32, Vec3)> {
        if !(point.x.is_finite() && point.y.is_finite() && point.z.is_finite()) {
            return Err(StopError::NonFiniteCoordinate);
        }

        let nearest = self.tree.nearest(&vec_to_arr(point), 1, &squared_euclidean)?;

        match nearest.first() {
            Some(&(dist_sqr, &idx)) => Ok((dist_sqr.sqrt() as f32, self.samples[idx])),
            None => Err(StopError::EmptySampleSet),
        }
    }

    pub fn nearest_distance(&self, point: Vec3) -> Result<f32> {
        self.nearest(point).map(|(distance, _)| distance)
    }

    pub fn samples(&self) -> &[Vec3] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

fn vec_to_arr(v: Vec3) -> [f64; 3] {
    let Vec3 { x, y, z } = v;
    [x as f64, y as f64, z as f64]
}
