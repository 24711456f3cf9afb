use crate::acceptance::{accept, check_exposure_fraction};
use crate::config::StopConfig;
use crate::error::{Result, StopError};
use crate::hazard::HazardRate;
use crate::index::SurfaceIndex;
use crate::membership::{ConvexMembership, HalfSpaces};
use crate::random::RandomSource;
use crate::sampler::{AreaWeighted, SurfaceSampler};
use crate::surface::ConvexDomainSurface;

use geom::Vec3;
use log::{debug, trace};
use rand::Rng;

/// Decides whether a growth step left its convex microdomain badly enough to stop.
///
/// Points inside the domain always continue. Outside, the distance `d` to the
/// nearest surface sample feeds an exponential hazard and the predicate stops
/// with probability `(1 - exp(-λ·d)) · f` for exposure fraction `f`.
///
/// The predicate itself is immutable after construction. The random source is
/// borrowed for every decision, exactly one number is drawn per call with an
/// outside point and none otherwise.
pub struct BoundaryStop<M = HalfSpaces> {
    membership: M,
    index: SurfaceIndex,
    rate: HazardRate,
}

impl BoundaryStop<HalfSpaces> {
    /// Builds a predicate with half-space membership and area weighted surface sampling.
    pub fn new<R>(surface: &ConvexDomainSurface, config: &StopConfig, rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        let sampler = AreaWeighted {
            bin_count: config.bin_count,
        };
        BoundaryStop::with_sampler(surface, config, &sampler, rng)
    }

    pub fn with_sampler<S, R>(
        surface: &ConvexDomainSurface,
        config: &StopConfig,
        sampler: &S,
        rng: &mut R,
    ) -> Result<Self>
    where
        S: SurfaceSampler + ?Sized,
        R: Rng + ?Sized,
    {
        BoundaryStop::with_membership(HalfSpaces::from_surface(surface), surface, config, sampler, rng)
    }
}

impl<M: ConvexMembership> BoundaryStop<M> {
    /// Builds a predicate around a caller supplied membership test for the same region.
    pub fn with_membership<S, R>(
        membership: M,
        surface: &ConvexDomainSurface,
        config: &StopConfig,
        sampler: &S,
        rng: &mut R,
    ) -> Result<Self>
    where
        S: SurfaceSampler + ?Sized,
        R: Rng + ?Sized,
    {
        let rate = config.validate()?;
        let index = SurfaceIndex::build(surface, config.samples_per_vertex, sampler, rng)?;

        debug!(
            "Built boundary stop predicate with hazard rate {} over {} surface samples",
            rate.get(),
            index.len()
        );

        Ok(BoundaryStop {
            membership,
            index,
            rate,
        })
    }

    /// Returns `true` if growth at `point` has to stop, `false` to continue.
    ///
    /// `exposure_fraction` must lie in `[0, 1]`, typically the growth step size
    /// relative to a unit step. Invalid arguments are rejected before any draw.
    pub fn decide<S>(&self, rng: &mut S, point: Vec3, exposure_fraction: f32) -> Result<bool>
    where
        S: RandomSource + ?Sized,
    {
        check_exposure_fraction(exposure_fraction)?;
        if !(point.x.is_finite() && point.y.is_finite() && point.z.is_finite()) {
            return Err(StopError::NonFiniteCoordinate);
        }

        if self.membership.contains(point) {
            return Ok(false);
        }

        let distance = self.index.nearest_distance(point)?;
        let stop = accept(rng, self.rate, distance, exposure_fraction)?;

        trace!(
            "Point {:?} is {} outside, stop={} at exposure {}",
            point,
            distance,
            stop,
            exposure_fraction
        );

        Ok(stop)
    }

    /// Like [`decide`](#method.decide) for a point given as a coordinate slice,
    /// which must have exactly three entries.
    pub fn decide_slice<S>(&self, rng: &mut S, point: &[f32], exposure_fraction: f32) -> Result<bool>
    where
        S: RandomSource + ?Sized,
    {
        match *point {
            [x, y, z] => self.decide(rng, Vec3::new(x, y, z), exposure_fraction),
            _ => Err(StopError::WrongDimension {
                expected: 3,
                actual: point.len(),
            }),
        }
    }

    pub fn hazard_rate(&self) -> HazardRate {
        self.rate
    }

    pub fn index(&self) -> &SurfaceIndex {
        &self.index
    }

    pub fn membership(&self) -> &M {
        &self.membership
    }
}
