//! Stochastic stopping criterion for structures growing inside a convex microdomain, for instance:
//! * Deciding per growth step whether a point outside its domain stops growth with [`BoundaryStop`](struct.BoundaryStop.html),
//! * approximating the distance to the domain surface with a [`SurfaceIndex`](struct.SurfaceIndex.html) over area weighted surface samples,
//! * evaluating the exponential hazard model behind the decision with [`HazardRate`](struct.HazardRate.html) and [`accept`](fn.accept.html).
//!
//! Stopping is a coin flip against `(1 - exp(-λ·d)) · f`, where `d` is the approximate
//! distance outside the domain and `f` the exposure fraction of the growth step. Points
//! inside the domain never stop.

#[cfg_attr(test, macro_use)]
extern crate aitios_geom as geom;

mod acceptance;
mod config;
mod error;
mod hazard;
mod index;
mod membership;
mod predicate;
mod random;
mod sampler;
mod surface;
mod tri;
mod triangle_bins;
mod uniform;

pub use self::acceptance::{accept, stop_probability};
pub use self::config::{StopConfig, DEFAULT_BIN_COUNT, DEFAULT_HAZARD_RATE, DEFAULT_SAMPLES_PER_VERTEX};
pub use self::error::{Result, StopError};
pub use self::hazard::HazardRate;
pub use self::index::SurfaceIndex;
pub use self::membership::{ConvexMembership, HalfSpaces, MEMBERSHIP_EPS};
pub use self::predicate::BoundaryStop;
pub use self::random::RandomSource;
pub use self::sampler::{AreaWeighted, SurfaceSampler};
pub use self::surface::ConvexDomainSurface;
pub use self::tri::sample_bary;
pub use self::triangle_bins::TriangleBins;
pub use self::uniform::Uniform;

pub use geom::Vec3;
