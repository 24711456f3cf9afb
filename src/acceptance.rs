use crate::error::{Result, StopError};
use crate::hazard::HazardRate;
use crate::random::RandomSource;

/// Probability of a stop for one call at `distance` with the given exposure fraction,
/// `(1 - exp(-λ·d)) · f`.
pub fn stop_probability(rate: HazardRate, distance: f32, exposure_fraction: f32) -> f32 {
    rate.cumulative_hazard(distance) * exposure_fraction
}

/// Draws once from `rng` and decides whether to stop, `true` meaning stop.
///
/// Stops iff the draw `u` falls below the stop probability. With `u` uniform on
/// `[0, 1)` this happens with exactly that probability, in particular never for
/// zero distance or zero exposure. A single call never stops with probability
/// above `exposure_fraction`, however far away the point is.
pub fn accept<S: RandomSource + ?Sized>(
    rng: &mut S,
    rate: HazardRate,
    distance: f32,
    exposure_fraction: f32,
) -> Result<bool> {
    check_exposure_fraction(exposure_fraction)?;

    let u = rng.next_uniform();
    Ok(u < stop_probability(rate, distance.max(0.0), exposure_fraction))
}

pub(crate) fn check_exposure_fraction(exposure_fraction: f32) -> Result<()> {
    if exposure_fraction >= 0.0 && exposure_fraction <= 1.0 {
        Ok(())
    } else {
        Err(StopError::InvalidExposureFraction(exposure_fraction))
    }
}
