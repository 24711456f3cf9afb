use crate::error::{Result, StopError};

/// Rate `λ` of an exponential hazard per unit of distance outside the domain.
///
/// Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HazardRate(f32);

impl HazardRate {
    pub fn new(rate: f32) -> Result<Self> {
        if rate.is_finite() && rate > 0.0 {
            Ok(HazardRate(rate))
        } else {
            Err(StopError::InvalidHazardRate(rate))
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }

    /// Probability that no stop was triggered within `distance`, `exp(-λ·d)`.
    ///
    /// One at zero, strictly decreasing and vanishing for large distances.
    pub fn survival(self, distance: f32) -> f32 {
        (-self.0 * distance).exp()
    }

    /// Probability that a stop was triggered within `distance`, `1 - exp(-λ·d)`.
    pub fn cumulative_hazard(self, distance: f32) -> f32 {
        // exp_m1 keeps precision for small λ·d
        -(-self.0 * distance).exp_m1()
    }
}
