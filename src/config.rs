use crate::error::{Result, StopError};
use crate::hazard::HazardRate;

use serde::{Deserialize, Serialize};

/// Reference sampling density, samples per surface mesh vertex.
pub const DEFAULT_SAMPLES_PER_VERTEX: usize = 100;
/// Number of area classes used when picking triangles by area.
pub const DEFAULT_BIN_COUNT: usize = 32;
pub const DEFAULT_HAZARD_RATE: f32 = 0.01;

/// Tuning parameters of a boundary stop predicate.
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopConfig {
    /// Stop hazard per unit distance outside the domain.
    pub hazard_rate: f32,
    /// Surface samples generated per mesh vertex. Higher values tighten the
    /// distance approximation and slow down construction.
    pub samples_per_vertex: usize,
    /// Area classes for picking triangles, must be positive.
    pub bin_count: usize,
}

impl Default for StopConfig {
    fn default() -> Self {
        StopConfig {
            hazard_rate: DEFAULT_HAZARD_RATE,
            samples_per_vertex: DEFAULT_SAMPLES_PER_VERTEX,
            bin_count: DEFAULT_BIN_COUNT,
        }
    }
}

impl StopConfig {
    pub fn with_hazard_rate(mut self, hazard_rate: f32) -> Self {
        self.hazard_rate = hazard_rate;
        self
    }

    pub fn with_samples_per_vertex(mut self, samples_per_vertex: usize) -> Self {
        self.samples_per_vertex = samples_per_vertex;
        self
    }

    pub fn with_bin_count(mut self, bin_count: usize) -> Self {
        self.bin_count = bin_count;
        self
    }

    /// Checks the parameters and returns the validated hazard rate.
    pub fn validate(&self) -> Result<HazardRate> {
        let rate = HazardRate::new(self.hazard_rate)?;
        if self.samples_per_vertex == 0 {
            return Err(StopError::InvalidSampleDensity(self.samples_per_vertex));
        }
        if self.bin_count == 0 {
            return Err(StopError::InvalidBinCount(self.bin_count));
        }
        Ok(rate)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StopConfig::default();
        assert_eq!(100, config.samples_per_vertex);
        assert_eq!(32, config.bin_count);
        assert_eq!(0.01, config.validate().unwrap().get());
    }

    #[test]
    fn test_builder() {
        let config = StopConfig::default()
            .with_hazard_rate(0.5)
            .with_samples_per_vertex(10)
            .with_bin_count(8);
        assert_eq!(
            StopConfig {
                hazard_rate: 0.5,
                samples_per_vertex: 10,
                bin_count: 8
            },
            config
        );
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            StopError::InvalidHazardRate(0.0),
            StopConfig::default().with_hazard_rate(0.0).validate().unwrap_err()
        );
        assert_eq!(
            StopError::InvalidSampleDensity(0),
            StopConfig::default().with_samples_per_vertex(0).validate().unwrap_err()
        );
        assert_eq!(
            StopError::InvalidBinCount(0),
            StopConfig::default().with_bin_count(0).validate().unwrap_err()
        );
        assert!(StopConfig::default().with_bin_count(1).validate().is_ok());
    }

    #[test]
    fn test_deserialized_zero_bin_count_rejected() {
        let config: StopConfig = serde_json::from_str(r#"{ "bin_count": 0 }"#).unwrap();
        assert_eq!(StopError::InvalidBinCount(0), config.validate().unwrap_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: StopConfig = serde_json::from_str(r#"{ "hazard_rate": 0.2 }"#).unwrap();
        assert_eq!(StopConfig::default().with_hazard_rate(0.2), config);
    }

    #[test]
    fn test_serialize_roundtrip_keeps_density() {
        let config = StopConfig::default().with_samples_per_vertex(250);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"samples_per_vertex\":250"));
    }
}
