use crate::config::DEFAULT_BIN_COUNT;

use geom::Triangle;

use float_extras::f64::ilogb;
use log::warn;
use rand::Rng;

use std::iter::FromIterator;

/// Selects triangles with probability proportional to their area.
///
/// Triangles are grouped into bins of power-of-two area ranges. Sampling first
/// picks a bin by its summed area, then a triangle inside the bin by rejection
/// sampling against the bin's upper area bound.
pub struct TriangleBins<T> {
    bins: Vec<Vec<T>>,
    /// Approximate area of all binned triangles as a multiple of the area quantum.
    /// Integer sums stay exact where summing floats would drift.
    bin_areas_sum: u64,
    /// Approximate areas of bins as multiples of the area quantum, sums up to
    /// exactly `bin_areas_sum`
    bin_areas: Vec<u64>,
    /// Upper area bound of the triangles stored in each bin
    bin_max_areas: Vec<f32>,
    triangle_count: usize,
}

impl<T> FromIterator<T> for TriangleBins<T>
where
    T: Triangle,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        TriangleBins::new(iter.into_iter().collect(), DEFAULT_BIN_COUNT)
    }
}

impl<T> TriangleBins<T>
where
    T: Triangle,
{
    pub fn new(triangles: Vec<T>, bin_count: usize) -> Self {
        let bin_count = bin_count.max(1);
        let (bins, first_bin_max_area) = partition_triangles(triangles, bin_count);

        let bin_max_areas: Vec<f32> = (0..bin_count)
            .map(|bin_idx| first_bin_max_area * 2.0_f32.powi(-(bin_idx as i32)))
            .collect();

        // The smallest binnable triangle spans 100 quanta, the largest
        // 100 * 2^(bin_count-1)
        let inv_area_quantum = 1.0 / (0.01 * bin_max_areas[bin_count - 1]);

        let bin_areas: Vec<u64> = bins
            .iter()
            .map(|b| {
                b.iter()
                    .map(|t| ((inv_area_quantum * t.area()).ceil() as u64).max(1))
                    .sum()
            })
            .collect();

        let bin_areas_sum = bin_areas.iter().sum();

        let triangle_count = bins.iter().map(|b| b.len()).sum();

        TriangleBins {
            bins,
            bin_areas,
            bin_max_areas,
            bin_areas_sum,
            triangle_count,
        }
    }

    /// Returns a reference to a randomly selected triangle without removing it,
    /// or `None` if no triangle with positive area was binned.
    pub fn sample<'a, R: Rng + ?Sized>(&'a self, rng: &mut R) -> Option<&'a T> {
        if self.bin_areas_sum == 0 {
            return None;
        }

        let bin_idx = self.sample_bin_idx(rng);
        let tri_idx = self.sample_triangle_idx_from_bin_idx(bin_idx, rng);
        Some(&self.bins[bin_idx][tri_idx])
    }

    /// Returns the amount of triangles in all bins.
    pub fn triangle_count(&self) -> usize {
        self.triangle_count
    }

    /// Samples a random bin index with a probability proportional to the contained triangles area.
    fn sample_bin_idx<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let mut r = rng.gen_range(0, self.bin_areas_sum);

        for (idx, area) in self.bin_areas.iter().enumerate() {
            if r < *area {
                return idx;
            }

            r -= area;
        }

        // Unreachable while bin_areas sums up to bin_areas_sum
        self.bin_areas
            .iter()
            .rposition(|&area| area > 0)
            .unwrap_or(0)
    }

    fn sample_triangle_idx_from_bin_idx<R: Rng + ?Sized>(&self, bin_idx: usize, rng: &mut R) -> usize {
        let bin = &self.bins[bin_idx];
        let bin_max_area = self.bin_max_areas[bin_idx];

        // Rejection sampling, try random and accept with probability proportional
        // to area. Every triangle in the bin has at least half the maximum area,
        // so this takes less than two tries on average.
        loop {
            let random_tri_idx = rng.gen_range(0_usize, bin.len());
            let area = bin[random_tri_idx].area();
            let acceptance_probability = area / bin_max_area;

            if rng.next_f32() < acceptance_probability {
                return random_tri_idx;
            }
        }
    }
}

fn partition_triangles<T>(triangles: Vec<T>, bin_count: usize) -> (Vec<Vec<T>>, f32)
where
    T: Triangle,
{
    let max_area = triangles
        .iter()
        .map(|t| t.area())
        .filter(|a| a.is_finite())
        .fold(0.0, f32::max);

    let mut bins: Vec<Vec<T>> = (0..bin_count).map(|_| Vec::new()).collect();

    for triangle in triangles.into_iter() {
        let area = triangle.area();

        if area > 0.0 && area.is_finite() {
            let bin_idx = bin_idx_by_area(max_area, area);

            if bin_idx < bin_count {
                bins[bin_idx].push(triangle);
            } else {
                warn!("Ignoring triangle with too small area {} during initial binning", area);
            }
        } else {
            warn!("Ignoring triangle with area {} during initial binning", area);
        }
    }

    (bins, max_area)
}

fn bin_idx_by_area(max_area: f32, area: f32) -> usize {
    debug_assert!(area <= max_area);
    // faster version of (max_area / area).log2()
    ilogb((max_area / area) as f64) as usize
}
