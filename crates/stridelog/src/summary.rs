//! Aggregate statistics over saved walks.
//!
//! A [`Summary`] is a pure projection over the full set of saved walks,
//! recomputed from scratch on every invocation. With a personal walking log
//! the set is tiny, so eager recomputation keeps invalidation trivially
//! correct.

use serde::Serialize;

use crate::format;
use crate::walk::Walk;

/// Aggregate statistics derived from a set of walks.
///
/// All averages are defined as `0.0` over an empty set, and the good-walk
/// percentage as `0`, rather than propagating NaN into the display layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Total number of walks.
    pub walk_count: usize,
    /// Number of walks with a good mood.
    pub good_count: usize,
    /// Mean speed across all walks, in km/h.
    pub average_speed_kmh: f64,
    /// Mean speed across good-mood walks, in km/h.
    pub average_good_speed_kmh: f64,
    /// Percentage of walks with a good mood, rounded to the nearest integer.
    pub percent_good: u32,
}

impl Summary {
    /// Compute the summary over the given walks.
    #[must_use]
    pub fn compute(walks: &[Walk]) -> Self {
        let walk_count = walks.len();
        let good_count = walks.iter().filter(|w| w.is_good()).count();

        let average_speed_kmh = mean_speed(walks.iter());
        let average_good_speed_kmh = mean_speed(walks.iter().filter(|w| w.is_good()));

        let percent_good = if walk_count == 0 {
            0
        } else {
            // Integer round-half-up of 100 * good / total
            let rounded = (200 * good_count + walk_count) / (2 * walk_count);
            u32::try_from(rounded).unwrap_or(100)
        };

        Self {
            walk_count,
            good_count,
            average_speed_kmh,
            average_good_speed_kmh,
            percent_good,
        }
    }

    /// Average speed formatted to two decimal places.
    #[must_use]
    pub fn average_speed_display(&self) -> String {
        format::fixed_decimal(self.average_speed_kmh)
    }

    /// Average good-walk speed formatted to two decimal places.
    #[must_use]
    pub fn average_good_speed_display(&self) -> String {
        format::fixed_decimal(self.average_good_speed_kmh)
    }

    /// Good-walk percentage formatted with a percent suffix.
    #[must_use]
    pub fn percent_good_display(&self) -> String {
        format::percent(self.percent_good)
    }
}

/// Mean of `speed_kmh` over the given walks, `0.0` when there are none.
#[allow(clippy::cast_precision_loss)]
fn mean_speed<'a>(walks: impl Iterator<Item = &'a Walk>) -> f64 {
    let mut sum = 0.0;
    let mut count: usize = 0;
    for walk in walks {
        sum += walk.speed_kmh();
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
