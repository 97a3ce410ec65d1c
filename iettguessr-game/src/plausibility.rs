//! Heuristic plausibility gate for submitted ride counts.
//!
//! The verdict only decides whether a submission is persisted to the shared
//! pool; an implausible submitter still plays with a transient profile.

use crate::constants::{
    MAX_SINGLE_MODE_RIDES, MAX_TOTAL_RIDES, MIN_SINGLE_MODE_RIDES, MIN_TOTAL_RIDES,
};
use crate::profile::RideCounts;

/// Whether a set of yearly ride counts looks like a real commuter.
#[must_use]
pub fn is_realistic(counts: &RideCounts) -> bool {
    let values = counts.values();
    let total = counts.total();

    // Too low: barely rides anything
    if total < MIN_TOTAL_RIDES || values.iter().all(|&v| v < MIN_SINGLE_MODE_RIDES) {
        return false;
    }

    // Too high: nobody rides that much
    if total > MAX_TOTAL_RIDES || values.iter().any(|&v| v > MAX_SINGLE_MODE_RIDES) {
        return false;
    }

    true
}
