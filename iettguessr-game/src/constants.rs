//! Centralized balance and tuning constants for the guessing game core.
//!
//! Keeping these together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! assets.

// Scoring ------------------------------------------------------------------
pub const CORRECT_GUESS_POINTS: u32 = 10;

// Session shape ------------------------------------------------------------
pub const MIN_ROUNDS: u32 = 1;
pub const MAX_ROUNDS: u32 = 10;

// Geography ----------------------------------------------------------------
/// Mean Earth radius used by the haversine distance, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// Plausibility gate ---------------------------------------------------------
/// A submission totalling fewer rides than this is rejected as too low.
pub const MIN_TOTAL_RIDES: u32 = 30;
/// A submission whose every mode count falls below this is rejected as too low.
pub const MIN_SINGLE_MODE_RIDES: u32 = 10;
/// A submission totalling more rides than this is rejected as too high.
pub const MAX_TOTAL_RIDES: u32 = 2_000;
/// A submission with any single mode count above this is rejected as too high.
pub const MAX_SINGLE_MODE_RIDES: u32 = 500;

// Presentation hints --------------------------------------------------------
/// How long the UI collaborator should run the celebratory cue after a
/// correct guess, in seconds.
pub const CELEBRATION_SECS: u32 = 3;

// Seeding ------------------------------------------------------------------
/// Relative variation applied per mode count when synthesizing commuters.
pub(crate) const SEED_VARIANCE: f64 = 0.3;
