//! IETT Guessr Game Engine
//!
//! Platform-agnostic core for the IETT Guessr district-guessing game: the
//! geographic distance model, the round/session state machine, and the
//! profile-pool access policy. Everything visual (map, confetti, share
//! cards, ads) lives in UI collaborators that talk to this crate through
//! narrow data contracts.

pub mod constants;
pub mod district;
pub mod error;
pub mod geo;
pub mod plausibility;
pub mod profile;
pub mod result;
pub mod seeding;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use district::{District, DistrictTable, Side};
pub use error::GameError;
pub use geo::haversine_km;
pub use plausibility::is_realistic;
pub use profile::{Mode, ProfileCard, ProfileDraft, RideCounts, TransitProfile};
pub use result::{SessionSummary, session_summary};
pub use seeding::synthesize;
pub use state::{GamePhase, GameSession, GameState, GuessOutcome};
pub use store::{ProfileRepository, ProfileStore, seed_profiles};
