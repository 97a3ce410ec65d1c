use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{CORRECT_GUESS_POINTS, MAX_ROUNDS, MIN_ROUNDS};
use crate::district::DistrictTable;
use crate::error::GameError;
use crate::plausibility::is_realistic;
use crate::profile::{ProfileCard, ProfileDraft, TransitProfile};
use crate::store::{ProfileRepository, ProfileStore};

/// Phases of one player's session.
///
/// `Onboarding → Loading → Playing → Result → (Playing | GameOver)`, with
/// `Loading → Playing` re-entered on "play again".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    #[default]
    Onboarding,
    Loading,
    Playing,
    Result,
    GameOver,
}

/// Outcome of the guess recorded for the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessOutcome {
    pub guessed_district: String,
    pub correct: bool,
    /// Great-circle distance from the guess to the truth; 0 on a correct
    /// guess without consulting the distance model.
    pub distance_km: u32,
}

impl GuessOutcome {
    /// Whether the UI should run its celebratory cue
    /// (see [`crate::constants::CELEBRATION_SECS`]).
    #[must_use]
    pub const fn celebrate(&self) -> bool {
        self.correct
    }
}

/// Snapshot of the session handed to the UI collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub current_profile: Option<TransitProfile>,
    pub score: u32,
    pub round: u32,
    pub total_rounds: u32,
    pub last_guess: Option<GuessOutcome>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            phase: GamePhase::Onboarding,
            current_profile: None,
            score: 0,
            round: 1,
            total_rounds: MIN_ROUNDS,
            last_guess: None,
        }
    }
}

impl GameState {
    /// The active profile as the UI may show it: counts always, the claimed
    /// district only once the round has resolved.
    #[must_use]
    pub fn current_card(&self) -> Option<ProfileCard> {
        let profile = self.current_profile.as_ref()?;
        match self.phase {
            GamePhase::Playing => Some(ProfileCard::hidden(profile)),
            _ => Some(ProfileCard::revealed(profile)),
        }
    }
}

/// One player's session from onboarding to game over.
///
/// Advances strictly in response to the four external triggers (`submit`,
/// `guess`, `advance`, `play_again`). Each async trigger holds the session
/// exclusively until its repository call settles, so no other trigger can
/// observe a half-finished transition.
pub struct GameSession<S> {
    repo: ProfileRepository<S>,
    table: DistrictTable,
    rng: ChaCha20Rng,
    my_id: Option<String>,
    /// Whether draws skip the player's own submission. Decided once per
    /// session from the pool size so a lone player still gets a profile.
    exclude_self: bool,
    state: GameState,
}

impl<S: ProfileStore> GameSession<S> {
    /// Session over the canonical seed pool, seeded for deterministic draws.
    #[must_use]
    pub fn new(store: S, table: DistrictTable, seed: u64) -> Self {
        Self::with_repository(ProfileRepository::new(store), table, seed)
    }

    #[must_use]
    pub fn with_repository(repo: ProfileRepository<S>, table: DistrictTable, seed: u64) -> Self {
        Self {
            repo,
            table,
            rng: ChaCha20Rng::seed_from_u64(seed),
            my_id: None,
            exclude_self: false,
            state: GameState::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The id remembered from onboarding, so the player never guesses their
    /// own submission. Retained across replays.
    #[must_use]
    pub fn my_id(&self) -> Option<&str> {
        self.my_id.as_deref()
    }

    #[must_use]
    pub const fn repository(&self) -> &ProfileRepository<S> {
        &self.repo
    }

    /// Onboarding trigger: record the player's own profile and start the
    /// first round.
    ///
    /// A realistic submission is persisted to the shared pool; an
    /// implausible one, or any store failure, keeps the player on a
    /// transient profile with a locally generated id. Either way the
    /// session proceeds.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoProfilesAvailable`] if no first-round profile
    /// can be drawn; the session stays in `Loading` as a blocking error
    /// state.
    pub async fn submit(&mut self, draft: ProfileDraft) -> Result<(), GameError> {
        if self.state.phase != GamePhase::Onboarding {
            return Ok(());
        }

        let profile = if is_realistic(&draft.counts) {
            match self.repo.add(&draft).await {
                Ok(saved) => saved,
                Err(err) => {
                    log::warn!("submission not persisted, playing with transient profile: {err}");
                    let id = self.local_id();
                    draft.with_id(id)
                }
            }
        } else {
            log::debug!("implausible submission kept out of the shared pool");
            let id = self.local_id();
            draft.with_id(id)
        };

        self.my_id = Some(profile.id);
        self.state.phase = GamePhase::Loading;
        self.begin_run().await
    }

    /// Playing trigger: evaluate the player's one guess for this round.
    ///
    /// Correct means exact string equality with the profile's claimed
    /// district; it awards points and short-circuits the distance to 0.
    /// Returns the recorded outcome, or `None` if no guess was accepted.
    /// Repeat guesses in the same round are no-ops.
    pub fn guess(&mut self, district_name: &str) -> Option<&GuessOutcome> {
        if self.state.phase != GamePhase::Playing || self.state.last_guess.is_some() {
            return None;
        }
        let profile = self.state.current_profile.as_ref()?;

        let correct = district_name == profile.district;
        let distance_km = if correct {
            0
        } else {
            self.table.distance_km(district_name, &profile.district)
        };
        if correct {
            self.state.score += CORRECT_GUESS_POINTS;
        }

        self.state.last_guess = Some(GuessOutcome {
            guessed_district: district_name.to_string(),
            correct,
            distance_km,
        });
        self.state.phase = GamePhase::Result;
        self.state.last_guess.as_ref()
    }

    /// Result trigger: move to the next round, or to game over after the
    /// final round.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoProfilesAvailable`] if the next round's
    /// profile cannot be drawn.
    pub async fn advance(&mut self) -> Result<(), GameError> {
        if self.state.phase != GamePhase::Result {
            return Ok(());
        }
        if self.state.round >= self.state.total_rounds {
            self.state.phase = GamePhase::GameOver;
            return Ok(());
        }
        self.state.round += 1;
        self.draw_round().await
    }

    /// Game-over trigger: start a fresh session against the current pool,
    /// keeping the onboarding identity.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoProfilesAvailable`] if no profile can be
    /// drawn for the new session.
    pub async fn play_again(&mut self) -> Result<(), GameError> {
        if self.state.phase != GamePhase::GameOver {
            return Ok(());
        }
        self.state.score = 0;
        self.state.round = 1;
        self.state.current_profile = None;
        self.state.last_guess = None;
        self.state.phase = GamePhase::Loading;
        self.begin_run().await
    }

    /// Loading: size the run from a fresh pool count, fix the exclusion
    /// policy for the run, and draw the first profile.
    async fn begin_run(&mut self) -> Result<(), GameError> {
        let count = self.repo.count().await;
        self.state.total_rounds = clamp_rounds(count);
        // A lone player draws without exclusion rather than drawing nothing.
        self.exclude_self = count > 1 && self.my_id.is_some();
        self.draw_round().await
    }

    async fn draw_round(&mut self) -> Result<(), GameError> {
        let exclude = if self.exclude_self {
            self.my_id.as_deref()
        } else {
            None
        };
        match self.repo.pick_random(&mut self.rng, exclude).await {
            Some(profile) => {
                log::debug!("round {} profile {}", self.state.round, profile.id);
                self.state.current_profile = Some(profile);
                self.state.last_guess = None;
                self.state.phase = GamePhase::Playing;
                Ok(())
            }
            None => {
                self.state.phase = GamePhase::Loading;
                Err(GameError::NoProfilesAvailable)
            }
        }
    }

    /// Summary for the game-over screen.
    #[must_use]
    pub fn summary(&self) -> crate::result::SessionSummary {
        crate::result::session_summary(&self.state)
    }

    fn local_id(&mut self) -> String {
        format!("local_{:08x}", self.rng.next_u32())
    }
}

#[allow(clippy::cast_possible_truncation)]
fn clamp_rounds(pool_size: usize) -> u32 {
    (pool_size.min(MAX_ROUNDS as usize) as u32).max(MIN_ROUNDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_count_is_clamped_to_session_bounds() {
        assert_eq!(clamp_rounds(0), 1);
        assert_eq!(clamp_rounds(1), 1);
        assert_eq!(clamp_rounds(7), 7);
        assert_eq!(clamp_rounds(10), 10);
        assert_eq!(clamp_rounds(400), 10);
    }

    #[test]
    fn default_state_starts_at_onboarding() {
        let state = GameState::default();
        assert_eq!(state.phase, GamePhase::Onboarding);
        assert_eq!(state.score, 0);
        assert_eq!(state.round, 1);
        assert!(state.current_card().is_none());
    }

    #[test]
    fn card_visibility_follows_phase() {
        let profile = ProfileDraft {
            district: "Kartal".to_string(),
            counts: crate::profile::RideCounts::default(),
        }
        .with_id("seed_9".to_string());
        let mut state = GameState {
            phase: GamePhase::Playing,
            current_profile: Some(profile),
            ..GameState::default()
        };
        assert_eq!(state.current_card().unwrap().district, None);
        state.phase = GamePhase::Result;
        assert_eq!(
            state.current_card().unwrap().district.as_deref(),
            Some("Kartal")
        );
    }
}
