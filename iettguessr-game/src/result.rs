//! End-of-session summary.

use serde::{Deserialize, Serialize};

use crate::constants::CORRECT_GUESS_POINTS;
use crate::state::GameState;

/// Figures shown on the game-over screen (and by the share collaborator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: u32,
    pub total_rounds: u32,
    pub correct_rounds: u32,
    /// `score / (total_rounds * 10)`, as a percentage rounded to the
    /// nearest integer.
    pub percentage: u32,
}

#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn session_summary(state: &GameState) -> SessionSummary {
    let max_score = state.total_rounds * CORRECT_GUESS_POINTS;
    let percentage = if max_score == 0 {
        0
    } else {
        (f64::from(state.score) / f64::from(max_score) * 100.0).round() as u32
    };
    SessionSummary {
        score: state.score,
        total_rounds: state.total_rounds,
        correct_rounds: state.score / CORRECT_GUESS_POINTS,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(score: u32, total_rounds: u32) -> GameState {
        GameState {
            score,
            total_rounds,
            ..GameState::default()
        }
    }

    #[test]
    fn perfect_session_scores_100_percent() {
        let summary = session_summary(&finished(70, 7));
        assert_eq!(summary.correct_rounds, 7);
        assert_eq!(summary.percentage, 100);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(session_summary(&finished(10, 3)).percentage, 33);
        assert_eq!(session_summary(&finished(20, 3)).percentage, 67);
        assert_eq!(session_summary(&finished(0, 5)).percentage, 0);
    }
}
