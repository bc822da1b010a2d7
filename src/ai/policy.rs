//! Random-move AI.

use crate::core::{Action, GameRng, SessionState};
use crate::rules::RulesEngine;

/// Picks among the current player's legal actions.
///
/// Always rolls when rolling is legal; otherwise moves a uniformly random
/// unfinished piece. Sees only what `RulesEngine::legal_actions` exposes:
/// no lookahead, no peeking at future tosses.
#[derive(Clone, Debug)]
pub struct AiPolicy {
    rng: GameRng,
}

impl AiPolicy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Choose the next action, `None` if nothing is legal.
    pub fn decide<E: RulesEngine>(&mut self, engine: &E, state: &SessionState) -> Option<Action> {
        let actions = engine.legal_actions(state);
        if actions.contains(&Action::Roll) {
            return Some(Action::Roll);
        }
        self.rng.choose(&actions).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameMode, Phase, PieceId, PlayerId, Position};
    use crate::rules::{RollOutcome, RollResolver, ScriptedTosses, TurnScheduler};

    fn scheduler(outcomes: impl IntoIterator<Item = RollOutcome>) -> TurnScheduler {
        TurnScheduler::new(RollResolver::new(ScriptedTosses::from_outcomes(outcomes, 3)))
    }

    #[test]
    fn test_rolls_when_legal() {
        let rules = scheduler([]);
        let state = SessionState::new(GameMode::Single);
        let mut ai = AiPolicy::new(GameRng::new(1));

        assert_eq!(ai.decide(&rules, &state), Some(Action::Roll));
    }

    #[test]
    fn test_moves_only_unfinished_own_pieces() {
        let mut rules = scheduler(std::iter::repeat(RollOutcome::Do).take(1));
        let mut state = SessionState::new(GameMode::Single);
        rules.roll(&mut state).unwrap();
        for slot in [0, 2] {
            if let Some(piece) = state.piece_mut(PieceId::new(PlayerId::FIRST, slot)) {
                piece.place(Position::Finished);
            }
        }

        let mut ai = AiPolicy::new(GameRng::new(8));
        for _ in 0..50 {
            match ai.decide(&rules, &state) {
                Some(Action::SelectAndMove(piece)) => {
                    assert_eq!(piece.owner, PlayerId::FIRST);
                    assert!(piece.slot == 1 || piece.slot == 3);
                }
                other => panic!("unexpected decision {other:?}"),
            }
        }
    }

    #[test]
    fn test_choice_covers_all_candidates() {
        let mut rules = scheduler([RollOutcome::Gae]);
        let mut state = SessionState::new(GameMode::Single);
        rules.roll(&mut state).unwrap();

        let mut ai = AiPolicy::new(GameRng::new(21));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            if let Some(action) = ai.decide(&rules, &state) {
                seen.insert(action);
            }
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_nothing_when_over() {
        let rules = scheduler([]);
        let mut state = SessionState::new(GameMode::Single);
        state.phase = Phase::GameOver;
        state.winner = Some(PlayerId::SECOND);

        let mut ai = AiPolicy::new(GameRng::new(1));
        assert_eq!(ai.decide(&rules, &state), None);
    }
}
