//! Turn state machine.
//!
//! ```text
//!            roll()                      select_and_move()
//! AwaitingRoll ──────► AwaitingPieceSelection ──────┬──► GameOver (4th piece home)
//!      ▲                                            │
//!      └──────── same player (rolls owed) ◄─────────┤
//!      └──────── other player (none owed) ◄─────────┘
//! ```
//!
//! Each player starts a turn owed one roll. Rolling spends one; a `Yut` or
//! `Mo` gives it straight back, and a capture adds one more. The turn passes
//! only when a move completes with nothing owed.
//!
//! Every check runs before any mutation, so a rejected action leaves the
//! state exactly as it was.

use log::{debug, info};

use crate::core::{
    Action, ActionOutcome, MoveResult, Notice, Phase, PieceId, PlayerId, SessionState,
};
use crate::error::InvalidAction;

use super::board::compute_target;
use super::capture::{resolve_capture, CaptureResult};
use super::roll::{RollOutcome, RollResolver, Toss};

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// A player brought all four pieces home.
    Winner(PlayerId),
    /// Ended from outside before anyone won.
    Abandoned,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Rules seam between the session and the state machine.
///
/// The session, human controllers, and the AI all go through these methods;
/// there is no other way to change a `SessionState` during play.
pub trait RulesEngine {
    /// Every action the current player may submit right now.
    fn legal_actions(&self, state: &SessionState) -> Vec<Action>;

    /// Apply an action for the current player.
    fn apply_action(
        &mut self,
        state: &mut SessionState,
        action: Action,
    ) -> Result<ActionOutcome, InvalidAction>;

    /// `Some` once the session has ended.
    fn is_terminal(&self, state: &SessionState) -> Option<GameResult>;

    /// Whether `action` would be accepted.
    fn is_legal(&self, state: &SessionState, action: Action) -> bool {
        self.legal_actions(state).contains(&action)
    }
}

/// The Yut Nori turn rules, drawing tosses from a `RollResolver`.
#[derive(Debug)]
pub struct TurnScheduler {
    resolver: RollResolver,
}

impl TurnScheduler {
    #[must_use]
    pub fn new(resolver: RollResolver) -> Self {
        Self { resolver }
    }

    /// Throw the sticks for the current player.
    pub fn roll(&mut self, state: &mut SessionState) -> Result<Toss, InvalidAction> {
        check_roll(state)?;

        let toss = self.resolver.toss();
        apply_toss(state, toss);
        Ok(toss)
    }

    /// Move one of the current player's pieces by the pending outcome.
    pub fn select_and_move(
        &mut self,
        state: &mut SessionState,
        piece: PieceId,
    ) -> Result<MoveResult, InvalidAction> {
        let outcome = check_move(state, piece)?;
        apply_move(state, piece, outcome)
    }
}

impl RulesEngine for TurnScheduler {
    fn legal_actions(&self, state: &SessionState) -> Vec<Action> {
        if check_roll(state).is_ok() {
            return vec![Action::Roll];
        }
        if state.phase != Phase::AwaitingPieceSelection || state.is_over() {
            return vec![];
        }

        state
            .current()
            .unfinished_pieces()
            .map(|piece| Action::SelectAndMove(piece.id))
            .collect()
    }

    fn apply_action(
        &mut self,
        state: &mut SessionState,
        action: Action,
    ) -> Result<ActionOutcome, InvalidAction> {
        match action {
            Action::Roll => self.roll(state).map(ActionOutcome::Rolled),
            Action::SelectAndMove(piece) => {
                self.select_and_move(state, piece).map(ActionOutcome::Moved)
            }
        }
    }

    fn is_terminal(&self, state: &SessionState) -> Option<GameResult> {
        if let Some(winner) = state.winner {
            Some(GameResult::Winner(winner))
        } else if state.abandoned {
            Some(GameResult::Abandoned)
        } else {
            None
        }
    }
}

fn check_not_over(state: &SessionState) -> Result<(), InvalidAction> {
    if state.abandoned {
        return Err(InvalidAction::SessionAbandoned);
    }
    if state.winner.is_some() || state.phase == Phase::GameOver {
        return Err(InvalidAction::GameOver);
    }
    Ok(())
}

/// Whether the current player may roll now.
pub fn check_roll(state: &SessionState) -> Result<(), InvalidAction> {
    check_not_over(state)?;
    if state.phase == Phase::AwaitingPieceSelection || state.pending_outcome.is_some() {
        return Err(InvalidAction::OutcomePending);
    }
    if state.rolls_owed == 0 {
        return Err(InvalidAction::NoRollsOwed);
    }
    Ok(())
}

/// Whether the current player may move `piece` now; yields the outcome to spend.
pub fn check_move(state: &SessionState, piece: PieceId) -> Result<RollOutcome, InvalidAction> {
    check_not_over(state)?;
    let outcome = match (state.phase, state.pending_outcome) {
        (Phase::AwaitingPieceSelection, Some(outcome)) => outcome,
        _ => return Err(InvalidAction::NoPendingOutcome),
    };

    let target = state.piece(piece).ok_or(InvalidAction::UnknownPiece { piece })?;
    if piece.owner != state.current_player {
        return Err(InvalidAction::NotYourPiece { piece });
    }
    if target.finished {
        return Err(InvalidAction::PieceAlreadyFinished { piece });
    }
    Ok(outcome)
}

fn apply_toss(state: &mut SessionState, toss: Toss) {
    let outcome = toss.outcome;

    state.rolls_owed -= 1;
    if outcome.grants_extra_roll() {
        state.rolls_owed += 1;
        state.notice = Some(Notice::RollAgain { outcome });
    } else {
        state.notice = Some(Notice::SelectPiece { outcome });
    }
    state.pending_outcome = Some(outcome);
    state.phase = Phase::AwaitingPieceSelection;

    debug!(
        "{} threw {:?} -> {} (rolls owed {})",
        state.current_player, toss.sticks, outcome, state.rolls_owed
    );
}

fn apply_move(
    state: &mut SessionState,
    id: PieceId,
    outcome: RollOutcome,
) -> Result<MoveResult, InvalidAction> {
    let current = state.current_player;
    let (mover, opponent) = state.players.split_mut(current);

    let piece = mover
        .piece_mut(id.slot_index())
        .ok_or(InvalidAction::UnknownPiece { piece: id })?;

    let target = compute_target(piece, outcome);
    piece.place(target);
    let capture = if target.is_finished() {
        CaptureResult::default()
    } else {
        resolve_capture(piece, opponent.pieces_mut())
    };

    state.pending_outcome = None;
    let mut result = MoveResult::new(id, target, &capture);
    debug!("{current} moved {id} by {outcome} to {target}");

    if target.is_finished() && state.players[current].all_finished() {
        state.winner = Some(current);
        state.phase = Phase::GameOver;
        state.rolls_owed = 0;
        state.notice = Some(Notice::PlayerWon { player: current });
        result.session_ended = true;
        info!("{current} brought every piece home and wins");
        return Ok(result);
    }

    if capture.is_capture() {
        state.rolls_owed += 1;
        debug!("{current} captured {:?}; rolls owed {}", capture.captured, state.rolls_owed);
    }

    state.notice = if capture.is_capture() {
        Some(Notice::PieceCaptured { count: capture.count() })
    } else if target.is_finished() {
        Some(Notice::PieceFinished { piece: id })
    } else {
        None
    };

    if state.rolls_owed == 0 {
        let next = current.opponent();
        state.current_player = next;
        state.rolls_owed = 1;
        state.turn_number += 1;
        if state.notice.is_none() {
            state.notice = Some(Notice::TurnPassed { player: next });
        }
        debug!("turn {} passes to {next}", state.turn_number);
    }
    state.phase = Phase::AwaitingRoll;

    result.next_player = Some(state.current_player);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameMode, Position};
    use crate::rules::roll::ScriptedTosses;

    fn scheduler(outcomes: impl IntoIterator<Item = RollOutcome>) -> TurnScheduler {
        TurnScheduler::new(RollResolver::new(ScriptedTosses::from_outcomes(outcomes, 0)))
    }

    fn p(owner: PlayerId, slot: u8) -> PieceId {
        PieceId::new(owner, slot)
    }

    #[test]
    fn test_roll_moves_to_selection() {
        let mut rules = scheduler([RollOutcome::Gae]);
        let mut state = SessionState::new(GameMode::Multi);

        let toss = rules.roll(&mut state).unwrap();

        assert_eq!(toss.outcome, RollOutcome::Gae);
        assert_eq!(state.phase, Phase::AwaitingPieceSelection);
        assert_eq!(state.pending_outcome, Some(RollOutcome::Gae));
        assert_eq!(state.rolls_owed, 0);
    }

    #[test]
    fn test_bonus_roll_keeps_count() {
        let mut rules = scheduler([RollOutcome::Yut]);
        let mut state = SessionState::new(GameMode::Multi);

        rules.roll(&mut state).unwrap();

        assert_eq!(state.rolls_owed, 1);
        assert_eq!(state.notice, Some(Notice::RollAgain { outcome: RollOutcome::Yut }));
    }

    #[test]
    fn test_plain_move_passes_turn() {
        let mut rules = scheduler([RollOutcome::Geol]);
        let mut state = SessionState::new(GameMode::Multi);

        rules.roll(&mut state).unwrap();
        let result = rules.select_and_move(&mut state, p(PlayerId::FIRST, 0)).unwrap();

        assert_eq!(result.position, Position::Track(3));
        assert_eq!(result.next_player, Some(PlayerId::SECOND));
        assert_eq!(state.current_player, PlayerId::SECOND);
        assert_eq!(state.rolls_owed, 1);
        assert_eq!(state.phase, Phase::AwaitingRoll);
        assert_eq!(state.turn_number, 2);
    }

    #[test]
    fn test_bonus_move_keeps_turn() {
        let mut rules = scheduler([RollOutcome::Mo, RollOutcome::Do]);
        let mut state = SessionState::new(GameMode::Multi);

        rules.roll(&mut state).unwrap();
        rules.select_and_move(&mut state, p(PlayerId::FIRST, 0)).unwrap();
        assert_eq!(state.current_player, PlayerId::FIRST);
        assert_eq!(state.phase, Phase::AwaitingRoll);

        rules.roll(&mut state).unwrap();
        rules.select_and_move(&mut state, p(PlayerId::FIRST, 0)).unwrap();
        assert_eq!(state.current_player, PlayerId::SECOND);
        assert_eq!(state.piece(p(PlayerId::FIRST, 0)).unwrap().position, Position::Track(6));
    }

    #[test]
    fn test_roll_twice_rejected() {
        let mut rules = scheduler([RollOutcome::Do, RollOutcome::Do]);
        let mut state = SessionState::new(GameMode::Multi);

        rules.roll(&mut state).unwrap();
        let before = state.clone();
        assert_eq!(rules.roll(&mut state), Err(InvalidAction::OutcomePending));
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_without_roll_rejected() {
        let mut rules = scheduler([]);
        let mut state = SessionState::new(GameMode::Multi);
        let before = state.clone();

        let err = rules.select_and_move(&mut state, p(PlayerId::FIRST, 0)).unwrap_err();

        assert_eq!(err, InvalidAction::NoPendingOutcome);
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_checks() {
        let mut rules = scheduler([RollOutcome::Do]);
        let mut state = SessionState::new(GameMode::Multi);
        rules.roll(&mut state).unwrap();
        if let Some(piece) = state.piece_mut(p(PlayerId::FIRST, 1)) {
            piece.place(Position::Finished);
        }
        let before = state.clone();

        assert_eq!(
            rules.select_and_move(&mut state, p(PlayerId::SECOND, 0)),
            Err(InvalidAction::NotYourPiece { piece: p(PlayerId::SECOND, 0) })
        );
        assert_eq!(
            rules.select_and_move(&mut state, p(PlayerId::FIRST, 1)),
            Err(InvalidAction::PieceAlreadyFinished { piece: p(PlayerId::FIRST, 1) })
        );
        assert_eq!(
            rules.select_and_move(&mut state, p(PlayerId::FIRST, 9)),
            Err(InvalidAction::UnknownPiece { piece: p(PlayerId::FIRST, 9) })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_capture_grants_roll() {
        let mut rules = scheduler([RollOutcome::Gae]);
        let mut state = SessionState::new(GameMode::Multi);
        if let Some(piece) = state.piece_mut(p(PlayerId::FIRST, 0)) {
            piece.place(Position::Track(8));
        }
        if let Some(piece) = state.piece_mut(p(PlayerId::SECOND, 1)) {
            piece.place(Position::Track(10));
        }

        rules.roll(&mut state).unwrap();
        let result = rules.select_and_move(&mut state, p(PlayerId::FIRST, 0)).unwrap();

        assert_eq!(result.captured, vec![p(PlayerId::SECOND, 1)]);
        assert_eq!(state.piece(p(PlayerId::SECOND, 1)).unwrap().position, Position::START);
        assert_eq!(state.current_player, PlayerId::FIRST);
        assert_eq!(state.rolls_owed, 1);
        assert_eq!(state.notice, Some(Notice::PieceCaptured { count: 1 }));
    }

    #[test]
    fn test_own_pieces_share_squares() {
        let mut rules = scheduler([RollOutcome::Do]);
        let mut state = SessionState::new(GameMode::Multi);
        if let Some(piece) = state.piece_mut(p(PlayerId::FIRST, 1)) {
            piece.place(Position::Track(1));
        }

        rules.roll(&mut state).unwrap();
        let result = rules.select_and_move(&mut state, p(PlayerId::FIRST, 0)).unwrap();

        assert!(!result.captured_any());
        assert_eq!(state.pieces_at(1).count(), 2);
        assert_eq!(state.current_player, PlayerId::SECOND);
    }

    #[test]
    fn test_winning_move() {
        let mut rules = scheduler([RollOutcome::Mo]);
        let mut state = SessionState::new(GameMode::Multi);
        for slot in 0..3 {
            if let Some(piece) = state.piece_mut(p(PlayerId::FIRST, slot)) {
                piece.place(Position::Finished);
            }
        }
        if let Some(piece) = state.piece_mut(p(PlayerId::FIRST, 3)) {
            piece.place(Position::Track(26));
        }

        rules.roll(&mut state).unwrap();
        let result = rules.select_and_move(&mut state, p(PlayerId::FIRST, 3)).unwrap();

        assert!(result.finished);
        assert!(result.session_ended);
        assert_eq!(state.winner, Some(PlayerId::FIRST));
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(rules.is_terminal(&state), Some(GameResult::Winner(PlayerId::FIRST)));
        assert!(rules.legal_actions(&state).is_empty());
        assert_eq!(rules.roll(&mut state), Err(InvalidAction::GameOver));
    }

    #[test]
    fn test_legal_actions() {
        let mut rules = scheduler([RollOutcome::Do]);
        let mut state = SessionState::new(GameMode::Multi);
        assert_eq!(rules.legal_actions(&state), vec![Action::Roll]);

        rules.roll(&mut state).unwrap();
        if let Some(piece) = state.piece_mut(p(PlayerId::FIRST, 2)) {
            piece.place(Position::Finished);
        }

        let legal = rules.legal_actions(&state);
        assert_eq!(legal.len(), 3);
        assert!(!legal.contains(&Action::Roll));
        assert!(!legal.contains(&Action::SelectAndMove(p(PlayerId::FIRST, 2))));
        assert!(rules.is_legal(&state, Action::SelectAndMove(p(PlayerId::FIRST, 0))));
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::SECOND);
        assert!(result.is_winner(PlayerId::SECOND));
        assert!(!result.is_winner(PlayerId::FIRST));
        assert!(!GameResult::Abandoned.is_winner(PlayerId::FIRST));
    }
}
