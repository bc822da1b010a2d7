//! Yut Nori session implementation.

use log::{info, warn};
use std::time::Duration;

use crate::ai::{AiPolicy, PlayerController};
use crate::context::{GameContext, SharedContext};
use crate::core::{
    Action, ActionOutcome, GameMode, GameRng, MoveResult, Notice, Phase, PieceId, PlayerId,
    PlayerPair, Position, SessionConfig, SessionState, TRACK_LENGTH,
};
use crate::error::{InvalidAction, SetupError};
use crate::pacing::PacingCue;
use crate::rules::{
    animation_frame, GameResult, RollResolver, RulesEngine, Sticks, Toss, TossSource, TurnScheduler,
};

/// One game of Yut Nori between two seats.
///
/// All play goes through `roll`, `select_and_move`, or `submit`; each call
/// completes atomically and a rejected call changes nothing.
#[derive(Debug)]
pub struct YutNoriSession<C: SharedContext = GameContext> {
    config: SessionConfig,
    rules: TurnScheduler,
    state: SessionState,
    controllers: PlayerPair<PlayerController>,
    context: C,
    animation_rng: GameRng,
    end_reported: bool,
}

/// Builder for creating a `YutNoriSession`.
pub struct SessionBuilder {
    mode: GameMode,
    config: SessionConfig,
    toss_source: Option<Box<dyn TossSource>>,
    controllers: Vec<(PlayerId, PlayerController)>,
    placements: Vec<(PieceId, Position)>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            mode: GameMode::Single,
            config: SessionConfig::default(),
            toss_source: None,
            controllers: Vec::new(),
            placements: Vec::new(),
        }
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Draw stick throws from `source` instead of the seeded RNG.
    pub fn toss_source(mut self, source: impl TossSource + 'static) -> Self {
        self.toss_source = Some(Box::new(source));
        self
    }

    /// Override the controller the mode would pick for `player`.
    pub fn controller(mut self, player: PlayerId, controller: PlayerController) -> Self {
        self.controllers.push((player, controller));
        self
    }

    /// Start `piece` at `position` instead of the start square.
    pub fn place(mut self, piece: PieceId, position: Position) -> Self {
        self.placements.push((piece, position));
        self
    }

    /// Build the session and report the game start to `context`.
    ///
    /// Placements are checked against the track and capture rules; a setup
    /// where either player has already won is refused.
    pub fn build<C: SharedContext>(mut self, context: C) -> Result<YutNoriSession<C>, SetupError> {
        let mut state = SessionState::new(self.mode);
        for (piece, position) in std::mem::take(&mut self.placements) {
            if let Position::Track(index) = position {
                if index >= TRACK_LENGTH {
                    return Err(SetupError::OffTrack { piece, index });
                }
            }
            state
                .piece_mut(piece)
                .ok_or(SetupError::UnknownPiece { piece })?
                .place(position);
        }
        if let Some(index) = (1..TRACK_LENGTH).find(|&index| has_opposing_pieces(&state, index)) {
            return Err(SetupError::Colocated { index });
        }
        if let Some((player, _)) = state.players.iter().find(|(_, p)| p.all_finished()) {
            return Err(SetupError::AlreadyWon { player });
        }

        Ok(self.assemble(state, context))
    }

    fn assemble<C: SharedContext>(
        self,
        mut state: SessionState,
        mut context: C,
    ) -> YutNoriSession<C> {
        let seed = self.config.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
        let base = GameRng::new(seed);

        let ai_rng = base.for_context("ai");
        let mut controllers = PlayerPair::new(|id| match (id, self.mode) {
            (PlayerId::SECOND, GameMode::Single) => {
                PlayerController::Ai(AiPolicy::new(ai_rng.for_context("seat-2")))
            }
            _ => PlayerController::Human,
        });
        for (player, controller) in self.controllers {
            let seat = controllers.get_mut(player);
            if let (Some(seat), Some(info)) = (seat, state.players.get_mut(player)) {
                info.role = controller.role();
                *seat = controller;
            }
        }

        let resolver = match self.toss_source {
            Some(source) => RollResolver::from_boxed(source),
            None => RollResolver::new(base.for_context("toss")),
        };

        context.start_game();
        info!("yut nori session started ({:?}, seed {seed})", self.mode);

        YutNoriSession {
            config: self.config,
            rules: TurnScheduler::new(resolver),
            state,
            controllers,
            context,
            animation_rng: base.for_context("animation"),
            end_reported: false,
        }
    }
}

/// Whether both players have an unfinished piece on `index`.
fn has_opposing_pieces(state: &SessionState, index: u8) -> bool {
    let mut owners = state.pieces_at(index).map(|piece| piece.owner());
    match owners.next() {
        Some(first) => owners.any(|owner| owner != first),
        None => false,
    }
}

impl YutNoriSession {
    /// Configure a session; the context type is picked at `build`.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }
}

impl<C: SharedContext> YutNoriSession<C> {
    /// Start a session in `mode` with default settings.
    pub fn start(mode: GameMode, context: C) -> Self {
        SessionBuilder::new().mode(mode).assemble(SessionState::new(mode), context)
    }

    // === Actions ===

    /// Throw the sticks for the current player.
    pub fn roll(&mut self) -> Result<Toss, InvalidAction> {
        self.rules.roll(&mut self.state).map_err(|err| self.rejected(Action::Roll, err))
    }

    /// Move one of the current player's pieces by the pending outcome.
    pub fn select_and_move(&mut self, piece: PieceId) -> Result<MoveResult, InvalidAction> {
        let result = self
            .rules
            .select_and_move(&mut self.state, piece)
            .map_err(|err| self.rejected(Action::SelectAndMove(piece), err))?;

        if result.session_ended {
            self.report_end();
        }
        Ok(result)
    }

    /// Submit an action on behalf of `actor`.
    ///
    /// Rejected with `NotYourTurn` unless `actor` is the current player.
    pub fn submit(
        &mut self,
        actor: PlayerId,
        action: Action,
    ) -> Result<ActionOutcome, InvalidAction> {
        if !self.state.is_over() && actor != self.state.current_player {
            let err = InvalidAction::NotYourTurn {
                actor,
                current: self.state.current_player,
            };
            return Err(self.rejected(action, err));
        }

        match action {
            Action::Roll => self.roll().map(ActionOutcome::Rolled),
            Action::SelectAndMove(piece) => {
                self.select_and_move(piece).map(ActionOutcome::Moved)
            }
        }
    }

    /// Let the current player's AI take one action.
    ///
    /// `Ok(None)` when the current player is human or the game is over.
    pub fn step_ai(&mut self) -> Result<Option<ActionOutcome>, InvalidAction> {
        if self.state.is_over() {
            return Ok(None);
        }

        let actor = self.state.current_player;
        let decision = self.controllers[actor].decide(&self.rules, &self.state);
        match decision {
            Some(action) => self.submit(actor, action).map(Some),
            None => Ok(None),
        }
    }

    /// End the session from outside.
    ///
    /// The shared context is told the game ended (unless a win already did)
    /// and every later action is rejected.
    pub fn abandon(&mut self) {
        if self.state.abandoned {
            return;
        }
        if self.state.winner.is_none() {
            self.state.abandoned = true;
            self.state.phase = Phase::GameOver;
            self.state.pending_outcome = None;
            self.state.rolls_owed = 0;
            self.state.notice = Some(Notice::Abandoned);
            info!("yut nori session abandoned on turn {}", self.state.turn_number);
        }
        self.report_end();
    }

    // === Queries ===

    /// Read-only view of the state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Owned copy of the state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.clone()
    }

    /// Actions the current player may submit.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.rules.legal_actions(&self.state)
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    #[must_use]
    pub fn controller(&self, player: PlayerId) -> Option<&PlayerController> {
        self.controllers.get(player)
    }

    /// Whether the AI should act next.
    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        !self.state.is_over() && self.controllers[self.state.current_player].is_ai()
    }

    /// The pause a presentation layer should wait before calling `step_ai`.
    #[must_use]
    pub fn ai_delay(&self) -> Option<(PacingCue, Duration)> {
        if !self.is_ai_turn() {
            return None;
        }
        match self.state.phase {
            Phase::AwaitingRoll => Some((PacingCue::AiThink, self.config.ai_think())),
            Phase::AwaitingPieceSelection => Some((PacingCue::AiMove, self.config.ai_move())),
            Phase::GameOver => None,
        }
    }

    /// A random stick arrangement for one toss-animation frame.
    pub fn animation_frame(&mut self) -> Sticks {
        animation_frame(&mut self.animation_rng)
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Discard the session and hand back the shared context.
    pub fn into_context(self) -> C {
        self.context
    }

    // === Internals ===

    fn rejected(&self, action: Action, err: InvalidAction) -> InvalidAction {
        warn!("{} rejected for {}: {}", action, self.state.current_player, err.code());
        err
    }

    fn report_end(&mut self) {
        if self.end_reported {
            return;
        }
        self.end_reported = true;

        if self.state.winner.is_some() {
            let score = self.context.state().current_score + self.config.win_bonus;
            self.context.update_score(score);
        }
        self.context.end_game();
    }
}
