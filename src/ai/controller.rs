//! Who drives each seat.

use crate::core::{Action, PlayerRole, SessionState};
use crate::rules::RulesEngine;

use super::policy::AiPolicy;

/// Driver for one seat.
#[derive(Clone, Debug)]
pub enum PlayerController {
    /// Actions arrive from the presentation layer.
    Human,
    /// Actions come from the AI policy.
    Ai(AiPolicy),
}

impl PlayerController {
    #[must_use]
    pub fn role(&self) -> PlayerRole {
        match self {
            Self::Human => PlayerRole::Human,
            Self::Ai(_) => PlayerRole::Ai,
        }
    }

    #[must_use]
    pub fn is_ai(&self) -> bool {
        matches!(self, Self::Ai(_))
    }

    /// The AI's next action; humans never decide here.
    pub fn decide<E: RulesEngine>(&mut self, engine: &E, state: &SessionState) -> Option<Action> {
        match self {
            Self::Human => None,
            Self::Ai(policy) => policy.decide(engine, state),
        }
    }
}
