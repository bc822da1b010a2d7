//! Stick tosses and movement outcomes.
//!
//! Four sticks are thrown; the number landing flat side up decides how far
//! a piece moves:
//!
//! | up | outcome | move | extra roll |
//! |----|---------|------|------------|
//! | 0  | Mo      | 5    | yes        |
//! | 1  | Do      | 1    | no         |
//! | 2  | Gae     | 2    | no         |
//! | 3  | Geol    | 3    | no         |
//! | 4  | Yut     | 4    | yes        |
//!
//! `BackDo` (move -1) is part of the outcome vocabulary but no four-stick
//! throw produces it. Move arithmetic still handles it.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::GameRng;

/// Number of sticks per toss.
pub const STICK_COUNT: usize = 4;

/// Stick faces for one toss; `true` means the stick landed face up.
pub type Sticks = [bool; STICK_COUNT];

/// A movement outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RollOutcome {
    Do,
    Gae,
    Geol,
    Yut,
    Mo,
    BackDo,
}

impl RollOutcome {
    /// Every outcome, reachable or not.
    pub const ALL: [RollOutcome; 6] = [
        Self::Do,
        Self::Gae,
        Self::Geol,
        Self::Yut,
        Self::Mo,
        Self::BackDo,
    ];

    /// Map a face-up count to its outcome. Counts above four do not exist.
    #[must_use]
    pub const fn from_up_count(up: usize) -> Option<Self> {
        match up {
            0 => Some(Self::Mo),
            1 => Some(Self::Do),
            2 => Some(Self::Gae),
            3 => Some(Self::Geol),
            4 => Some(Self::Yut),
            _ => None,
        }
    }

    /// Squares moved.
    #[must_use]
    pub const fn delta(self) -> i8 {
        match self {
            Self::Do => 1,
            Self::Gae => 2,
            Self::Geol => 3,
            Self::Yut => 4,
            Self::Mo => 5,
            Self::BackDo => -1,
        }
    }

    /// Whether this outcome gives the same player another roll.
    #[must_use]
    pub const fn grants_extra_roll(self) -> bool {
        matches!(self, Self::Yut | Self::Mo)
    }

    /// Stable lowercase name, used as a localization key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Do => "do",
            Self::Gae => "gae",
            Self::Geol => "geol",
            Self::Yut => "yut",
            Self::Mo => "mo",
            Self::BackDo => "back-do",
        }
    }

    /// A stick arrangement producing this outcome, `None` for `BackDo`.
    #[must_use]
    pub const fn sticks(self) -> Option<Sticks> {
        match self {
            Self::Mo => Some([false; STICK_COUNT]),
            Self::Do => Some([true, false, false, false]),
            Self::Gae => Some([true, true, false, false]),
            Self::Geol => Some([true, true, true, false]),
            Self::Yut => Some([true; STICK_COUNT]),
            Self::BackDo => None,
        }
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The result of one toss: the sticks as they fell and the outcome they mean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Toss {
    pub sticks: Sticks,
    pub outcome: RollOutcome,
}

impl Toss {
    /// Read the outcome off a set of sticks.
    #[must_use]
    pub fn from_sticks(sticks: Sticks) -> Self {
        let up = sticks.iter().filter(|&&s| s).count();
        // Four sticks can show at most four faces.
        let outcome = RollOutcome::from_up_count(up).unwrap_or(RollOutcome::Do);
        Self { sticks, outcome }
    }

    /// Number of sticks that landed face up.
    #[must_use]
    pub fn up_count(&self) -> usize {
        self.sticks.iter().filter(|&&s| s).count()
    }
}

/// Where stick faces come from.
pub trait TossSource: Send {
    /// Throw four sticks.
    fn throw_sticks(&mut self) -> Sticks;
}

impl TossSource for GameRng {
    fn throw_sticks(&mut self) -> Sticks {
        std::array::from_fn(|_| self.gen_bool(0.5))
    }
}

/// Replays a fixed list of stick throws, then falls back to a seeded RNG.
///
/// ```
/// use rust_yut::rules::{RollOutcome, ScriptedTosses, TossSource, Toss};
///
/// let mut source = ScriptedTosses::from_outcomes([RollOutcome::Yut, RollOutcome::Do], 0);
/// assert_eq!(Toss::from_sticks(source.throw_sticks()).outcome, RollOutcome::Yut);
/// assert_eq!(Toss::from_sticks(source.throw_sticks()).outcome, RollOutcome::Do);
/// assert_eq!(source.remaining(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedTosses {
    script: VecDeque<Sticks>,
    fallback: GameRng,
}

impl ScriptedTosses {
    /// Script raw stick throws.
    pub fn new(throws: impl IntoIterator<Item = Sticks>, fallback_seed: u64) -> Self {
        Self {
            script: throws.into_iter().collect(),
            fallback: GameRng::new(fallback_seed),
        }
    }

    /// Script outcomes. `BackDo` has no stick arrangement and is skipped.
    pub fn from_outcomes(
        outcomes: impl IntoIterator<Item = RollOutcome>,
        fallback_seed: u64,
    ) -> Self {
        Self::new(outcomes.into_iter().filter_map(RollOutcome::sticks), fallback_seed)
    }

    /// Append an outcome to the script. Returns false for `BackDo`.
    pub fn push_outcome(&mut self, outcome: RollOutcome) -> bool {
        match outcome.sticks() {
            Some(sticks) => {
                self.script.push_back(sticks);
                true
            }
            None => false,
        }
    }

    /// Scripted throws not yet used.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl TossSource for ScriptedTosses {
    fn throw_sticks(&mut self) -> Sticks {
        match self.script.pop_front() {
            Some(sticks) => sticks,
            None => self.fallback.throw_sticks(),
        }
    }
}

/// Produces tosses from a `TossSource`.
///
/// Each toss is independent: nothing about one toss is retained for the next.
pub struct RollResolver {
    source: Box<dyn TossSource>,
}

impl RollResolver {
    pub fn new(source: impl TossSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    pub fn from_boxed(source: Box<dyn TossSource>) -> Self {
        Self { source }
    }

    /// Throw the sticks once.
    pub fn toss(&mut self) -> Toss {
        Toss::from_sticks(self.source.throw_sticks())
    }
}

impl std::fmt::Debug for RollResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RollResolver").finish_non_exhaustive()
    }
}

/// A cosmetic stick arrangement for toss animations. Never affects play.
pub fn animation_frame(rng: &mut GameRng) -> Sticks {
    rng.throw_sticks()
}
