//! Computer opponent and the controller abstraction.
//!
//! Both seats are driven by a `PlayerController`. A human controller waits
//! for input from the presentation layer; an AI controller asks `AiPolicy`
//! for a decision. Either way the resulting `Action` goes through the same
//! `submit` path, so the AI has no shortcut around the turn rules.

pub mod policy;
pub mod controller;

pub use policy::AiPolicy;
pub use controller::PlayerController;
