//! Game sessions.
//!
//! A `YutNoriSession` owns one game: its state, the turn rules, the
//! controllers for both seats, and the shared context it reports to.
//! Sessions are created with `YutNoriSession::start` or, for scripted
//! tosses, custom controllers, and mid-game positions, with `SessionBuilder`.

pub mod game;

pub use game::{SessionBuilder, YutNoriSession};
