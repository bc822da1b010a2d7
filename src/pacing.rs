//! Presentation timers.
//!
//! Toss animations and AI "thinking" pauses are delays the presentation
//! layer waits on between engine calls. The engine never sleeps: a `Pacer`
//! runs each delay on a short-lived worker thread and delivers a cue over a
//! channel when it elapses.
//!
//! Every cue is stamped with the pacer's epoch at scheduling time.
//! `cancel_all` bumps the epoch, so a cue scheduled for an abandoned or
//! reset session is dropped on receipt instead of being applied to the new
//! one.
//!
//! ```
//! use std::time::Duration;
//! use rust_yut::pacing::{Pacer, PacingCue};
//!
//! let pacer = Pacer::new();
//! pacer.schedule(PacingCue::AiThink, Duration::ZERO);
//! assert_eq!(pacer.wait(Duration::from_secs(1)), Some(PacingCue::AiThink));
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

/// What a presentation layer should do when a delay elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PacingCue {
    /// The toss animation has finished; apply the roll.
    TossAnimation,
    /// The AI has "thought" long enough; let it act.
    AiThink,
    /// The AI's pause before moving a piece is over.
    AiMove,
}

/// Delivers cues after a delay, with bulk cancellation.
#[derive(Debug)]
pub struct Pacer {
    tx: Sender<(u64, PacingCue)>,
    rx: Receiver<(u64, PacingCue)>,
    epoch: Arc<AtomicU64>,
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Pacer {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Current epoch; cues from earlier epochs are stale.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Deliver `cue` once `delay` has elapsed.
    pub fn schedule(&self, cue: PacingCue, delay: Duration) {
        let epoch = self.epoch();
        if delay.is_zero() {
            // The receiver lives in `self`, so this cannot fail.
            let _ = self.tx.send((epoch, cue));
            return;
        }

        let tx = self.tx.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            // The pacer may have been dropped meanwhile; nothing to deliver to.
            let _ = tx.send((epoch, cue));
        });
    }

    /// Drop every cue scheduled so far, delivered or not.
    pub fn cancel_all(&self) {
        let previous = self.epoch.fetch_add(1, Ordering::SeqCst);
        debug!("pacing epoch {previous} cancelled");
    }

    /// Next live cue if one has already arrived.
    pub fn try_next(&self) -> Option<PacingCue> {
        let epoch = self.epoch();
        self.rx
            .try_iter()
            .find(|&(stamp, _)| stamp == epoch)
            .map(|(_, cue)| cue)
    }

    /// Block up to `timeout` for the next live cue.
    pub fn wait(&self, timeout: Duration) -> Option<PacingCue> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok((stamp, cue)) if stamp == self.epoch() => return Some(cue),
                Ok(_) => continue,
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_delay_is_immediate() {
        let pacer = Pacer::new();
        pacer.schedule(PacingCue::TossAnimation, Duration::ZERO);
        assert_eq!(pacer.try_next(), Some(PacingCue::TossAnimation));
        assert_eq!(pacer.try_next(), None);
    }

    #[test]
    fn test_delayed_cue_arrives() {
        let pacer = Pacer::new();
        pacer.schedule(PacingCue::AiMove, Duration::from_millis(5));
        assert_eq!(pacer.wait(Duration::from_secs(5)), Some(PacingCue::AiMove));
    }

    #[test]
    fn test_cancel_drops_pending_cues() {
        let pacer = Pacer::new();
        pacer.schedule(PacingCue::AiThink, Duration::from_millis(5));
        pacer.schedule(PacingCue::TossAnimation, Duration::ZERO);
        pacer.cancel_all();

        assert_eq!(pacer.wait(Duration::from_millis(100)), None);
        assert_eq!(pacer.epoch(), 1);
    }

    #[test]
    fn test_schedule_after_cancel() {
        let pacer = Pacer::new();
        pacer.schedule(PacingCue::AiThink, Duration::ZERO);
        pacer.cancel_all();
        pacer.schedule(PacingCue::AiMove, Duration::ZERO);

        assert_eq!(pacer.try_next(), Some(PacingCue::AiMove));
    }
}
