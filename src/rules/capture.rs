//! Capturing opponent pieces.
//!
//! A piece that ends its move on a square held by opponent pieces sends
//! every one of them back to the start. A player's own pieces share squares
//! freely. The start square is not a capture square.

use smallvec::SmallVec;

use crate::core::{Piece, PieceId, Position, PIECES_PER_PLAYER};

/// Pieces sent home by a single move.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureResult {
    pub captured: SmallVec<[PieceId; PIECES_PER_PLAYER]>,
}

impl CaptureResult {
    /// Whether anything was captured (earns the mover one extra roll).
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.captured.len()
    }
}

/// Resolve captures for a piece that has just been moved.
///
/// Every unfinished opponent piece on the mover's square returns to the
/// start; finished pieces and pieces elsewhere are untouched.
pub fn resolve_capture(moved: &Piece, opponent_pieces: &mut [Piece]) -> CaptureResult {
    let mut result = CaptureResult::default();

    let index = match moved.position {
        Position::Track(index) if index > 0 => index,
        _ => return result,
    };

    for piece in opponent_pieces.iter_mut() {
        if !piece.finished && piece.track_index() == Some(index) {
            piece.send_home();
            result.captured.push(piece.id);
        }
    }

    result
}
