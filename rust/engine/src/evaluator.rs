use serde::{Deserialize, Serialize};

use crate::cards::{Card, ROWS};
use crate::game::CalledNumbers;

pub use crate::cards::is_card_valid;

/// A fully marked row: the row index, its numbers, and the draw count at the
/// moment of verification.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct QuineMatch {
    pub row: usize,
    pub numbers: Vec<u8>,
    pub draw_count: usize,
}

/// A fully marked card: all playable numbers and the draw count at the
/// moment of verification.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BingoMatch {
    pub numbers: Vec<u8>,
    pub draw_count: usize,
}

/// Returns the first row (in index order) whose numbers have all been
/// called, or `None`. Pure and idempotent: identical inputs always yield the
/// identical answer.
pub fn verify_quine(card: &Card, called: &CalledNumbers) -> Option<QuineMatch> {
    for row in 0..ROWS {
        let numbers = card.row_numbers(row);
        if numbers.is_empty() {
            continue;
        }
        if numbers.iter().all(|&n| called.contains(n)) {
            return Some(QuineMatch {
                row,
                numbers,
                draw_count: called.draw_count(),
            });
        }
    }
    None
}

/// Returns the full-card match if every playable number on the card has been
/// called, or `None`. Pure and idempotent.
pub fn verify_bingo(card: &Card, called: &CalledNumbers) -> Option<BingoMatch> {
    let numbers = card.numbers();
    if numbers.is_empty() {
        return None;
    }
    if numbers.iter().all(|&n| called.contains(n)) {
        return Some(BingoMatch {
            numbers,
            draw_count: called.draw_count(),
        });
    }
    None
}

/// True iff the card is a bingo and the draw count is within the jackpot
/// threshold. The comparison is on how many numbers have been drawn, not on
/// which numbers; a draw count equal to the threshold is still eligible.
pub fn verify_jackpot(card: &Card, called: &CalledNumbers, threshold: u32) -> bool {
    verify_bingo(card, called).is_some_and(|m| m.draw_count <= threshold as usize)
}
