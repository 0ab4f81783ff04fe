use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, GameId, UserId, MAX_NUMBER};
use crate::errors::CallError;

/// Lifecycle of a game session. Transitions are owned by the surrounding
/// session layer; the engine only reads the status.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    Scheduled,
    Active,
    Completed,
}

/// The ordered, append-only, duplicate-free sequence of numbers drawn in a
/// game. Its length at any moment is the draw count, which is what jackpot
/// eligibility is measured against.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CalledNumbers {
    order: Vec<u8>,
}

impl CalledNumbers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one drawn number, rejecting out-of-range and repeated values.
    pub fn call(&mut self, number: u8) -> Result<(), CallError> {
        if number < 1 || number > MAX_NUMBER {
            return Err(CallError::OutOfRange { number });
        }
        if self.contains(number) {
            return Err(CallError::AlreadyCalled { number });
        }
        self.order.push(number);
        Ok(())
    }

    pub fn contains(&self, number: u8) -> bool {
        self.order.contains(&number)
    }

    pub fn draw_count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Numbers in draw order.
    pub fn as_slice(&self) -> &[u8] {
        &self.order
    }
}

/// One game session: its status, its called numbers, and the record of which
/// (user, card) pairs have already been credited a quine or a bingo. The
/// winner sets only grow; together with the single-writer-per-game rule they
/// are what makes a second claim for the same win impossible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    status: GameStatus,
    called: CalledNumbers,
    quine_winners: HashSet<(UserId, CardId)>,
    bingo_winners: HashSet<(UserId, CardId)>,
}

impl Game {
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            status: GameStatus::Scheduled,
            called: CalledNumbers::new(),
            quine_winners: HashSet::new(),
            bingo_winners: HashSet::new(),
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Status transitions belong to the session layer.
    pub fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub fn called(&self) -> &CalledNumbers {
        &self.called
    }

    /// Appends a drawn number. The sequence only grows while the game is
    /// active; it is frozen once the game completes.
    pub fn call_number(&mut self, number: u8) -> Result<(), CallError> {
        if self.status != GameStatus::Active {
            return Err(CallError::GameNotActive);
        }
        self.called.call(number)
    }

    pub fn has_quine_winner(&self, user_id: UserId, card_id: CardId) -> bool {
        self.quine_winners.contains(&(user_id, card_id))
    }

    pub fn record_quine_winner(&mut self, user_id: UserId, card_id: CardId) {
        self.quine_winners.insert((user_id, card_id));
    }

    pub fn has_bingo_winner(&self, user_id: UserId, card_id: CardId) -> bool {
        self.bingo_winners.contains(&(user_id, card_id))
    }

    pub fn record_bingo_winner(&mut self, user_id: UserId, card_id: CardId) {
        self.bingo_winners.insert((user_id, card_id));
    }

    pub fn quine_winners(&self) -> &HashSet<(UserId, CardId)> {
        &self.quine_winners
    }

    pub fn bingo_winners(&self) -> &HashSet<(UserId, CardId)> {
        &self.bingo_winners
    }
}
