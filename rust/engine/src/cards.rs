use serde::{Deserialize, Serialize};

/// Identifier of a card, assigned at sale/assignment time.
pub type CardId = u64;
/// Identifier of a game session.
pub type GameId = u64;
/// Identifier of a player account.
pub type UserId = u64;

/// Number of rows on a card.
pub const ROWS: usize = 3;
/// Number of columns on a card.
pub const COLS: usize = 9;
/// Playable numbers on a full card.
pub const NUMBERS_PER_CARD: usize = 15;
/// Playable numbers on each row.
pub const NUMBERS_PER_ROW: usize = 5;
/// Highest drawable number.
pub const MAX_NUMBER: u8 = 90;
/// Cards in a series; together they cover 1–90 exactly once.
pub const SERIES_SIZE: usize = 6;

/// Inclusive number range of a column: column c holds 10c+1 through 10c+10,
/// capped at 90 for the last column.
pub fn column_range(col: usize) -> (u8, u8) {
    let lo = (col * 10 + 1) as u8;
    let hi = ((col * 10 + 10) as u8).min(MAX_NUMBER);
    (lo, hi)
}

/// A single bingo card: a 3×9 grid where 0 denotes an empty cell and a
/// nonzero value a playable number. Cards are immutable once created; the
/// grid never changes after sale.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique card identifier
    id: CardId,
    /// Game this card was sold into
    game_id: GameId,
    /// Account that owns the card
    owner_id: UserId,
    /// 3 rows × 9 columns, 0 = empty
    grid: [[u8; COLS]; ROWS],
}

impl Card {
    pub fn new(id: CardId, game_id: GameId, owner_id: UserId, grid: [[u8; COLS]; ROWS]) -> Self {
        Self {
            id,
            game_id,
            owner_id,
            grid,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }
    pub fn game_id(&self) -> GameId {
        self.game_id
    }
    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }
    pub fn grid(&self) -> &[[u8; COLS]; ROWS] {
        &self.grid
    }

    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.grid[row][col]
    }

    /// Playable numbers of one row, left to right.
    pub fn row_numbers(&self, row: usize) -> Vec<u8> {
        self.grid[row].iter().copied().filter(|&n| n != 0).collect()
    }

    /// All playable numbers on the card, row by row.
    pub fn numbers(&self) -> Vec<u8> {
        (0..ROWS).flat_map(|r| self.row_numbers(r)).collect()
    }
}

/// Structural check on a card grid: exactly 15 playable numbers, exactly 5
/// per row, and every number inside its column's range. This is the boundary
/// against malformed or tampered payloads and must pass before any win logic
/// trusts an externally supplied card. Independent of any game state.
pub fn is_card_valid(card: &Card) -> bool {
    let mut total = 0;
    for row in 0..ROWS {
        let mut in_row = 0;
        for col in 0..COLS {
            let n = card.grid[row][col];
            if n == 0 {
                continue;
            }
            let (lo, hi) = column_range(col);
            if n < lo || n > hi {
                return false;
            }
            in_row += 1;
        }
        if in_row != NUMBERS_PER_ROW {
            return false;
        }
        total += in_row;
    }
    total == NUMBERS_PER_CARD
}

/// A series of six cards whose playable numbers partition 1–90.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Series {
    cards: [Card; SERIES_SIZE],
}

impl Series {
    pub fn new(cards: [Card; SERIES_SIZE]) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card; SERIES_SIZE] {
        &self.cards
    }

    /// True iff the six cards together hold every number 1–90 exactly once.
    pub fn covers_full_range(&self) -> bool {
        let mut seen = [false; MAX_NUMBER as usize + 1];
        let mut count = 0;
        for card in &self.cards {
            for n in card.numbers() {
                match seen.get_mut(n as usize) {
                    Some(slot) if !*slot => {
                        *slot = true;
                        count += 1;
                    }
                    _ => return false,
                }
            }
        }
        count == MAX_NUMBER as usize
    }
}
