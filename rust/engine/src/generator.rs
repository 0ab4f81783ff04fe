use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{
    column_range, Card, CardId, GameId, Series, UserId, COLS, NUMBERS_PER_CARD, NUMBERS_PER_ROW,
    ROWS, SERIES_SIZE,
};

/// Numbers each column range spans.
const COLUMN_SPAN: usize = 10;

fn column_pool(col: usize) -> Vec<u8> {
    let (lo, hi) = column_range(col);
    (lo..=hi).collect()
}

/// Builds cards and six-card series with a seed-reproducible ChaCha20 RNG.
/// Same seed, same cards; audits and regression runs rely on this.
#[derive(Debug)]
pub struct CardGenerator {
    rng: ChaCha20Rng,
}

impl CardGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(0x0B1A_6090);
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Builds one valid card: 15 numbers, 5 per row, every number inside its
    /// column's range.
    ///
    /// Columns are processed left to right with a greedy row-balancing fill:
    /// each column draws a random batch of candidates from its range, the
    /// rows with the fewest numbers so far take them (ties break toward the
    /// top row), and candidates beyond the row slots still open are
    /// discarded. The fill bounds below keep 15-per-card reachable at every
    /// step, so the invariants hold by construction rather than by retry.
    pub fn generate_card(&mut self, id: CardId, game_id: GameId, owner_id: UserId) -> Card {
        let mut pools: [Vec<u8>; COLS] = std::array::from_fn(column_pool);
        // A lone card leaves the rest of each range unused; no carryover duty.
        self.fill_card(id, game_id, owner_id, &mut pools, COLUMN_SPAN)
    }

    /// Builds six cards over shared shrinking per-column pools so that the
    /// series partitions 1–90. Card i may leave behind at most what the
    /// remaining cards can still hold (3 per column each); the last card
    /// drains every pool. When a pool runs short of the row slots that would
    /// otherwise be filled, only what is available is placed.
    pub fn generate_series(&mut self, base_id: CardId, game_id: GameId, owner_id: UserId) -> Series {
        let mut pools: [Vec<u8>; COLS] = std::array::from_fn(column_pool);
        let cards = std::array::from_fn(|i| {
            let spill = ROWS * (SERIES_SIZE - 1 - i);
            self.fill_card(base_id + i as CardId, game_id, owner_id, &mut pools, spill)
        });
        Series::new(cards)
    }

    /// One card over the given pools. `spill` is how many numbers per column
    /// the cards still to come can absorb; anything beyond it must be placed
    /// now.
    fn fill_card(
        &mut self,
        id: CardId,
        game_id: GameId,
        owner_id: UserId,
        pools: &mut [Vec<u8>; COLS],
        spill: usize,
    ) -> Card {
        let mut grid = [[0u8; COLS]; ROWS];
        let mut row_fill = [0usize; ROWS];
        let mut placed = 0;

        for col in 0..COLS {
            let remaining = NUMBERS_PER_CARD - placed;
            let pool_len = pools[col].len();
            // What the columns to the right can still take on this card, and
            // what they are themselves forced to place.
            let later_cap: usize = pools[col + 1..].iter().map(|p| p.len().min(ROWS)).sum();
            let later_due: usize = pools[col + 1..]
                .iter()
                .map(|p| p.len().saturating_sub(spill))
                .sum();

            // Place at least enough that the card can still reach 15 and the
            // series can still drain this range; at most what keeps the later
            // columns' own obligations payable.
            let min_take = remaining
                .saturating_sub(later_cap)
                .max(pool_len.saturating_sub(spill));
            let max_take = ROWS
                .min(pool_len)
                .min(remaining.saturating_sub(later_due));

            let drawn = self.rng.random_range(min_take..=ROWS.min(pool_len));
            let take = drawn.min(max_take);

            // Least-filled rows take the column; ties break toward the top
            // row so the same seed always yields the same card.
            let mut open: Vec<usize> = (0..ROWS).filter(|&r| row_fill[r] < NUMBERS_PER_ROW).collect();
            open.sort_by_key(|&r| (row_fill[r], r));
            open.truncate(take);
            open.sort_unstable();

            let pool = &mut pools[col];
            let mut picked: Vec<u8> = Vec::with_capacity(take);
            for _ in 0..take {
                let idx = self.rng.random_range(0..pool.len());
                picked.push(pool.swap_remove(idx));
            }
            picked.sort_unstable();

            // Ascending numbers into ascending rows keeps columns ordered
            // top to bottom.
            for (&row, &n) in open.iter().zip(picked.iter()) {
                grid[row][col] = n;
                row_fill[row] += 1;
                placed += 1;
            }
        }

        Card::new(id, game_id, owner_id, grid)
    }
}
