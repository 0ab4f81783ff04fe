use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, GameId, UserId};
use crate::config::EngineConfig;
use crate::errors::ClaimError;
use crate::evaluator::{is_card_valid, verify_bingo, verify_jackpot, verify_quine};
use crate::game::{Game, GameStatus};

/// An accepted quine claim, ready for the caller to persist together with
/// its payout effects.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct QuineClaim {
    pub game_id: GameId,
    pub card_id: CardId,
    pub user_id: UserId,
    /// Index of the completed row
    pub row: usize,
    /// The five numbers of the completed row
    pub numbers: Vec<u8>,
    /// Draw count at the moment the claim was accepted
    pub draw_count: usize,
    /// RFC3339 acceptance timestamp
    pub ts: String,
}

/// An accepted bingo claim, including whether it qualifies for the jackpot.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BingoClaim {
    pub game_id: GameId,
    pub card_id: CardId,
    pub user_id: UserId,
    /// All fifteen numbers of the card
    pub numbers: Vec<u8>,
    /// Draw count at the moment the claim was accepted
    pub draw_count: usize,
    /// True iff the bingo landed within the configured draw-count threshold
    pub jackpot_won: bool,
    /// RFC3339 acceptance timestamp
    pub ts: String,
}

/// Wins newly found by an auto-check pass, for the caller to persist
/// atomically.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct AutoCheckReport {
    pub bingos: Vec<BingoClaim>,
    pub quines: Vec<QuineClaim>,
}

impl AutoCheckReport {
    pub fn is_empty(&self) -> bool {
        self.bingos.is_empty() && self.quines.is_empty()
    }
}

/// Validates win claims against game state, ownership, and the at-most-once
/// rule. Constructed with the engine configuration and borrowed by callers;
/// the `&mut Game` it takes is the per-game critical section made explicit,
/// since checking a winner record and recording the win must not interleave
/// with another claim for the same card.
#[derive(Debug)]
pub struct ClaimValidator {
    config: EngineConfig,
}

impl ClaimValidator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Accepts a quine claim or says why not, in this order: game active,
    /// card structurally valid and owned by the claimant, card sold into
    /// this game, not already credited, row actually complete. On success
    /// the (user, card) pair is recorded so the same quine can never be
    /// credited twice.
    pub fn validate_quine(
        &self,
        game: &mut Game,
        card: &Card,
        user_id: UserId,
    ) -> Result<QuineClaim, ClaimError> {
        self.admit(game, card, user_id)?;
        if game.has_quine_winner(user_id, card.id()) {
            return Err(ClaimError::AlreadyClaimed { card_id: card.id() });
        }
        let found = verify_quine(card, game.called())
            .ok_or(ClaimError::NotAQuine { card_id: card.id() })?;
        game.record_quine_winner(user_id, card.id());
        Ok(QuineClaim {
            game_id: game.id(),
            card_id: card.id(),
            user_id,
            row: found.row,
            numbers: found.numbers,
            draw_count: found.draw_count,
            ts: now_rfc3339(),
        })
    }

    /// Same admission order as [`validate_quine`](Self::validate_quine)
    /// against the bingo record, plus jackpot eligibility at the configured
    /// threshold.
    pub fn validate_bingo(
        &self,
        game: &mut Game,
        card: &Card,
        user_id: UserId,
    ) -> Result<BingoClaim, ClaimError> {
        self.admit(game, card, user_id)?;
        if game.has_bingo_winner(user_id, card.id()) {
            return Err(ClaimError::AlreadyClaimed { card_id: card.id() });
        }
        let found = verify_bingo(card, game.called())
            .ok_or(ClaimError::NotABingo { card_id: card.id() })?;
        let jackpot_won = verify_jackpot(card, game.called(), self.config.jackpot_threshold);
        game.record_bingo_winner(user_id, card.id());
        Ok(BingoClaim {
            game_id: game.id(),
            card_id: card.id(),
            user_id,
            numbers: found.numbers,
            draw_count: found.draw_count,
            jackpot_won,
            ts: now_rfc3339(),
        })
    }

    /// Sweeps all live cards after a draw and records every newly qualifying
    /// win. Bingo is evaluated first; a card that completes bingo is not
    /// also reported as a quine in the same pass. Cards from other games or
    /// failing the structural check are skipped, not errors. A second pass
    /// with an unchanged called sequence finds the winner records already
    /// grown and returns an empty report.
    pub fn auto_check_all_cards(&self, game: &mut Game, cards: &[Card]) -> AutoCheckReport {
        let mut report = AutoCheckReport::default();
        if game.status() != GameStatus::Active {
            return report;
        }
        for card in cards {
            if card.game_id() != game.id() || !is_card_valid(card) {
                continue;
            }
            let owner = card.owner_id();
            if game.has_bingo_winner(owner, card.id()) {
                continue;
            }
            if let Some(found) = verify_bingo(card, game.called()) {
                let jackpot_won =
                    verify_jackpot(card, game.called(), self.config.jackpot_threshold);
                game.record_bingo_winner(owner, card.id());
                report.bingos.push(BingoClaim {
                    game_id: game.id(),
                    card_id: card.id(),
                    user_id: owner,
                    numbers: found.numbers,
                    draw_count: found.draw_count,
                    jackpot_won,
                    ts: now_rfc3339(),
                });
                continue;
            }
            if game.has_quine_winner(owner, card.id()) {
                continue;
            }
            if let Some(found) = verify_quine(card, game.called()) {
                game.record_quine_winner(owner, card.id());
                report.quines.push(QuineClaim {
                    game_id: game.id(),
                    card_id: card.id(),
                    user_id: owner,
                    row: found.row,
                    numbers: found.numbers,
                    draw_count: found.draw_count,
                    ts: now_rfc3339(),
                });
            }
        }
        report
    }

    fn admit(&self, game: &Game, card: &Card, user_id: UserId) -> Result<(), ClaimError> {
        if game.status() != GameStatus::Active {
            return Err(ClaimError::GameNotActive {
                game_id: game.id(),
                status: game.status(),
            });
        }
        if !is_card_valid(card) || card.owner_id() != user_id {
            return Err(ClaimError::InvalidCard { card_id: card.id() });
        }
        if card.game_id() != game.id() {
            return Err(ClaimError::InvalidCard { card_id: card.id() });
        }
        Ok(())
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
