use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::{GameId, UserId};
use crate::config::EngineConfig;
use crate::errors::LedgerError;

/// What a jackpot transaction did.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum JackpotTransactionKind {
    Contribution,
    Award,
}

/// One audit-trail entry of the jackpot pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JackpotTransaction {
    pub kind: JackpotTransactionKind,
    /// Game the money came from or was won in
    pub game_id: GameId,
    /// Receiving user for awards, absent for contributions
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// Amount moved, minor currency units
    pub amount: u64,
    /// Pool amount after the transaction
    pub pool_after: u64,
    /// RFC3339 timestamp
    pub ts: String,
}

/// A successfully paid jackpot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JackpotAward {
    pub game_id: GameId,
    pub user_id: UserId,
    pub amount: u64,
    pub ts: String,
}

/// The external system of record for player money. Balance credit and
/// transaction append are one atomic operation on the collaborator; the
/// engine never sees a half-applied award.
pub trait PrizeLedger {
    fn credit_and_record(
        &mut self,
        user_id: UserId,
        amount: u64,
        tx: &JackpotTransaction,
    ) -> Result<(), LedgerError>;
}

/// Tracks the jackpot pool: growth from per-game contributions, reset to the
/// configured minimum on award. The pool amount is mutated only through this
/// type.
#[derive(Debug)]
pub struct JackpotLedger {
    config: EngineConfig,
    amount: u64,
    transactions: Vec<JackpotTransaction>,
}

impl JackpotLedger {
    /// A fresh pool starts at the configured minimum.
    pub fn new(config: EngineConfig) -> Self {
        let amount = config.jackpot_minimum;
        Self {
            config,
            amount,
            transactions: Vec::new(),
        }
    }

    pub fn current(&self) -> u64 {
        self.amount
    }

    /// Audit trail of contributions and awards, oldest first.
    pub fn transactions(&self) -> &[JackpotTransaction] {
        &self.transactions
    }

    /// Adds directly to the pool (seeding, operator top-ups).
    pub fn contribute(&mut self, amount: u64) {
        self.amount = self.amount.saturating_add(amount);
    }

    /// Adds `floor(prize_pool × contribution_rate)` from a finished game and
    /// records the source in the audit trail. Returns the contributed
    /// amount.
    pub fn contribute_from_game(&mut self, game_id: GameId, prize_pool: u64) -> u64 {
        let contribution = (prize_pool as f64 * self.config.jackpot_contribution_rate).floor() as u64;
        self.amount = self.amount.saturating_add(contribution);
        self.transactions.push(JackpotTransaction {
            kind: JackpotTransactionKind::Contribution,
            game_id,
            user_id: None,
            amount: contribution,
            pool_after: self.amount,
            ts: now_rfc3339(),
        });
        contribution
    }

    /// Pays the jackpot: delegates balance credit plus transaction append to
    /// the external ledger, then resets the pool to the configured minimum.
    /// A collaborator failure (an unknown user means corrupted upstream
    /// data) is surfaced and leaves the pool untouched.
    pub fn award_to_winner(
        &mut self,
        ledger: &mut dyn PrizeLedger,
        game_id: GameId,
        user_id: UserId,
        amount: u64,
    ) -> Result<JackpotAward, LedgerError> {
        if amount > self.amount {
            return Err(LedgerError::Rejected {
                reason: format!("award {} exceeds pool {}", amount, self.amount),
            });
        }
        let tx = JackpotTransaction {
            kind: JackpotTransactionKind::Award,
            game_id,
            user_id: Some(user_id),
            amount,
            pool_after: self.config.jackpot_minimum,
            ts: now_rfc3339(),
        };
        ledger.credit_and_record(user_id, amount, &tx)?;
        self.amount = self.config.jackpot_minimum;
        let ts = tx.ts.clone();
        self.transactions.push(tx);
        Ok(JackpotAward {
            game_id,
            user_id,
            amount,
            ts,
        })
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
