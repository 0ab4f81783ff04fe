use serde::{Deserialize, Serialize};

use crate::cards::{CardId, GameId, UserId};
use crate::claims::{BingoClaim, QuineClaim};

/// Which win a claim record describes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum ClaimKind {
    Quine,
    Bingo,
}

/// One accepted claim as written to the audit trail.
/// Serialized to JSONL format for claim history storage and replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Unique identifier for this claim (format: GAMEID-NNNNNN)
    pub claim_id: String,
    pub kind: ClaimKind,
    pub game_id: GameId,
    pub card_id: CardId,
    pub user_id: UserId,
    /// Draw count when the claim was accepted
    pub draw_count: usize,
    /// Completed row index for quines
    #[serde(default)]
    pub row: Option<usize>,
    /// True iff a bingo also won the jackpot
    #[serde(default)]
    pub jackpot_won: bool,
    /// The matched numbers
    pub numbers: Vec<u8>,
    /// Timestamp when the claim was accepted (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl ClaimRecord {
    pub fn from_quine(claim: &QuineClaim, claim_id: String) -> Self {
        Self {
            claim_id,
            kind: ClaimKind::Quine,
            game_id: claim.game_id,
            card_id: claim.card_id,
            user_id: claim.user_id,
            draw_count: claim.draw_count,
            row: Some(claim.row),
            jackpot_won: false,
            numbers: claim.numbers.clone(),
            ts: Some(claim.ts.clone()),
            meta: None,
        }
    }

    pub fn from_bingo(claim: &BingoClaim, claim_id: String) -> Self {
        Self {
            claim_id,
            kind: ClaimKind::Bingo,
            game_id: claim.game_id,
            card_id: claim.card_id,
            user_id: claim.user_id,
            draw_count: claim.draw_count,
            row: None,
            jackpot_won: claim.jackpot_won,
            numbers: claim.numbers.clone(),
            ts: Some(claim.ts.clone()),
            meta: None,
        }
    }
}

pub fn format_claim_id(game_id: GameId, seq: u32) -> String {
    format!("{}-{:06}", game_id, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends accepted claims to a JSONL audit file, one record per line.
pub struct ClaimLogger {
    writer: Option<BufWriter<File>>,
    game_id: GameId,
    seq: u32,
}

impl ClaimLogger {
    pub fn create<P: AsRef<Path>>(path: P, game_id: GameId) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            game_id,
            seq: 0,
        })
    }

    /// Logger without a backing file, for tests of id sequencing.
    pub fn in_memory(game_id: GameId) -> Self {
        Self {
            writer: None,
            game_id,
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_claim_id(self.game_id, self.seq)
    }

    pub fn write(&mut self, record: &ClaimRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
