use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::commit::{commit_all, hex_digest, CardCommitment};
use crate::game::{Game, PlayerId};

/// One authorized payout inside a [`GameRecord`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PayoutEntry<P> {
    pub player: P,
    pub amount: u64,
}

/// Complete record of a finished game, one JSON line per game.
///
/// Board cards are recorded both in the clear and as hex commitments so an
/// external ledger can match the record against previously committed cards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord<P> {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// Player ids in deal order
    pub players: Vec<P>,
    /// Community cards
    pub board: Vec<Card>,
    /// Hex commitments of the board cards, in order
    pub board_commitments: Vec<String>,
    /// Players who shared the maximum rank
    pub winners: Vec<P>,
    /// Authorized payouts, at most one per winner
    pub payouts: Vec<PayoutEntry<P>>,
    /// Timestamp the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl<P: PlayerId> GameRecord<P> {
    /// Snapshot a game that has reached at least the `Evaluated` phase.
    pub fn from_game<C: CardCommitment>(game_id: String, game: &Game<P>, scheme: &C) -> Self {
        let board: Vec<Card> = game.board().to_vec();
        let board_commitments = commit_all(scheme, &board)
            .iter()
            .map(hex_digest)
            .collect();
        Self {
            game_id,
            players: game.seats().iter().map(|s| s.id.clone()).collect(),
            board,
            board_commitments,
            winners: game.winners().iter().cloned().collect(),
            payouts: game
                .payouts()
                .iter()
                .map(|(player, &amount)| PayoutEntry {
                    player: player.clone(),
                    amount,
                })
                .collect(),
            ts: None,
        }
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes [`GameRecord`]s as JSONL, one line per finished game, flushed per
/// record so a crash loses at most the record being written.
pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    pub fn create<Q: AsRef<Path>>(path: Q) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Writer-less logger with a pinned date, for id-sequence tests.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write<P: PlayerId + Serialize>(
        &mut self,
        record: &GameRecord<P>,
    ) -> std::io::Result<()> {
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
