use std::fmt;

use serde::Serialize;

use crate::{
    card::Rank,
    error::{Result, TrainerError},
    hand::{is_natural, total},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    #[serde(rename = "Win")]
    Win,
    #[serde(rename = "Loss")]
    Loss,
    #[serde(rename = "Loss (player bust)")]
    PlayerBust,
    #[serde(rename = "Push")]
    Push,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Loss => "Loss",
            Outcome::PlayerBust => "Loss (player bust)",
            Outcome::Push => "Push",
        }
    }

    /// Bankroll change for a flat bet. Naturals pay even money.
    pub fn delta(&self, bet: i64) -> i64 {
        match self {
            Outcome::Win => bet,
            Outcome::Loss | Outcome::PlayerBust => bet.saturating_neg(),
            Outcome::Push => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of a finished round. Hands are owned copies.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub round: u32,
    pub player: Vec<Rank>,
    pub dealer: Vec<Rank>,
    pub player_total: u8,
    pub dealer_total: u8,
    pub outcome: Outcome,
    pub bet: i64,
    pub count: i32,
    pub natural: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub outcome: Outcome,
    pub delta: i64,
    pub record: HistoryRecord,
}

pub fn outcome(player_total: u8, dealer_total: u8) -> Outcome {
    if player_total > 21 {
        Outcome::PlayerBust
    } else if dealer_total > 21 || player_total > dealer_total {
        Outcome::Win
    } else if player_total < dealer_total {
        Outcome::Loss
    } else {
        Outcome::Push
    }
}

/// Settles a round without touching the bankroll; the caller applies
/// `delta` and stores `record`.
pub fn resolve(
    round: u32,
    player: &[Rank],
    dealer: &[Rank],
    bet: i64,
    running_count: i32,
) -> Result<Resolution> {
    if player.is_empty() || dealer.is_empty() {
        return Err(TrainerError::PreconditionViolation(
            "both hands need cards before resolving",
        ));
    }
    let player_total = total(player);
    let dealer_total = total(dealer);
    let outcome = outcome(player_total, dealer_total);

    Ok(Resolution {
        outcome,
        delta: outcome.delta(bet),
        record: HistoryRecord {
            round,
            player: player.to_vec(),
            dealer: dealer.to_vec(),
            player_total,
            dealer_total,
            outcome,
            bet,
            count: running_count,
            natural: is_natural(player),
        },
    })
}
