use std::fmt;

use serde::Serialize;

use crate::{
    card::Rank,
    error::{Result, TrainerError},
    hand::total,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum Action {
    Hit,
    Stand,
    Double,
    Split,
}

impl Action {
    pub fn as_code(&self) -> &'static str {
        match self {
            Action::Hit => "H",
            Action::Stand => "S",
            Action::Double => "D",
            Action::Split => "P",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Action::Hit => "Hit",
            Action::Stand => "Stand",
            Action::Double => "Double",
            Action::Split => "Split",
        }
    }
}

/// Why a rule fired, shown next to the action for teaching.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Rationale {
    AlwaysSplitAcesAndEights,
    DealerWeakSplit,
    AdvantageousSplit,
    OptimalSplit,
    MaximumPower,
    DealerWeaker,
    DealerVeryWeak,
    TooWeakToStand,
    DealerLikelyToBust,
    StrongTotal,
    DealerWeak,
    DealerStrong,
}

impl Rationale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rationale::AlwaysSplitAcesAndEights => "always split Aces and 8s",
            Rationale::DealerWeakSplit | Rationale::DealerWeak => "dealer weak",
            Rationale::AdvantageousSplit => "advantageous split",
            Rationale::OptimalSplit => "optimal",
            Rationale::MaximumPower => "maximum power",
            Rationale::DealerWeaker => "dealer weaker",
            Rationale::DealerVeryWeak => "dealer very weak",
            Rationale::TooWeakToStand => "too weak to stand",
            Rationale::DealerLikelyToBust => "dealer likely to bust",
            Rationale::StrongTotal => "strong total",
            Rationale::DealerStrong => "dealer strong",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub action: Action,
    pub rationale: Rationale,
}

impl Advice {
    const fn new(action: Action, rationale: Rationale) -> Self {
        Advice { action, rationale }
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.action.label(), self.rationale.as_str())
    }
}

/// Upcard value with the ace high.
pub fn upcard_value(upcard: Rank) -> u8 {
    upcard.blackjack_value()
}

/// Basic-strategy advice. Rules are checked in order and the first match
/// wins: pair splits, then doubles, then the hit/stand table.
pub fn recommend(
    player: &[Rank],
    dealer_upcard: Rank,
    can_double: bool,
    can_split: bool,
) -> Result<Advice> {
    if player.is_empty() {
        return Err(TrainerError::PreconditionViolation("player hand is empty"));
    }
    let player_total = total(player);
    let up = upcard_value(dealer_upcard);

    if can_split {
        if let Some(advice) = split_rule(player, up) {
            return Ok(advice);
        }
    }
    if can_double {
        if let Some(advice) = double_rule(player_total, up) {
            return Ok(advice);
        }
    }
    Ok(hit_stand_rule(player_total, up))
}

fn split_rule(player: &[Rank], up: u8) -> Option<Advice> {
    let pair = match player {
        [first, second] if first == second => *first,
        _ => return None,
    };
    match pair {
        Rank::Ace | Rank::Eight => Some(Advice::new(
            Action::Split,
            Rationale::AlwaysSplitAcesAndEights,
        )),
        Rank::Two | Rank::Three | Rank::Seven if up <= 7 => {
            Some(Advice::new(Action::Split, Rationale::DealerWeakSplit))
        }
        Rank::Six if up <= 6 => Some(Advice::new(Action::Split, Rationale::AdvantageousSplit)),
        Rank::Nine if !matches!(up, 7 | 10 | 11) => {
            Some(Advice::new(Action::Split, Rationale::OptimalSplit))
        }
        _ => None,
    }
}

fn double_rule(player_total: u8, up: u8) -> Option<Advice> {
    match player_total {
        11 => Some(Advice::new(Action::Double, Rationale::MaximumPower)),
        10 if up <= 9 => Some(Advice::new(Action::Double, Rationale::DealerWeaker)),
        9 if (3..=6).contains(&up) => Some(Advice::new(Action::Double, Rationale::DealerVeryWeak)),
        _ => None,
    }
}

fn hit_stand_rule(player_total: u8, up: u8) -> Advice {
    match player_total {
        0..=11 => Advice::new(Action::Hit, Rationale::TooWeakToStand),
        12 if (4..=6).contains(&up) => Advice::new(Action::Stand, Rationale::DealerLikelyToBust),
        17..=u8::MAX => Advice::new(Action::Stand, Rationale::StrongTotal),
        13..=16 if up <= 6 => Advice::new(Action::Stand, Rationale::DealerWeak),
        _ => Advice::new(Action::Hit, Rationale::DealerStrong),
    }
}
