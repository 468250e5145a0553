use serde::Deserialize;

use crate::card::Rank;

pub const DEFAULT_ASSUMED_DECKS: f64 = 6.0;

/// Tagging scheme applied to each observed card. Hi-Lo is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum CountSystem {
    #[default]
    #[serde(rename = "Hi-Lo")]
    HiLo,
    #[serde(rename = "Hi-Opt I")]
    HiOptI,
    #[serde(rename = "Hi-Opt II")]
    HiOptII,
    #[serde(rename = "Omega II")]
    OmegaII,
    #[serde(rename = "KO", alias = "KO (Knockout)")]
    Knockout,
    #[serde(rename = "Ace-Five")]
    AceFive,
}

impl CountSystem {
    pub fn tag(self, rank: Rank) -> i32 {
        use Rank::*;
        match self {
            CountSystem::HiLo => rank.hi_lo_tag(),
            CountSystem::HiOptI => match rank {
                Three | Four | Five | Six => 1,
                Ten | Jack | Queen | King => -1,
                _ => 0,
            },
            CountSystem::HiOptII => match rank {
                Two | Three | Six | Seven => 1,
                Four | Five => 2,
                Ten | Jack | Queen | King => -2,
                _ => 0,
            },
            CountSystem::OmegaII => match rank {
                Two | Three | Seven => 1,
                Four | Five | Six => 2,
                Nine => -1,
                Ten | Jack | Queen | King => -2,
                _ => 0,
            },
            CountSystem::Knockout => match rank {
                Two | Three | Four | Five | Six | Seven => 1,
                Eight | Nine => 0,
                _ => -1,
            },
            CountSystem::AceFive => match rank {
                Five => 1,
                Ace => -1,
                _ => 0,
            },
        }
    }
}

/// Session-long running count. Never reset between rounds.
pub struct CardCounter {
    system: CountSystem,
    assumed_decks: f64,
    running_count: i32,
    cards_seen: u32,
}

impl CardCounter {
    pub fn new(system: CountSystem, assumed_decks: f64) -> Self {
        CardCounter {
            system,
            assumed_decks,
            running_count: 0,
            cards_seen: 0,
        }
    }

    pub fn observe(&mut self, rank: Rank) {
        self.running_count += self.system.tag(rank);
        self.cards_seen += 1;
    }

    pub fn running_count(&self) -> i32 {
        self.running_count
    }

    pub fn cards_seen(&self) -> u32 {
        self.cards_seen
    }

    pub fn system(&self) -> CountSystem {
        self.system
    }

    /// Running count over the assumed deck count, unrounded.
    pub fn true_count(&self) -> f64 {
        if self.assumed_decks <= 0.0 {
            0.0
        } else {
            self.running_count as f64 / self.assumed_decks
        }
    }

    pub fn count_bucket(&self) -> i32 {
        self.true_count().round() as i32
    }
}

impl Default for CardCounter {
    fn default() -> Self {
        CardCounter::new(CountSystem::HiLo, DEFAULT_ASSUMED_DECKS)
    }
}
