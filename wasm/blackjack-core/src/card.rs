use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrainerError};

/// Card rank. Suits never matter to the trainer, so they are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Blackjack value with the ace counted soft; `hand` does the reduction.
    pub const fn blackjack_value(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }

    pub const fn hi_lo_tag(self) -> i32 {
        match self {
            Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1,
            Rank::Seven | Rank::Eight | Rank::Nine => 0,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => -1,
        }
    }

    pub const fn is_ace(self) -> bool {
        matches!(self, Rank::Ace)
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// Symbol-level lookup used at the input boundary.
pub fn blackjack_value(symbol: &str) -> Result<u8> {
    symbol.parse::<Rank>().map(Rank::blackjack_value)
}

impl FromStr for Rank {
    type Err = TrainerError;

    fn from_str(symbol: &str) -> Result<Self> {
        let rank = match symbol.trim().to_ascii_uppercase().as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(TrainerError::InvalidRank(symbol.to_string())),
        };
        Ok(rank)
    }
}

impl TryFrom<String> for Rank {
    type Error = TrainerError;

    fn try_from(symbol: String) -> Result<Self> {
        symbol.parse()
    }
}

impl From<Rank> for String {
    fn from(rank: Rank) -> Self {
        rank.symbol().to_string()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Which hand an observed card joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    Player,
    Dealer,
}

impl FromStr for Seat {
    type Err = TrainerError;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "player" => Ok(Seat::Player),
            "dealer" => Ok(Seat::Dealer),
            _ => Err(TrainerError::InvalidSeat(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blackjack_values() {
        assert_eq!(Rank::Ace.blackjack_value(), 11);
        assert_eq!(Rank::King.blackjack_value(), 10);
        assert_eq!(Rank::Ten.blackjack_value(), 10);
        assert_eq!(Rank::Seven.blackjack_value(), 7);
    }

    #[test]
    fn test_blackjack_value_rejects_unknown_symbol() {
        assert_eq!(blackjack_value("Q"), Ok(10));
        assert_eq!(
            blackjack_value("11"),
            Err(TrainerError::InvalidRank("11".to_string()))
        );
        assert!(blackjack_value("").is_err());
        assert!(blackjack_value("1").is_err());
    }

    #[test]
    fn test_hi_lo_tags_sum_to_zero_over_a_deck() {
        let sum: i32 = Rank::ALL.iter().map(|r| r.hi_lo_tag()).sum();
        assert_eq!(sum, 0);
        assert_eq!(Rank::Six.hi_lo_tag(), 1);
        assert_eq!(Rank::Nine.hi_lo_tag(), 0);
        assert_eq!(Rank::Ace.hi_lo_tag(), -1);
    }

    #[test]
    fn test_symbols_parse_back() {
        for rank in Rank::ALL {
            assert_eq!(rank.to_string().parse::<Rank>(), Ok(rank));
        }
        assert_eq!(" k ".parse::<Rank>(), Ok(Rank::King));
    }

    #[test]
    fn test_serde_uses_symbols() {
        let json = serde_json::to_string(&vec![Rank::Ten, Rank::Ace]).unwrap();
        assert_eq!(json, r#"["10","A"]"#);
        assert!(serde_json::from_str::<Rank>(r#""Z""#).is_err());
    }

    #[test]
    fn test_seat_parsing() {
        assert_eq!("Dealer".parse::<Seat>(), Ok(Seat::Dealer));
        assert!(matches!(
            "table".parse::<Seat>(),
            Err(TrainerError::InvalidSeat(_))
        ));
    }
}
