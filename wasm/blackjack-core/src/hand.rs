use crate::card::Rank;

/// Best total plus whether an ace is still counted as 11. Totals past
/// `u8::MAX` are clamped after reduction; they are busts either way.
pub fn hand_value(hand: &[Rank]) -> (u8, bool) {
    let mut total: u32 = 0;
    let mut aces = 0;

    for &rank in hand {
        total += u32::from(rank.blackjack_value());
        if rank.is_ace() { aces += 1; }
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    (u8::try_from(total).unwrap_or(u8::MAX), aces > 0)
}

pub fn total(hand: &[Rank]) -> u8 {
    hand_value(hand).0
}

pub fn is_soft(hand: &[Rank]) -> bool {
    hand_value(hand).1
}

pub fn is_bust(hand: &[Rank]) -> bool {
    total(hand) > 21
}

pub fn is_natural(hand: &[Rank]) -> bool {
    hand.len() == 2 && total(hand) == 21
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    #[test]
    fn test_two_aces_and_nine() {
        assert_eq!(total(&[Ace, Ace, Nine]), 21);
    }

    #[test]
    fn test_hard_twenty_needs_no_reduction() {
        assert_eq!(hand_value(&[King, King]), (20, false));
    }

    #[test]
    fn test_soft_hand_turns_hard() {
        assert_eq!(hand_value(&[Ace, Six]), (17, true));
        assert_eq!(hand_value(&[Ace, King, Five]), (16, false));
    }

    #[test]
    fn test_single_ace_reduces_by_exactly_ten() {
        for extra in [Two, Five, Nine] {
            let hand = [Ace, Five, Six, extra];
            let unreduced: u32 = hand.iter().map(|r| r.blackjack_value() as u32).sum();
            assert!(unreduced > 21 && unreduced <= 31);
            assert_eq!(total(&hand) as u32, unreduced - 10);
            assert!(total(&hand) <= 21);
        }
    }

    #[test]
    fn test_multiple_aces_reduce_only_as_needed() {
        assert_eq!(hand_value(&[Ace, Ace]), (12, true));
        assert_eq!(hand_value(&[Ace, Ace, Ace]), (13, true));
        assert_eq!(hand_value(&[Ace, Ace, Ace, Eight]), (21, true));
        assert_eq!(hand_value(&[Ace, Ace, Ace, Nine]), (12, false));
    }

    #[test]
    fn test_bust_keeps_fully_reduced_total() {
        assert_eq!(total(&[King, Queen, Ace, Five]), 26);
        assert!(is_bust(&[King, Queen, Two]));
        assert!(!is_bust(&[King, Ace]));
    }

    #[test]
    fn test_long_ace_run_reduces_from_true_sum() {
        let hand = vec![Ace; 25];
        assert_eq!(hand_value(&hand), (25, false));
        assert!(is_bust(&hand));
        assert_eq!(total(&vec![Ace; 24]), 24);
    }

    #[test]
    fn test_huge_hand_stays_bust() {
        let hand = vec![King; 40];
        assert_eq!(total(&hand), u8::MAX);
        assert!(is_bust(&hand));
    }

    #[test]
    fn test_natural() {
        assert!(is_natural(&[Ace, Jack]));
        assert!(!is_natural(&[Seven, Seven, Seven]));
        assert!(!is_natural(&[King, Queen]));
    }

    #[test]
    fn test_empty_hand() {
        assert_eq!(hand_value(&[]), (0, false));
        assert!(!is_soft(&[]));
    }
}
