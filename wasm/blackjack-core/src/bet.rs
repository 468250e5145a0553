use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BetPolicy {
    /// Flat unit amounts by true count.
    #[default]
    FixedTable,
    /// Multiples of one percent of the bankroll.
    BankrollProportional,
}

/// Bankroll as the bet sizer sees it. A zero or negative bankroll is kept
/// apart from one that was never entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "amount", rename_all = "camelCase")]
pub enum BankrollStatus {
    Unset,
    Depleted(i64),
    Funded(i64),
}

impl BankrollStatus {
    pub fn from_amount(amount: Option<i64>) -> Self {
        match amount {
            None => BankrollStatus::Unset,
            Some(value) if value <= 0 => BankrollStatus::Depleted(value),
            Some(value) => BankrollStatus::Funded(value),
        }
    }
}

/// Multiplier step for a true count: 10 / 5 / 2 / 1.
fn count_step(true_count: f64) -> i64 {
    if true_count >= 5.0 {
        10
    } else if true_count >= 3.0 {
        5
    } else if true_count >= 1.0 {
        2
    } else {
        1
    }
}

pub fn fixed_table_bet(true_count: f64) -> i64 {
    match count_step(true_count) {
        10 => 100,
        5 => 50,
        2 => 20,
        _ => 10,
    }
}

pub fn bankroll_proportional_bet(true_count: f64, bankroll: BankrollStatus) -> i64 {
    match bankroll {
        BankrollStatus::Funded(amount) => {
            let scaled = i128::from(count_step(true_count)) * i128::from(amount) / 100;
            i64::try_from(scaled).unwrap_or(i64::MAX)
        }
        BankrollStatus::Unset | BankrollStatus::Depleted(_) => 0,
    }
}

impl BetPolicy {
    pub fn suggest(self, true_count: f64, bankroll: BankrollStatus) -> i64 {
        match self {
            BetPolicy::FixedTable => fixed_table_bet(true_count),
            BetPolicy::BankrollProportional => bankroll_proportional_bet(true_count, bankroll),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_table_thresholds() {
        assert_eq!(fixed_table_bet(-2.0), 10);
        assert_eq!(fixed_table_bet(0.99), 10);
        assert_eq!(fixed_table_bet(1.0), 20);
        assert_eq!(fixed_table_bet(3.0), 50);
        assert_eq!(fixed_table_bet(4.99), 50);
        assert_eq!(fixed_table_bet(5.0), 100);
        assert_eq!(fixed_table_bet(12.0), 100);
    }

    #[test]
    fn test_fixed_table_ignores_bankroll() {
        let policy = BetPolicy::FixedTable;
        assert_eq!(policy.suggest(3.5, BankrollStatus::Unset), 50);
        assert_eq!(policy.suggest(3.5, BankrollStatus::Funded(1)), 50);
    }

    #[test]
    fn test_bankroll_proportional_scales() {
        let bankroll = BankrollStatus::Funded(1000);
        assert_eq!(bankroll_proportional_bet(0.0, bankroll), 10);
        assert_eq!(bankroll_proportional_bet(1.5, bankroll), 20);
        assert_eq!(bankroll_proportional_bet(3.0, bankroll), 50);
        assert_eq!(bankroll_proportional_bet(6.0, bankroll), 100);
    }

    #[test]
    fn test_bankroll_proportional_floors() {
        let bankroll = BankrollStatus::Funded(1550);
        assert_eq!(bankroll_proportional_bet(0.0, bankroll), 15);
        assert_eq!(bankroll_proportional_bet(1.0, bankroll), 31);
        assert_eq!(bankroll_proportional_bet(3.0, bankroll), 77);
        assert_eq!(bankroll_proportional_bet(5.0, bankroll), 155);
    }

    #[test]
    fn test_bankroll_proportional_handles_huge_bankroll() {
        let bankroll = BankrollStatus::Funded(i64::MAX);
        assert_eq!(bankroll_proportional_bet(5.0, bankroll), i64::MAX / 10);
        assert_eq!(bankroll_proportional_bet(0.0, bankroll), i64::MAX / 100);
    }

    #[test]
    fn test_unset_and_depleted_bankrolls_bet_nothing() {
        assert_eq!(bankroll_proportional_bet(5.0, BankrollStatus::Unset), 0);
        assert_eq!(bankroll_proportional_bet(5.0, BankrollStatus::from_amount(Some(0))), 0);
        assert_eq!(bankroll_proportional_bet(5.0, BankrollStatus::from_amount(Some(-40))), 0);
    }

    #[test]
    fn test_bankroll_status_keeps_zero_apart_from_unset() {
        assert_eq!(BankrollStatus::from_amount(None), BankrollStatus::Unset);
        assert_eq!(BankrollStatus::from_amount(Some(0)), BankrollStatus::Depleted(0));
        assert_eq!(BankrollStatus::from_amount(Some(250)), BankrollStatus::Funded(250));
    }
}
