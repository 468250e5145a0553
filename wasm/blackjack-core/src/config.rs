use log::LevelFilter;
use serde::Deserialize;

use crate::{
    bet::BetPolicy,
    counter::{CountSystem, DEFAULT_ASSUMED_DECKS},
    error::{Result, TrainerError},
};

fn default_assumed_decks() -> f64 {
    DEFAULT_ASSUMED_DECKS
}

fn default_starting_bankroll() -> Option<i64> {
    Some(1000)
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    #[serde(default)]
    pub bet_policy: BetPolicy,
    #[serde(default)]
    pub count_system: CountSystem,
    #[serde(default = "default_assumed_decks")]
    pub assumed_decks: f64,
    /// `null` leaves the bankroll unset until the player enters one.
    #[serde(default = "default_starting_bankroll")]
    pub starting_bankroll: Option<i64>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            bet_policy: BetPolicy::default(),
            count_system: CountSystem::default(),
            assumed_decks: default_assumed_decks(),
            starting_bankroll: default_starting_bankroll(),
            log_level: default_log_level(),
        }
    }
}

impl SessionConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: SessionConfig = serde_json::from_str(text)
            .map_err(|err| TrainerError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.assumed_decks.is_finite() || self.assumed_decks <= 0.0 {
            return Err(TrainerError::InvalidConfig(format!(
                "assumedDecks must be positive, got {}",
                self.assumed_decks
            )));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level.parse::<LevelFilter>().map_err(|_| {
            TrainerError::InvalidConfig(format!("unknown logLevel {:?}", self.log_level))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = SessionConfig::from_json("{}").unwrap();
        assert_eq!(config.bet_policy, BetPolicy::FixedTable);
        assert_eq!(config.count_system, CountSystem::HiLo);
        assert_eq!(config.assumed_decks, 6.0);
        assert_eq!(config.starting_bankroll, Some(1000));
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = SessionConfig::from_json(
            r#"{
                "betPolicy": "bankrollProportional",
                "countSystem": "Hi-Opt I",
                "assumedDecks": 2,
                "startingBankroll": null,
                "logLevel": "debug"
            }"#,
        )
        .unwrap();
        assert_eq!(config.bet_policy, BetPolicy::BankrollProportional);
        assert_eq!(config.count_system, CountSystem::HiOptI);
        assert_eq!(config.assumed_decks, 2.0);
        assert_eq!(config.starting_bankroll, None);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            SessionConfig::from_json(r#"{"assumedDecks":0}"#),
            Err(TrainerError::InvalidConfig(_))
        ));
        assert!(SessionConfig::from_json(r#"{"logLevel":"loud"}"#).is_err());
        assert!(SessionConfig::from_json(r#"{"betPolicy":"martingale"}"#).is_err());
    }
}
