use js_sys::Array;
use wasm_bindgen::prelude::*;

mod bet;
mod card;
mod config;
mod counter;
mod error;
mod hand;
mod logging;
mod round;
mod session;
mod strategy;

pub use bet::{bankroll_proportional_bet, fixed_table_bet, BankrollStatus, BetPolicy};
pub use card::{blackjack_value, Rank, Seat};
pub use config::SessionConfig;
pub use counter::{CardCounter, CountSystem, DEFAULT_ASSUMED_DECKS};
pub use error::{Result, TrainerError};
pub use hand::{hand_value, is_bust, is_natural, is_soft, total};
pub use round::{resolve, HistoryRecord, Outcome, Resolution};
pub use session::{Command, Event, Session, SessionSnapshot, INSUFFICIENT_INPUT};
pub use strategy::{recommend, Action, Advice, Rationale};

fn parse_config(params: &JsValue) -> std::result::Result<SessionConfig, JsValue> {
    if params.is_undefined() || params.is_null() {
        return Ok(SessionConfig::default());
    }
    let config: SessionConfig = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;
    config
        .validate()
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(config)
}

fn parse_ranks(ranks: &Array) -> std::result::Result<Vec<Rank>, JsValue> {
    ranks
        .iter()
        .map(|value| {
            let symbol = value
                .as_string()
                .ok_or_else(|| JsValue::from_str("Invalid input: rank must be a string"))?;
            symbol
                .parse::<Rank>()
                .map_err(|err| JsValue::from_str(&err.to_string()))
        })
        .collect()
}

fn to_js<T: serde::Serialize>(value: &T) -> std::result::Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

/// One trainer session owned by the page. Not shared across workers.
#[wasm_bindgen]
pub struct TrainerSession {
    inner: Session,
}

#[wasm_bindgen]
impl TrainerSession {
    #[wasm_bindgen(constructor)]
    pub fn new(params: &JsValue) -> std::result::Result<TrainerSession, JsValue> {
        let config = parse_config(params)?;
        let level = config
            .level_filter()
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        logging::init(level);
        Ok(TrainerSession {
            inner: Session::new(&config),
        })
    }

    #[wasm_bindgen(js_name = observeCard)]
    pub fn observe_card(
        &mut self,
        rank: &str,
        seat: &str,
    ) -> std::result::Result<JsValue, JsValue> {
        let event = self.inner.observe_symbol(rank, seat).map_err(|err| {
            log::warn!("Card rejected: {err}");
            JsValue::from_str(&err.to_string())
        })?;
        to_js(&event)
    }

    #[wasm_bindgen(js_name = resetHand)]
    pub fn reset_hand(&mut self) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.inner.reset_hand())
    }

    #[wasm_bindgen(js_name = resolveRound)]
    pub fn resolve_round(&mut self) -> std::result::Result<JsValue, JsValue> {
        let event = self
            .inner
            .dispatch(Command::ResolveRound)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        to_js(&event)
    }

    #[wasm_bindgen(js_name = setBankroll)]
    pub fn set_bankroll(&mut self, amount: i64) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.inner.set_bankroll(amount))
    }

    /// Accepts `{ type: "observeCard", rank, seat }`, `{ type: "resetHand" }`,
    /// `{ type: "resolveRound" }` or `{ type: "setBankroll", amount }`.
    pub fn dispatch(&mut self, command: &JsValue) -> std::result::Result<JsValue, JsValue> {
        let command: Command = serde_wasm_bindgen::from_value(command.clone())
            .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;
        let event = self
            .inner
            .dispatch(command)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        to_js(&event)
    }

    pub fn snapshot(&self) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.inner.snapshot())
    }

    #[wasm_bindgen(js_name = runningCount)]
    pub fn running_count(&self) -> i32 {
        self.inner.running_count()
    }

    #[wasm_bindgen(js_name = suggestedBet)]
    pub fn suggested_bet(&self) -> i64 {
        self.inner.suggested_bet()
    }

    pub fn advice(&self) -> String {
        self.inner.advice_text()
    }
}

#[wasm_bindgen(js_name = handTotal)]
pub fn hand_total(ranks: &Array) -> std::result::Result<u8, JsValue> {
    console_error_panic_hook::set_once();
    Ok(total(&parse_ranks(ranks)?))
}

#[wasm_bindgen(js_name = recommend)]
pub fn recommend_action(
    player: &Array,
    upcard: &str,
    can_double: bool,
    can_split: bool,
) -> std::result::Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let player = parse_ranks(player)?;
    let upcard = upcard
        .parse::<Rank>()
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    let advice = recommend(&player, upcard, can_double, can_split)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    to_js(&advice)
}
