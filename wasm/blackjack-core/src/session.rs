use serde::{Deserialize, Serialize};

use crate::{
    bet::{BankrollStatus, BetPolicy},
    card::{Rank, Seat},
    config::SessionConfig,
    counter::CardCounter,
    error::{Result, TrainerError},
    hand::{hand_value, total},
    round::{self, HistoryRecord, Outcome},
    strategy::{recommend, Advice},
};

pub const INSUFFICIENT_INPUT: &str = "Input both hands";

/// Inputs the presentation layer feeds into a session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    ObserveCard { rank: Rank, seat: Seat },
    ResetHand,
    ResolveRound,
    SetBankroll { amount: i64 },
}

/// What a successfully applied command did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Event {
    CardObserved { rank: Rank, seat: Seat, running_count: i32 },
    HandReset { next_bet: i64 },
    RoundResolved { outcome: Outcome, delta: i64 },
    BankrollSet { amount: i64 },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub running_count: i32,
    pub true_count: f64,
    pub count_bucket: i32,
    pub cards_seen: u32,
    pub suggested_bet: i64,
    pub current_bet: i64,
    pub bankroll: BankrollStatus,
    pub advice: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_code: Option<&'static str>,
    pub player: Vec<Rank>,
    pub dealer: Vec<Rank>,
    pub player_total: u8,
    pub player_soft: bool,
    pub dealer_total: u8,
    pub history: Vec<HistoryRecord>,
}

/// All mutable trainer state for one sitting at the table.
pub struct Session {
    bet_policy: BetPolicy,
    counter: CardCounter,
    player: Vec<Rank>,
    dealer: Vec<Rank>,
    bankroll: Option<i64>,
    current_bet: i64,
    history: Vec<HistoryRecord>,
}

impl Session {
    pub fn new(config: &SessionConfig) -> Self {
        let mut session = Session {
            bet_policy: config.bet_policy,
            counter: CardCounter::new(config.count_system, config.assumed_decks),
            player: Vec::new(),
            dealer: Vec::new(),
            bankroll: config.starting_bankroll,
            current_bet: 0,
            history: Vec::new(),
        };
        session.current_bet = session.suggested_bet();
        log::info!(
            "Session started: {:?} count over {} decks, {:?} bets",
            session.counter.system(),
            config.assumed_decks,
            session.bet_policy
        );
        session
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Event> {
        let result = match command {
            Command::ObserveCard { rank, seat } => Ok(self.observe_card(rank, seat)),
            Command::ResetHand => Ok(self.reset_hand()),
            Command::ResolveRound => self.resolve_round(),
            Command::SetBankroll { amount } => Ok(self.set_bankroll(amount)),
        };
        if let Err(err) = &result {
            log::warn!("Command rejected: {err}");
        }
        result
    }

    /// Applies commands in order, stopping at the first rejection.
    pub fn dispatch_all<I>(&mut self, commands: I) -> Result<Vec<Event>>
    where
        I: IntoIterator<Item = Command>,
    {
        commands
            .into_iter()
            .map(|command| self.dispatch(command))
            .collect()
    }

    pub fn observe_card(&mut self, rank: Rank, seat: Seat) -> Event {
        self.counter.observe(rank);
        match seat {
            Seat::Player => self.player.push(rank),
            Seat::Dealer => self.dealer.push(rank),
        }
        log::debug!(
            "{rank} to {seat:?}, running count {}",
            self.counter.running_count()
        );
        Event::CardObserved {
            rank,
            seat,
            running_count: self.counter.running_count(),
        }
    }

    /// Parses raw UI symbols first so a bad event leaves the session as is.
    pub fn observe_symbol(&mut self, rank: &str, seat: &str) -> Result<Event> {
        let rank = rank.parse::<Rank>()?;
        let seat = seat.parse::<Seat>()?;
        Ok(self.observe_card(rank, seat))
    }

    /// Clears both hands and locks in the suggested bet for the next round.
    /// The running count carries over.
    pub fn reset_hand(&mut self) -> Event {
        self.player.clear();
        self.dealer.clear();
        self.current_bet = self.suggested_bet();
        log::debug!("Hands cleared, next bet {}", self.current_bet);
        Event::HandReset {
            next_bet: self.current_bet,
        }
    }

    pub fn resolve_round(&mut self) -> Result<Event> {
        let round_number = self.history.len() as u32 + 1;
        let resolution = round::resolve(
            round_number,
            &self.player,
            &self.dealer,
            self.current_bet,
            self.counter.running_count(),
        )?;

        if let Some(bankroll) = self.bankroll.as_mut() {
            *bankroll = bankroll.saturating_add(resolution.delta);
        }
        log::info!(
            "Round {round_number}: {} ({} vs {}), bet {}, delta {}",
            resolution.outcome,
            resolution.record.player_total,
            resolution.record.dealer_total,
            self.current_bet,
            resolution.delta
        );
        self.history.push(resolution.record);

        Ok(Event::RoundResolved {
            outcome: resolution.outcome,
            delta: resolution.delta,
        })
    }

    pub fn set_bankroll(&mut self, amount: i64) -> Event {
        self.bankroll = Some(amount);
        if amount <= 0 {
            log::warn!("Bankroll set to {amount}; proportional bets will be 0");
        }
        Event::BankrollSet { amount }
    }

    pub fn running_count(&self) -> i32 {
        self.counter.running_count()
    }

    pub fn true_count(&self) -> f64 {
        self.counter.true_count()
    }

    pub fn bankroll(&self) -> BankrollStatus {
        BankrollStatus::from_amount(self.bankroll)
    }

    pub fn suggested_bet(&self) -> i64 {
        self.bet_policy.suggest(self.counter.true_count(), self.bankroll())
    }

    pub fn current_bet(&self) -> i64 {
        self.current_bet
    }

    pub fn player(&self) -> &[Rank] {
        &self.player
    }

    pub fn dealer(&self) -> &[Rank] {
        &self.dealer
    }

    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    /// Advice against the dealer's first card, or a precondition error
    /// while either hand is empty.
    pub fn advice(&self) -> Result<Advice> {
        let upcard = self.dealer.first().copied().ok_or(
            TrainerError::PreconditionViolation("dealer upcard not entered"),
        )?;
        recommend(&self.player, upcard, true, true)
    }

    pub fn advice_text(&self) -> String {
        match self.advice() {
            Ok(advice) => advice.to_string(),
            Err(_) => INSUFFICIENT_INPUT.to_string(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let advice = self.advice().ok();
        let (player_total, player_soft) = hand_value(&self.player);
        SessionSnapshot {
            running_count: self.counter.running_count(),
            true_count: self.counter.true_count(),
            count_bucket: self.counter.count_bucket(),
            cards_seen: self.counter.cards_seen(),
            suggested_bet: self.suggested_bet(),
            current_bet: self.current_bet,
            bankroll: self.bankroll(),
            advice: advice
                .map(|a| a.to_string())
                .unwrap_or_else(|| INSUFFICIENT_INPUT.to_string()),
            action_code: advice.map(|a| a.action.as_code()),
            player: self.player.clone(),
            dealer: self.dealer.clone(),
            player_total,
            player_soft,
            dealer_total: total(&self.dealer),
            history: self.history.clone(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(&SessionConfig::default())
    }
}
