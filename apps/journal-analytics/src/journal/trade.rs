//! Trade record as read from the journal store.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::emotion::EmotionTags;

/// Market an instrument trades in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Market {
    /// Equities.
    Stock,
    /// Cryptocurrencies.
    Crypto,
    /// Foreign exchange.
    Forex,
    /// Futures contracts.
    Futures,
}

impl FromStr for Market {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STOCK" => Ok(Self::Stock),
            "CRYPTO" => Ok(Self::Crypto),
            "FOREX" => Ok(Self::Forex),
            "FUTURES" => Ok(Self::Futures),
            other => Err(format!("unknown market '{other}'")),
        }
    }
}

impl TryFrom<String> for Market {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Stock => "STOCK",
            Self::Crypto => "CRYPTO",
            Self::Forex => "FOREX",
            Self::Futures => "FUTURES",
        };
        f.write_str(name)
    }
}

/// Direction of the opening order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Side {
    /// Long entry.
    Buy,
    /// Short entry.
    Sell,
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            other => Err(format!("unknown side '{other}'")),
        }
    }
}

impl TryFrom<String> for Side {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Win/loss classification of a closed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Positive P&L.
    Win,
    /// Negative P&L.
    Loss,
    /// Exactly zero P&L.
    Neutral,
}

impl Outcome {
    /// Classify a P&L value.
    #[must_use]
    pub fn from_pnl(pnl: Decimal) -> Self {
        if pnl > Decimal::ZERO {
            Self::Win
        } else if pnl < Decimal::ZERO {
            Self::Loss
        } else {
            Self::Neutral
        }
    }
}

/// One journal entry.
///
/// Field names follow the store's snake_case columns; camelCase aliases
/// written by older clients are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Store-owned unique identifier.
    pub id: String,
    /// Owning user, when the snapshot spans several users.
    #[serde(default, alias = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Instrument ticker.
    pub symbol: String,
    /// Market of the instrument.
    pub market: Market,
    /// Entry direction.
    pub side: Side,
    /// Position size (positive).
    pub quantity: Decimal,
    /// Entry price.
    #[serde(default, alias = "entryPrice")]
    pub entry_price: Option<Decimal>,
    /// Exit price (None while open).
    #[serde(default, alias = "exitPrice")]
    pub exit_price: Option<Decimal>,
    /// Realized P&L (None while open).
    #[serde(default)]
    pub pnl: Option<Decimal>,
    /// Calendar date of the trade.
    #[serde(alias = "tradeDate")]
    pub trade_date: NaiveDate,
    /// Weak reference to a strategy owned elsewhere.
    #[serde(default, alias = "strategyId", skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<String>,
    /// Normalized emotion tags.
    #[serde(default, alias = "emotionalState")]
    pub emotional_state: EmotionTags,
}

impl Trade {
    /// Create an open stock trade with unit quantity and no tags.
    #[must_use]
    pub fn new(id: impl Into<String>, symbol: impl Into<String>, trade_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            user_id: None,
            symbol: symbol.into(),
            market: Market::Stock,
            side: Side::Buy,
            quantity: Decimal::ONE,
            entry_price: None,
            exit_price: None,
            pnl: None,
            trade_date,
            strategy_id: None,
            emotional_state: EmotionTags::new(),
        }
    }

    /// Set the realized P&L.
    #[must_use]
    pub fn with_pnl(mut self, pnl: Decimal) -> Self {
        self.pnl = Some(pnl);
        self
    }

    /// Set the owning user.
    #[must_use]
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Replace the emotion tags.
    #[must_use]
    pub fn with_emotions<S: AsRef<str>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.emotional_state = tags.into_iter().collect();
        self
    }

    /// Win/loss classification, or None for an open trade.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.pnl.map(Outcome::from_pnl)
    }
}
