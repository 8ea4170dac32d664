//! Trading journal data model.
//!
//! Trades are owned by an external store; this module defines the canonical
//! in-process shape, normalizes loosely typed fields at the boundary, and
//! selects/orders snapshots for analysis.

mod emotion;
mod query;
mod source;
mod trade;

pub use emotion::{EmotionClass, EmotionTags, NEGATIVE_EMOTIONS, POSITIVE_EMOTIONS};
pub use query::{TradeQuery, eligible, prepare_trades};
pub use source::{InMemoryTradeSource, JsonFileTradeSource, TradeSource, parse_trades_json};
pub use trade::{Market, Outcome, Side, Trade};
