//! Emotional discipline scoring.
//!
//! Trades are classified by their emotion tags against fixed positive and
//! negative vocabularies. Four percentages are derived from those counts and
//! the pair (positive %, negative impact %) is mapped onto a 0-10 score:
//!
//! | Band | Positive % | Negative impact % | Score |
//! |------|-----------|-------------------|-------|
//! | Excellent | > 90 | < 10 | 10.0 |
//! | Good | 70..=90 | 10..=20 | 8.0 + (p - 70) / 20 * 1.9 |
//! | Fair | 50..=70 | 20..=30 | 6.0 + (p - 50) / 20 * 1.9 |
//! | Developing | 30..=50 | 30..=50 | 4.0 + (p - 30) / 20 * 1.9 |
//! | Needs work | otherwise | otherwise | 2.0 + p / 10 * 1.9 |
//!
//! Bands are checked in order and the first match wins. A positive-emotion
//! win correlation above 70% adds a 1.0 bonus, and the result is clamped to
//! [0, 10].
//!
//! Tags in neither vocabulary count toward logging completeness and the tag
//! totals but toward neither the positive nor the negative percentage.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::journal::{EmotionClass, Outcome, Trade, eligible};

use super::constants::{
    BAND_SPAN, BAND_WIDTH, BONUS_THRESHOLD, FIFTY, NINETY, SEVENTY, TEN, THIRTY, TWENTY,
};
use super::math::percentage;

/// Emotion-derived percentages and the counts behind them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionMetrics {
    /// Trades with a positive tag / trades with any tag.
    pub positive_emotion_percentage: Decimal,
    /// Losing trades with a negative tag / trades with a negative tag.
    pub negative_impact_percentage: Decimal,
    /// Winning trades with a positive tag / trades with a positive tag.
    pub positive_emotion_win_correlation: Decimal,
    /// Trades with any tag / all closed trades.
    pub emotion_logging_completeness: Decimal,
    /// Closed trades considered.
    pub total_trades: u64,
    /// Closed trades carrying at least one tag.
    pub trades_with_emotions: u64,
    /// Trades carrying at least one positive tag.
    pub positive_trades: u64,
    /// Trades carrying at least one negative tag.
    pub negative_trades: u64,
    /// Positive-tagged trades that won.
    pub positive_winning_trades: u64,
    /// Negative-tagged trades that lost.
    pub negative_losing_trades: u64,
    /// Tag occurrences across all trades.
    pub total_emotions: u64,
    /// Positive tag occurrences.
    pub positive_emotions: u64,
    /// Negative tag occurrences.
    pub negative_emotions: u64,
    /// Occurrences of tags in neither vocabulary.
    pub other_emotions: u64,
    /// Occurrences per tag.
    pub emotion_frequency: BTreeMap<String, u64>,
}

/// Score band selected by the (positive %, negative impact %) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// Positive > 90 and negative < 10.
    Excellent,
    /// Positive 70-90 and negative 10-20.
    Good,
    /// Positive 50-70 and negative 20-30.
    Fair,
    /// Positive 30-50 and negative 30-50.
    Developing,
    /// Anything else.
    NeedsWork,
}

impl ScoreBand {
    /// Select the band for a percentage pair.
    #[must_use]
    pub fn classify(positive: Decimal, negative: Decimal) -> Self {
        if positive > NINETY && negative < TEN {
            Self::Excellent
        } else if within(positive, SEVENTY..=NINETY) && within(negative, TEN..=TWENTY) {
            Self::Good
        } else if within(positive, FIFTY..=SEVENTY) && within(negative, TWENTY..=THIRTY) {
            Self::Fair
        } else if within(positive, THIRTY..=FIFTY) && within(negative, THIRTY..=FIFTY) {
            Self::Developing
        } else {
            Self::NeedsWork
        }
    }

    /// Score before the correlation bonus and clamping.
    #[must_use]
    pub fn base_score(self, positive: Decimal) -> Decimal {
        match self {
            Self::Excellent => TEN,
            Self::Good => dec!(8.0) + (positive - SEVENTY) / BAND_WIDTH * BAND_SPAN,
            Self::Fair => dec!(6.0) + (positive - FIFTY) / BAND_WIDTH * BAND_SPAN,
            Self::Developing => dec!(4.0) + (positive - THIRTY) / BAND_WIDTH * BAND_SPAN,
            Self::NeedsWork => dec!(2.0) + positive / TEN * BAND_SPAN,
        }
    }
}

fn within(value: Decimal, range: RangeInclusive<Decimal>) -> bool {
    range.contains(&value)
}

/// Band and pre-bonus score for a percentage pair.
#[must_use]
pub fn band_score(positive: Decimal, negative: Decimal) -> (ScoreBand, Decimal) {
    let band = ScoreBand::classify(positive, negative);
    (band, band.base_score(positive))
}

/// Emotional discipline metrics and score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineReport {
    /// Underlying percentages and counts.
    pub metrics: EmotionMetrics,
    /// Band that produced the base score.
    pub band: ScoreBand,
    /// Score before the bonus and clamping.
    pub base_score: Decimal,
    /// Whether the win-correlation bonus applied.
    pub correlation_bonus: bool,
    /// Final score in [0, 10].
    pub score: Decimal,
}

impl Default for DisciplineReport {
    fn default() -> Self {
        score_metrics(EmotionMetrics::default())
    }
}

/// Derive emotion metrics from closed trades.
#[must_use]
pub fn emotion_metrics(trades: &[Trade]) -> EmotionMetrics {
    let mut metrics = EmotionMetrics::default();

    for (trade, pnl) in eligible(trades) {
        metrics.total_trades += 1;

        let tags = &trade.emotional_state;
        if tags.is_empty() {
            continue;
        }
        metrics.trades_with_emotions += 1;

        for tag in tags.iter() {
            metrics.total_emotions += 1;
            *metrics.emotion_frequency.entry(tag.to_string()).or_default() += 1;
            match EmotionClass::classify(tag) {
                EmotionClass::Positive => metrics.positive_emotions += 1,
                EmotionClass::Negative => metrics.negative_emotions += 1,
                EmotionClass::Other => metrics.other_emotions += 1,
            }
        }

        let outcome = Outcome::from_pnl(pnl);
        if tags.has_class(EmotionClass::Positive) {
            metrics.positive_trades += 1;
            if outcome == Outcome::Win {
                metrics.positive_winning_trades += 1;
            }
        }
        if tags.has_class(EmotionClass::Negative) {
            metrics.negative_trades += 1;
            if outcome == Outcome::Loss {
                metrics.negative_losing_trades += 1;
            }
        }
    }

    metrics.positive_emotion_percentage =
        percentage(metrics.positive_trades, metrics.trades_with_emotions);
    metrics.negative_impact_percentage =
        percentage(metrics.negative_losing_trades, metrics.negative_trades);
    metrics.positive_emotion_win_correlation =
        percentage(metrics.positive_winning_trades, metrics.positive_trades);
    metrics.emotion_logging_completeness =
        percentage(metrics.trades_with_emotions, metrics.total_trades);

    metrics
}

/// Score a set of precomputed metrics.
#[must_use]
pub fn score_metrics(metrics: EmotionMetrics) -> DisciplineReport {
    let (band, base_score) = band_score(
        metrics.positive_emotion_percentage,
        metrics.negative_impact_percentage,
    );
    let correlation_bonus = metrics.positive_emotion_win_correlation > BONUS_THRESHOLD;

    let mut score = base_score;
    if correlation_bonus {
        score += Decimal::ONE;
    }

    DisciplineReport {
        metrics,
        band,
        base_score,
        correlation_bonus,
        score: score.clamp(Decimal::ZERO, TEN),
    }
}

/// Compute emotion metrics and the discipline score.
///
/// Trades without any emotion data yield all-zero percentages and a score of
/// exactly 2.0.
#[must_use]
pub fn score_emotional_discipline(trades: &[Trade]) -> DisciplineReport {
    score_metrics(emotion_metrics(trades))
}
