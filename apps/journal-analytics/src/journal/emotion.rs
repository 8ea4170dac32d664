//! Emotion tag normalization and classification.
//!
//! Journal clients have written emotion data in several shapes over time:
//!
//! - a flat array of tags (`["FOMO", "calm"]`)
//! - the same array JSON-encoded into a string (`"[\"FOMO\"]"`)
//! - a bare string (`"fomo"`)
//! - an object with primary/secondary slots (`{"primary_emotion": "FOMO"}`)
//!
//! [`EmotionTags::from_value`] reduces all of them to one canonical,
//! upper-cased, de-duplicated tag list before any calculator sees the data.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Tags that indicate a disciplined trading mindset.
pub const POSITIVE_EMOTIONS: [&str; 5] = ["PATIENCE", "DISCIPLINE", "CONFIDENT", "FOCUSED", "CALM"];

/// Tags that indicate an impulsive or reactive trading mindset.
pub const NEGATIVE_EMOTIONS: [&str; 7] = [
    "FOMO", "REVENGE", "TILT", "OVERRISK", "ANXIOUS", "GREED", "FEAR",
];

/// Object keys recognized for the slot-based emotion shape.
const SLOT_KEYS: [&str; 4] = [
    "primary_emotion",
    "primaryEmotion",
    "secondary_emotion",
    "secondaryEmotion",
];

/// Classification of a single emotion tag.
///
/// Tags outside both vocabularies are `Other`: they count toward logging
/// completeness and tag totals but toward neither percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmotionClass {
    /// Tag from the positive vocabulary.
    Positive,
    /// Tag from the negative vocabulary.
    Negative,
    /// Any other free-form tag.
    Other,
}

impl EmotionClass {
    /// Classify a tag (case-insensitive).
    #[must_use]
    pub fn classify(tag: &str) -> Self {
        let canonical = tag.trim().to_uppercase();
        if POSITIVE_EMOTIONS.contains(&canonical.as_str()) {
            Self::Positive
        } else if NEGATIVE_EMOTIONS.contains(&canonical.as_str()) {
            Self::Negative
        } else {
            Self::Other
        }
    }
}

/// Canonical set of emotion tags attached to one trade.
///
/// Tags are trimmed, upper-cased and de-duplicated; insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmotionTags(Vec<String>);

impl EmotionTags {
    /// Create an empty tag set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Normalize any accepted emotion shape into a tag set.
    ///
    /// Never fails: unrecognized shapes produce an empty set, and strings
    /// that do not decode to an array or object become a single tag.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let mut tags = Self::new();
        tags.absorb(value);
        tags
    }

    /// Insert a tag, returning `false` if it was empty or already present.
    pub fn insert(&mut self, tag: &str) -> bool {
        let canonical = tag.trim().to_uppercase();
        if canonical.is_empty() || self.0.contains(&canonical) {
            return false;
        }
        self.0.push(canonical);
        true
    }

    /// Number of distinct tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no tags are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the tag is present (case-insensitive).
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        let canonical = tag.trim().to_uppercase();
        self.0.contains(&canonical)
    }

    /// Iterate over the canonical tags.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns true if any tag falls into the given class.
    #[must_use]
    pub fn has_class(&self, class: EmotionClass) -> bool {
        self.iter().any(|tag| EmotionClass::classify(tag) == class)
    }

    /// Count the tags falling into the given class.
    #[must_use]
    pub fn count_class(&self, class: EmotionClass) -> usize {
        self.iter()
            .filter(|tag| EmotionClass::classify(tag) == class)
            .count()
    }

    fn absorb(&mut self, value: &Value) {
        match value {
            Value::Array(items) => {
                for item in items {
                    // Non-string entries carry no usable tag
                    if let Value::String(tag) = item {
                        self.insert(tag);
                    }
                }
            }
            Value::String(raw) => self.absorb_str(raw),
            Value::Object(map) => {
                for key in SLOT_KEYS {
                    if let Some(Value::String(tag)) = map.get(key) {
                        self.insert(tag);
                    }
                }
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }
    }

    fn absorb_str(&mut self, raw: &str) {
        match serde_json::from_str::<Value>(raw) {
            Ok(decoded @ (Value::Array(_) | Value::Object(_))) => self.absorb(&decoded),
            _ => {
                self.insert(raw);
            }
        }
    }
}

impl<'de> Deserialize<'de> for EmotionTags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

impl<S: AsRef<str>> FromIterator<S> for EmotionTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = Self::new();
        for tag in iter {
            tags.insert(tag.as_ref());
        }
        tags
    }
}
