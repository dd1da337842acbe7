use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::keys::{RawScores, ScoreKey};
use crate::locale::{Locale, LocaleCatalog, LocaleTable};

/// The four paired value dimensions, each scored as left pole versus right pole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ValueDimension {
    #[serde(rename = "Stability/Change")]
    StabilityChange,
    #[serde(rename = "Relationship/Individual")]
    RelationshipIndividual,
    #[serde(rename = "Achievement/Balance")]
    AchievementBalance,
    #[serde(rename = "Reality/Meaning")]
    RealityMeaning,
}

impl ValueDimension {
    pub const ALL: [ValueDimension; 4] = [
        ValueDimension::StabilityChange,
        ValueDimension::RelationshipIndividual,
        ValueDimension::AchievementBalance,
        ValueDimension::RealityMeaning,
    ];

    pub const fn poles(self) -> (ValuePole, ValuePole) {
        match self {
            ValueDimension::StabilityChange => (ValuePole::Stability, ValuePole::Change),
            ValueDimension::RelationshipIndividual => {
                (ValuePole::Relationship, ValuePole::Individual)
            }
            ValueDimension::AchievementBalance => (ValuePole::Achievement, ValuePole::Balance),
            ValueDimension::RealityMeaning => (ValuePole::Reality, ValuePole::Meaning),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ValueDimension::StabilityChange => "Stability/Change",
            ValueDimension::RelationshipIndividual => "Relationship/Individual",
            ValueDimension::AchievementBalance => "Achievement/Balance",
            ValueDimension::RealityMeaning => "Reality/Meaning",
        }
    }
}

/// A named side of a value dimension, plus the tie state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ValuePole {
    Stability,
    Change,
    Relationship,
    Individual,
    Achievement,
    Balance,
    Reality,
    Meaning,
    Balanced,
}

impl ValuePole {
    /// Score key backing this pole; `Balanced` has none.
    pub const fn score_key(self) -> Option<ScoreKey> {
        match self {
            ValuePole::Stability => Some(ScoreKey::Stability),
            ValuePole::Change => Some(ScoreKey::Change),
            ValuePole::Relationship => Some(ScoreKey::Relationship),
            ValuePole::Individual => Some(ScoreKey::Individual),
            ValuePole::Achievement => Some(ScoreKey::Achievement),
            ValuePole::Balance => Some(ScoreKey::Balance),
            ValuePole::Reality => Some(ScoreKey::Reality),
            ValuePole::Meaning => Some(ScoreKey::Meaning),
            ValuePole::Balanced => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self.score_key() {
            Some(key) => key.as_str(),
            None => "Balanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoleScores {
    pub left: i32,
    pub right: i32,
}

impl PoleScores {
    /// Share of the left pole for bar rendering, from the non-negative part of
    /// each pole. 50 only when both poles score the same.
    pub fn left_percent(&self) -> u8 {
        if self.left == self.right {
            return 50;
        }
        let left_wins = self.left > self.right;
        let left = i64::from(self.left.max(0));
        let total = left + i64::from(self.right.max(0));
        if total == 0 {
            return if left_wins { 100 } else { 0 };
        }
        let share = (left as f64 / total as f64 * 100.0).round();
        let share = if left_wins {
            share.clamp(51.0, 100.0)
        } else {
            share.clamp(0.0, 49.0)
        };
        share as u8
    }

    pub fn right_percent(&self) -> u8 {
        100 - self.left_percent()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueEntry {
    pub dominant_pole: ValuePole,
    pub label: String,
    pub description: String,
    pub raw_scores: PoleScores,
    pub left_percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValueResult {
    entries: BTreeMap<ValueDimension, ValueEntry>,
}

impl ValueResult {
    pub fn get(&self, dimension: ValueDimension) -> Option<&ValueEntry> {
        self.entries.get(&dimension)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ValueDimension, &ValueEntry)> {
        self.entries.iter().map(|(dimension, entry)| (*dimension, entry))
    }

    /// Raw pole scores keyed by pole name, the shape persisted for later restore.
    pub fn raw_scores(&self) -> BTreeMap<ValuePole, i32> {
        let mut scores = BTreeMap::new();
        for (dimension, entry) in self.iter() {
            let (left, right) = dimension.poles();
            scores.insert(left, entry.raw_scores.left);
            scores.insert(right, entry.raw_scores.right);
        }
        scores
    }
}

pub fn resolve_values(raw: &RawScores, locale: Locale) -> ValueResult {
    resolve_values_with(raw, LocaleCatalog::builtin().table(locale))
}

pub fn resolve_values_with(raw: &RawScores, table: &LocaleTable) -> ValueResult {
    let entries = ValueDimension::ALL
        .iter()
        .map(|dimension| {
            let (left_pole, right_pole) = dimension.poles();
            let scores = PoleScores {
                left: pole_score(raw, left_pole),
                right: pole_score(raw, right_pole),
            };
            let dominant_pole = if scores.left > scores.right {
                left_pole
            } else if scores.right > scores.left {
                right_pole
            } else {
                ValuePole::Balanced
            };
            let text = table
                .lookup(&["values", dimension.as_str(), dominant_pole.as_str()])
                .unwrap_or_default();
            (
                *dimension,
                ValueEntry {
                    dominant_pole,
                    label: text.label,
                    description: text.description,
                    raw_scores: scores,
                    left_percent: scores.left_percent(),
                },
            )
        })
        .collect();

    ValueResult { entries }
}

fn pole_score(raw: &RawScores, pole: ValuePole) -> i32 {
    pole.score_key().map(|key| raw.get(key)).unwrap_or(0)
}
