use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::keys::{RawScores, ScoreKey};
use crate::locale::{Locale, LocaleCatalog, LocaleTable};

/// The seven temperament and character dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TciDimension {
    NS,
    HA,
    RD,
    PS,
    SD,
    CO,
    ST,
}

impl TciDimension {
    pub const ALL: [TciDimension; 7] = [
        TciDimension::NS,
        TciDimension::HA,
        TciDimension::RD,
        TciDimension::PS,
        TciDimension::SD,
        TciDimension::CO,
        TciDimension::ST,
    ];

    pub const fn score_key(self) -> ScoreKey {
        match self {
            TciDimension::NS => ScoreKey::NoveltySeeking,
            TciDimension::HA => ScoreKey::HarmAvoidance,
            TciDimension::RD => ScoreKey::RewardDependence,
            TciDimension::PS => ScoreKey::Persistence,
            TciDimension::SD => ScoreKey::SelfDirectedness,
            TciDimension::CO => ScoreKey::Cooperativeness,
            TciDimension::ST => ScoreKey::SelfTranscendence,
        }
    }

    pub const fn as_str(self) -> &'static str {
        self.score_key().as_str()
    }

    /// Level cut-offs calibrated for three questions per dimension. Stored results are
    /// re-leveled with these, so they must not drift.
    pub const fn thresholds(self) -> LevelThresholds {
        match self {
            TciDimension::NS | TciDimension::PS | TciDimension::SD | TciDimension::CO => {
                LevelThresholds { high: 4, medium: 1 }
            }
            TciDimension::HA | TciDimension::RD => LevelThresholds { high: 1, medium: -2 },
            TciDimension::ST => LevelThresholds { high: 3, medium: -1 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TciLevel {
    High,
    Medium,
    Low,
}

impl TciLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            TciLevel::High => "High",
            TciLevel::Medium => "Medium",
            TciLevel::Low => "Low",
        }
    }
}

/// Inclusive lower bounds for the `High` and `Medium` levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelThresholds {
    pub high: i32,
    pub medium: i32,
}

impl LevelThresholds {
    pub const fn level(self, score: i32) -> TciLevel {
        if score >= self.high {
            TciLevel::High
        } else if score >= self.medium {
            TciLevel::Medium
        } else {
            TciLevel::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TciEntry {
    pub raw_score: i32,
    pub level: TciLevel,
    /// Localized level name, e.g. "높음" or "High".
    pub level_label: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TciResult {
    entries: BTreeMap<TciDimension, TciEntry>,
}

impl TciResult {
    pub fn get(&self, dimension: TciDimension) -> Option<&TciEntry> {
        self.entries.get(&dimension)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TciDimension, &TciEntry)> {
        self.entries.iter().map(|(dimension, entry)| (*dimension, entry))
    }

    /// Raw score per dimension, the shape persisted for later restore.
    pub fn raw_scores(&self) -> BTreeMap<TciDimension, i32> {
        self.iter()
            .map(|(dimension, entry)| (dimension, entry.raw_score))
            .collect()
    }

    pub fn dimensions_at(&self, level: TciLevel) -> Vec<TciDimension> {
        self.iter()
            .filter(|(_, entry)| entry.level == level)
            .map(|(dimension, _)| dimension)
            .collect()
    }
}

/// Level every dimension and attach text from the built-in table for `locale`.
pub fn resolve_tci(raw: &RawScores, locale: Locale) -> TciResult {
    resolve_tci_with(raw, LocaleCatalog::builtin().table(locale))
}

pub fn resolve_tci_with(raw: &RawScores, table: &LocaleTable) -> TciResult {
    let entries = TciDimension::ALL
        .iter()
        .map(|dimension| {
            let raw_score = raw.get(dimension.score_key());
            let level = dimension.thresholds().level(raw_score);
            let text = table
                .lookup(&["tci", dimension.as_str(), level.as_str()])
                .unwrap_or_default();
            let level_label = table
                .text(&["levels", level.as_str()])
                .unwrap_or_default()
                .to_string();
            (
                *dimension,
                TciEntry {
                    raw_score,
                    level,
                    level_label,
                    label: text.label,
                    description: text.description,
                },
            )
        })
        .collect();

    TciResult { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_for(dimension: TciDimension, score: i32) -> RawScores {
        [(dimension.score_key(), score)].into_iter().collect()
    }

    fn level_of(dimension: TciDimension, score: i32) -> TciLevel {
        resolve_tci_with(&raw_for(dimension, score), &LocaleTable::empty())
            .get(dimension)
            .expect("dimension present")
            .level
    }

    #[test]
    fn shape_a_boundaries() {
        for dimension in [
            TciDimension::NS,
            TciDimension::PS,
            TciDimension::SD,
            TciDimension::CO,
        ] {
            assert_eq!(level_of(dimension, 4), TciLevel::High);
            assert_eq!(level_of(dimension, 3), TciLevel::Medium);
            assert_eq!(level_of(dimension, 1), TciLevel::Medium);
            assert_eq!(level_of(dimension, 0), TciLevel::Low);
            assert_eq!(level_of(dimension, -1), TciLevel::Low);
        }
    }

    #[test]
    fn untouched_scores_level_by_shape() {
        let result = resolve_tci(&RawScores::zeroed(), Locale::En);
        let level = |dimension| result.get(dimension).map(|entry| entry.level);

        assert_eq!(level(TciDimension::NS), Some(TciLevel::Low));
        assert_eq!(level(TciDimension::CO), Some(TciLevel::Low));
        assert_eq!(level(TciDimension::HA), Some(TciLevel::Medium));
        assert_eq!(level(TciDimension::ST), Some(TciLevel::Medium));
    }

    #[test]
    fn shape_b_boundaries() {
        for dimension in [TciDimension::HA, TciDimension::RD] {
            assert_eq!(level_of(dimension, 1), TciLevel::High);
            assert_eq!(level_of(dimension, 0), TciLevel::Medium);
            assert_eq!(level_of(dimension, -2), TciLevel::Medium);
            assert_eq!(level_of(dimension, -3), TciLevel::Low);
        }
    }

    #[test]
    fn shape_c_boundaries() {
        assert_eq!(level_of(TciDimension::ST, 3), TciLevel::High);
        assert_eq!(level_of(TciDimension::ST, 2), TciLevel::Medium);
        assert_eq!(level_of(TciDimension::ST, -1), TciLevel::Medium);
        assert_eq!(level_of(TciDimension::ST, -2), TciLevel::Low);
    }

    #[test]
    fn missing_table_entries_leave_text_empty() {
        let table = LocaleTable::from_value(json!({
            "tci": { "NS": { "High": { "label": "Explorer", "description": "Seeks novelty" } } }
        }));
        let result = resolve_tci_with(&raw_for(TciDimension::NS, 5), &table);

        let novelty = result.get(TciDimension::NS).expect("NS present");
        assert_eq!(novelty.label, "Explorer");
        assert_eq!(novelty.description, "Seeks novelty");

        let harm = result.get(TciDimension::HA).expect("HA present");
        assert_eq!(harm.level, TciLevel::Medium);
        assert!(harm.label.is_empty());
        assert!(harm.description.is_empty());
    }

    #[test]
    fn level_names_come_from_the_locale_table() {
        let raw = raw_for(TciDimension::NS, 5);

        let korean = resolve_tci(&raw, Locale::Ko);
        assert_eq!(korean.get(TciDimension::NS).map(|e| e.level_label.as_str()), Some("높음"));
        assert_eq!(korean.get(TciDimension::PS).map(|e| e.level_label.as_str()), Some("낮음"));
        assert_eq!(korean.get(TciDimension::HA).map(|e| e.level_label.as_str()), Some("중간"));

        let english = resolve_tci(&raw, Locale::En);
        assert_eq!(english.get(TciDimension::NS).map(|e| e.level_label.as_str()), Some("High"));

        let bare = resolve_tci_with(&raw, &LocaleTable::empty());
        assert_eq!(bare.get(TciDimension::NS).map(|e| e.level_label.as_str()), Some(""));
    }

    #[test]
    fn builtin_tables_cover_every_level() {
        for locale in Locale::ALL {
            let table = LocaleCatalog::builtin().table(locale);
            for dimension in TciDimension::ALL {
                for level in [TciLevel::High, TciLevel::Medium, TciLevel::Low] {
                    let text = table.lookup(&["tci", dimension.as_str(), level.as_str()]);
                    assert!(text.is_some(), "{locale:?} {dimension:?} {level:?}");
                }
            }
        }
    }

    #[test]
    fn raw_scores_round_trip_through_result() {
        let raw: RawScores = [
            (ScoreKey::HarmAvoidance, -3),
            (ScoreKey::SelfTranscendence, 6),
        ]
        .into_iter()
        .collect();
        let result = resolve_tci(&raw, Locale::En);
        let persisted = result.raw_scores();

        assert_eq!(persisted[&TciDimension::HA], -3);
        assert_eq!(persisted[&TciDimension::ST], 6);
        assert_eq!(persisted[&TciDimension::NS], 0);
        assert_eq!(result.dimensions_at(TciLevel::High), vec![TciDimension::ST]);
    }
}
