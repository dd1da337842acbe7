use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of keys an option can award points to.
///
/// MBTI letters, TCI dimension codes and value poles share one namespace so a single
/// answer list can be folded once and read by every resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScoreKey {
    E,
    I,
    N,
    S,
    T,
    F,
    J,
    P,
    #[serde(rename = "NS")]
    NoveltySeeking,
    #[serde(rename = "HA")]
    HarmAvoidance,
    #[serde(rename = "RD")]
    RewardDependence,
    #[serde(rename = "PS")]
    Persistence,
    #[serde(rename = "SD")]
    SelfDirectedness,
    #[serde(rename = "CO")]
    Cooperativeness,
    #[serde(rename = "ST")]
    SelfTranscendence,
    Stability,
    Change,
    Relationship,
    Individual,
    Achievement,
    Balance,
    Reality,
    Meaning,
}

impl ScoreKey {
    pub const COUNT: usize = 23;

    pub const ALL: [ScoreKey; ScoreKey::COUNT] = [
        ScoreKey::E,
        ScoreKey::I,
        ScoreKey::N,
        ScoreKey::S,
        ScoreKey::T,
        ScoreKey::F,
        ScoreKey::J,
        ScoreKey::P,
        ScoreKey::NoveltySeeking,
        ScoreKey::HarmAvoidance,
        ScoreKey::RewardDependence,
        ScoreKey::Persistence,
        ScoreKey::SelfDirectedness,
        ScoreKey::Cooperativeness,
        ScoreKey::SelfTranscendence,
        ScoreKey::Stability,
        ScoreKey::Change,
        ScoreKey::Relationship,
        ScoreKey::Individual,
        ScoreKey::Achievement,
        ScoreKey::Balance,
        ScoreKey::Reality,
        ScoreKey::Meaning,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ScoreKey::E => "E",
            ScoreKey::I => "I",
            ScoreKey::N => "N",
            ScoreKey::S => "S",
            ScoreKey::T => "T",
            ScoreKey::F => "F",
            ScoreKey::J => "J",
            ScoreKey::P => "P",
            ScoreKey::NoveltySeeking => "NS",
            ScoreKey::HarmAvoidance => "HA",
            ScoreKey::RewardDependence => "RD",
            ScoreKey::Persistence => "PS",
            ScoreKey::SelfDirectedness => "SD",
            ScoreKey::Cooperativeness => "CO",
            ScoreKey::SelfTranscendence => "ST",
            ScoreKey::Stability => "Stability",
            ScoreKey::Change => "Change",
            ScoreKey::Relationship => "Relationship",
            ScoreKey::Individual => "Individual",
            ScoreKey::Achievement => "Achievement",
            ScoreKey::Balance => "Balance",
            ScoreKey::Reality => "Reality",
            ScoreKey::Meaning => "Meaning",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ScoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown score key '{0}'")]
pub struct UnknownScoreKey(pub String);

impl FromStr for ScoreKey {
    type Err = UnknownScoreKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ScoreKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| UnknownScoreKey(value.to_string()))
    }
}

/// Points an option awards; keys that are absent count as zero.
pub type ScoreMap = BTreeMap<ScoreKey, i32>;

/// Accumulated score for every [`ScoreKey`], all keys always present.
///
/// Totals are kept in `i64` so a sum of `i32` points is exact whatever order it
/// arrives in; reads clamp to the `i32` range once, at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ScoreMap", into = "ScoreMap")]
pub struct RawScores {
    totals: [i64; ScoreKey::COUNT],
}

impl RawScores {
    pub const fn zeroed() -> Self {
        Self {
            totals: [0; ScoreKey::COUNT],
        }
    }

    pub fn get(&self, key: ScoreKey) -> i32 {
        let total = self.totals[key.index()];
        total.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    // An i64 total cannot overflow before 2^32 additions of i32 points.
    pub(crate) fn add(&mut self, key: ScoreKey, points: i32) {
        self.totals[key.index()] += i64::from(points);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScoreKey, i32)> + '_ {
        ScoreKey::ALL.iter().map(|key| (*key, self.get(*key)))
    }

    pub fn is_zero(&self) -> bool {
        self.totals.iter().all(|total| *total == 0)
    }
}

impl Default for RawScores {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl FromIterator<(ScoreKey, i32)> for RawScores {
    fn from_iter<It: IntoIterator<Item = (ScoreKey, i32)>>(iter: It) -> Self {
        let mut scores = RawScores::zeroed();
        for (key, points) in iter {
            scores.add(key, points);
        }
        scores
    }
}

impl From<ScoreMap> for RawScores {
    fn from(map: ScoreMap) -> Self {
        map.into_iter().collect()
    }
}

impl From<RawScores> for ScoreMap {
    fn from(scores: RawScores) -> Self {
        scores.iter().collect()
    }
}
