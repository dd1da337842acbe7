use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use super::keys::{RawScores, ScoreKey};

/// Percentage reported for every axis when a result is rebuilt from a stored type code.
pub const RESTORED_AXIS_PERCENTAGE: u8 = 75;

/// Character substituted into the type code for a tied axis.
pub const TIE_CHAR: char = 'X';

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MbtiLetter {
    E,
    I,
    N,
    S,
    T,
    F,
    J,
    P,
}

impl MbtiLetter {
    pub const ALL: [MbtiLetter; 8] = [
        MbtiLetter::E,
        MbtiLetter::I,
        MbtiLetter::N,
        MbtiLetter::S,
        MbtiLetter::T,
        MbtiLetter::F,
        MbtiLetter::J,
        MbtiLetter::P,
    ];

    pub const fn score_key(self) -> ScoreKey {
        match self {
            MbtiLetter::E => ScoreKey::E,
            MbtiLetter::I => ScoreKey::I,
            MbtiLetter::N => ScoreKey::N,
            MbtiLetter::S => ScoreKey::S,
            MbtiLetter::T => ScoreKey::T,
            MbtiLetter::F => ScoreKey::F,
            MbtiLetter::J => ScoreKey::J,
            MbtiLetter::P => ScoreKey::P,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            MbtiLetter::E => 'E',
            MbtiLetter::I => 'I',
            MbtiLetter::N => 'N',
            MbtiLetter::S => 'S',
            MbtiLetter::T => 'T',
            MbtiLetter::F => 'F',
            MbtiLetter::J => 'J',
            MbtiLetter::P => 'P',
        }
    }

    pub const fn as_str(self) -> &'static str {
        self.score_key().as_str()
    }
}

/// One of the four dichotomies, oriented so the first letter is the fallback default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MbtiAxis {
    IE,
    NS,
    TF,
    JP,
}

impl MbtiAxis {
    pub const ALL: [MbtiAxis; 4] = [MbtiAxis::IE, MbtiAxis::NS, MbtiAxis::TF, MbtiAxis::JP];

    pub const fn letters(self) -> (MbtiLetter, MbtiLetter) {
        match self {
            MbtiAxis::IE => (MbtiLetter::E, MbtiLetter::I),
            MbtiAxis::NS => (MbtiLetter::N, MbtiLetter::S),
            MbtiAxis::TF => (MbtiLetter::T, MbtiLetter::F),
            MbtiAxis::JP => (MbtiLetter::J, MbtiLetter::P),
        }
    }

    /// Letter used in place of a tie when looking up descriptive text.
    pub const fn default_letter(self) -> MbtiLetter {
        self.letters().0
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            MbtiAxis::IE => "IE",
            MbtiAxis::NS => "NS",
            MbtiAxis::TF => "TF",
            MbtiAxis::JP => "JP",
        }
    }
}

/// Winning side of an axis, or no clear preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisDominant {
    Letter(MbtiLetter),
    Ambivert,
}

impl AxisDominant {
    pub const fn letter(self) -> Option<MbtiLetter> {
        match self {
            AxisDominant::Letter(letter) => Some(letter),
            AxisDominant::Ambivert => None,
        }
    }

    pub const fn type_char(self) -> char {
        match self {
            AxisDominant::Letter(letter) => letter.as_char(),
            AxisDominant::Ambivert => TIE_CHAR,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            AxisDominant::Letter(letter) => letter.as_str(),
            AxisDominant::Ambivert => "Ambivert",
        }
    }
}

impl fmt::Display for AxisDominant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AxisDominant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisOutcome {
    pub dominant: AxisDominant,
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MbtiResult {
    #[serde(rename = "type")]
    pub type_code: String,
    pub raw_scores: BTreeMap<MbtiLetter, i32>,
    pub axes: BTreeMap<MbtiAxis, AxisOutcome>,
}

impl MbtiResult {
    pub fn axis(&self, axis: MbtiAxis) -> Option<&AxisOutcome> {
        self.axes.get(&axis)
    }

    /// Type code with every tied axis replaced by its default letter (E, N, T, J).
    pub fn nearest_standard_type(&self) -> String {
        nearest_standard_type(&self.type_code)
    }

    /// Rebuild a result from a persisted four-letter code.
    ///
    /// Raw scores are not persisted, so they come back as zero and every axis reports
    /// [`RESTORED_AXIS_PERCENTAGE`].
    pub fn from_stored_type(code: &str) -> Result<Self, MbtiTypeError> {
        let chars: Vec<char> = code.trim().chars().collect();
        if chars.len() != MbtiAxis::ALL.len() {
            return Err(MbtiTypeError(code.to_string()));
        }

        let mut axes = BTreeMap::new();
        for (axis, ch) in MbtiAxis::ALL.iter().zip(chars.iter()) {
            let (left, right) = axis.letters();
            let dominant = match ch.to_ascii_uppercase() {
                TIE_CHAR => AxisDominant::Ambivert,
                c if c == left.as_char() => AxisDominant::Letter(left),
                c if c == right.as_char() => AxisDominant::Letter(right),
                _ => return Err(MbtiTypeError(code.to_string())),
            };
            axes.insert(
                *axis,
                AxisOutcome {
                    dominant,
                    percentage: RESTORED_AXIS_PERCENTAGE,
                },
            );
        }

        Ok(Self {
            type_code: axes.values().map(|outcome| outcome.dominant.type_char()).collect(),
            raw_scores: MbtiLetter::ALL.iter().map(|letter| (*letter, 0)).collect(),
            axes,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("stored MBTI type '{0}' is not a four-letter code")]
pub struct MbtiTypeError(pub String);

/// Resolve the four dichotomies from raw letter scores.
pub fn resolve_mbti(raw: &RawScores) -> MbtiResult {
    let raw_scores = MbtiLetter::ALL
        .iter()
        .map(|letter| (*letter, raw.get(letter.score_key())))
        .collect();

    let axes: BTreeMap<MbtiAxis, AxisOutcome> = MbtiAxis::ALL
        .iter()
        .map(|axis| {
            let (left, right) = axis.letters();
            let outcome = axis_outcome(
                left,
                raw.get(left.score_key()),
                right,
                raw.get(right.score_key()),
            );
            (*axis, outcome)
        })
        .collect();

    let type_code = axes
        .values()
        .map(|outcome| outcome.dominant.type_char())
        .collect();

    MbtiResult {
        type_code,
        raw_scores,
        axes,
    }
}

pub(crate) fn axis_outcome(
    left: MbtiLetter,
    left_score: i32,
    right: MbtiLetter,
    right_score: i32,
) -> AxisOutcome {
    let dominant = if left_score > right_score {
        AxisDominant::Letter(left)
    } else if right_score > left_score {
        AxisDominant::Letter(right)
    } else {
        AxisDominant::Ambivert
    };

    AxisOutcome {
        dominant,
        percentage: dominance_percentage(left_score, right_score),
    }
}

/// Winner's share of the axis, computed from the non-negative parts of each
/// side. Only an exact tie reports 50; a strict winner never rounds down to it.
fn dominance_percentage(a: i32, b: i32) -> u8 {
    if a == b {
        return 50;
    }
    let (top, bottom) = if a > b { (a, b) } else { (b, a) };
    let top = i64::from(top.max(0));
    let total = top + i64::from(bottom.max(0));
    if total == 0 {
        return 100;
    }
    let percentage = (top as f64 / total as f64 * 100.0).round();
    percentage.clamp(51.0, 100.0) as u8
}

pub fn nearest_standard_type(type_code: &str) -> String {
    type_code
        .chars()
        .zip(MbtiAxis::ALL.iter())
        .map(|(ch, axis)| {
            if ch == TIE_CHAR {
                axis.default_letter().as_char()
            } else {
                ch
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(points: &[(ScoreKey, i32)]) -> RawScores {
        points.iter().copied().collect()
    }

    #[test]
    fn all_zero_scores_tie_every_axis() {
        let result = resolve_mbti(&RawScores::zeroed());

        assert_eq!(result.type_code, "XXXX");
        for axis in MbtiAxis::ALL {
            let outcome = result.axis(axis).expect("axis present");
            assert_eq!(outcome.dominant, AxisDominant::Ambivert);
            assert_eq!(outcome.percentage, 50);
        }
    }

    #[test]
    fn picks_strictly_higher_letter_per_axis() {
        let raw = scores(&[
            (ScoreKey::I, 2),
            (ScoreKey::E, 1),
            (ScoreKey::N, 3),
            (ScoreKey::F, 2),
            (ScoreKey::T, 2),
            (ScoreKey::P, 1),
        ]);

        let result = resolve_mbti(&raw);

        assert_eq!(result.type_code, "INXP");
        assert_eq!(result.axes[&MbtiAxis::IE].percentage, 67);
        assert_eq!(result.axes[&MbtiAxis::NS].percentage, 100);
        assert_eq!(result.axes[&MbtiAxis::TF].percentage, 50);
        assert_eq!(result.raw_scores[&MbtiLetter::N], 3);
        assert_eq!(result.raw_scores.len(), 8);
    }

    #[test]
    fn negative_points_still_report_the_winner() {
        let result = resolve_mbti(&scores(&[(ScoreKey::E, -1)]));
        let outcome = result.axis(MbtiAxis::IE).expect("axis present");
        assert_eq!(outcome.dominant, AxisDominant::Letter(MbtiLetter::I));
        assert_eq!(outcome.percentage, 100);
        assert_eq!(result.type_code, "IXXX");

        let mixed = axis_outcome(MbtiLetter::T, -2, MbtiLetter::F, 3);
        assert_eq!(mixed.dominant, AxisDominant::Letter(MbtiLetter::F));
        assert_eq!(mixed.percentage, 100);

        let near_tie = axis_outcome(MbtiLetter::J, 101, MbtiLetter::P, 100);
        assert_eq!(near_tie.percentage, 51);
    }

    #[test]
    fn percentage_stays_within_half_to_full() {
        for a in -6..=6 {
            for b in -6..=6 {
                let outcome = axis_outcome(MbtiLetter::E, a, MbtiLetter::I, b);
                assert!((50..=100).contains(&outcome.percentage), "{a}/{b}");
                assert_eq!(outcome.percentage == 50, a == b, "{a}/{b}");
            }
        }
    }

    #[test]
    fn tie_label_serializes_as_ambivert() {
        let json = serde_json::to_value(resolve_mbti(&RawScores::zeroed())).expect("json");
        assert_eq!(json["type"], "XXXX");
        assert_eq!(json["axes"]["IE"]["dominant"], "Ambivert");
        assert_eq!(json["axes"]["JP"]["percentage"], 50);
    }

    #[test]
    fn nearest_standard_type_fills_defaults_per_axis() {
        assert_eq!(nearest_standard_type("XXXX"), "ENTJ");
        assert_eq!(nearest_standard_type("IXFX"), "INFJ");
        assert_eq!(nearest_standard_type("ISFP"), "ISFP");
    }

    #[test]
    fn restores_stored_type_with_flat_percentages() {
        let restored = MbtiResult::from_stored_type("INFX").expect("valid code");

        assert_eq!(restored.type_code, "INFX");
        assert_eq!(
            restored.axes[&MbtiAxis::JP].dominant,
            AxisDominant::Ambivert
        );
        assert!(restored
            .axes
            .values()
            .all(|outcome| outcome.percentage == RESTORED_AXIS_PERCENTAGE));
        assert!(restored.raw_scores.values().all(|score| *score == 0));
    }

    #[test]
    fn rejects_malformed_stored_types() {
        assert!(MbtiResult::from_stored_type("ENT").is_err());
        assert!(MbtiResult::from_stored_type("NETJ").is_err());
        assert!(MbtiResult::from_stored_type("").is_err());
    }
}
