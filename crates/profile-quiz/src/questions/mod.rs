//! Question bank, fixed quiz orderings and answer construction.

mod active;
mod bank;
mod order;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::scoring::{MbtiAxis, ScoreMap, TciDimension, ValueDimension};

pub use active::{ActiveQuiz, AnswerSelection, QuizError};
pub use bank::{LocalizedText, OptionEntry, QuestionBank, QuestionEntry};
pub use order::{QuizLength, UnknownQuizLength};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Scoring family a question belongs to.
///
/// Informational only; options may award points to any key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DimensionTag {
    Mbti(MbtiAxis),
    Tci(TciDimension),
    Values(ValueDimension),
}

impl fmt::Display for DimensionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionTag::Mbti(axis) => f.write_str(axis.as_str()),
            DimensionTag::Tci(dimension) => write!(f, "TCI-{}", dimension.as_str()),
            DimensionTag::Values(dimension) => f.write_str(dimension.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown question dimension '{0}'")]
pub struct UnknownDimension(pub String);

impl FromStr for DimensionTag {
    type Err = UnknownDimension;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if let Some(code) = value.strip_prefix("TCI-") {
            return TciDimension::ALL
                .into_iter()
                .find(|dimension| dimension.as_str() == code)
                .map(DimensionTag::Tci)
                .ok_or_else(|| UnknownDimension(value.to_string()));
        }
        if let Some(axis) = MbtiAxis::ALL.into_iter().find(|axis| axis.as_str() == value) {
            return Ok(DimensionTag::Mbti(axis));
        }
        ValueDimension::ALL
            .into_iter()
            .find(|dimension| dimension.as_str() == value)
            .map(DimensionTag::Values)
            .ok_or_else(|| UnknownDimension(value.to_string()))
    }
}

impl TryFrom<String> for DimensionTag {
    type Error = UnknownDimension;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DimensionTag> for String {
    fn from(value: DimensionTag) -> Self {
        value.to_string()
    }
}

/// Question rendered for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub dimension: DimensionTag,
    pub prompt: String,
    pub options: Vec<QuestionOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub key: String,
    pub text: String,
    pub score_map: ScoreMap,
}

/// A selected option, carrying the points copied from that option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: QuestionId,
    pub option_key: String,
    pub score_map: ScoreMap,
}
