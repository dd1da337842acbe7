use std::fmt;
use std::str::FromStr;

/// Supported quiz lengths. TCI keeps three questions per dimension in both so the level
/// thresholds stay calibrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuizLength {
    #[default]
    Full,
    Short,
}

impl QuizLength {
    pub const fn total(self) -> usize {
        match self {
            QuizLength::Full => 45,
            QuizLength::Short => 33,
        }
    }

    /// Curated interleaving of question ids for this length.
    pub fn order(self) -> &'static [&'static str] {
        match self {
            QuizLength::Full => &FULL_ORDER,
            QuizLength::Short => &SHORT_ORDER,
        }
    }
}

impl fmt::Display for QuizLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.total())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported quiz length '{0}' (expected 45 or 33)")]
pub struct UnknownQuizLength(pub String);

impl FromStr for QuizLength {
    type Err = UnknownQuizLength;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "45" | "full" => Ok(QuizLength::Full),
            "33" | "short" => Ok(QuizLength::Short),
            _ => Err(UnknownQuizLength(value.to_string())),
        }
    }
}

static FULL_ORDER: [&str; 45] = [
    "mbti-ie-1", "tci-ns-1", "val-stability-1", "tci-ha-1", "mbti-ns-1",
    "tci-rd-1", "val-relationship-1", "tci-ps-1", "mbti-tf-1", "tci-sd-1",
    "val-achievement-1", "tci-co-1", "mbti-jp-1", "tci-st-1", "val-reality-1",
    "mbti-ie-2", "tci-ns-2", "val-stability-2", "tci-ha-2", "mbti-ns-2",
    "tci-rd-2", "val-relationship-2", "tci-ps-2", "mbti-tf-2", "tci-sd-2",
    "val-achievement-2", "tci-co-2", "mbti-jp-2", "tci-st-2", "val-reality-2",
    "mbti-ie-3", "tci-ns-3", "val-stability-3", "tci-ha-3", "mbti-ns-3",
    "tci-rd-3", "val-relationship-3", "tci-ps-3", "mbti-tf-3", "tci-sd-3",
    "val-achievement-3", "tci-co-3", "mbti-jp-3", "tci-st-3", "val-reality-3",
];

static SHORT_ORDER: [&str; 33] = [
    "mbti-ie-1", "tci-ns-1", "val-stability-1", "tci-ha-1", "mbti-ns-1",
    "tci-rd-1", "val-relationship-1", "tci-ps-1", "mbti-tf-1", "tci-sd-1",
    "val-achievement-1", "tci-co-1", "mbti-jp-1", "tci-st-1", "val-reality-1",
    "mbti-ie-2", "tci-ns-2", "tci-ha-2", "mbti-ns-2", "tci-rd-2",
    "tci-ps-2", "mbti-tf-2", "tci-sd-2", "tci-co-2", "mbti-jp-2",
    "tci-st-2", "tci-ns-3", "tci-ha-3", "tci-rd-3", "tci-ps-3",
    "tci-sd-3", "tci-co-3", "tci-st-3",
];
