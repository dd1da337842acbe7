use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::error;

use super::{DimensionTag, Question, QuestionId, QuestionOption, QuizError};
use crate::locale::Locale;
use crate::scoring::ScoreMap;

const BUILTIN_BANK: &str = include_str!("../../data/questions.json");

/// Text carried in every supported locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub ko: String,
    #[serde(default)]
    pub en: String,
}

impl LocalizedText {
    /// Text for `locale`; an untranslated entry is empty rather than borrowed from the
    /// other locale.
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ko => &self.ko,
            Locale::En => &self.en,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    pub key: String,
    pub text: LocalizedText,
    #[serde(default)]
    pub scores: ScoreMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionEntry {
    pub id: QuestionId,
    pub dimension: DimensionTag,
    pub prompt: LocalizedText,
    pub options: Vec<OptionEntry>,
}

impl QuestionEntry {
    pub fn option(&self, key: &str) -> Option<&OptionEntry> {
        self.options.iter().find(|option| option.key == key)
    }

    pub fn localized(&self, locale: Locale) -> Question {
        Question {
            id: self.id.clone(),
            dimension: self.dimension,
            prompt: self.prompt.get(locale).to_string(),
            options: self
                .options
                .iter()
                .map(|option| QuestionOption {
                    key: option.key.clone(),
                    text: option.text.get(locale).to_string(),
                    score_map: option.scores.clone(),
                })
                .collect(),
        }
    }
}

/// Every known question, in file order. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    questions: Vec<QuestionEntry>,
}

impl QuestionBank {
    pub fn new(questions: Vec<QuestionEntry>) -> Self {
        Self { questions }
    }

    /// The bank compiled into the crate.
    pub fn builtin() -> &'static QuestionBank {
        static BANK: OnceLock<QuestionBank> = OnceLock::new();
        BANK.get_or_init(|| match Self::from_json_str(BUILTIN_BANK) {
            Ok(bank) => bank,
            Err(err) => {
                error!(error = %err, "built-in question bank is unusable");
                QuestionBank::default()
            }
        })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, QuizError> {
        serde_json::from_str(raw).map_err(|source| QuizError::BankParse {
            origin: "inline".to_string(),
            source,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, QuizError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|source| QuizError::BankIo {
            path: origin.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| QuizError::BankParse { origin, source })
    }

    /// Bank from `path` when given, otherwise the built-in one.
    pub fn load(path: Option<&Path>) -> Result<Self, QuizError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::builtin().clone()),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionEntry> {
        self.questions.iter()
    }

    /// All entries with `id`; more than one means the bank is malformed.
    pub fn matching<'a, 'b>(&'a self, id: &'b str) -> impl Iterator<Item = &'a QuestionEntry> + 'b
    where
        'a: 'b,
    {
        self.questions
            .iter()
            .filter(move |question| question.id.as_str() == id)
    }

    pub fn get(&self, id: &str) -> Option<&QuestionEntry> {
        self.questions.iter().find(|question| question.id.as_str() == id)
    }

    pub fn localized(&self, locale: Locale) -> Vec<Question> {
        self.questions
            .iter()
            .map(|question| question.localized(locale))
            .collect()
    }
}
