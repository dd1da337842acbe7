use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Answer, Question, QuestionBank, QuestionEntry, QuestionId, QuizLength};
use crate::locale::Locale;

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("question '{0}' is not part of the active quiz")]
    UnknownQuestion(String),
    #[error("question '{question}' has no option '{option}'")]
    UnknownOption { question: String, option: String },
    #[error("question '{0}' is listed in the quiz order but missing from the bank")]
    MissingQuestion(String),
    #[error("question '{0}' appears more than once in the bank")]
    DuplicateQuestion(String),
    #[error("failed to read question bank {path}: {source}")]
    BankIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("question bank {origin} is malformed: {source}")]
    BankParse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A question id and chosen option key, as submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSelection {
    pub question_id: String,
    pub option_key: String,
}

/// The bank narrowed to one fixed ordering.
#[derive(Debug, Clone)]
pub struct ActiveQuiz {
    length: QuizLength,
    questions: Vec<QuestionEntry>,
}

impl ActiveQuiz {
    pub fn new(bank: &QuestionBank, length: QuizLength) -> Result<Self, QuizError> {
        Self::validate(bank, length)?;
        let questions = length
            .order()
            .iter()
            .filter_map(|id| bank.get(id).cloned())
            .collect();
        Ok(Self { length, questions })
    }

    pub fn builtin(length: QuizLength) -> Result<Self, QuizError> {
        Self::new(QuestionBank::builtin(), length)
    }

    /// Every ordered id must resolve to exactly one question in `bank`.
    pub fn validate(bank: &QuestionBank, length: QuizLength) -> Result<(), QuizError> {
        for id in length.order() {
            match bank.matching(id).count() {
                0 => return Err(QuizError::MissingQuestion(id.to_string())),
                1 => {}
                _ => return Err(QuizError::DuplicateQuestion(id.to_string())),
            }
        }
        Ok(())
    }

    pub fn length(&self) -> QuizLength {
        self.length
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question_at(&self, index: usize) -> Option<&QuestionEntry> {
        self.questions.get(index)
    }

    pub fn question(&self, id: &str) -> Option<&QuestionEntry> {
        self.questions.iter().find(|question| question.id.as_str() == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.questions
            .iter()
            .position(|question| question.id.as_str() == id)
    }

    pub fn localized(&self, locale: Locale) -> Vec<Question> {
        self.questions
            .iter()
            .map(|question| question.localized(locale))
            .collect()
    }

    /// Build the answer for `option_key` on `question_id`, copying the option's points.
    pub fn answer(&self, question_id: &str, option_key: &str) -> Result<Answer, QuizError> {
        let question = self
            .question(question_id)
            .ok_or_else(|| QuizError::UnknownQuestion(question_id.to_string()))?;
        let option = question
            .option(option_key)
            .ok_or_else(|| QuizError::UnknownOption {
                question: question_id.to_string(),
                option: option_key.to_string(),
            })?;

        Ok(Answer {
            question_id: QuestionId(question_id.to_string()),
            option_key: option.key.clone(),
            score_map: option.scores.clone(),
        })
    }

    /// Resolve a batch of selections, keeping only the last selection per question.
    pub fn answer_all(&self, selections: &[AnswerSelection]) -> Result<Vec<Answer>, QuizError> {
        let mut seen = HashSet::new();
        let mut answers = Vec::with_capacity(selections.len());
        for selection in selections.iter().rev() {
            if !seen.insert(selection.question_id.as_str()) {
                continue;
            }
            answers.push(self.answer(&selection.question_id, &selection.option_key)?);
        }
        answers.reverse();
        Ok(answers)
    }
}
