use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::QuizConfig;
use crate::error::AppError;
use crate::locale::{Locale, LocaleCatalog};
use crate::questions::{ActiveQuiz, AnswerSelection, Question, QuestionBank, QuizError, QuizLength};
use crate::report::{ProfileReport, StoredResult};
use crate::saju::{calculate_saju_iso, parse_birth_date, parse_birth_time, SajuError, SajuResult};

/// Read-only quiz content plus the defaults applied when a request leaves them out.
#[derive(Debug, Clone)]
pub struct ProfileService {
    catalog: LocaleCatalog,
    bank: QuestionBank,
    default_locale: Locale,
    default_length: QuizLength,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionSet {
    pub locale: Locale,
    pub length: usize,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRequest {
    pub answers: Vec<AnswerSelection>,
    pub birth_date: String,
    #[serde(default)]
    pub birth_time: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
}

/// A built report together with the shape a client persists for later restores.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub report: ProfileReport,
    pub stored: StoredResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SajuRequest {
    pub birth_date: String,
    #[serde(default)]
    pub birth_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestoreRequest {
    pub stored: StoredResult,
    #[serde(default)]
    pub locale: Option<String>,
}

impl ProfileService {
    pub fn new(
        catalog: LocaleCatalog,
        bank: QuestionBank,
        default_locale: Locale,
        default_length: QuizLength,
    ) -> Self {
        Self {
            catalog,
            bank,
            default_locale,
            default_length,
        }
    }

    /// Built-in bank and tables with Korean and the full quiz as defaults.
    pub fn builtin() -> Self {
        Self::new(
            LocaleCatalog::builtin().clone(),
            QuestionBank::builtin().clone(),
            Locale::default(),
            QuizLength::default(),
        )
    }

    /// Load configured overrides. A file that cannot be read or parsed is logged and the
    /// built-in content is used instead.
    pub fn from_config(config: &QuizConfig) -> Self {
        let catalog = match LocaleCatalog::load(config.locale_dir.as_deref()) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(error = %err, "falling back to built-in locale tables");
                LocaleCatalog::builtin().clone()
            }
        };
        catalog.check();

        let bank = match QuestionBank::load(config.question_bank_path.as_deref()) {
            Ok(bank) => bank,
            Err(err) => {
                warn!(error = %err, "falling back to built-in question bank");
                QuestionBank::builtin().clone()
            }
        };

        let service = Self::new(catalog, bank, config.default_locale, config.length);
        if let Err(err) = service.quiz(None) {
            warn!(error = %err, length = %config.length, "question bank does not cover the quiz");
        }
        info!(
            questions = service.bank.len(),
            locale = %service.default_locale,
            length = %service.default_length,
            "quiz content loaded"
        );
        service
    }

    pub fn catalog(&self) -> &LocaleCatalog {
        &self.catalog
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    pub fn default_length(&self) -> QuizLength {
        self.default_length
    }

    pub fn quiz(&self, length: Option<QuizLength>) -> Result<ActiveQuiz, QuizError> {
        ActiveQuiz::new(&self.bank, length.unwrap_or(self.default_length))
    }

    pub fn questions(
        &self,
        locale: Option<Locale>,
        length: Option<QuizLength>,
    ) -> Result<QuestionSet, QuizError> {
        let locale = locale.unwrap_or(self.default_locale);
        let quiz = self.quiz(length)?;
        Ok(QuestionSet {
            locale,
            length: quiz.len(),
            questions: quiz.localized(locale),
        })
    }

    pub fn profile(&self, request: &ProfileRequest) -> Result<ProfileResponse, AppError> {
        let locale = parse_optional::<Locale>(request.locale.as_deref())?;
        let length = parse_optional::<QuizLength>(request.length.as_deref())?;
        let birth_date = parse_birth_date(&request.birth_date)?;
        let birth_time = optional_time(request.birth_time.as_deref())?;

        let quiz = self.quiz(length)?;
        let answers = quiz.answer_all(&request.answers)?;
        let report = ProfileReport::build(
            &self.catalog,
            locale.unwrap_or(self.default_locale),
            &answers,
            birth_date,
            birth_time,
            request.name.as_deref().unwrap_or_default(),
        );
        let stored = StoredResult::from_report(&report);
        Ok(ProfileResponse { report, stored })
    }

    pub fn saju(&self, request: &SajuRequest) -> Result<SajuResult, SajuError> {
        calculate_saju_iso(&request.birth_date, request.birth_time.as_deref())
    }

    pub fn restore(&self, request: &RestoreRequest) -> Result<ProfileReport, AppError> {
        let locale = parse_optional::<Locale>(request.locale.as_deref())?
            .unwrap_or(self.default_locale);
        Ok(request.stored.restore(&self.catalog, locale)?)
    }
}

impl Default for ProfileService {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Parse an optional query or body field; blank counts as absent.
pub(crate) fn parse_optional<T>(raw: Option<&str>) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr,
    AppError: From<T::Err>,
{
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => Ok(Some(value.parse::<T>()?)),
        None => Ok(None),
    }
}

fn optional_time(raw: Option<&str>) -> Result<Option<chrono::NaiveTime>, SajuError> {
    match raw {
        Some(raw) => parse_birth_time(raw),
        None => Ok(None),
    }
}
