//! Scoring and interpretation engine for the self-discovery quiz.
//!
//! Answers fold into raw per-key scores, which three independent resolvers turn into MBTI,
//! TCI and values profiles. A birth date feeds the saju calculator. Every resolver is a pure
//! function; localized text comes from [`locale::LocaleCatalog`] and never fails the
//! computation when an entry is missing.

pub mod config;
pub mod error;
pub mod http;
pub mod locale;
pub mod questions;
pub mod report;
pub mod saju;
pub mod scoring;
pub mod session;
pub mod telemetry;

pub use locale::{Interpretation, Locale, LocaleCatalog, LocaleTable};
pub use questions::{ActiveQuiz, Answer, Question, QuestionBank, QuizLength};
pub use report::{ProfileReport, StoredResult};
pub use saju::{calculate_saju, SajuResult};
pub use scoring::{accumulate, resolve_mbti, resolve_tci, resolve_values, RawScores, ScoreKey};
