use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ProfileReport;
use crate::locale::{Locale, LocaleCatalog};
use crate::saju::{parse_birth_date, parse_birth_time, SajuError};
use crate::scoring::{MbtiResult, MbtiTypeError, RawScores, TciDimension, ValuePole};

/// Persisted shape of a finished profile.
///
/// Only the type code and the TCI and values raw scores survive storage; MBTI axis scores
/// are lost, so a restored profile reports a flat percentage per axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredResult {
    pub mbti_type: String,
    #[serde(default)]
    pub tci_scores: BTreeMap<TciDimension, i32>,
    #[serde(default)]
    pub value_scores: BTreeMap<ValuePole, i32>,
    pub birth_date: String,
    #[serde(default)]
    pub birth_time: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error(transparent)]
    MbtiType(#[from] MbtiTypeError),
    #[error(transparent)]
    Saju(#[from] SajuError),
}

impl StoredResult {
    pub fn from_report(report: &ProfileReport) -> Self {
        Self {
            mbti_type: report.mbti.type_code.clone(),
            tci_scores: report.tci.raw_scores(),
            value_scores: report.values.raw_scores(),
            birth_date: report.birth_date.format("%Y-%m-%d").to_string(),
            birth_time: report
                .birth_time
                .map(|time| time.format("%H:%M").to_string()),
        }
    }

    /// Raw scores rebuilt from the persisted TCI and values maps; MBTI letters stay zero.
    pub fn raw_scores(&self) -> RawScores {
        let tci = self
            .tci_scores
            .iter()
            .map(|(dimension, score)| (dimension.score_key(), *score));
        let values = self
            .value_scores
            .iter()
            .filter_map(|(pole, score)| pole.score_key().map(|key| (key, *score)));
        tci.chain(values).collect()
    }

    pub fn restore(
        &self,
        catalog: &LocaleCatalog,
        locale: Locale,
    ) -> Result<ProfileReport, RestoreError> {
        let mbti = MbtiResult::from_stored_type(&self.mbti_type)?;
        let birth_date = parse_birth_date(&self.birth_date)?;
        let birth_time = match self.birth_time.as_deref() {
            Some(raw) => parse_birth_time(raw)?,
            None => None,
        };

        Ok(ProfileReport::assemble(
            catalog.table(locale),
            locale,
            mbti,
            &self.raw_scores(),
            birth_date,
            birth_time,
            "",
        ))
    }
}
