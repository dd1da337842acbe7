//! Combined profile payload for display and storage.

mod stored;

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use tracing::debug;

use crate::locale::{Interpretation, Locale, LocaleCatalog, LocaleTable};
use crate::questions::Answer;
use crate::saju::{calculate_saju, SajuResult};
use crate::scoring::{
    accumulate, resolve_mbti, resolve_tci_with, resolve_values_with, AxisDominant, MbtiAxis,
    MbtiResult, RawScores, TciDimension, TciLevel, TciResult, ValueDimension, ValueResult,
};

pub use stored::{RestoreError, StoredResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisReading {
    pub axis: MbtiAxis,
    pub name: String,
    pub dominant: AxisDominant,
    pub dominant_label: String,
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MbtiReading {
    /// Type code used for the text lookup, with ties filled by the per-axis default.
    pub standard_type: String,
    pub label: String,
    pub description: String,
    pub axes: Vec<AxisReading>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SajuReading {
    pub day_stem: Interpretation,
    pub day_branch: Interpretation,
    pub zodiac_color: Interpretation,
    pub zodiac_animal: Interpretation,
    pub western_sign: Interpretation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileReport {
    pub locale: Locale,
    pub display_name: String,
    pub birth_date: NaiveDate,
    pub birth_time: Option<NaiveTime>,
    pub mbti: MbtiResult,
    pub mbti_reading: MbtiReading,
    pub tci: TciResult,
    pub tci_names: BTreeMap<TciDimension, String>,
    pub values: ValueResult,
    pub value_names: BTreeMap<ValueDimension, String>,
    pub saju: SajuResult,
    pub saju_reading: SajuReading,
}

impl ProfileReport {
    pub fn build(
        catalog: &LocaleCatalog,
        locale: Locale,
        answers: &[Answer],
        birth_date: NaiveDate,
        birth_time: Option<NaiveTime>,
        display_name: &str,
    ) -> Self {
        let raw = accumulate(answers);
        let mbti = resolve_mbti(&raw);
        let report = Self::assemble(
            catalog.table(locale),
            locale,
            mbti,
            &raw,
            birth_date,
            birth_time,
            display_name,
        );
        debug!(
            locale = %locale,
            answers = answers.len(),
            mbti = %report.mbti.type_code,
            "built profile report"
        );
        report
    }

    fn assemble(
        table: &LocaleTable,
        locale: Locale,
        mbti: MbtiResult,
        raw: &RawScores,
        birth_date: NaiveDate,
        birth_time: Option<NaiveTime>,
        display_name: &str,
    ) -> Self {
        let saju = calculate_saju(birth_date, birth_time);
        Self {
            locale,
            display_name: mask_name(display_name),
            birth_date,
            birth_time,
            mbti_reading: mbti_reading(table, &mbti),
            mbti,
            tci: resolve_tci_with(raw, table),
            tci_names: TciDimension::ALL
                .iter()
                .map(|dim| (*dim, text(table, &["tci_dimensions", dim.as_str()])))
                .collect(),
            values: resolve_values_with(raw, table),
            value_names: ValueDimension::ALL
                .iter()
                .map(|dim| (*dim, text(table, &["value_dimensions", dim.as_str()])))
                .collect(),
            saju_reading: saju_reading(table, &saju),
            saju,
        }
    }

    pub fn high_tci_dimensions(&self) -> Vec<TciDimension> {
        self.tci.dimensions_at(TciLevel::High)
    }
}

fn text(table: &LocaleTable, path: &[&str]) -> String {
    table.text(path).unwrap_or_default().to_string()
}

fn mbti_reading(table: &LocaleTable, mbti: &MbtiResult) -> MbtiReading {
    let standard_type = mbti.nearest_standard_type();
    let interpretation = table
        .lookup(&["mbti", "types", standard_type.as_str()])
        .unwrap_or_default();

    let axes = mbti
        .axes
        .iter()
        .map(|(axis, outcome)| {
            let dominant_key = match outcome.dominant {
                AxisDominant::Letter(letter) => letter.as_str(),
                AxisDominant::Ambivert => "tie",
            };
            AxisReading {
                axis: *axis,
                name: text(table, &["mbti", "axes", axis.as_str(), "name"]),
                dominant: outcome.dominant,
                dominant_label: text(table, &["mbti", "axes", axis.as_str(), dominant_key]),
                percentage: outcome.percentage,
            }
        })
        .collect();

    MbtiReading {
        standard_type,
        label: interpretation.label,
        description: interpretation.description,
        axes,
    }
}

fn saju_reading(table: &LocaleTable, saju: &SajuResult) -> SajuReading {
    let entry = |path: &[&str]| table.lookup(path).unwrap_or_default();
    SajuReading {
        day_stem: entry(&["saju", "stems", saju.day.stem_latin]),
        day_branch: entry(&["saju", "branches", saju.day.branch_latin]),
        zodiac_color: entry(&["zodiac", "colors", saju.colored_zodiac.color_key]),
        zodiac_animal: entry(&["zodiac", "animals", saju.colored_zodiac.animal_key]),
        western_sign: entry(&["signs", saju.western_sign.name_latin]),
    }
}

/// Hide all but the first and last character: `홍길동` becomes `홍*동`, `김수` becomes `김*`.
pub fn mask_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    match chars.len() {
        0 | 1 => name.to_string(),
        2 => format!("{}*", chars[0]),
        len => {
            let mut masked = String::with_capacity(name.len());
            masked.push(chars[0]);
            masked.extend(std::iter::repeat('*').take(len - 2));
            masked.push(chars[len - 1]);
            masked
        }
    }
}
