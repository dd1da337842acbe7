//! Four-pillar birth chart derived from a birth date and optional time.
//!
//! The arithmetic approximates the traditional calendar: calendar months stand in for solar
//! terms and the zodiac year turns over on a fixed February 4 instead of the true start of
//! spring. Results are for entertainment and must stay stable for stored profiles, so the
//! approximation is kept as is.

mod cycle;
mod zodiac;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

pub use cycle::{Branch, Element, Stem};
pub use zodiac::{
    colored_zodiac, western_sign, zodiac_year, ColoredZodiac, WesternSign, SPRING_CUTOFF,
};

/// Day number of 1900-01-01 counted from 0001-01-01 as day 1.
const DAY_ANCHOR: i64 = 693_596;
/// Stem and branch of the anchor day.
const DAY_ANCHOR_STEM: i64 = 1;
const DAY_ANCHOR_BRANCH: i64 = 11;

/// First month stem per year stem (month offsets count from the second calendar month).
const MONTH_STEM_START: [i64; 10] = [2, 4, 6, 8, 0, 2, 4, 6, 8, 0];
/// First hour stem per day stem.
const HOUR_STEM_START: [i64; 10] = [0, 2, 4, 6, 8, 0, 2, 4, 6, 8];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SajuError {
    #[error("birth date '{0}' is not a valid YYYY-MM-DD date")]
    InvalidDate(String),
    #[error("birth time '{0}' is not a valid HH:MM time")]
    InvalidTime(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SajuPillar {
    pub stem: &'static str,
    pub branch: &'static str,
    pub stem_hanja: &'static str,
    pub branch_hanja: &'static str,
    pub stem_latin: &'static str,
    pub branch_latin: &'static str,
    pub element: &'static str,
}

impl SajuPillar {
    fn new(stem: Stem, branch: Branch) -> Self {
        Self {
            stem: stem.korean(),
            branch: branch.korean(),
            stem_hanja: stem.hanja(),
            branch_hanja: branch.hanja(),
            stem_latin: stem.latin(),
            branch_latin: branch.latin(),
            element: stem.element().label(),
        }
    }

    /// Two-character Korean name of the pillar.
    pub fn name(&self) -> String {
        format!("{}{}", self.stem, self.branch)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SajuResult {
    pub year: SajuPillar,
    pub month: SajuPillar,
    pub day: SajuPillar,
    pub hour: Option<SajuPillar>,
    /// Calendar-year animal without the spring rollover, kept for older stored profiles.
    pub zodiac_animal: &'static str,
    pub colored_zodiac: ColoredZodiac,
    pub western_sign: WesternSign,
    pub summary: String,
}

pub fn calculate_saju(birth_date: NaiveDate, birth_time: Option<NaiveTime>) -> SajuResult {
    let (year_stem, year_branch) = year_pillar(birth_date.year());
    let (month_stem, month_branch) = month_pillar(year_stem, birth_date.month());
    let (day_stem, day_branch) = day_pillar(birth_date);

    let year = SajuPillar::new(year_stem, year_branch);
    let month = SajuPillar::new(month_stem, month_branch);
    let day = SajuPillar::new(day_stem, day_branch);
    let hour = birth_time.map(|time| {
        let (stem, branch) = hour_pillar(day_stem, time.hour());
        SajuPillar::new(stem, branch)
    });

    let summary = [Some(&year), Some(&month), Some(&day), hour.as_ref()]
        .into_iter()
        .flatten()
        .map(SajuPillar::name)
        .collect::<Vec<_>>()
        .join(" ");

    SajuResult {
        zodiac_animal: year_branch.animal(),
        colored_zodiac: colored_zodiac(birth_date),
        western_sign: western_sign(birth_date.month(), birth_date.day()),
        year,
        month,
        day,
        hour,
        summary,
    }
}

/// Parse `YYYY-MM-DD` and an optional `HH:MM` (a blank time counts as unknown).
pub fn calculate_saju_iso(
    birth_date: &str,
    birth_time: Option<&str>,
) -> Result<SajuResult, SajuError> {
    let date = parse_birth_date(birth_date)?;
    let time = birth_time.map(parse_birth_time).transpose()?.flatten();
    Ok(calculate_saju(date, time))
}

pub fn parse_birth_date(raw: &str) -> Result<NaiveDate, SajuError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| SajuError::InvalidDate(raw.to_string()))
}

pub fn parse_birth_time(raw: &str) -> Result<Option<NaiveTime>, SajuError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map(Some)
        .map_err(|_| SajuError::InvalidTime(raw.to_string()))
}

fn year_pillar(year: i32) -> (Stem, Branch) {
    let offset = i64::from(year) - 4;
    (Stem::from_cycle(offset), Branch::from_cycle(offset))
}

fn month_pillar(year_stem: Stem, month: u32) -> (Stem, Branch) {
    let month = i64::from(month);
    let branch = if month == 12 { 0 } else { month };
    let offset = if month >= 2 { month - 2 } else { 11 };
    let stem = MONTH_STEM_START[year_stem.index()] + offset;
    (Stem::from_cycle(stem), Branch::from_cycle(branch))
}

fn day_pillar(date: NaiveDate) -> (Stem, Branch) {
    let days = i64::from(date.num_days_from_ce()) - DAY_ANCHOR;
    (
        Stem::from_cycle(days + DAY_ANCHOR_STEM),
        Branch::from_cycle(days + DAY_ANCHOR_BRANCH),
    )
}

fn hour_pillar(day_stem: Stem, hour: u32) -> (Stem, Branch) {
    let branch = (i64::from(hour) + 1) / 2;
    let branch = Branch::from_cycle(branch);
    let stem = HOUR_STEM_START[day_stem.index()] + branch.index() as i64;
    (Stem::from_cycle(stem), branch)
}
