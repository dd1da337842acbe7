use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::cycle::{Branch, Stem};

/// Month and day of the fixed start-of-spring cutoff.
pub const SPRING_CUTOFF: (u32, u32) = (2, 4);

struct StemColor {
    hanja: &'static str,
    key: &'static str,
    name: &'static str,
    emoji: &'static str,
}

const STEM_COLORS: [StemColor; 10] = [
    StemColor { hanja: "청", key: "blue", name: "파란", emoji: "🌳" },
    StemColor { hanja: "청", key: "green", name: "초록", emoji: "🌿" },
    StemColor { hanja: "적", key: "red", name: "빨간", emoji: "🔥" },
    StemColor { hanja: "적", key: "red", name: "붉은", emoji: "🕯️" },
    StemColor { hanja: "황", key: "gold", name: "황금", emoji: "⛰️" },
    StemColor { hanja: "황", key: "gold", name: "황금", emoji: "🌾" },
    StemColor { hanja: "백", key: "white", name: "흰", emoji: "⚔️" },
    StemColor { hanja: "백", key: "white", name: "흰", emoji: "💎" },
    StemColor { hanja: "흑", key: "black", name: "검은", emoji: "🌊" },
    StemColor { hanja: "흑", key: "black", name: "검은", emoji: "💧" },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColoredZodiac {
    pub animal: &'static str,
    pub animal_key: &'static str,
    pub color: &'static str,
    pub color_key: &'static str,
    pub color_name: &'static str,
    pub full_name: String,
    pub emoji: &'static str,
    pub zodiac_year: i32,
}

/// Zodiac year for `date`: births before the spring cutoff belong to the previous year.
pub fn zodiac_year(date: NaiveDate) -> i32 {
    let (cutoff_month, cutoff_day) = SPRING_CUTOFF;
    if (date.month(), date.day()) < (cutoff_month, cutoff_day) {
        date.year() - 1
    } else {
        date.year()
    }
}

pub fn colored_zodiac(date: NaiveDate) -> ColoredZodiac {
    let year = zodiac_year(date);
    let offset = i64::from(year) - 4;
    let stem = Stem::from_cycle(offset);
    let branch = Branch::from_cycle(offset);
    let color = &STEM_COLORS[stem.index()];

    ColoredZodiac {
        animal: branch.animal(),
        animal_key: branch.animal_key(),
        color: color.hanja,
        color_key: color.key,
        color_name: color.name,
        full_name: format!("{}{}", color.name, branch.animal()),
        emoji: color.emoji,
        zodiac_year: year,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WesternSign {
    pub name: &'static str,
    pub name_latin: &'static str,
    pub emoji: &'static str,
}

struct SignRange {
    sign: WesternSign,
    start: (u32, u32),
    end: (u32, u32),
}

const fn sign(
    name: &'static str,
    name_latin: &'static str,
    emoji: &'static str,
    start: (u32, u32),
    end: (u32, u32),
) -> SignRange {
    SignRange {
        sign: WesternSign {
            name,
            name_latin,
            emoji,
        },
        start,
        end,
    }
}

const SIGNS: [SignRange; 12] = [
    sign("염소자리", "Capricorn", "♑", (12, 22), (1, 19)),
    sign("물병자리", "Aquarius", "♒", (1, 20), (2, 18)),
    sign("물고기자리", "Pisces", "♓", (2, 19), (3, 20)),
    sign("양자리", "Aries", "♈", (3, 21), (4, 19)),
    sign("황소자리", "Taurus", "♉", (4, 20), (5, 20)),
    sign("쌍둥이자리", "Gemini", "♊", (5, 21), (6, 20)),
    sign("게자리", "Cancer", "♋", (6, 21), (7, 22)),
    sign("사자자리", "Leo", "♌", (7, 23), (8, 22)),
    sign("처녀자리", "Virgo", "♍", (8, 23), (9, 22)),
    sign("천칭자리", "Libra", "♎", (9, 23), (10, 22)),
    sign("전갈자리", "Scorpio", "♏", (10, 23), (11, 21)),
    sign("사수자리", "Sagittarius", "♐", (11, 22), (12, 21)),
];

const FALLBACK_SIGN: usize = 3;

impl SignRange {
    fn contains(&self, month: u32, day: u32) -> bool {
        let (start_month, start_day) = self.start;
        let (end_month, end_day) = self.end;
        let in_start = month == start_month && day >= start_day;
        let in_end = month == end_month && day <= end_day;
        if start_month > end_month {
            // wraps the new year
            in_start || in_end
        } else {
            in_start || in_end || (month > start_month && month < end_month)
        }
    }
}

pub fn western_sign(month: u32, day: u32) -> WesternSign {
    SIGNS
        .iter()
        .find(|range| range.contains(month, day))
        .unwrap_or(&SIGNS[FALLBACK_SIGN])
        .sign
}
