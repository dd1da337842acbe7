//! Localized interpretation tables.
//!
//! Every piece of user-facing text (type descriptions, level labels, pole labels, calendar
//! names) lives in one nested JSON document per locale. The built-in documents are compiled
//! into the binary; a directory of overrides can be loaded at startup instead.

mod check;
mod table;

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{error, warn};

pub use check::{validate_translations, TranslationReport};
pub use table::{lookup, Interpretation, LocaleTable};

const BUILTIN_KO: &str = include_str!("../../data/locales/ko.json");
const BUILTIN_EN: &str = include_str!("../../data/locales/en.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Ko, Locale::En];

    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}' (expected ko or en)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ko" | "ko-kr" => Ok(Locale::Ko),
            "en" | "en-us" => Ok(Locale::En),
            _ => Err(UnknownLocale(value.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read locale table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("locale table {origin} is not valid JSON: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("locale table {origin} must be a JSON object at the top level")]
    NotAnObject { origin: String },
}

/// One table per supported locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleCatalog {
    ko: LocaleTable,
    en: LocaleTable,
}

impl LocaleCatalog {
    pub fn new(ko: LocaleTable, en: LocaleTable) -> Self {
        Self { ko, en }
    }

    /// Tables compiled into the crate. A table that fails to parse is replaced by an empty
    /// one so lookups degrade to empty text rather than failing.
    pub fn builtin() -> &'static LocaleCatalog {
        static CATALOG: OnceLock<LocaleCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| LocaleCatalog {
            ko: builtin_table(Locale::Ko, BUILTIN_KO),
            en: builtin_table(Locale::En, BUILTIN_EN),
        })
    }

    /// Load `ko.json` and `en.json` from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        Ok(Self {
            ko: LocaleTable::from_path(dir.join("ko.json"))?,
            en: LocaleTable::from_path(dir.join("en.json"))?,
        })
    }

    /// Tables from `dir` when given, otherwise the built-in set.
    pub fn load(dir: Option<&Path>) -> Result<Self, CatalogError> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Ok(Self::builtin().clone()),
        }
    }

    pub fn table(&self, locale: Locale) -> &LocaleTable {
        match locale {
            Locale::Ko => &self.ko,
            Locale::En => &self.en,
        }
    }

    /// Compare the key sets of the two tables.
    pub fn check(&self) -> TranslationReport {
        let report = validate_translations(&self.ko, &self.en);
        if !report.is_valid() {
            warn!(
                missing_in_en = report.missing_in_en.len(),
                missing_in_ko = report.missing_in_ko.len(),
                "locale tables are out of sync"
            );
        }
        report
    }
}

fn builtin_table(locale: Locale, raw: &str) -> LocaleTable {
    match LocaleTable::from_json_str(raw) {
        Ok(table) => table,
        Err(err) => {
            error!(locale = %locale, error = %err, "built-in locale table is unusable");
            LocaleTable::empty()
        }
    }
}
