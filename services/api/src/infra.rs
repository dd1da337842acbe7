use chrono::{NaiveDate, NaiveTime};
use metrics_exporter_prometheus::PrometheusHandle;
use profile_quiz::config::AppConfig;
use profile_quiz::error::AppError;
use profile_quiz::http::ProfileService;
use profile_quiz::saju::{parse_birth_date, parse_birth_time};
use profile_quiz::{Locale, QuizLength};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Service built from the environment, used by every CLI command outside `serve`.
pub(crate) fn load_service() -> Result<ProfileService, AppError> {
    let config = AppConfig::load()?;
    Ok(ProfileService::from_config(&config.quiz))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    parse_birth_date(raw).map_err(|err| err.to_string())
}

pub(crate) fn parse_time(raw: &str) -> Result<NaiveTime, String> {
    match parse_birth_time(raw) {
        Ok(Some(time)) => Ok(time),
        Ok(None) => Err("birth time must not be blank".to_string()),
        Err(err) => Err(err.to_string()),
    }
}

pub(crate) fn parse_locale(raw: &str) -> Result<Locale, String> {
    raw.parse::<Locale>().map_err(|err| err.to_string())
}

pub(crate) fn parse_length(raw: &str) -> Result<QuizLength, String> {
    raw.parse::<QuizLength>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_parsers_report_readable_errors() {
        assert_eq!(
            parse_date("1990-05-17"),
            Ok(NaiveDate::from_ymd_opt(1990, 5, 17).expect("date"))
        );
        assert!(parse_date("05/17/1990")
            .expect_err("bad date")
            .contains("YYYY-MM-DD"));
        assert!(parse_time(" ").is_err());
        assert_eq!(parse_locale("EN"), Ok(Locale::En));
        assert_eq!(parse_length("short"), Ok(QuizLength::Short));
        assert!(parse_length("12").is_err());
    }
}
