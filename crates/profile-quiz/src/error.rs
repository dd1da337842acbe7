use crate::config::ConfigError;
use crate::locale::{CatalogError, UnknownLocale};
use crate::questions::UnknownQuizLength;
use crate::questions::QuizError;
use crate::report::RestoreError;
use crate::saju::SajuError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Quiz(QuizError),
    Saju(SajuError),
    Catalog(CatalogError),
    Restore(RestoreError),
    Locale(UnknownLocale),
    QuizLength(UnknownQuizLength),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Quiz(QuizError::UnknownQuestion(_))
            | AppError::Quiz(QuizError::UnknownOption { .. })
            | AppError::Saju(_)
            | AppError::Restore(_)
            | AppError::Locale(_)
            | AppError::QuizLength(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Quiz(_)
            | AppError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Quiz(err) => write!(f, "quiz error: {}", err),
            AppError::Saju(err) => write!(f, "saju error: {}", err),
            AppError::Catalog(err) => write!(f, "locale catalog error: {}", err),
            AppError::Restore(err) => write!(f, "stored result error: {}", err),
            AppError::Locale(err) => write!(f, "{}", err),
            AppError::QuizLength(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Quiz(err) => Some(err),
            AppError::Saju(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Restore(err) => Some(err),
            AppError::Locale(err) => Some(err),
            AppError::QuizLength(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<QuizError> for AppError {
    fn from(value: QuizError) -> Self {
        Self::Quiz(value)
    }
}

impl From<SajuError> for AppError {
    fn from(value: SajuError) -> Self {
        Self::Saju(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<RestoreError> for AppError {
    fn from(value: RestoreError) -> Self {
        Self::Restore(value)
    }
}

impl From<UnknownLocale> for AppError {
    fn from(value: UnknownLocale) -> Self {
        Self::Locale(value)
    }
}

impl From<UnknownQuizLength> for AppError {
    fn from(value: UnknownQuizLength) -> Self {
        Self::QuizLength(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_mistakes_are_bad_requests() {
        let unknown = AppError::from(QuizError::UnknownOption {
            question: "mbti-ie-1".into(),
            option: "z".into(),
        });
        assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::from(SajuError::InvalidDate("1990-13-01".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(UnknownLocale("ja".into())).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn broken_content_is_a_server_error() {
        let missing = AppError::from(QuizError::MissingQuestion("tci-ns-3".into()));
        assert_eq!(missing.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(missing.to_string().contains("tci-ns-3"));

        let catalog = AppError::from(CatalogError::NotAnObject {
            origin: "ko.json".into(),
        });
        assert_eq!(catalog.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(catalog.to_string().starts_with("locale catalog error"));
    }
}
