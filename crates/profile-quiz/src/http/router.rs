use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::service::{
    parse_optional, ProfileRequest, ProfileResponse, ProfileService, QuestionSet, RestoreRequest,
    SajuRequest,
};
use crate::error::AppError;
use crate::locale::Locale;
use crate::questions::QuizLength;
use crate::report::ProfileReport;
use crate::saju::SajuResult;

/// Router builder exposing the question list, profile building, saju and restore endpoints.
pub fn quiz_router(service: Arc<ProfileService>) -> Router {
    Router::new()
        .route("/api/v1/quiz/questions", get(questions_handler))
        .route("/api/v1/profile", post(profile_handler))
        .route("/api/v1/profile/restore", post(restore_handler))
        .route("/api/v1/saju", post(saju_handler))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuestionsQuery {
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    length: Option<String>,
}

pub(crate) async fn questions_handler(
    State(service): State<Arc<ProfileService>>,
    Query(query): Query<QuestionsQuery>,
) -> Result<Json<QuestionSet>, AppError> {
    let locale = parse_optional::<Locale>(query.locale.as_deref())?;
    let length = parse_optional::<QuizLength>(query.length.as_deref())?;
    Ok(Json(service.questions(locale, length)?))
}

pub(crate) async fn profile_handler(
    State(service): State<Arc<ProfileService>>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    Ok(Json(service.profile(&request)?))
}

pub(crate) async fn saju_handler(
    State(service): State<Arc<ProfileService>>,
    Json(request): Json<SajuRequest>,
) -> Result<Json<SajuResult>, AppError> {
    Ok(Json(service.saju(&request)?))
}

pub(crate) async fn restore_handler(
    State(service): State<Arc<ProfileService>>,
    Json(request): Json<RestoreRequest>,
) -> Result<Json<ProfileReport>, AppError> {
    Ok(Json(service.restore(&request)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router() -> Router {
        quiz_router(Arc::new(ProfileService::builtin()))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("json body")
    }

    fn post_json(uri: &str, payload: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request builds")
    }

    #[tokio::test]
    async fn lists_short_quiz_in_english() {
        let response = router()
            .oneshot(
                Request::get("/api/v1/quiz/questions?locale=en&length=33")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["length"], 33);
        assert_eq!(body["locale"], "en");
        assert_eq!(body["questions"].as_array().map(Vec::len), Some(33));
    }

    #[tokio::test]
    async fn unknown_locale_is_a_bad_request() {
        let response = router()
            .oneshot(
                Request::get("/api/v1/quiz/questions?locale=fr")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().is_some_and(|msg| msg.contains("fr")));
    }

    #[tokio::test]
    async fn unknown_option_is_a_bad_request() {
        let response = router()
            .oneshot(post_json(
                "/api/v1/profile",
                json!({
                    "answers": [{ "question_id": "mbti-ie-1", "option_key": "z" }],
                    "birth_date": "1990-05-17"
                }),
            ))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn saju_endpoint_computes_pillars() {
        let response = router()
            .oneshot(post_json(
                "/api/v1/saju",
                json!({ "birth_date": "1984-02-10", "birth_time": "12:30" }),
            ))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["summary"], "갑자 병인 을해 임오");
        assert_eq!(body["year"]["stem_latin"], "Gap");
    }

    #[tokio::test]
    async fn invalid_birth_time_is_a_bad_request() {
        let response = router()
            .oneshot(post_json(
                "/api/v1/saju",
                json!({ "birth_date": "1984-02-10", "birth_time": "25:99" }),
            ))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn restore_uses_the_requested_locale() {
        let response = router()
            .oneshot(post_json(
                "/api/v1/profile/restore",
                json!({
                    "stored": {
                        "mbti_type": "INFJ",
                        "tci_scores": { "NS": 5 },
                        "value_scores": {},
                        "birth_date": "1992-11-03"
                    },
                    "locale": "en"
                }),
            ))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["mbti_reading"]["label"], "The Advocate");
        assert_eq!(body["tci"]["NS"]["level"], "High");
    }
}
