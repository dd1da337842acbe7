//! HTTP surface over the quiz engine.

mod router;
mod service;

pub use router::quiz_router;
pub use service::{
    ProfileRequest, ProfileResponse, ProfileService, QuestionSet, RestoreRequest, SajuRequest,
};
