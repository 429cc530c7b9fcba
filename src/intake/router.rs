use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::domain::InquirySubmission;
use super::service::InquiryAgent;
use super::store::SubmissionStore;

/// Router builder exposing the agent's operations as JSON endpoints.
pub fn inquiry_router<S>(agent: Arc<InquiryAgent<S>>) -> Router
where
    S: SubmissionStore + 'static,
{
    Router::new()
        .route("/api/v1/outreach", get(outreach_handler::<S>))
        .route(
            "/api/v1/inquiries",
            get(list_handler::<S>).post(submit_handler::<S>),
        )
        .route(
            "/api/v1/inquiries/:index/screening",
            get(screening_handler::<S>),
        )
        .with_state(agent)
}

pub(crate) async fn outreach_handler<S>(State(agent): State<Arc<InquiryAgent<S>>>) -> Response
where
    S: SubmissionStore + 'static,
{
    let payload = json!({
        "response": agent.outreach_message(),
        "success": true,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn submit_handler<S>(
    State(agent): State<Arc<InquiryAgent<S>>>,
    axum::Json(submission): axum::Json<InquirySubmission>,
) -> Response
where
    S: SubmissionStore + 'static,
{
    match agent.record_submission(submission) {
        Ok(record) => {
            let screening = agent.screen(&record.submission);
            (StatusCode::CREATED, axum::Json(screening)).into_response()
        }
        Err(err) => {
            let payload = json!({
                "error": err.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_handler<S>(State(agent): State<Arc<InquiryAgent<S>>>) -> Response
where
    S: SubmissionStore + 'static,
{
    let submissions = agent.submissions();
    let payload = json!({
        "count": submissions.len(),
        "submissions": submissions,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn screening_handler<S>(
    State(agent): State<Arc<InquiryAgent<S>>>,
    Path(index): Path<usize>,
) -> Response
where
    S: SubmissionStore + 'static,
{
    match agent.submissions().into_iter().nth(index) {
        Some(record) => {
            let screening = agent.screen(&record.submission);
            (StatusCode::OK, axum::Json(screening)).into_response()
        }
        None => {
            let payload = json!({
                "error": "inquiry not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}
