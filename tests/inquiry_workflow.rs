//! End-to-end scenarios for the inquiry intake service: outreach rendering,
//! file-backed persistence, screening, and the HTTP surface, all driven
//! through the public facade.

mod common {
    use std::sync::Arc;

    use tempfile::TempDir;
    use tenant_intake::intake::{
        InquiryAgent, InquirySubmission, JsonFileStore, PropertyListing,
    };

    pub(super) fn listing() -> PropertyListing {
        PropertyListing {
            address: Some("Quincy, MA, 02169".to_string()),
            monthly_rent: Some(3200.0),
            bedrooms: Some(1),
            bathrooms: Some(2),
            available_date: Some("February 1, 2026".to_string()),
            form_url: Some("https://tenant-intake.example.com/form".to_string()),
        }
    }

    pub(super) fn submission() -> InquirySubmission {
        InquirySubmission {
            full_name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "555-0123".to_string(),
            current_address: "9 Elm Court".to_string(),
            desired_move_in_date: "2026-02-01".to_string(),
            monthly_income: 11000.0,
            employer: "Acme Logistics".to_string(),
            credit_score: 720,
            num_occupants: 2,
            has_rental_history: true,
            previous_landlord: "R. Alvarez".to_string(),
            previous_landlord_phone: "555-0188".to_string(),
            ..InquirySubmission::default()
        }
    }

    pub(super) fn risky_submission() -> InquirySubmission {
        InquirySubmission {
            monthly_income: 1000.0,
            credit_score: 600,
            has_rental_history: false,
            has_evictions: true,
            ..submission()
        }
    }

    /// File-backed agent rooted in a fresh temp directory. The directory
    /// handle keeps the store alive for the scenario.
    pub(super) fn file_agent(dir: &TempDir) -> Arc<InquiryAgent<JsonFileStore>> {
        let store = Arc::new(JsonFileStore::new(dir.path().join("tenant_responses.json")));
        Arc::new(InquiryAgent::new(listing(), store))
    }
}

mod persistence {
    use std::sync::Arc;

    use tenant_intake::intake::{InquiryAgent, JsonFileStore};

    use super::common::*;

    #[test]
    fn fresh_store_lists_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let agent = file_agent(&dir);

        assert!(agent.submissions().is_empty());
    }

    #[test]
    fn records_survive_agent_restarts() {
        let dir = tempfile::tempdir().expect("temp dir");
        let agent = file_agent(&dir);

        agent
            .record_submission(submission())
            .expect("first record persists");
        agent
            .record_submission(risky_submission())
            .expect("second record persists");

        // A second agent over the same file sees the same ordered log.
        let store = Arc::new(JsonFileStore::new(dir.path().join("tenant_responses.json")));
        let reopened = InquiryAgent::new(listing(), store);

        let stored = reopened.submissions();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].submission.full_name, "John Doe");
        assert_eq!(
            stored[0].property_address.as_deref(),
            Some("Quincy, MA, 02169")
        );
        assert!(stored[1].submission.has_evictions);
        assert!(stored[0].submitted_at <= stored[1].submitted_at);
    }
}

mod screening {
    use tenant_intake::intake::{screen, Recommendation};

    use super::common::*;

    #[test]
    fn strong_applicant_is_approved() {
        let result = screen(&listing(), &submission());

        assert_eq!(result.score, 100);
        assert!(result.flags.is_empty());
        assert_eq!(result.recommendation, Recommendation::Approve);
    }

    #[test]
    fn weak_applicant_is_denied_with_ordered_flags() {
        let result = screen(&listing(), &risky_submission());

        assert_eq!(result.score, 0);
        assert_eq!(result.recommendation, Recommendation::Deny);
        assert_eq!(result.recommendation.label(), "deny");
        assert!(result.flags[0].starts_with("Income below 3x rent requirement"));
        assert!(result.flags[1].starts_with("Credit score below preferred threshold"));
        assert_eq!(result.flags[2], "No rental history provided");
        assert_eq!(result.flags[3], "Previous evictions reported");
    }
}

mod routing {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tenant_intake::intake::inquiry_router;
    use tower::ServiceExt;

    use super::common::*;

    async fn json_body(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn submissions_flow_through_the_http_surface() {
        let dir = tempfile::tempdir().expect("temp dir");
        let router = inquiry_router(file_agent(&dir));

        for applicant in [submission(), risky_submission()] {
            let request = Request::builder()
                .method("POST")
                .uri("/api/v1/inquiries")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&applicant).expect("serialize submission"),
                ))
                .expect("request");

            let response = router
                .clone()
                .oneshot(request)
                .await
                .expect("router dispatch");
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/inquiries")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let listing_body = json_body(response).await;
        assert_eq!(listing_body.get("count").and_then(Value::as_u64), Some(2));

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/inquiries/1/screening")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let screening_body = json_body(response).await;
        assert_eq!(screening_body.get("recommendation"), Some(&json!("deny")));
        assert_eq!(
            screening_body.get("score").and_then(Value::as_u64),
            Some(0)
        );
    }
}
