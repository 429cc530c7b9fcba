use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::intake::domain::{InquirySubmission, PropertyListing, SubmissionRecord};
use crate::intake::router::inquiry_router;
use crate::intake::service::InquiryAgent;
use crate::intake::store::{StoreError, SubmissionStore};

pub(super) fn listing() -> PropertyListing {
    PropertyListing {
        address: Some("123 Main Street, Apt 2B".to_string()),
        monthly_rent: Some(1500.0),
        bedrooms: Some(2),
        bathrooms: Some(1),
        available_date: Some("March 1, 2026".to_string()),
        form_url: Some("http://localhost:3000/form".to_string()),
    }
}

pub(super) fn submission() -> InquirySubmission {
    InquirySubmission {
        full_name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        phone: "555-0123".to_string(),
        current_address: "9 Elm Court".to_string(),
        desired_move_in_date: "2026-03-01".to_string(),
        monthly_income: 5000.0,
        employer: "Acme Logistics".to_string(),
        credit_score: 720,
        num_occupants: 2,
        has_pets: false,
        pet_details: String::new(),
        has_rental_history: true,
        previous_landlord: "R. Alvarez".to_string(),
        previous_landlord_phone: "555-0188".to_string(),
        has_evictions: false,
        additional_info: String::new(),
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

#[derive(Default)]
pub(super) struct MemoryStore {
    records: Mutex<Vec<SubmissionRecord>>,
}

impl SubmissionStore for MemoryStore {
    fn append(&self, record: SubmissionRecord) -> Result<(), StoreError> {
        self.records
            .lock()
            .expect("store mutex poisoned")
            .push(record);
        Ok(())
    }

    fn load(&self) -> Vec<SubmissionRecord> {
        self.records.lock().expect("store mutex poisoned").clone()
    }
}

pub(super) struct OfflineStore;

impl SubmissionStore for OfflineStore {
    fn append(&self, _record: SubmissionRecord) -> Result<(), StoreError> {
        Err(StoreError::Write(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk full",
        )))
    }

    fn load(&self) -> Vec<SubmissionRecord> {
        Vec::new()
    }
}

pub(super) fn build_agent() -> Arc<InquiryAgent<MemoryStore>> {
    Arc::new(InquiryAgent::new(
        listing(),
        Arc::new(MemoryStore::default()),
    ))
}

pub(super) fn build_router() -> axum::Router {
    inquiry_router(build_agent())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
