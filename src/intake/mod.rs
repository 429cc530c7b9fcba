//! Rental inquiry intake: outreach templating, submission persistence, and
//! fixed-weight screening behind a single agent facade.
//!
//! The agent holds the listing configuration immutably for its lifetime and
//! treats the submission log as an append-only sequence. Identity of a stored
//! submission is positional; there is no durable unique id.

pub mod domain;
pub mod outreach;
pub mod router;
pub mod screening;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{InquirySubmission, PropertyListing, Recommendation, SubmissionRecord};
pub use router::inquiry_router;
pub use screening::{screen, ScreeningResult};
pub use service::InquiryAgent;
pub use store::{JsonFileStore, StoreError, SubmissionStore};
