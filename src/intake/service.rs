use std::sync::Arc;

use chrono::Utc;

use super::domain::{InquirySubmission, PropertyListing, SubmissionRecord};
use super::outreach;
use super::screening::{self, ScreeningResult};
use super::store::{StoreError, SubmissionStore};

/// Facade bundling the configured listing with the submission log.
///
/// The listing is immutable for the agent's lifetime; all persistence flows
/// through the injected store.
pub struct InquiryAgent<S> {
    listing: PropertyListing,
    store: Arc<S>,
}

impl<S> InquiryAgent<S>
where
    S: SubmissionStore,
{
    pub fn new(listing: PropertyListing, store: Arc<S>) -> Self {
        Self { listing, store }
    }

    pub fn listing(&self) -> &PropertyListing {
        &self.listing
    }

    /// Outreach text for the configured listing.
    pub fn outreach_message(&self) -> String {
        outreach::render(&self.listing)
    }

    /// Stamp a submission with the receipt time and listing address, persist
    /// it, and return the stored record.
    pub fn record_submission(
        &self,
        submission: InquirySubmission,
    ) -> Result<SubmissionRecord, StoreError> {
        let record = SubmissionRecord {
            submission,
            submitted_at: Utc::now(),
            property_address: self.listing.address.clone(),
        };

        self.store.append(record.clone())?;
        Ok(record)
    }

    /// Everything recorded so far, oldest first. An unreadable store lists
    /// as empty.
    pub fn submissions(&self) -> Vec<SubmissionRecord> {
        self.store.load()
    }

    /// Score a submission against the configured listing.
    pub fn screen(&self, submission: &InquirySubmission) -> ScreeningResult {
        screening::screen(&self.listing, submission)
    }
}
