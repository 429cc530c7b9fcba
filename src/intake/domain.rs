use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Static listing details used for outreach templating and screening.
///
/// Every field is optional: an unset field renders as a placeholder in the
/// outreach message, and an unset rent waives the income requirement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    pub address: Option<String>,
    pub monthly_rent: Option<f64>,
    pub bedrooms: Option<u8>,
    pub bathrooms: Option<u8>,
    pub available_date: Option<String>,
    pub form_url: Option<String>,
}

/// One applicant's form response.
///
/// Fields the form omits take their defaults; the agent assumes well-typed
/// input and applies no validation beyond that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InquirySubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub current_address: String,
    pub desired_move_in_date: String,
    pub monthly_income: f64,
    pub employer: String,
    pub credit_score: u16,
    pub num_occupants: u8,
    pub has_pets: bool,
    pub pet_details: String,
    pub has_rental_history: bool,
    pub previous_landlord: String,
    pub previous_landlord_phone: String,
    pub has_evictions: bool,
    pub additional_info: String,
}

impl Default for InquirySubmission {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            current_address: String::new(),
            desired_move_in_date: String::new(),
            monthly_income: 0.0,
            employer: String::new(),
            credit_score: 0,
            num_occupants: 1,
            has_pets: false,
            pet_details: String::new(),
            has_rental_history: false,
            previous_landlord: String::new(),
            previous_landlord_phone: String::new(),
            has_evictions: false,
            additional_info: String::new(),
        }
    }
}

/// A submission as persisted: the form payload stamped with the receipt time
/// and the address of the listing it was submitted against.
///
/// Records are immutable once written; the store never mutates or removes an
/// entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    #[serde(flatten)]
    pub submission: InquirySubmission,
    pub submitted_at: DateTime<Utc>,
    pub property_address: Option<String>,
}

/// Screening verdict derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Approve,
    Review,
    Deny,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Recommendation::Approve => "approve",
            Recommendation::Review => "review",
            Recommendation::Deny => "deny",
        }
    }
}
