use serde::{Deserialize, Serialize};

use super::domain::{InquirySubmission, PropertyListing, Recommendation};

const INCOME_MULTIPLE: f64 = 3.0;
const PREFERRED_CREDIT_SCORE: u16 = 650;
const APPROVE_THRESHOLD: i16 = 70;
const REVIEW_THRESHOLD: i16 = 50;

/// Scoring output for a single submission.
///
/// Flags appear in rule-evaluation order; the submission is carried through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub score: u8,
    pub flags: Vec<String>,
    pub recommendation: Recommendation,
    pub submission: InquirySubmission,
}

/// Apply the fixed-weight screening rubric to a submission.
///
/// Starts at 100 and evaluates every rule; rules never short-circuit each
/// other. The final score is clamped to 0.
pub fn screen(listing: &PropertyListing, submission: &InquirySubmission) -> ScreeningResult {
    let mut flags = Vec::new();
    let mut score: i16 = 100;

    // An unset or zero rent makes the required income zero, so the income
    // rule passes trivially.
    let required_income = listing.monthly_rent.unwrap_or(0.0) * INCOME_MULTIPLE;
    if submission.monthly_income < required_income {
        flags.push(format!(
            "Income below 3x rent requirement (${} < ${})",
            submission.monthly_income, required_income
        ));
        score -= 30;
    }

    // Desired move-in date versus the listing's availability is captured on
    // the stored submission but carries no weight in the rubric.

    if submission.credit_score < PREFERRED_CREDIT_SCORE {
        flags.push(format!(
            "Credit score below preferred threshold ({})",
            submission.credit_score
        ));
        score -= 20;
    }

    if !submission.has_rental_history {
        flags.push("No rental history provided".to_string());
        score -= 10;
    }

    if submission.has_evictions {
        flags.push("Previous evictions reported".to_string());
        score -= 40;
    }

    let recommendation = if score >= APPROVE_THRESHOLD {
        Recommendation::Approve
    } else if score >= REVIEW_THRESHOLD {
        Recommendation::Review
    } else {
        Recommendation::Deny
    };

    ScreeningResult {
        score: score.max(0) as u8,
        flags,
        recommendation,
        submission: submission.clone(),
    }
}
