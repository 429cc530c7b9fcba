use super::domain::PropertyListing;

const MISSING_FIELD: &str = "N/A";
const MISSING_FORM_URL: &str = "[FORM_URL_HERE]";

/// Render the outreach message for a listing.
///
/// Pure formatting over the listing fields. Unset fields fall back to
/// placeholder text rather than failing.
pub fn render(listing: &PropertyListing) -> String {
    let location = listing.address.as_deref().unwrap_or("this location");
    let address = listing.address.as_deref().unwrap_or(MISSING_FIELD);
    let form_url = listing.form_url.as_deref().unwrap_or(MISSING_FORM_URL);
    let available = listing.available_date.as_deref().unwrap_or(MISSING_FIELD);
    let rent = display_or_placeholder(listing.monthly_rent);
    let bedrooms = display_or_placeholder(listing.bedrooms);
    let bathrooms = display_or_placeholder(listing.bathrooms);

    format!(
        "Hi! Thank you for your interest in our property at {location}.\n\
         \n\
         To help us process your inquiry quickly, please fill out this brief form with your information:\n\
         \n\
         Tenant Application Form:\n\
         {form_url}\n\
         \n\
         The form takes just 2-3 minutes and asks for:\n\
         - Contact information\n\
         - Move-in date\n\
         - Income verification\n\
         - Rental history\n\
         - Number of occupants\n\
         \n\
         Once submitted, I'll review your application and get back to you within 24 hours.\n\
         \n\
         Looking forward to hearing from you!\n\
         \n\
         Property Details:\n\
         - Address: {address}\n\
         - Rent: ${rent}/month\n\
         - Bedrooms: {bedrooms}\n\
         - Bathrooms: {bathrooms}\n\
         - Available: {available}\n"
    )
}

fn display_or_placeholder<T: ToString>(value: Option<T>) -> String {
    value
        .map(|inner| inner.to_string())
        .unwrap_or_else(|| MISSING_FIELD.to_string())
}
