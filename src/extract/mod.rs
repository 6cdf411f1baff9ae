//! Extraction of structured product records from rendered markup

mod listing;
mod record;

pub use listing::{extract_listings, ListingSelectors};
pub use record::ProductRecord;
