use serde::{Deserialize, Serialize};

/// One product listing extracted from a result page
///
/// All six fields come from the same listing item node at extraction time.
/// Records carry no identifier, so re-extracting a page produces duplicate
/// documents in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Thumbnail source URL
    pub image: String,

    /// Display price text, whitespace-normalized
    pub price: String,

    /// Number-of-buyers text with its fixed trailing suffix removed
    pub deal: String,

    /// Listing title, whitespace-normalized
    pub title: String,

    /// Seller/shop name
    pub shop: String,

    /// Seller location text
    pub location: String,
}
