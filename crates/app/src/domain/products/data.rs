//! Products Data
//!
//! Unvalidated candidates as they arrive from a client. Variant ids are
//! plain strings here: clients use throwaway keys for rows they haven't saved
//! yet, and only UUIDs survive validation.

/// New Size Data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSize {
    pub id: Option<String>,
    pub value: String,
}

/// New Color Variant Data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewColorVariant {
    pub id: Option<String>,
    pub name: String,
    pub sizes: Vec<NewSize>,
}

/// New Product Data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProduct {
    pub model_number: String,
    pub specifications: String,
    pub company_name: String,
    pub piece_type: String,
    pub image_url: Option<String>,
    pub online_price: Option<String>,
    pub store_price: Option<String>,
    pub colors_and_sizes: Vec<NewColorVariant>,
}

/// Product Update Data
///
/// Only the fields that are `Some` are validated and written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub model_number: Option<String>,
    pub specifications: Option<String>,
    pub company_name: Option<String>,
    pub piece_type: Option<String>,
    pub image_url: Option<String>,
    pub online_price: Option<String>,
    pub store_price: Option<String>,
    pub colors_and_sizes: Option<Vec<NewColorVariant>>,
}
