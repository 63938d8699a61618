//! Product Records

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Color Variant UUID
pub type ColorUuid = TypedUuid<ColorVariant>;

/// Size UUID
pub type SizeUuid = TypedUuid<Size>;

/// A single purchasable size under a color, e.g. `"M"` or `"42"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub id: SizeUuid,
    pub value: String,
}

/// A named color option with its own sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorVariant {
    pub id: ColorUuid,
    pub name: String,
    pub sizes: Vec<Size>,
}

/// Validated product fields, everything except the store-assigned id and
/// timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductAttributes {
    pub model_number: String,
    pub specifications: String,
    pub company_name: String,
    pub piece_type: String,
    pub image_url: Option<String>,
    pub online_price: Option<String>,
    pub store_price: Option<String>,
    pub colors_and_sizes: Vec<ColorVariant>,
}

/// Validated partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductChanges {
    pub model_number: Option<String>,
    pub specifications: Option<String>,
    pub company_name: Option<String>,
    pub piece_type: Option<String>,
    pub image_url: Option<String>,
    pub online_price: Option<String>,
    pub store_price: Option<String>,
    pub colors_and_sizes: Option<Vec<ColorVariant>>,
}

/// Product Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    /// Store-assigned identifier, immutable.
    pub uuid: ProductUuid,

    /// Business-unique model number.
    pub model_number: String,

    pub specifications: String,
    pub company_name: String,
    pub piece_type: String,
    pub image_url: Option<String>,
    pub online_price: Option<String>,
    pub store_price: Option<String>,
    pub colors_and_sizes: Vec<ColorVariant>,

    /// Set once by the store on creation.
    pub created_at: Timestamp,

    /// Refreshed by the store on every mutation.
    pub updated_at: Timestamp,
}

impl ProductRecord {
    pub(crate) fn new(
        uuid: ProductUuid,
        attributes: ProductAttributes,
        created_at: Timestamp,
    ) -> Self {
        let ProductAttributes {
            model_number,
            specifications,
            company_name,
            piece_type,
            image_url,
            online_price,
            store_price,
            colors_and_sizes,
        } = attributes;

        Self {
            uuid,
            model_number,
            specifications,
            company_name,
            piece_type,
            image_url,
            online_price,
            store_price,
            colors_and_sizes,
            created_at,
            updated_at: created_at,
        }
    }

    /// Shallow-merge `changes` over this record. Timestamps are left to the
    /// caller.
    pub(crate) fn apply(&mut self, changes: ProductChanges) {
        let ProductChanges {
            model_number,
            specifications,
            company_name,
            piece_type,
            image_url,
            online_price,
            store_price,
            colors_and_sizes,
        } = changes;

        if let Some(model_number) = model_number {
            self.model_number = model_number;
        }
        if let Some(specifications) = specifications {
            self.specifications = specifications;
        }
        if let Some(company_name) = company_name {
            self.company_name = company_name;
        }
        if let Some(piece_type) = piece_type {
            self.piece_type = piece_type;
        }
        if image_url.is_some() {
            self.image_url = image_url;
        }
        if online_price.is_some() {
            self.online_price = online_price;
        }
        if store_price.is_some() {
            self.store_price = store_price;
        }
        if let Some(colors_and_sizes) = colors_and_sizes {
            self.colors_and_sizes = colors_and_sizes;
        }
    }

    /// Refresh `updated_at`, keeping it strictly increasing even when the
    /// clock hasn't moved since the last write.
    pub(crate) fn touch(&mut self, now: Timestamp) {
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at
                .checked_add(SignedDuration::from_nanos(1))
                .unwrap_or(now)
        };
    }

    /// Case-insensitive substring match on model number, company or piece
    /// type. `needle` must already be lowercase.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        [&self.model_number, &self.company_name, &self.piece_type]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Total number of sizes across all colors.
    pub fn size_count(&self) -> usize {
        self.colors_and_sizes
            .iter()
            .map(|color| color.sizes.len())
            .sum()
    }
}
