//! List filtering and ordering.

use std::{fmt::Display, str::FromStr};

use thiserror::Error;

use crate::domain::products::records::ProductRecord;

/// Ordering applied to a product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSort {
    /// Newest first, the store's natural order.
    #[default]
    CreatedAt,

    /// Ascending by model number.
    ModelNumber,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort {0:?}, expected `created_at` or `model_number`")]
pub struct UnknownSort(String);

impl FromStr for ProductSort {
    type Err = UnknownSort;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" | "createdAt" => Ok(Self::CreatedAt),
            "model_number" | "modelNumber" => Ok(Self::ModelNumber),
            other => Err(UnknownSort(other.to_string())),
        }
    }
}

impl Display for ProductSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::CreatedAt => "created_at",
            Self::ModelNumber => "model_number",
        })
    }
}

/// Optional filter and sort for [`list_products`](crate::domain::products::ProductsService::list_products).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListProductsQuery {
    pub sort: Option<ProductSort>,

    /// Keep products with a color name or size value containing this text,
    /// ignoring case.
    pub variant: Option<String>,
}

impl ListProductsQuery {
    /// Filter then sort `products`, which must already be in store order.
    pub(crate) fn apply(&self, mut products: Vec<ProductRecord>) -> Vec<ProductRecord> {
        if let Some(needle) = self
            .variant
            .as_deref()
            .filter(|variant| !variant.is_empty())
            .map(str::to_lowercase)
        {
            products.retain(|product| has_variant(product, &needle));
        }

        if self.sort == Some(ProductSort::ModelNumber) {
            products.sort_by(|a, b| a.model_number.cmp(&b.model_number));
        }

        products
    }
}

fn has_variant(product: &ProductRecord, needle: &str) -> bool {
    product.colors_and_sizes.iter().any(|color| {
        color.name.to_lowercase().contains(needle)
            || color
                .sizes
                .iter()
                .any(|size| size.value.to_lowercase().contains(needle))
    })
}
