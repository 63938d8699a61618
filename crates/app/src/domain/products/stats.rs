//! Inventory statistics.

use rustc_hash::FxHashSet;

use crate::domain::products::records::ProductRecord;

/// Aggregate counts over the whole catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryStats {
    pub total_products: usize,
    pub total_colors: usize,
    pub total_sizes: usize,

    /// Distinct company names, compared exactly.
    pub unique_companies: usize,
}

impl InventoryStats {
    pub(crate) fn collect(products: &[ProductRecord]) -> Self {
        let companies: FxHashSet<&str> = products
            .iter()
            .map(|product| product.company_name.as_str())
            .collect();

        Self {
            total_products: products.len(),
            total_colors: products.iter().map(|p| p.colors_and_sizes.len()).sum(),
            total_sizes: products.iter().map(ProductRecord::size_count).sum(),
            unique_companies: companies.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::domain::products::records::{
        ColorUuid, ColorVariant, ProductAttributes, ProductUuid, Size, SizeUuid,
    };

    use super::*;

    fn product(company_name: &str, sizes_per_color: &[usize]) -> ProductRecord {
        ProductRecord::new(
            ProductUuid::new(),
            ProductAttributes {
                model_number: ProductUuid::new().to_string(),
                specifications: "Linen".to_string(),
                company_name: company_name.to_string(),
                piece_type: "Dress".to_string(),
                image_url: None,
                online_price: None,
                store_price: None,
                colors_and_sizes: sizes_per_color
                    .iter()
                    .map(|count| ColorVariant {
                        id: ColorUuid::new(),
                        name: "Red".to_string(),
                        sizes: (0..*count)
                            .map(|n| Size {
                                id: SizeUuid::new(),
                                value: n.to_string(),
                            })
                            .collect(),
                    })
                    .collect(),
            },
            Timestamp::UNIX_EPOCH,
        )
    }

    #[test]
    fn empty_catalog_is_all_zeroes() {
        assert_eq!(InventoryStats::collect(&[]), InventoryStats::default());
    }

    #[test]
    fn counts_colors_sizes_and_companies() {
        let products = vec![
            product("Laroza", &[2, 3]),
            product("Laroza", &[1]),
            product("laroza", &[4]),
        ];

        assert_eq!(
            InventoryStats::collect(&products),
            InventoryStats {
                total_products: 3,
                total_colors: 4,
                total_sizes: 10,
                unique_companies: 2,
            }
        );
    }
}
