//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use inventory_app::{
    context::AppContext,
    domain::products::{
        MockProductsService, ProductsServiceError, RepositoryError,
        records::{ColorUuid, ColorVariant, ProductRecord, ProductUuid, Size, SizeUuid},
    },
};

use crate::state::State;

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        model_number: "M1".to_string(),
        specifications: "Silk, floor length".to_string(),
        company_name: "Laroza".to_string(),
        piece_type: "Evening Dress".to_string(),
        image_url: None,
        online_price: Some("1200".to_string()),
        store_price: None,
        colors_and_sizes: vec![ColorVariant {
            id: ColorUuid::new(),
            name: "Red".to_string(),
            sizes: vec![Size {
                id: SizeUuid::new(),
                value: "M".to_string(),
            }],
        }],
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
    })
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}

/// The store was unreachable.
pub(crate) fn store_failure() -> ProductsServiceError {
    ProductsServiceError::Repository(RepositoryError::Sql(sqlx::Error::PoolTimedOut))
}
