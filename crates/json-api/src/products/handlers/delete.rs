//! Delete Product Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::errors::{ProductsApiError, into_api_error},
};

/// Product Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDeletedResponse {
    /// Confirmation message
    pub message: String,
}

/// Delete Product Handler
#[endpoint(
    tags("dresses"),
    summary = "Delete Dress",
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.delete",
    skip(id, depot),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductDeletedResponse>, ProductsApiError> {
    let state = depot.state_or_500()?;
    let id = id.into_inner();

    tracing::Span::current().record("product_uuid", tracing::field::display(id));

    state
        .products()
        .delete_product(id.into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(ProductDeletedResponse {
        message: "Product deleted".to_string(),
    }))
}
