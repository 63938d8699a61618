//! Get Product Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{
        errors::{ProductsApiError, into_api_error},
        models::ProductResponse,
    },
};

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("dresses"),
    summary = "Get Dress",
    responses(
        (status_code = StatusCode::OK, description = "Product"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed id"),
    ),
)]
#[tracing::instrument(
    name = "products.get",
    skip(id, depot),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ProductsApiError> {
    let state = depot.state_or_500()?;
    let id = id.into_inner();

    tracing::Span::current().record("product_uuid", tracing::field::display(id));

    let product = state
        .products()
        .get_product(id.into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(product.into()))
}
