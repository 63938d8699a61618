//! Update Product Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{
        errors::{ProductsApiError, into_api_error},
        models::{ProductResponse, UpdateProductRequest},
    },
};

/// Product Update Handler
///
/// Only the fields present in the body are changed.
#[endpoint(
    tags("dresses"),
    summary = "Update Dress",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Model number already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot),
    fields(
        product_uuid = tracing::field::Empty,
        replaces_colors = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ProductsApiError> {
    let state = depot.state_or_500()?;
    let request = json.into_inner();
    let id = id.into_inner();

    let span = tracing::Span::current();

    span.record("product_uuid", tracing::field::display(id));
    span.record("replaces_colors", request.colors_and_sizes.is_some());

    let product = state
        .products()
        .update_product(id.into(), request.into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(product.into()))
}
