//! Create Product Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    products::{
        errors::{ProductsApiError, into_api_error},
        models::{CreateProductRequest, ProductResponse},
    },
};

/// Create Product Handler
#[endpoint(
    tags("dresses"),
    summary = "Create Dress",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "Model number already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid product data"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(json, depot, res),
    fields(model_number = tracing::field::Empty, product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, ProductsApiError> {
    let state = depot.state_or_500()?;
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("model_number", request.model_number.as_str());

    let product = state
        .products()
        .create_product(request.into())
        .await
        .map_err(into_api_error)?;

    span.record("product_uuid", tracing::field::display(product.uuid));

    res.add_header(LOCATION, format!("/api/dresses/{}", product.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}
