//! Search Products Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    products::{
        errors::{ProductsApiError, into_api_error},
        models::ProductResponse,
    },
};

/// Search Products Handler
///
/// Case-insensitive match on model number, company name or piece type.
#[endpoint(
    tags("dresses"),
    summary = "Search Dresses",
    responses(
        (status_code = StatusCode::OK, description = "Matching products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or empty query"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.search",
    skip(q, depot),
    fields(query = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    q: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, ProductsApiError> {
    let state = depot.state_or_500()?;

    let query = q.into_inner().unwrap_or_default();

    tracing::Span::current().record("query", query.as_str());

    let products = state
        .products()
        .search_products(query)
        .await
        .map_err(into_api_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
