//! Product Index Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use inventory_app::domain::products::{
    query::{ListProductsQuery, ProductSort},
    validation::FieldError,
};

use crate::{
    extensions::*,
    products::{
        errors::{ProductsApiError, into_api_error},
        models::ProductResponse,
    },
};

/// Product Index Handler
///
/// Returns every product, newest first. `sort=model_number` orders by model
/// number instead; `variant` keeps products with a matching color or size.
#[endpoint(
    tags("dresses"),
    summary = "List Dresses",
    responses(
        (status_code = StatusCode::OK, description = "Products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown sort"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "products.index", skip(sort, variant, depot), err)]
pub(crate) async fn handler(
    sort: QueryParam<String, false>,
    variant: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, ProductsApiError> {
    let state = depot.state_or_500()?;

    let sort = sort
        .into_inner()
        .map(|sort| sort.parse::<ProductSort>())
        .transpose()
        .map_err(|error| {
            ProductsApiError::invalid(
                "Invalid query parameters",
                [FieldError::new("sort", error.to_string())],
            )
        })?;

    let products = state
        .products()
        .list_products(ListProductsQuery {
            sort,
            variant: variant.into_inner(),
        })
        .await
        .map_err(into_api_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use inventory_app::domain::products::{MockProductsService, records::ProductUuid};

    use crate::{
        products::errors::InvalidRequestResponse,
        test_helpers::{make_product, products_service, store_failure},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("api/dresses").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_products_in_service_order() -> TestResult {
        let uuid_a = ProductUuid::new();
        let uuid_b = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(|query| *query == ListProductsQuery::default())
            .return_once(move |_| Ok(vec![make_product(uuid_b), make_product(uuid_a)]));

        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_update_product().never();
        repo.expect_delete_product().never();

        let response: Vec<ProductResponse> = TestClient::get("http://example.com/api/dresses")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.len(), 2, "expected two products");
        assert_eq!(response[0].id, uuid_b.into_uuid());
        assert_eq!(response[1].id, uuid_a.into_uuid());
        assert_eq!(response[0].colors_and_sizes[0].name, "Red");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_sort_and_variant() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(|query| {
                *query
                    == ListProductsQuery {
                        sort: Some(ProductSort::ModelNumber),
                        variant: Some("red".to_string()),
                    }
            })
            .return_once(|_| Ok(vec![]));

        let res = TestClient::get("http://example.com/api/dresses?sort=model_number&variant=red")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_unknown_sort_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products().never();

        let mut res = TestClient::get("http://example.com/api/dresses?sort=price")
            .send(&make_service(repo))
            .await;

        let body: InvalidRequestResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(
            body.errors
                .iter()
                .any(|error| error.field == "sort" && error.message.contains("\"price\"")),
            "expected the rejected sort to be named: {body:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_store_error_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(|_| Err(store_failure()));

        let res = TestClient::get("http://example.com/api/dresses")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
