//! Inventory Stats Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{
        errors::{ProductsApiError, into_api_error},
        models::InventoryStatsResponse,
    },
};

/// Inventory Stats Handler
///
/// Counts products, colors, sizes and distinct companies.
#[endpoint(tags("dresses"), summary = "Inventory Statistics")]
#[tracing::instrument(name = "products.stats", skip(depot), err)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<InventoryStatsResponse>, ProductsApiError> {
    let state = depot.state_or_500()?;

    let stats = state
        .products()
        .inventory_stats()
        .await
        .map_err(into_api_error)?;

    Ok(Json(stats.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use inventory_app::domain::products::{MockProductsService, stats::InventoryStats};

    use crate::test_helpers::{products_service, store_failure};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("api/dresses/stats").get(handler))
    }

    #[tokio::test]
    async fn test_stats_returns_counts() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_inventory_stats().once().return_once(|| {
            Ok(InventoryStats {
                total_products: 2,
                total_colors: 3,
                total_sizes: 5,
                unique_companies: 1,
            })
        });

        let mut res = TestClient::get("http://example.com/api/dresses/stats")
            .send(&make_service(repo))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            serde_json::json!({
                "totalProducts": 2,
                "totalColors": 3,
                "totalSizes": 5,
                "uniqueCompanies": 1
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_stats_store_error_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_inventory_stats()
            .once()
            .return_once(|| Err(store_failure()));

        let res = TestClient::get("http://example.com/api/dresses/stats")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
