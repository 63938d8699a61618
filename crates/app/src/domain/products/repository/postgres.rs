//! PostgreSQL products repository.

use async_trait::async_trait;
use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use serde_json::Value;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::products::{
    errors::RepositoryError,
    records::{ColorVariant, ProductAttributes, ProductChanges, ProductRecord, ProductUuid},
    repository::ProductsRepository,
};

const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const FIND_BY_MODEL_NUMBER_SQL: &str = include_str!("sql/find_by_model_number.sql");
const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const SEARCH_PRODUCTS_SQL: &str = include_str!("sql/search_products.sql");

/// Store backed by the `products` table. Colors and sizes live in a `jsonb`
/// column; `model_number` carries a unique constraint.
#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn create_product(
        &self,
        attributes: ProductAttributes,
    ) -> Result<ProductRecord, RepositoryError> {
        let colors_and_sizes = serde_json::to_value(&attributes.colors_and_sizes)?;
        let now = SqlxTimestamp::from(Timestamp::now());

        let created = query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(ProductUuid::new().into_uuid())
            .bind(attributes.model_number)
            .bind(attributes.specifications)
            .bind(attributes.company_name)
            .bind(attributes.piece_type)
            .bind(attributes.image_url)
            .bind(attributes.online_price)
            .bind(attributes.store_price)
            .bind(colors_and_sizes)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, RepositoryError> {
        let product = query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    async fn find_by_model_number(
        &self,
        model_number: String,
    ) -> Result<Option<ProductRecord>, RepositoryError> {
        let product = query_as::<Postgres, ProductRecord>(FIND_BY_MODEL_NUMBER_SQL)
            .bind(model_number)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    async fn list_products(&self) -> Result<Vec<ProductRecord>, RepositoryError> {
        let products = query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        changes: ProductChanges,
    ) -> Result<Option<ProductRecord>, RepositoryError> {
        let colors_and_sizes = changes
            .colors_and_sizes
            .as_ref()
            .map(serde_json::to_value)
            .transpose()?;

        let updated = query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(changes.model_number)
            .bind(changes.specifications)
            .bind(changes.company_name)
            .bind(changes.piece_type)
            .bind(changes.image_url)
            .bind(changes.online_price)
            .bind(changes.store_price)
            .bind(colors_and_sizes)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<bool, RepositoryError> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    async fn search_products(
        &self,
        query: String,
    ) -> Result<Vec<ProductRecord>, RepositoryError> {
        let products = query_as::<Postgres, ProductRecord>(SEARCH_PRODUCTS_SQL)
            .bind(query)
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let colors_and_sizes: Value = row.try_get("colors_and_sizes")?;

        let colors_and_sizes = serde_json::from_value::<Vec<ColorVariant>>(colors_and_sizes)
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "colors_and_sizes".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            model_number: row.try_get("model_number")?,
            specifications: row.try_get("specifications")?,
            company_name: row.try_get("company_name")?,
            piece_type: row.try_get("piece_type")?,
            image_url: row.try_get("image_url")?,
            online_price: row.try_get("online_price")?,
            store_price: row.try_get("store_price")?,
            colors_and_sizes,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::products::records::{ColorUuid, Size, SizeUuid},
        test::TestDb,
    };

    use super::*;

    fn attributes(model_number: &str) -> ProductAttributes {
        ProductAttributes {
            model_number: model_number.to_string(),
            specifications: "Lace, mermaid cut".to_string(),
            company_name: "Laroza".to_string(),
            piece_type: "Evening Dress".to_string(),
            image_url: Some("https://example.com/dress.png".to_string()),
            online_price: Some("1200".to_string()),
            store_price: None,
            colors_and_sizes: vec![ColorVariant {
                id: ColorUuid::new(),
                name: "Navy".to_string(),
                sizes: vec![
                    Size {
                        id: SizeUuid::new(),
                        value: "S".to_string(),
                    },
                    Size {
                        id: SizeUuid::new(),
                        value: "M".to_string(),
                    },
                ],
            }],
        }
    }

    #[test]
    fn create_writes_one_timestamp_to_both_columns() {
        let values = CREATE_PRODUCT_SQL
            .split("VALUES")
            .nth(1)
            .unwrap_or_default();

        assert!(
            values.contains("$10, $10"),
            "created_at and updated_at should share a bind: {values}"
        );
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn create_then_get_round_trips_variants() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgProductsRepository::new(db.pool().clone());
        let attributes = attributes("M1");

        let created = repository.create_product(attributes.clone()).await?;

        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(created.colors_and_sizes, attributes.colors_and_sizes);

        let fetched = repository.get_product(created.uuid).await?;

        assert_eq!(fetched, Some(created));

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn unique_constraint_reports_duplicate_model_number() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgProductsRepository::new(db.pool().clone());

        repository.create_product(attributes("M1")).await?;

        let result = repository.create_product(attributes("M1")).await;

        assert!(
            matches!(result, Err(RepositoryError::DuplicateModelNumber)),
            "expected DuplicateModelNumber, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn update_merges_and_bumps_updated_at() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgProductsRepository::new(db.pool().clone());

        let created = repository.create_product(attributes("M1")).await?;

        let updated = repository
            .update_product(
                created.uuid,
                ProductChanges {
                    store_price: Some("1500".to_string()),
                    ..ProductChanges::default()
                },
            )
            .await?
            .ok_or("product should exist")?;

        assert_eq!(updated.store_price.as_deref(), Some("1500"));
        assert_eq!(updated.model_number, "M1");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn delete_then_search_and_list() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgProductsRepository::new(db.pool().clone());

        let first = repository.create_product(attributes("abc-1")).await?;
        let second = repository.create_product(attributes("XYZ-2")).await?;

        let found = repository.search_products("ABC".to_string()).await?;

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].uuid, first.uuid);

        let listed: Vec<ProductUuid> = repository
            .list_products()
            .await?
            .into_iter()
            .map(|p| p.uuid)
            .collect();

        assert_eq!(listed, vec![second.uuid, first.uuid]);

        assert!(repository.delete_product(first.uuid).await?);
        assert!(!repository.delete_product(first.uuid).await?);
        assert!(repository.get_product(first.uuid).await?.is_none());

        Ok(())
    }
}
