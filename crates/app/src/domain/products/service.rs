//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::Mutex;
use tracing::{Span, info};

use crate::domain::products::{
    data::{NewProduct, ProductUpdate},
    errors::{ProductsServiceError, RepositoryError},
    query::ListProductsQuery,
    records::{ProductRecord, ProductUuid},
    repository::ProductsRepository,
    stats::InventoryStats,
    validation::{validate_new_product, validate_product_update},
};

/// The catalog's business rules over a [`ProductsRepository`].
///
/// Writes are serialised so the model-number check and the write that
/// follows it can't interleave with another writer in this process.
pub struct CatalogService {
    repository: Arc<dyn ProductsRepository>,
    writes: Mutex<()>,
}

impl CatalogService {
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>) -> Self {
        Self {
            repository,
            writes: Mutex::new(()),
        }
    }

    /// Fails when `model_number` is held by a record other than `except`.
    async fn ensure_model_number_free(
        &self,
        model_number: &str,
        except: Option<ProductUuid>,
    ) -> Result<(), ProductsServiceError> {
        let existing = self
            .repository
            .find_by_model_number(model_number.to_string())
            .await?;

        match existing {
            Some(product) if Some(product.uuid) != except => Err(
                ProductsServiceError::DuplicateModelNumber(model_number.to_string()),
            ),
            Some(_) | None => Ok(()),
        }
    }
}

fn duplicate_or(model_number: &str) -> impl FnOnce(RepositoryError) -> ProductsServiceError {
    move |error| match error {
        RepositoryError::DuplicateModelNumber => {
            ProductsServiceError::DuplicateModelNumber(model_number.to_string())
        }
        other => ProductsServiceError::Repository(other),
    }
}

#[async_trait]
impl ProductsService for CatalogService {
    #[tracing::instrument(name = "products.service.list_products", skip(self), err)]
    async fn list_products(
        &self,
        query: ListProductsQuery,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let products = self.repository.list_products().await?;

        Ok(query.apply(products))
    }

    #[tracing::instrument(
        name = "products.service.get_product",
        skip(self),
        fields(product_uuid = %product),
        err
    )]
    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        self.repository
            .get_product(product)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    #[tracing::instrument(
        name = "products.service.search_products",
        skip(self),
        fields(result_count = tracing::field::Empty),
        err
    )]
    async fn search_products(
        &self,
        query: String,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        if query.is_empty() {
            return Err(ProductsServiceError::InvalidQuery);
        }

        let products = self.repository.search_products(query).await?;

        Span::current().record("result_count", products.len());

        Ok(products)
    }

    #[tracing::instrument(
        name = "products.service.create_product",
        skip(self, product),
        fields(
            model_number = %product.model_number,
            product_uuid = tracing::field::Empty,
            color_count = product.colors_and_sizes.len()
        ),
        err
    )]
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let attributes = validate_new_product(product)?;
        let model_number = attributes.model_number.clone();

        let _guard = self.writes.lock().await;

        self.ensure_model_number_free(&model_number, None).await?;

        let record = self
            .repository
            .create_product(attributes)
            .await
            .map_err(duplicate_or(&model_number))?;

        Span::current().record("product_uuid", tracing::field::display(record.uuid));

        info!(product_uuid = %record.uuid, "created product");

        Ok(record)
    }

    #[tracing::instrument(
        name = "products.service.update_product",
        skip(self, update),
        fields(product_uuid = %product),
        err
    )]
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let changes = validate_product_update(update)?;
        let model_number = changes.model_number.clone();

        let _guard = self.writes.lock().await;

        if let Some(model_number) = &model_number {
            self.ensure_model_number_free(model_number, Some(product))
                .await?;
        }

        let updated = self
            .repository
            .update_product(product, changes)
            .await
            .map_err(duplicate_or(model_number.as_deref().unwrap_or_default()))?
            .ok_or(ProductsServiceError::NotFound)?;

        info!(product_uuid = %updated.uuid, "updated product");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "products.service.delete_product",
        skip(self),
        fields(product_uuid = %product),
        err
    )]
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let _guard = self.writes.lock().await;

        if !self.repository.delete_product(product).await? {
            return Err(ProductsServiceError::NotFound);
        }

        info!(product_uuid = %product, "deleted product");

        Ok(())
    }

    #[tracing::instrument(name = "products.service.inventory_stats", skip(self), err)]
    async fn inventory_stats(&self) -> Result<InventoryStats, ProductsServiceError> {
        let products = self.repository.list_products().await?;

        Ok(InventoryStats::collect(&products))
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, newest first unless `query` says otherwise.
    async fn list_products(
        &self,
        query: ListProductsQuery,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Case-insensitive search over model number, company name and piece
    /// type. An empty query is rejected.
    async fn search_products(
        &self,
        query: String,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Validates and stores a new product with a unique model number.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Validates and applies a partial update.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product with the given UUID.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;

    /// Counts products, colors, sizes and distinct companies.
    async fn inventory_stats(&self) -> Result<InventoryStats, ProductsServiceError>;
}
