//! Products Repository

use async_trait::async_trait;
use mockall::automock;

use crate::domain::products::{
    errors::RepositoryError,
    records::{ProductAttributes, ProductChanges, ProductRecord, ProductUuid},
};

mod memory;
mod postgres;

pub use memory::MemoryProductsRepository;
pub use postgres::PgProductsRepository;

/// Keyed storage for product records.
///
/// Implementations assign ids and timestamps but enforce no business rules:
/// a repository will happily hold two records with the same model number if
/// asked to. Absent records are a normal outcome, reported as `None` or
/// `false`.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Stores a new record with a fresh id and `created_at == updated_at`.
    async fn create_product(
        &self,
        attributes: ProductAttributes,
    ) -> Result<ProductRecord, RepositoryError>;

    /// Fetches a record by id.
    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, RepositoryError>;

    /// Fetches the first record whose model number matches exactly.
    async fn find_by_model_number(
        &self,
        model_number: String,
    ) -> Result<Option<ProductRecord>, RepositoryError>;

    /// All records, newest first.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, RepositoryError>;

    /// Shallow-merges `changes` into a record and refreshes `updated_at`.
    async fn update_product(
        &self,
        product: ProductUuid,
        changes: ProductChanges,
    ) -> Result<Option<ProductRecord>, RepositoryError>;

    /// Removes a record, returning whether one existed.
    async fn delete_product(&self, product: ProductUuid) -> Result<bool, RepositoryError>;

    /// Case-insensitive substring search over model number, company name and
    /// piece type.
    async fn search_products(&self, query: String)
    -> Result<Vec<ProductRecord>, RepositoryError>;
}
