//! In-memory products repository.

use async_trait::async_trait;
use jiff::Timestamp;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::domain::products::{
    errors::RepositoryError,
    records::{ProductAttributes, ProductChanges, ProductRecord, ProductUuid},
    repository::ProductsRepository,
};

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryProductsRepository {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    next_sequence: u64,
    products: FxHashMap<ProductUuid, Stored>,
}

#[derive(Debug)]
struct Stored {
    /// Insertion order, used to break `created_at` ties and to order search
    /// results.
    sequence: u64,
    record: ProductRecord,
}

impl MemoryProductsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl State {
    fn in_insertion_order(&self) -> Vec<&Stored> {
        let mut stored: Vec<&Stored> = self.products.values().collect();

        stored.sort_by_key(|stored| stored.sequence);

        stored
    }
}

#[async_trait]
impl ProductsRepository for MemoryProductsRepository {
    async fn create_product(
        &self,
        attributes: ProductAttributes,
    ) -> Result<ProductRecord, RepositoryError> {
        let mut state = self.state.write().await;

        let record = ProductRecord::new(ProductUuid::new(), attributes, Timestamp::now());
        let sequence = state.next_sequence;

        state.next_sequence += 1;
        state.products.insert(
            record.uuid,
            Stored {
                sequence,
                record: record.clone(),
            },
        );

        Ok(record)
    }

    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, RepositoryError> {
        let state = self.state.read().await;

        Ok(state
            .products
            .get(&product)
            .map(|stored| stored.record.clone()))
    }

    async fn find_by_model_number(
        &self,
        model_number: String,
    ) -> Result<Option<ProductRecord>, RepositoryError> {
        let state = self.state.read().await;

        Ok(state
            .in_insertion_order()
            .into_iter()
            .find(|stored| stored.record.model_number == model_number)
            .map(|stored| stored.record.clone()))
    }

    async fn list_products(&self) -> Result<Vec<ProductRecord>, RepositoryError> {
        let state = self.state.read().await;

        let mut stored: Vec<&Stored> = state.products.values().collect();

        stored.sort_by(|a, b| {
            b.record
                .created_at
                .cmp(&a.record.created_at)
                .then(b.sequence.cmp(&a.sequence))
        });

        Ok(stored
            .into_iter()
            .map(|stored| stored.record.clone())
            .collect())
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        changes: ProductChanges,
    ) -> Result<Option<ProductRecord>, RepositoryError> {
        let mut state = self.state.write().await;

        let Some(stored) = state.products.get_mut(&product) else {
            return Ok(None);
        };

        stored.record.apply(changes);
        stored.record.touch(Timestamp::now());

        Ok(Some(stored.record.clone()))
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().await;

        Ok(state.products.remove(&product).is_some())
    }

    async fn search_products(
        &self,
        query: String,
    ) -> Result<Vec<ProductRecord>, RepositoryError> {
        let needle = query.to_lowercase();
        let state = self.state.read().await;

        Ok(state
            .in_insertion_order()
            .into_iter()
            .filter(|stored| stored.record.matches_search(&needle))
            .map(|stored| stored.record.clone())
            .collect())
    }
}
