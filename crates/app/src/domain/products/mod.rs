//! Products

pub mod data;
pub mod errors;
pub mod query;
pub mod records;
pub mod repository;
pub mod service;
pub mod stats;
pub mod validation;

pub use errors::{ProductsServiceError, RepositoryError};
pub use service::*;
