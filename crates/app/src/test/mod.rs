//! Shared fixtures for PostgreSQL-backed tests.

mod db;

pub(crate) use context::TestContext;
pub(crate) use db::TestDb;
