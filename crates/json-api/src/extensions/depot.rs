//! Depot helper extensions.

use std::{any::type_name, sync::Arc};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::state::State;

/// Typed access to values injected into the depot.
pub(crate) trait DepotExt {
    /// The shared handler state, or a 500 when the injector hoop is missing.
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError>;
}

impl DepotExt for Depot {
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain::<Arc<State>>().map_err(|_missing| {
            error!("depot holds no {}", type_name::<Arc<State>>());

            StatusError::internal_server_error()
        })
    }
}
