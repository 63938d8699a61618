//! State

use std::sync::Arc;

use inventory_app::{context::AppContext, domain::products::ProductsService};

/// Shared handler state, injected into the depot once per request.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }

    /// The catalog every product handler talks to.
    pub(crate) fn products(&self) -> &dyn ProductsService {
        self.app.products.as_ref()
    }
}
