//! App Router

use salvo::Router;

use crate::{healthcheck, products};

/// Routes for the dress catalog.
///
/// Literal segments are pushed before `{id}` so `search` and `stats` are
/// never read as product ids.
pub(crate) fn app_router() -> Router {
    Router::new()
        .get(healthcheck::info)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("api/dresses")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(Router::with_path("search").get(products::search::handler))
                .push(Router::with_path("stats").get(products::stats::handler))
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
}
