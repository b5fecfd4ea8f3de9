//! Router assembly.

mod common;
mod country;

pub use common::common_routes_with_ready;
pub use country::{country_routes, page_routes};

use crate::openapi::openapi_routes;
use crate::state::AppState;
use axum::Router;

/// Every route of the service, without middleware layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(country_routes(state.clone()))
        .merge(page_routes(state))
        .merge(openapi_routes())
}
