//! Country API routes and the HTML listing page.

use crate::handlers::{
    average_value, countries_page, create_country, delete_country, list_countries, max_value,
    min_value, patch_country, read_country, replace_country,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn country_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/countries", get(list_countries).post(create_country))
        .route("/api/countries/max_value/:field", get(max_value))
        .route("/api/countries/min_value/:field", get(min_value))
        .route("/api/countries/average_value/:field", get(average_value))
        .route(
            "/api/country/:id",
            get(read_country)
                .put(replace_country)
                .patch(patch_country)
                .delete(delete_country),
        )
        .with_state(state)
}

pub fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/countries", get(countries_page).post(countries_page))
        .with_state(state)
}
