//! Country API: CRUD, sorting and min/max/average queries over a single
//! `country` table, plus an HTML listing page.

pub mod config;
pub mod country;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod query;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use country::{Country, CountryPayload};
pub use error::{AppError, ConfigError};
pub use query::{resolve_average, resolve_extremum, resolve_sort, CountryField, Extremum, SortDirection, SortSpec};
pub use routes::{app, common_routes_with_ready, country_routes, page_routes};
pub use service::PayloadValidator;
pub use state::AppState;
pub use store::{ensure_country_table, ensure_database_exists, CountryStore, MemoryCountryStore, PgCountryStore};
