//! OpenAPI document for the country API.

use crate::country::{Country, CountryPayload};
use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::country as h;
use crate::response::{AverageValue, CountryEnvelope, DeletedEnvelope};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "A country API", description = "A simple REST API for countries"),
    paths(
        h::list_countries,
        h::create_country,
        h::read_country,
        h::replace_country,
        h::patch_country,
        h::delete_country,
        h::max_value,
        h::min_value,
        h::average_value,
    ),
    components(schemas(
        Country,
        CountryPayload,
        CountryEnvelope,
        DeletedEnvelope,
        AverageValue,
        ErrorBody,
        ErrorDetail,
    )),
    tags((name = "countries", description = "Country records"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /api/openapi.json
pub fn openapi_routes() -> Router {
    Router::new().route("/api/openapi.json", get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_country_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for p in [
            "/api/countries",
            "/api/country/{id}",
            "/api/countries/max_value/{field}",
            "/api/countries/min_value/{field}",
            "/api/countries/average_value/{field}",
        ] {
            assert!(paths.iter().any(|k| k.as_str() == p), "missing {}", p);
        }
    }
}
