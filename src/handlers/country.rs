//! Country resource handlers: list, create, read, replace, patch, delete,
//! max/min by field, average by field.

use crate::country::{Country, CountryPayload};
use crate::error::{AppError, ErrorBody};
use crate::query::{resolve_average, resolve_extremum, resolve_sort, Extremum};
use crate::response::{self, AverageValue, CountryEnvelope, DeletedEnvelope};
use crate::service::WriteMode;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Column to sort by; ignored when it is not a country field.
    pub sort: Option<String>,
    /// `asc` (default) or `desc`; any other value sorts ascending.
    pub order: Option<String>,
}

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest("invalid id".into()))
}

#[utoipa::path(
    get,
    path = "/api/countries",
    tag = "countries",
    params(ListParams),
    responses((status = 200, description = "All countries", body = [Country]))
)]
pub async fn list_countries(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Country>>, AppError> {
    let sort = resolve_sort(params.sort.as_deref(), params.order.as_deref());
    let rows = state.store.list(sort).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    post,
    path = "/api/countries",
    tag = "countries",
    request_body = CountryPayload,
    responses(
        (status = 201, description = "Created", body = CountryEnvelope),
        (status = 422, description = "Invalid body", body = ErrorBody)
    )
)]
pub async fn create_country(
    State(state): State<AppState>,
    Json(payload): Json<CountryPayload>,
) -> Result<impl IntoResponse, AppError> {
    state.validator.validate(&payload, WriteMode::Full)?;
    let country = state.store.create(&payload).await?;
    tracing::info!(id = country.id, "country created");
    Ok(response::created(country))
}

#[utoipa::path(
    get,
    path = "/api/country/{id}",
    tag = "countries",
    params(("id" = i64, Path, description = "Country id")),
    responses(
        (status = 200, description = "Found", body = CountryEnvelope),
        (status = 404, description = "No such country", body = ErrorBody)
    )
)]
pub async fn read_country(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let country = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    Ok(response::found(country))
}

/// Full replace: fields missing from the body are stored as null.
#[utoipa::path(
    put,
    path = "/api/country/{id}",
    tag = "countries",
    params(("id" = i64, Path, description = "Country id")),
    request_body = CountryPayload,
    responses(
        (status = 200, description = "Replaced", body = CountryEnvelope),
        (status = 404, description = "No such country", body = ErrorBody)
    )
)]
pub async fn replace_country(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(payload): Json<CountryPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.validator.validate(&payload, WriteMode::Full)?;
    let country = state
        .store
        .replace(id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    tracing::info!(id, "country replaced");
    Ok(response::found(country))
}

/// Partial update: fields missing from the body, or null, keep their values.
#[utoipa::path(
    patch,
    path = "/api/country/{id}",
    tag = "countries",
    params(("id" = i64, Path, description = "Country id")),
    request_body = CountryPayload,
    responses(
        (status = 200, description = "Updated", body = CountryEnvelope),
        (status = 404, description = "No such country", body = ErrorBody)
    )
)]
pub async fn patch_country(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(payload): Json<CountryPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.validator.validate(&payload, WriteMode::Partial)?;
    let country = state
        .store
        .patch(id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    tracing::info!(id, "country patched");
    Ok(response::found(country))
}

#[utoipa::path(
    delete,
    path = "/api/country/{id}",
    tag = "countries",
    params(("id" = i64, Path, description = "Country id")),
    responses(
        (status = 200, description = "Deleted", body = DeletedEnvelope),
        (status = 404, description = "No such country", body = ErrorBody)
    )
)]
pub async fn delete_country(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let country = state
        .store
        .delete(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    tracing::info!(id, "country deleted");
    Ok(response::deleted(country))
}

async fn extremum(state: &AppState, field: &str, which: Extremum) -> Result<Country, AppError> {
    let spec = resolve_extremum(field, which)?;
    state
        .store
        .first_by(spec)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no value for {}", field)))
}

#[utoipa::path(
    get,
    path = "/api/countries/max_value/{field}",
    tag = "countries",
    params(("field" = String, Path, description = "Country field name")),
    responses(
        (status = 200, description = "Country with the largest value", body = Country),
        (status = 400, description = "Unknown field", body = ErrorBody),
        (status = 404, description = "No row has a value", body = ErrorBody)
    )
)]
pub async fn max_value(
    State(state): State<AppState>,
    Path(field): Path<String>,
) -> Result<Json<Country>, AppError> {
    extremum(&state, &field, Extremum::Max).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/api/countries/min_value/{field}",
    tag = "countries",
    params(("field" = String, Path, description = "Country field name")),
    responses(
        (status = 200, description = "Country with the smallest value", body = Country),
        (status = 400, description = "Unknown field", body = ErrorBody),
        (status = 404, description = "No row has a value", body = ErrorBody)
    )
)]
pub async fn min_value(
    State(state): State<AppState>,
    Path(field): Path<String>,
) -> Result<Json<Country>, AppError> {
    extremum(&state, &field, Extremum::Min).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/api/countries/average_value/{field}",
    tag = "countries",
    params(("field" = String, Path, description = "Integer country field name")),
    responses(
        (status = 200, description = "Average over non-null values", body = AverageValue),
        (status = 400, description = "Unknown or non-numeric field", body = ErrorBody)
    )
)]
pub async fn average_value(
    State(state): State<AppState>,
    Path(field): Path<String>,
) -> Result<Json<AverageValue>, AppError> {
    let resolved = resolve_average(&field)?;
    let average_value = state.store.average(resolved).await?;
    Ok(Json(AverageValue {
        field,
        average_value,
    }))
}
