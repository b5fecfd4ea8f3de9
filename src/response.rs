//! Response envelopes. Every single-object body nests the same `Country`
//! representation under a named key.

use crate::country::Country;
use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CountryEnvelope {
    pub country: Country,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedEnvelope {
    pub country_deleted: Country,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AverageValue {
    pub field: String,
    /// `null` when no row has a value for the field.
    pub average_value: Option<f64>,
}

pub fn created(country: Country) -> (StatusCode, Json<CountryEnvelope>) {
    (StatusCode::CREATED, Json(CountryEnvelope { country }))
}

pub fn found(country: Country) -> (StatusCode, Json<CountryEnvelope>) {
    (StatusCode::OK, Json(CountryEnvelope { country }))
}

pub fn deleted(country: Country) -> (StatusCode, Json<DeletedEnvelope>) {
    (StatusCode::OK, Json(DeletedEnvelope { country_deleted: country }))
}
