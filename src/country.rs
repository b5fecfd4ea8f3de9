//! Country record as stored and as exchanged over the API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Column limits for the string fields (characters).
pub const COUNTRY_NAME_MAX: usize = 40;
pub const CAPITAL_MAX: usize = 10;
pub const LIVING_STANDARD_MAX: usize = 80;

/// One row of the `country` table. Data columns are nullable: a write that
/// omits a field stores null, and the API reports it as `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Country {
    pub id: i64,
    pub country_name: Option<String>,
    pub capital_of_the_country: Option<String>,
    pub living_standard: Option<String>,
    pub country_area: Option<i64>,
    pub population_of_the_country: Option<i64>,
    pub phone_code: Option<i64>,
}

/// Request body for create, replace and patch. Unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CountryPayload {
    pub country_name: Option<String>,
    pub capital_of_the_country: Option<String>,
    pub living_standard: Option<String>,
    pub country_area: Option<i64>,
    pub population_of_the_country: Option<i64>,
    pub phone_code: Option<i64>,
}

impl Country {
    /// Full overwrite of every data field; `id` is untouched.
    pub fn replace_with(&mut self, payload: &CountryPayload) {
        self.country_name = payload.country_name.clone();
        self.capital_of_the_country = payload.capital_of_the_country.clone();
        self.living_standard = payload.living_standard.clone();
        self.country_area = payload.country_area;
        self.population_of_the_country = payload.population_of_the_country;
        self.phone_code = payload.phone_code;
    }

    /// Overwrite only the fields the payload carries.
    pub fn patch_with(&mut self, payload: &CountryPayload) {
        if let Some(v) = &payload.country_name {
            self.country_name = Some(v.clone());
        }
        if let Some(v) = &payload.capital_of_the_country {
            self.capital_of_the_country = Some(v.clone());
        }
        if let Some(v) = &payload.living_standard {
            self.living_standard = Some(v.clone());
        }
        if payload.country_area.is_some() {
            self.country_area = payload.country_area;
        }
        if payload.population_of_the_country.is_some() {
            self.population_of_the_country = payload.population_of_the_country;
        }
        if payload.phone_code.is_some() {
            self.phone_code = payload.phone_code;
        }
    }

    pub fn from_payload(id: i64, payload: &CountryPayload) -> Self {
        let mut country = Country {
            id,
            country_name: None,
            capital_of_the_country: None,
            living_standard: None,
            country_area: None,
            population_of_the_country: None,
            phone_code: None,
        };
        country.replace_with(payload);
        country
    }
}

impl CountryPayload {
    /// Names of the data fields this payload leaves out.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.country_name.is_none() {
            missing.push("country_name");
        }
        if self.capital_of_the_country.is_none() {
            missing.push("capital_of_the_country");
        }
        if self.living_standard.is_none() {
            missing.push("living_standard");
        }
        if self.country_area.is_none() {
            missing.push("country_area");
        }
        if self.population_of_the_country.is_none() {
            missing.push("population_of_the_country");
        }
        if self.phone_code.is_none() {
            missing.push("phone_code");
        }
        missing
    }
}
