//! Request validation for country payloads.

use crate::country::{CountryPayload, CAPITAL_MAX, COUNTRY_NAME_MAX, LIVING_STANDARD_MAX};
use crate::error::AppError;

/// How much of the payload a write replaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteMode {
    /// Create or full replace: every data field is written.
    Full,
    /// Patch: only present fields are written.
    Partial,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PayloadValidator {
    /// Reject full writes that leave out any data field instead of storing null.
    pub require_all_fields: bool,
}

impl PayloadValidator {
    pub fn new(require_all_fields: bool) -> Self {
        Self { require_all_fields }
    }

    pub fn validate(&self, payload: &CountryPayload, mode: WriteMode) -> Result<(), AppError> {
        if self.require_all_fields && mode == WriteMode::Full {
            if let Some(first) = payload.missing_fields().first() {
                return Err(AppError::Validation(format!("{} is required", first)));
            }
        }
        check_length("country_name", payload.country_name.as_deref(), COUNTRY_NAME_MAX)?;
        check_length(
            "capital_of_the_country",
            payload.capital_of_the_country.as_deref(),
            CAPITAL_MAX,
        )?;
        check_length("living_standard", payload.living_standard.as_deref(), LIVING_STANDARD_MAX)?;
        Ok(())
    }
}

fn check_length(col: &str, value: Option<&str>, max: usize) -> Result<(), AppError> {
    if let Some(s) = value {
        if s.chars().count() > max {
            return Err(AppError::Validation(format!(
                "{} must be at most {} characters",
                col, max
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_are_counted_in_characters() {
        let v = PayloadValidator::default();
        let ok = CountryPayload {
            capital_of_the_country: Some("Ñúñóáéíñúñ".into()),
            ..Default::default()
        };
        assert!(v.validate(&ok, WriteMode::Full).is_ok());

        let long = CountryPayload {
            capital_of_the_country: Some("Birnin Zana".into()),
            ..Default::default()
        };
        assert!(matches!(
            v.validate(&long, WriteMode::Partial),
            Err(AppError::Validation(m)) if m.contains("capital_of_the_country")
        ));
    }

    #[test]
    fn required_fields_only_when_enabled_and_full() {
        let partial = CountryPayload {
            country_name: Some("Wakanda".into()),
            ..Default::default()
        };
        assert!(PayloadValidator::new(false).validate(&partial, WriteMode::Full).is_ok());
        assert!(PayloadValidator::new(true).validate(&partial, WriteMode::Partial).is_ok());
        assert!(matches!(
            PayloadValidator::new(true).validate(&partial, WriteMode::Full),
            Err(AppError::Validation(m)) if m == "capital_of_the_country is required"
        ));
    }
}
