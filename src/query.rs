//! Resolves untrusted field names and direction tokens to a closed set of
//! columns and orderings. Nothing here ever reaches SQL except through
//! [`CountryField::column`].

use crate::country::Country;
use crate::error::AppError;
use std::cmp::Ordering;

/// Every attribute of a country that can be sorted, compared or averaged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CountryField {
    Id,
    CountryName,
    CapitalOfTheCountry,
    LivingStandard,
    CountryArea,
    PopulationOfTheCountry,
    PhoneCode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Text,
}

/// Borrowed value of one field, ordered with null as the smallest value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue<'a> {
    Integer(Option<i64>),
    Text(Option<&'a str>),
}

impl FieldValue<'_> {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Integer(None) | FieldValue::Text(None))
    }
}

impl CountryField {
    pub const ALL: [CountryField; 7] = [
        CountryField::Id,
        CountryField::CountryName,
        CountryField::CapitalOfTheCountry,
        CountryField::LivingStandard,
        CountryField::CountryArea,
        CountryField::PopulationOfTheCountry,
        CountryField::PhoneCode,
    ];

    /// Exact, case-sensitive match against the column names.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "id" => CountryField::Id,
            "country_name" => CountryField::CountryName,
            "capital_of_the_country" => CountryField::CapitalOfTheCountry,
            "living_standard" => CountryField::LivingStandard,
            "country_area" => CountryField::CountryArea,
            "population_of_the_country" => CountryField::PopulationOfTheCountry,
            "phone_code" => CountryField::PhoneCode,
            _ => return None,
        })
    }

    pub fn column(self) -> &'static str {
        match self {
            CountryField::Id => "id",
            CountryField::CountryName => "country_name",
            CountryField::CapitalOfTheCountry => "capital_of_the_country",
            CountryField::LivingStandard => "living_standard",
            CountryField::CountryArea => "country_area",
            CountryField::PopulationOfTheCountry => "population_of_the_country",
            CountryField::PhoneCode => "phone_code",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            CountryField::CountryName
            | CountryField::CapitalOfTheCountry
            | CountryField::LivingStandard => FieldKind::Text,
            _ => FieldKind::Integer,
        }
    }

    pub fn value(self, country: &Country) -> FieldValue<'_> {
        match self {
            CountryField::Id => FieldValue::Integer(Some(country.id)),
            CountryField::CountryName => FieldValue::Text(country.country_name.as_deref()),
            CountryField::CapitalOfTheCountry => {
                FieldValue::Text(country.capital_of_the_country.as_deref())
            }
            CountryField::LivingStandard => FieldValue::Text(country.living_standard.as_deref()),
            CountryField::CountryArea => FieldValue::Integer(country.country_area),
            CountryField::PopulationOfTheCountry => {
                FieldValue::Integer(country.population_of_the_country)
            }
            CountryField::PhoneCode => FieldValue::Integer(country.phone_code),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// `"desc"` sorts descending; anything else, including absence, ascends.
    pub fn from_param(order: Option<&str>) -> Self {
        match order {
            Some("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub field: CountryField,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Row ordering: the field in the requested direction, then ascending id.
    pub fn compare(&self, a: &Country, b: &Country) -> Ordering {
        let by_field = self.field.value(a).cmp(&self.field.value(b));
        let by_field = match self.direction {
            SortDirection::Asc => by_field,
            SortDirection::Desc => by_field.reverse(),
        };
        by_field.then_with(|| a.id.cmp(&b.id))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extremum {
    Max,
    Min,
}

impl Extremum {
    pub fn direction(self) -> SortDirection {
        match self {
            Extremum::Max => SortDirection::Desc,
            Extremum::Min => SortDirection::Asc,
        }
    }
}

/// `None` means no ordering was requested or the field is not a column;
/// the store then falls back to its default (ascending id).
pub fn resolve_sort(field: Option<&str>, order: Option<&str>) -> Option<SortSpec> {
    let field = CountryField::from_name(field?)?;
    Some(SortSpec {
        field,
        direction: SortDirection::from_param(order),
    })
}

pub fn resolve_extremum(field: &str, extremum: Extremum) -> Result<SortSpec, AppError> {
    let field = CountryField::from_name(field).ok_or_else(|| AppError::UnknownField(field.to_string()))?;
    Ok(SortSpec {
        field,
        direction: extremum.direction(),
    })
}

pub fn resolve_average(field: &str) -> Result<CountryField, AppError> {
    let resolved = CountryField::from_name(field).ok_or_else(|| AppError::UnknownField(field.to_string()))?;
    if resolved.kind() != FieldKind::Integer {
        return Err(AppError::NonNumericField(field.to_string()));
    }
    Ok(resolved)
}
