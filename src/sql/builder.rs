//! Builds the parameterized statements for the `country` table.

use crate::query::{CountryField, FieldKind, SortDirection, SortSpec};

pub const COUNTRY_TABLE: &str = "country";

/// Quote identifier for PostgreSQL (safe: only from `CountryField`).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn table() -> String {
    quoted(COUNTRY_TABLE)
}

/// Data columns in bind order ($1..$6 for insert and update).
const DATA_FIELDS: [CountryField; 6] = [
    CountryField::CountryName,
    CountryField::CapitalOfTheCountry,
    CountryField::LivingStandard,
    CountryField::CountryArea,
    CountryField::PopulationOfTheCountry,
    CountryField::PhoneCode,
];

fn select_column_list() -> String {
    CountryField::ALL
        .iter()
        .map(|f| quoted(f.column()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// ORDER BY term: text compares bytewise; nulls rank lowest in both directions.
fn order_term(spec: &SortSpec) -> String {
    let col = quoted(spec.field.column());
    let col = match spec.field.kind() {
        FieldKind::Text => format!("{} COLLATE \"C\"", col),
        FieldKind::Integer => col,
    };
    match spec.direction {
        SortDirection::Asc => format!("{} ASC NULLS FIRST", col),
        SortDirection::Desc => format!("{} DESC NULLS LAST", col),
    }
}

pub fn create_table() -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            "id" BIGSERIAL PRIMARY KEY,
            "country_name" VARCHAR(40),
            "capital_of_the_country" VARCHAR(10),
            "living_standard" VARCHAR(80),
            "country_area" BIGINT,
            "population_of_the_country" BIGINT,
            "phone_code" BIGINT
        )
        "#,
        table()
    )
}

/// SELECT all rows; ascending id unless a sort is given, which still breaks ties by id.
pub fn select_list(sort: Option<&SortSpec>) -> String {
    let order_clause = match sort {
        Some(spec) => format!(" ORDER BY {}, {} ASC", order_term(spec), quoted("id")),
        None => format!(" ORDER BY {} ASC", quoted("id")),
    };
    format!("SELECT {} FROM {}{}", select_column_list(), table(), order_clause)
}

/// SELECT by primary key. Caller binds the id as $1.
pub fn select_by_id() -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        select_column_list(),
        table(),
        quoted("id")
    )
}

/// First row by the given ordering among rows where the field is not null.
pub fn select_extremum(spec: &SortSpec) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} IS NOT NULL ORDER BY {}, {} ASC LIMIT 1",
        select_column_list(),
        table(),
        quoted(spec.field.column()),
        order_term(spec),
        quoted("id")
    )
}

/// AVG over an integer column as double precision; NULL over zero rows.
pub fn select_average(field: CountryField) -> String {
    format!(
        "SELECT AVG({})::float8 FROM {}",
        quoted(field.column()),
        table()
    )
}

/// INSERT binding the six data fields as $1..$6.
pub fn insert() -> String {
    let cols: Vec<String> = DATA_FIELDS.iter().map(|f| quoted(f.column())).collect();
    let placeholders: Vec<String> = (1..=DATA_FIELDS.len()).map(|n| format!("${}", n)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        table(),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list()
    )
}

/// UPDATE every data field from $1..$6; id is $7.
pub fn update_replace() -> String {
    let sets: Vec<String> = DATA_FIELDS
        .iter()
        .enumerate()
        .map(|(i, f)| format!("{} = ${}", quoted(f.column()), i + 1))
        .collect();
    update_with(&sets)
}

/// UPDATE keeping the stored value wherever the bound parameter is NULL; id is $7.
pub fn update_patch() -> String {
    let sets: Vec<String> = DATA_FIELDS
        .iter()
        .enumerate()
        .map(|(i, f)| {
            let col = quoted(f.column());
            format!("{} = COALESCE(${}, {})", col, i + 1, col)
        })
        .collect();
    update_with(&sets)
}

fn update_with(sets: &[String]) -> String {
    format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        table(),
        sets.join(", "),
        quoted("id"),
        DATA_FIELDS.len() + 1,
        select_column_list()
    )
}

/// DELETE by id ($1), returning the removed row.
pub fn delete() -> String {
    format!(
        "DELETE FROM {} WHERE {} = $1 RETURNING {}",
        table(),
        quoted("id"),
        select_column_list()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{resolve_extremum, resolve_sort, Extremum};

    const COLS: &str = r#""id", "country_name", "capital_of_the_country", "living_standard", "country_area", "population_of_the_country", "phone_code""#;

    #[test]
    fn list_defaults_to_id_order() {
        assert_eq!(
            select_list(None),
            format!(r#"SELECT {} FROM "country" ORDER BY "id" ASC"#, COLS)
        );
    }

    #[test]
    fn list_sorted_descending_by_population() {
        let spec = resolve_sort(Some("population_of_the_country"), Some("desc")).unwrap();
        assert!(select_list(Some(&spec)).ends_with(
            r#"ORDER BY "population_of_the_country" DESC NULLS LAST, "id" ASC"#
        ));
    }

    #[test]
    fn text_sort_uses_byte_collation() {
        let spec = resolve_sort(Some("country_name"), None).unwrap();
        assert!(select_list(Some(&spec))
            .contains(r#""country_name" COLLATE "C" ASC NULLS FIRST"#));
    }

    #[test]
    fn extremum_skips_nulls_and_limits() {
        let spec = resolve_extremum("phone_code", Extremum::Max).unwrap();
        assert_eq!(
            select_extremum(&spec),
            format!(
                r#"SELECT {} FROM "country" WHERE "phone_code" IS NOT NULL ORDER BY "phone_code" DESC NULLS LAST, "id" ASC LIMIT 1"#,
                COLS
            )
        );
    }

    #[test]
    fn average_casts_to_float() {
        assert_eq!(
            select_average(CountryField::CountryArea),
            r#"SELECT AVG("country_area")::float8 FROM "country""#
        );
    }

    #[test]
    fn writes_bind_in_data_field_order() {
        assert!(insert().starts_with(
            r#"INSERT INTO "country" ("country_name", "capital_of_the_country", "living_standard", "country_area", "population_of_the_country", "phone_code") VALUES ($1, $2, $3, $4, $5, $6) RETURNING"#
        ));
        let replace = update_replace();
        assert!(replace.contains(r#""phone_code" = $6 WHERE "id" = $7"#));
        let patch = update_patch();
        assert!(patch.contains(r#""country_name" = COALESCE($1, "country_name")"#));
        assert!(patch.contains(r#"WHERE "id" = $7"#));
        assert!(delete().starts_with(r#"DELETE FROM "country" WHERE "id" = $1 RETURNING"#));
    }
}
