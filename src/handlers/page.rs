//! HTML listing of every country.

use crate::country::Country;
use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, response::Html};
use std::fmt::Write;

pub async fn countries_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let countries = state.store.list(None).await?;
    Ok(Html(render_countries(&countries)))
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn text_cell(v: Option<&str>) -> String {
    v.map(escape).unwrap_or_default()
}

fn int_cell(v: Option<i64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

pub fn render_countries(countries: &[Country]) -> String {
    let mut rows = String::new();
    for c in countries {
        // Writing to a String cannot fail.
        let _ = writeln!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            c.id,
            text_cell(c.country_name.as_deref()),
            text_cell(c.capital_of_the_country.as_deref()),
            text_cell(c.living_standard.as_deref()),
            int_cell(c.country_area),
            int_cell(c.population_of_the_country),
            int_cell(c.phone_code),
        );
    }
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Countries</title></head>
<body>
<h1>Countries</h1>
<table>
<thead><tr><th>Id</th><th>Name</th><th>Capital</th><th>Living standard</th><th>Area</th><th>Population</th><th>Phone code</th></tr></thead>
<tbody>
{}</tbody>
</table>
</body>
</html>
"#,
        rows
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rows_and_escapes_text() {
        let c = Country {
            id: 4,
            country_name: Some("<Wakanda & Co>".into()),
            capital_of_the_country: None,
            living_standard: Some("High".into()),
            country_area: Some(100_000),
            population_of_the_country: None,
            phone_code: Some(999),
        };
        let html = render_countries(&[c]);
        assert!(html.contains("<td>&lt;Wakanda &amp; Co&gt;</td>"));
        assert!(html.contains("<td>4</td>"));
        assert!(html.contains("<td>999</td>"));
        assert!(!html.contains("<Wakanda"));
    }

    #[test]
    fn empty_table_still_renders() {
        let html = render_countries(&[]);
        assert!(html.contains("<tbody>\n</tbody>"));
    }
}
