//! PostgreSQL-backed store over a shared `PgPool`.

use super::CountryStore;
use crate::country::{Country, CountryPayload};
use crate::error::{AppError, ConfigError};
use crate::query::{CountryField, SortSpec};
use crate::sql;
use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgConnectOptions, Postgres};
use sqlx::query::QueryAs;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

#[derive(Clone)]
pub struct PgCountryStore {
    pool: PgPool,
}

impl PgCountryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run one write statement inside its own transaction.
    async fn write_one(
        &self,
        sql: &str,
        payload: &CountryPayload,
        id: Option<i64>,
    ) -> Result<Option<Country>, AppError> {
        tracing::debug!(sql = %sql, id = ?id, "query (tx)");
        let mut tx = self.pool.begin().await?;
        let mut query = bind_payload(sqlx::query_as::<_, Country>(sql), payload);
        if let Some(id) = id {
            query = query.bind(id);
        }
        let row = query.fetch_optional(&mut *tx).await?;
        tx.commit().await?;
        Ok(row)
    }
}

fn bind_payload<'q>(
    query: QueryAs<'q, Postgres, Country, PgArguments>,
    payload: &CountryPayload,
) -> QueryAs<'q, Postgres, Country, PgArguments> {
    query
        .bind(payload.country_name.clone())
        .bind(payload.capital_of_the_country.clone())
        .bind(payload.living_standard.clone())
        .bind(payload.country_area)
        .bind(payload.population_of_the_country)
        .bind(payload.phone_code)
}

#[async_trait]
impl CountryStore for PgCountryStore {
    async fn list(&self, sort: Option<SortSpec>) -> Result<Vec<Country>, AppError> {
        let sql = sql::select_list(sort.as_ref());
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Country>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<Country>, AppError> {
        let sql = sql::select_by_id();
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Country>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, payload: &CountryPayload) -> Result<Country, AppError> {
        let row = self.write_one(&sql::insert(), payload, None).await?;
        row.ok_or_else(|| AppError::Internal("insert returned no row".into()))
    }

    async fn replace(&self, id: i64, payload: &CountryPayload) -> Result<Option<Country>, AppError> {
        self.write_one(&sql::update_replace(), payload, Some(id)).await
    }

    async fn patch(&self, id: i64, payload: &CountryPayload) -> Result<Option<Country>, AppError> {
        self.write_one(&sql::update_patch(), payload, Some(id)).await
    }

    async fn delete(&self, id: i64) -> Result<Option<Country>, AppError> {
        let sql = sql::delete();
        tracing::debug!(sql = %sql, id, "query (tx)");
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, Country>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(row)
    }

    async fn first_by(&self, spec: SortSpec) -> Result<Option<Country>, AppError> {
        let sql = sql::select_extremum(&spec);
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Country>(&sql)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn average(&self, field: CountryField) -> Result<Option<f64>, AppError> {
        let sql = sql::select_average(field);
        tracing::debug!(sql = %sql, "query");
        let avg = sqlx::query_scalar::<_, Option<f64>>(&sql)
            .fetch_one(&self.pool)
            .await?;
        Ok(avg)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Create the `country` table if it does not exist.
pub async fn ensure_country_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(&sql::create_table()).execute(pool).await?;
    Ok(())
}

/// Connect to the `postgres` maintenance database and create the database named in
/// `database_url` when it is missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin, db_name) = maintenance_options(database_url)?;
    let Some(db_name) = db_name else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the `postgres` database on the same server (host, credentials and
/// TLS settings kept), plus the target database name when one needs checking.
fn maintenance_options(database_url: &str) -> Result<(PgConnectOptions, Option<String>), ConfigError> {
    let opts = PgConnectOptions::from_str(database_url).map_err(|e| ConfigError::Invalid {
        key: "DATABASE_URL",
        value: e.to_string(),
    })?;
    let db_name = opts
        .get_database()
        .map(str::to_string)
        .filter(|name| !name.is_empty() && name != "postgres");
    Ok((opts.database("postgres"), db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
