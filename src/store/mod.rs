//! Record Store: the `CountryStore` seam, its PostgreSQL and in-memory
//! implementations, and startup DDL.

mod memory;
mod postgres;

pub use memory::MemoryCountryStore;
pub use postgres::{ensure_country_table, ensure_database_exists, PgCountryStore};

use crate::country::{Country, CountryPayload};
use crate::error::AppError;
use crate::query::{CountryField, SortSpec};
use async_trait::async_trait;

/// Storage handle shared by all handlers. Implementations must be safe for
/// concurrent use and apply each write atomically.
#[async_trait]
pub trait CountryStore: Send + Sync {
    /// All rows, in `sort` order or ascending id when `None`.
    async fn list(&self, sort: Option<SortSpec>) -> Result<Vec<Country>, AppError>;

    async fn get(&self, id: i64) -> Result<Option<Country>, AppError>;

    /// Insert with a freshly generated id. Absent fields are stored as null.
    async fn create(&self, payload: &CountryPayload) -> Result<Country, AppError>;

    /// Overwrite all six data fields; absent fields become null.
    async fn replace(&self, id: i64, payload: &CountryPayload) -> Result<Option<Country>, AppError>;

    /// Overwrite only the fields present in `payload`.
    async fn patch(&self, id: i64, payload: &CountryPayload) -> Result<Option<Country>, AppError>;

    /// Remove and return the row.
    async fn delete(&self, id: i64) -> Result<Option<Country>, AppError>;

    /// First row in `spec` order among rows whose field is not null.
    async fn first_by(&self, spec: SortSpec) -> Result<Option<Country>, AppError>;

    /// Mean of the non-null values of an integer field; `None` when there are none.
    async fn average(&self, field: CountryField) -> Result<Option<f64>, AppError>;

    /// Round-trip to the backing storage, for readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}
