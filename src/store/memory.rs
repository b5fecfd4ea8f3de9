//! In-process store with the same ordering rules as the PostgreSQL one.
//! Used by tests and for running the API without a database.

use super::CountryStore;
use crate::country::{Country, CountryPayload};
use crate::error::AppError;
use crate::query::{CountryField, FieldValue, SortSpec};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Table {
    /// Last id handed out; ids are never reused, even after deletes.
    last_id: i64,
    rows: BTreeMap<i64, Country>,
}

#[derive(Default)]
pub struct MemoryCountryStore {
    table: RwLock<Table>,
}

impl MemoryCountryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Table>, AppError> {
        self.table
            .read()
            .map_err(|_| AppError::Internal("lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Table>, AppError> {
        self.table
            .write()
            .map_err(|_| AppError::Internal("lock poisoned".to_string()))
    }
}

#[async_trait]
impl CountryStore for MemoryCountryStore {
    async fn list(&self, sort: Option<SortSpec>) -> Result<Vec<Country>, AppError> {
        let table = self.read()?;
        // BTreeMap iteration is ascending id.
        let mut rows: Vec<Country> = table.rows.values().cloned().collect();
        if let Some(spec) = sort {
            rows.sort_by(|a, b| spec.compare(a, b));
        }
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<Country>, AppError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    async fn create(&self, payload: &CountryPayload) -> Result<Country, AppError> {
        let mut table = self.write()?;
        table.last_id += 1;
        let country = Country::from_payload(table.last_id, payload);
        table.rows.insert(country.id, country.clone());
        Ok(country)
    }

    async fn replace(&self, id: i64, payload: &CountryPayload) -> Result<Option<Country>, AppError> {
        let mut table = self.write()?;
        Ok(table.rows.get_mut(&id).map(|row| {
            row.replace_with(payload);
            row.clone()
        }))
    }

    async fn patch(&self, id: i64, payload: &CountryPayload) -> Result<Option<Country>, AppError> {
        let mut table = self.write()?;
        Ok(table.rows.get_mut(&id).map(|row| {
            row.patch_with(payload);
            row.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<Option<Country>, AppError> {
        Ok(self.write()?.rows.remove(&id))
    }

    async fn first_by(&self, spec: SortSpec) -> Result<Option<Country>, AppError> {
        let table = self.read()?;
        // `compare` already orients by direction and breaks ties on id.
        let best = table
            .rows
            .values()
            .filter(|c| !spec.field.value(c).is_null())
            .min_by(|a, b| spec.compare(a, b));
        Ok(best.cloned())
    }

    async fn average(&self, field: CountryField) -> Result<Option<f64>, AppError> {
        let table = self.read()?;
        let values: Vec<i64> = table
            .rows
            .values()
            .filter_map(|c| match field.value(c) {
                FieldValue::Integer(v) => v,
                FieldValue::Text(_) => None,
            })
            .collect();
        if values.is_empty() {
            return Ok(None);
        }
        let sum: f64 = values.iter().map(|v| *v as f64).sum();
        Ok(Some(sum / values.len() as f64))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{resolve_extremum, resolve_sort, Extremum};

    fn payload(name: &str, population: Option<i64>) -> CountryPayload {
        CountryPayload {
            country_name: Some(name.to_string()),
            population_of_the_country: population,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let store = MemoryCountryStore::new();
        let a = store.create(&payload("A", None)).await.unwrap();
        let b = store.create(&payload("B", None)).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        store.delete(b.id).await.unwrap();
        let c = store.create(&payload("C", None)).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn extremum_ignores_nulls_and_prefers_lowest_id() {
        let store = MemoryCountryStore::new();
        store.create(&payload("A", None)).await.unwrap();
        store.create(&payload("B", Some(5))).await.unwrap();
        store.create(&payload("C", Some(9))).await.unwrap();
        store.create(&payload("D", Some(9))).await.unwrap();

        let max = resolve_extremum("population_of_the_country", Extremum::Max).unwrap();
        assert_eq!(store.first_by(max).await.unwrap().unwrap().id, 3);
        let min = resolve_extremum("population_of_the_country", Extremum::Min).unwrap();
        assert_eq!(store.first_by(min).await.unwrap().unwrap().id, 2);
        let phone = resolve_extremum("phone_code", Extremum::Max).unwrap();
        assert_eq!(store.first_by(phone).await.unwrap(), None);
    }

    #[tokio::test]
    async fn average_skips_nulls_and_is_none_when_empty() {
        let store = MemoryCountryStore::new();
        assert_eq!(store.average(CountryField::CountryArea).await.unwrap(), None);
        store.create(&payload("A", Some(1))).await.unwrap();
        store.create(&payload("B", Some(2))).await.unwrap();
        store.create(&payload("C", None)).await.unwrap();
        assert_eq!(
            store.average(CountryField::PopulationOfTheCountry).await.unwrap(),
            Some(1.5)
        );
        assert_eq!(store.average(CountryField::Id).await.unwrap(), Some(2.0));
    }

    #[tokio::test]
    async fn list_sorts_or_keeps_id_order() {
        let store = MemoryCountryStore::new();
        store.create(&payload("B", Some(2))).await.unwrap();
        store.create(&payload("A", Some(3))).await.unwrap();
        let ids = |rows: Vec<Country>| rows.into_iter().map(|c| c.id).collect::<Vec<_>>();

        assert_eq!(ids(store.list(None).await.unwrap()), vec![1, 2]);
        let by_name = resolve_sort(Some("country_name"), None);
        assert_eq!(ids(store.list(by_name).await.unwrap()), vec![2, 1]);
    }
}
