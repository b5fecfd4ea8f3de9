//! Shared application state for all routes.

use crate::service::PayloadValidator;
use crate::store::CountryStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CountryStore>,
    pub validator: PayloadValidator,
}

impl AppState {
    pub fn new<S: CountryStore + 'static>(store: S, validator: PayloadValidator) -> Self {
        Self {
            store: Arc::new(store),
            validator,
        }
    }
}
