use std::sync::Arc;

use crate::{
    config::Config,
    error::AppError,
    store::{DocumentStore, StoreError},
};

#[derive(Clone)]
pub struct AppState {
    /// None when the store could not be reached at startup; data routes
    /// then fail with a store error while /test keeps reporting status.
    pub store: Option<Arc<dyn DocumentStore>>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Option<Arc<dyn DocumentStore>>, config: Config) -> Self {
        Self { store, config }
    }

    /// The store handle, or an unavailability error for data routes.
    pub fn store(&self) -> Result<&Arc<dyn DocumentStore>, AppError> {
        self.store
            .as_ref()
            .ok_or(AppError::Store(StoreError::NotConnected))
    }
}
