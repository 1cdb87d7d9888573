use crate::domain::Catalog;
use crate::ports::ZoneDirectoryStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ZoneDirectoryStore> {
    store: S,
    catalog: Catalog,
}

impl<S: ZoneDirectoryStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(store: S, catalog: Catalog) -> Self {
        Self { store, catalog }
    }

    /// Get a reference to the zone directory store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
