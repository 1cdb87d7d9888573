mod zone_directory_store;

pub use zone_directory_store::ZoneDirectoryStore;
