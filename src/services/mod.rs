mod filesystem_zone_store;
mod zone_reference;

pub use filesystem_zone_store::FilesystemZoneStore;
pub use zone_reference::embedded_catalog;
