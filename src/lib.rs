//! zonedir: scaffold one layout-image directory per zone of an act/zone catalog.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    LocatedZone, catalog_at, ensure_zone_directories, locate, locate_at, scaffold, scaffold_at,
    scaffold_plan_at,
};
pub use domain::{
    Act, AppError, Catalog, CatalogFormat, ScaffoldReport, SettingsOverrides, Zone, ZoneOutcome,
    ZoneReport,
};
pub use services::embedded_catalog;
