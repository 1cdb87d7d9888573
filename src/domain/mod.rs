pub mod catalog;
pub mod config;
pub mod error;
pub mod report;

pub use catalog::{Act, Catalog, CatalogFormat, Zone, dir_matches_code};
pub use config::{
    CONFIG_FILE, CatalogSource, ConfigFile, Settings, SettingsOverrides, is_single_dir_name,
};
pub use error::AppError;
pub use report::{ScaffoldReport, ZoneOutcome, ZoneReport};
