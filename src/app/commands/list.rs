//! List command: render the catalog.

use crate::domain::{AppError, Catalog};

/// Plain-text listing: each act, then its zones' directory names indented.
pub fn render_text(catalog: &Catalog) -> String {
    let mut out = String::new();
    for act in catalog.acts() {
        out.push_str(&act.name);
        out.push('\n');
        for zone in &act.zones {
            out.push_str("  ");
            out.push_str(&zone.dir_name());
            out.push('\n');
        }
    }
    out
}

pub fn render_json(catalog: &Catalog) -> Result<String, AppError> {
    serde_json::to_string_pretty(catalog)
        .map_err(|e| AppError::config_error(format!("Failed to serialize catalog: {}", e)))
}
