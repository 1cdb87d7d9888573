//! Zone reference data compiled into the binary.

use crate::domain::{AppError, Catalog, CatalogFormat};

static ZONE_REFERENCE: &str = include_str!("../assets/zone_reference.json");

/// The built-in act/zone catalog.
pub fn embedded_catalog() -> Result<Catalog, AppError> {
    Catalog::parse(ZONE_REFERENCE, CatalogFormat::Json, "<embedded zone reference>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = embedded_catalog().expect("embedded catalog should parse");
        assert_eq!(catalog.acts().len(), 6);
        assert_eq!(catalog.zone_count(), 96);
        assert_eq!(catalog.acts()[0].name, "Act 1");
        assert_eq!(catalog.acts()[0].zones[0].dir_name(), "G1_1 The Riverbank");
    }

    #[test]
    fn embedded_codes_are_unique() {
        let catalog = embedded_catalog().unwrap();
        let codes: HashSet<_> = catalog.zones().map(|(_, zone)| zone.code.as_str()).collect();
        assert_eq!(codes.len(), catalog.zone_count());
    }
}
