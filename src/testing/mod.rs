mod mock_zone_store;

#[allow(unused_imports)]
pub use mock_zone_store::MockZoneStore;
