pub mod geocode;

pub use geocode::{impact_site, GeoPoint};
