//! Static outputs derived from the lookup tables.

pub mod sitemap;
