//! Database operations behind the HTTP handlers.

mod baked_good;
mod bakery;
pub use baked_good::BakedGoodService;
pub use bakery::BakeryService;
