//! Row types for `bakeries` and `baked_goods`, and the DTOs each endpoint serializes.

mod baked_good;
mod bakery;

pub use baked_good::*;
pub use bakery::*;
