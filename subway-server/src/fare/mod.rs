//! Fare calculation: distance tier, line surcharge, age discount.

mod engine;
mod policy;

pub use engine::{Fare, FareEngine, FareError, distance_fare, with_age_discount, with_line_surcharge};
pub use policy::{AgeDiscount, FarePolicy};
