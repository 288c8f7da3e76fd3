//! Calorie estimation
//!
//! Static food and quantity tables plus the resolver that applies them.

pub mod fallback;
pub mod quantity;
pub mod resolver;
pub mod table;

pub use quantity::{resolve_quantity, QuantityMatch, QuantityRule, QUANTITY_RULES};
pub use resolver::Estimator;
pub use table::FOOD_TABLE;
