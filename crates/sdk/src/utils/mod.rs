/// Amount conversions.
pub mod amount;

/// Serialization utils.
pub mod serde;

pub use amount::{amount_to_decimal, decimal_to_amount};
