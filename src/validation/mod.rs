//! Transfer Validation Module
//!
//! This module checks caller-supplied transfer parameters before any SDK
//! instance is created. Checks run in a fixed order and stop at the first
//! failing parameter.

mod address;
mod validator;

#[cfg(test)]
mod tests;

pub use address::is_valid_address;
pub use validator::{AmountPolicy, Validator};
