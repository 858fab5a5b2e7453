//! This crate validates HEAT transfer parameters and hands them to an injected
//! HEAT SDK that signs and encodes the transaction. It covers native HEAT
//! transfers and asset transfers, each returned as a hex string of the signed
//! transaction bytes.

pub mod types; // Request and response values: addresses, amounts, attachments, messages.
pub mod error; // Validation, SDK and transfer errors.
pub mod validation; // Address predicate and ordered parameter checks.
pub mod sdk; // Traits the external SDK implements and the transaction assembly step.
pub mod builder; // Transfer builder and the public transfer operations.
pub mod config; // TOML configuration.
pub mod logging; // tracing subscriber setup.
pub mod test_fixtures; // Recording stand-in SDK.

// Re-export commonly used types and operations for easier access.
pub use types::*;
pub use error::{SdkError, TransferError, ValidationError};
pub use config::Config;
pub use validation::is_valid_address;
pub use builder::{get_address, transfer_asset, transfer_heat, TransferBuilder};
