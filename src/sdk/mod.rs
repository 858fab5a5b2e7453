//! HEAT SDK Contract Module
//!
//! The SDK that signs and encodes transactions is an external collaborator.
//! This module defines the traits it must implement and the plain values
//! passed across that boundary:
//! - `SdkFactory`: creates one SDK instance per call from a `SdkConfiguration`
//! - `HeatSdk`: resolved network constants, account ids, async signing
//! - `SignedTransaction`: canonical bytes of a signed transaction
//!
//! Transactions are described by a `TransactionConfig` and assembled in one
//! step by `assemble_transaction`.

mod assemble;

pub use assemble::{assemble_transaction, TransactionConfig, UnsignedTransaction, DEFAULT_DEADLINE};

use crate::error::SdkError;
use ethers::utils::hex;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Configuration handed to the SDK constructor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkConfiguration {
    pub is_testnet: bool,
}

/// Network constants resolved by the SDK
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    pub is_testnet: bool,
    pub genesis_key: String,
}

/// Creates SDK instances
pub trait SdkFactory: Send + Sync {
    type Sdk: HeatSdk;

    fn create(&self, configuration: SdkConfiguration) -> Self::Sdk;
}

impl<F: SdkFactory + ?Sized> SdkFactory for &F {
    type Sdk = F::Sdk;

    fn create(&self, configuration: SdkConfiguration) -> Self::Sdk {
        (**self).create(configuration)
    }
}

/// A configured SDK instance
pub trait HeatSdk: Send + Sync {
    type Signed: SignedTransaction;

    /// Network constants for this instance
    fn config(&self) -> &ResolvedConfig;

    /// Derive the account id that belongs to a private key
    fn account_id(&self, private_key: &str) -> Result<String, SdkError>;

    /// Sign an assembled transaction with `key`
    fn sign(
        &self,
        transaction: UnsignedTransaction,
        key: &str,
    ) -> impl Future<Output = Result<Self::Signed, SdkError>> + Send;
}

/// A finalized, signed transaction
pub trait SignedTransaction: Send {
    /// Canonical byte encoding
    fn bytes(&self) -> Vec<u8>;

    fn bytes_as_hex(&self) -> String {
        hex::encode(self.bytes())
    }
}
