//! Transfer Building Module
//!
//! Public entry points for creating signed HEAT transfers and asset transfers.
//! `TransferBuilder` carries configuration; the free functions below use the
//! default configuration.

mod transfer;


pub use transfer::{PreparedTransfer, TransferBuilder};

use crate::{
    error::{SdkError, TransferError},
    sdk::SdkFactory,
    types::{AssetTransferParams, SignedTransactionBytes, TransferParams},
};

/// Account id for a private key, resolved by a default-configuration SDK
pub fn get_address<F: SdkFactory>(factory: &F, private_key: &str) -> Result<String, SdkError> {
    TransferBuilder::new(factory).get_address(private_key)
}

/// Create and sign a HEAT transfer, returning the transaction bytes as hex
pub async fn transfer_heat<F: SdkFactory>(
    factory: &F,
    params: &TransferParams,
) -> Result<SignedTransactionBytes, TransferError> {
    TransferBuilder::new(factory).transfer_heat(params).await
}

/// Create and sign an asset transfer, returning the transaction bytes as hex
pub async fn transfer_asset<F: SdkFactory>(
    factory: &F,
    params: &AssetTransferParams,
) -> Result<SignedTransactionBytes, TransferError> {
    TransferBuilder::new(factory).transfer_asset(params).await
}
