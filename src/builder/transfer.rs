//! Transfer Builder Module
//!
//! Validates transfer parameters, creates a per-call SDK instance for the
//! selected network, assembles the transaction and signs it.
//!
//! # Flow
//! 1. Validate parameters (no SDK instance exists yet)
//! 2. Create the SDK with `is_testnet` resolved from `networkType`
//! 3. Assemble the transaction (attachment, amount, fee, message)
//! 4. Sign (the only await point) and hex-encode the signed bytes

use crate::{
    config::TransferConfig,
    error::{SdkError, TransferError, ValidationError},
    sdk::{
        assemble_transaction, HeatSdk, SdkConfiguration, SdkFactory, SignedTransaction,
        TransactionConfig, UnsignedTransaction, DEFAULT_DEADLINE,
    },
    types::{
        Amount, AssetTransferParams, AssetTransferRequest, Attachment, Network,
        SignedTransactionBytes, TransferParams, TransferRequest,
    },
    validation::Validator,
};
use std::fmt;
use tracing::{debug, info, warn};

/// Builds and signs HEAT and asset transfers through an SDK factory
pub struct TransferBuilder<F> {
    factory: F,
    validator: Validator,
    deadline: u16,
}

impl<F: SdkFactory> TransferBuilder<F> {
    /// Creates a builder with the default transfer configuration
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            validator: Validator::default(),
            deadline: DEFAULT_DEADLINE,
        }
    }

    /// Creates a builder using the `[transfer]` configuration section
    pub fn with_config(factory: F, config: &TransferConfig) -> Self {
        Self {
            factory,
            validator: Validator::new(config.amount_policy),
            deadline: config.deadline,
        }
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Account id derived from a private key by a default-configuration SDK
    pub fn get_address(&self, private_key: &str) -> Result<String, SdkError> {
        let sdk = self.factory.create(SdkConfiguration::default());
        sdk.account_id(private_key)
    }

    /// Validate and assemble a HEAT transfer without signing it
    ///
    /// # Returns
    /// * `Ok(PreparedTransfer)` holding the SDK instance and the assembled transaction
    /// * `Err(ValidationError)` for the first parameter that failed its check
    pub fn prepare_heat_transfer(
        &self,
        params: &TransferParams,
    ) -> Result<PreparedTransfer<F::Sdk>, ValidationError> {
        let request = self.validator.validate_transfer(params)?;
        Ok(self.prepare_transfer_request(request))
    }

    /// Validate and assemble an asset transfer without signing it
    pub fn prepare_asset_transfer(
        &self,
        params: &AssetTransferParams,
    ) -> Result<PreparedTransfer<F::Sdk>, ValidationError> {
        let request = self.validator.validate_asset_transfer(params)?;
        Ok(self.prepare_asset_transfer_request(request))
    }

    /// Assemble an ordinary payment from an already validated request
    pub fn prepare_transfer_request(&self, request: TransferRequest) -> PreparedTransfer<F::Sdk> {
        let amount = request.amount.clone();
        self.prepare(request, Attachment::OrdinaryPayment, amount)
    }

    /// Assemble an asset transfer from an already validated request
    ///
    /// The asset quantity travels in the attachment; the top-level amount is zero.
    pub fn prepare_asset_transfer_request(
        &self,
        request: AssetTransferRequest,
    ) -> PreparedTransfer<F::Sdk> {
        let AssetTransferRequest { transfer, asset } = request;
        let attachment = Attachment::AssetTransfer {
            asset,
            quantity: transfer.amount.clone(),
        };
        self.prepare(transfer, attachment, Amount::zero())
    }

    /// Create a HEAT transfer and return the signed transaction bytes as hex
    pub async fn transfer_heat(
        &self,
        params: &TransferParams,
    ) -> Result<SignedTransactionBytes, TransferError> {
        let prepared = self.prepare_heat_transfer(params)?;
        Ok(prepared.sign().await?)
    }

    /// Create an asset transfer and return the signed transaction bytes as hex
    pub async fn transfer_asset(
        &self,
        params: &AssetTransferParams,
    ) -> Result<SignedTransactionBytes, TransferError> {
        let prepared = self.prepare_asset_transfer(params)?;
        Ok(prepared.sign().await?)
    }

    fn prepare(
        &self,
        request: TransferRequest,
        attachment: Attachment,
        amount: Amount,
    ) -> PreparedTransfer<F::Sdk> {
        let network = request.network;
        let sdk = self.factory.create(SdkConfiguration {
            is_testnet: network.is_testnet(),
        });

        let config = TransactionConfig::for_network(sdk.config(), attachment, amount, request.fee.clone())
            .with_deadline(self.deadline);
        let transaction = assemble_transaction(config, request.recipient(), request.message.clone());

        debug!(
            "Assembled {} on {} for recipient {}",
            transaction.config.attachment.name(),
            network,
            transaction.recipient
        );

        PreparedTransfer {
            sdk,
            transaction,
            key: request.key,
            network,
        }
    }
}

/// An assembled transaction bound to the SDK instance that will sign it
pub struct PreparedTransfer<S> {
    sdk: S,
    transaction: UnsignedTransaction,
    key: String,
    network: Network,
}

impl<S: HeatSdk> PreparedTransfer<S> {
    pub fn transaction(&self) -> &UnsignedTransaction {
        &self.transaction
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Sign the transaction and hex-encode the result
    ///
    /// SDK errors are returned unchanged.
    pub async fn sign(self) -> Result<SignedTransactionBytes, SdkError> {
        let PreparedTransfer {
            sdk,
            transaction,
            key,
            network,
        } = self;
        let attachment = transaction.config.attachment.name();

        let signed = sdk
            .sign(transaction, &key)
            .await
            .inspect_err(|e| warn!("Signing {} on {} failed: {}", attachment, network, e))?;

        let hex = signed.bytes_as_hex();
        info!(
            "Signed {} on {} ({} bytes)",
            attachment,
            network,
            hex.len() / 2
        );
        Ok(SignedTransactionBytes::new(hex))
    }
}

impl<S> fmt::Debug for PreparedTransfer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreparedTransfer")
            .field("transaction", &self.transaction)
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}
