//! Test fixtures: a stand-in HEAT SDK.
//!
//! `MockSdkFactory` implements the SDK traits without real cryptography. It
//! records every SDK instance created and every signing request so tests can
//! check what the builder handed over, and produces deterministic bytes laid
//! out like a HEAT transaction with a keccak256 digest in place of a signature.

use crate::{
    error::SdkError,
    sdk::{
        HeatSdk, ResolvedConfig, SdkConfiguration, SdkFactory, SignedTransaction,
        UnsignedTransaction,
    },
    types::Attachment,
};
use ethers::utils::{hex, keccak256};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Genesis key the mock resolves for the production network.
pub const MOCK_MAINNET_GENESIS_KEY: &str =
    "7e6c2a1b9d0f4e3c8a5b6d7e8f901a2b3c4d5e6f708192a3b4c5d6e7f8091a2b";

/// Genesis key the mock resolves for the test network.
pub const MOCK_TESTNET_GENESIS_KEY: &str =
    "1f2e3d4c5b6a79880716253443526170f1e2d3c4b5a69788796a5b4c3d2e1f00";

/// Transaction format version written into the version/subtype byte.
const MOCK_TX_VERSION: u8 = 1;

/// A signing request seen by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignRequest {
    pub transaction: UnsignedTransaction,
    pub key: String,
}

#[derive(Debug, Default)]
struct MockState {
    created: Mutex<Vec<SdkConfiguration>>,
    signed: Mutex<Vec<SignRequest>>,
    sign_failure: Mutex<Option<String>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Factory for recording mock SDK instances
///
/// Clones share the same recorded state.
#[derive(Debug, Clone, Default)]
pub struct MockSdkFactory {
    state: Arc<MockState>,
    latency: Option<Duration>,
}

impl MockSdkFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every signing call, simulating a slow SDK.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make every following signing call fail with `SdkError::Rejected(message)`.
    pub fn fail_signing_with(&self, message: impl Into<String>) {
        *lock(&self.state.sign_failure) = Some(message.into());
    }

    /// Configurations passed to `create`, in call order.
    pub fn created(&self) -> Vec<SdkConfiguration> {
        lock(&self.state.created).clone()
    }

    /// Signing requests, in call order.
    pub fn sign_requests(&self) -> Vec<SignRequest> {
        lock(&self.state.signed).clone()
    }

    /// The most recent signing request.
    pub fn last_sign_request(&self) -> Option<SignRequest> {
        lock(&self.state.signed).last().cloned()
    }
}

impl SdkFactory for MockSdkFactory {
    type Sdk = MockSdk;

    fn create(&self, configuration: SdkConfiguration) -> MockSdk {
        lock(&self.state.created).push(configuration);

        let genesis_key = if configuration.is_testnet {
            MOCK_TESTNET_GENESIS_KEY
        } else {
            MOCK_MAINNET_GENESIS_KEY
        };

        MockSdk {
            config: ResolvedConfig {
                is_testnet: configuration.is_testnet,
                genesis_key: genesis_key.to_string(),
            },
            state: Arc::clone(&self.state),
            latency: self.latency,
        }
    }
}

/// A mock SDK instance created by `MockSdkFactory`
#[derive(Debug, Clone)]
pub struct MockSdk {
    config: ResolvedConfig,
    state: Arc<MockState>,
    latency: Option<Duration>,
}

impl HeatSdk for MockSdk {
    type Signed = MockSignedTransaction;

    fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    fn account_id(&self, private_key: &str) -> Result<String, SdkError> {
        if private_key.is_empty() {
            return Err(SdkError::InvalidKey("empty private key".to_string()));
        }
        Ok(mock_account_id(private_key).to_string())
    }

    fn sign(
        &self,
        transaction: UnsignedTransaction,
        key: &str,
    ) -> impl Future<Output = Result<MockSignedTransaction, SdkError>> + Send {
        let state = Arc::clone(&self.state);
        let latency = self.latency;
        let key = key.to_string();

        async move {
            if let Some(latency) = latency {
                tokio::time::sleep(latency).await;
            }

            lock(&state.signed).push(SignRequest {
                transaction: transaction.clone(),
                key: key.clone(),
            });

            if key.is_empty() {
                return Err(SdkError::InvalidKey("empty secret phrase".to_string()));
            }
            let failure = lock(&state.sign_failure).clone();
            if let Some(message) = failure {
                return Err(SdkError::Rejected(message));
            }

            let mut bytes = encode_unsigned(&transaction)?;
            let mut preimage = bytes.clone();
            preimage.extend_from_slice(key.as_bytes());
            bytes.extend_from_slice(&keccak256(preimage));

            Ok(MockSignedTransaction { bytes })
        }
    }
}

/// Signed transaction produced by `MockSdk`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockSignedTransaction {
    bytes: Vec<u8>,
}

impl SignedTransaction for MockSignedTransaction {
    fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

/// Deterministic account id for a private key.
pub fn mock_account_id(private_key: &str) -> u64 {
    let digest = keccak256(private_key.as_bytes());
    let mut id = [0u8; 8];
    id.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(id)
}

fn parse_u64(value: &str, field: &str) -> Result<u64, SdkError> {
    value
        .parse::<u64>()
        .map_err(|_| SdkError::Rejected(format!("invalid {field}: {value:?}")))
}

fn write_len_prefixed(bytes: &mut Vec<u8>, data: &[u8], field: &str) -> Result<(), SdkError> {
    let len = u16::try_from(data.len())
        .map_err(|_| SdkError::Rejected(format!("{field} too long")))?;
    bytes.extend_from_slice(&len.to_le_bytes());
    bytes.extend_from_slice(data);
    Ok(())
}

/// Byte layout:
/// type | version<<4 + subtype | testnet | deadline (u16 LE) | keccak(genesis) |
/// recipient (u16 len + utf8) | amount (u64 LE) | fee (u64 LE) |
/// [asset (u64 LE) | quantity (u64 LE)] | message flags | [message (u16 len + bytes)]
fn encode_unsigned(tx: &UnsignedTransaction) -> Result<Vec<u8>, SdkError> {
    let config = &tx.config;
    let mut bytes = Vec::with_capacity(128);

    bytes.push(config.attachment.type_id());
    bytes.push((MOCK_TX_VERSION << 4) | config.attachment.subtype_id());
    bytes.push(u8::from(config.is_testnet));
    bytes.extend_from_slice(&config.deadline.to_le_bytes());
    bytes.extend_from_slice(&keccak256(config.genesis_key.as_bytes()));
    write_len_prefixed(&mut bytes, tx.recipient.as_bytes(), "recipient")?;
    bytes.extend_from_slice(&parse_u64(config.amount_hqt.as_str(), "amountHQT")?.to_le_bytes());
    bytes.extend_from_slice(&parse_u64(config.fee_hqt.as_str(), "feeHQT")?.to_le_bytes());

    if let Attachment::AssetTransfer { asset, quantity } = &config.attachment {
        bytes.extend_from_slice(&parse_u64(asset.as_str(), "asset")?.to_le_bytes());
        bytes.extend_from_slice(&parse_u64(quantity.as_str(), "quantityQNT")?.to_le_bytes());
    }

    match &tx.message {
        None => bytes.push(0),
        Some(message) => {
            let flags = 0b001 | (u8::from(message.is_private) << 1) | (u8::from(message.is_binary) << 2);
            bytes.push(flags);
            let body = if message.is_binary {
                hex::decode(&message.body)
                    .map_err(|_| SdkError::Rejected("binary message is not hex".to_string()))?
            } else {
                message.body.as_bytes().to_vec()
            };
            write_len_prefixed(&mut bytes, &body, "message")?;
        }
    }

    Ok(bytes)
}
