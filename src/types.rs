use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Numeric account identifier, kept as the caller's string to avoid
/// precision loss on 64-bit ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Build an address from a JSON value that passes `is_valid_address`.
    pub fn from_value(value: &Value) -> Option<Self> {
        if crate::validation::is_valid_address(value) {
            value.as_str().map(|s| Self(s.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Base-unit (HQT) amount, forwarded to the SDK as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(String);

impl Amount {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The fixed top-level amount of an asset transfer.
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Only the literal selector `"test"` picks the test network.
    pub fn from_selector(selector: &str) -> Self {
        if selector == "test" {
            Network::Testnet
        } else {
            Network::Mainnet
        }
    }

    pub fn is_testnet(self) -> bool {
        matches!(self, Network::Testnet)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

/// Message appendix attached to a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub body: String,
    pub is_private: bool,
    pub is_binary: bool,
}

/// Transaction attachment
///
/// HEAT identifies attachments by `(type, subtype)`:
/// - ordinary payment: `(0, 0)`
/// - asset transfer: `(2, 2)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attachment {
    OrdinaryPayment,
    AssetTransfer { asset: Address, quantity: Amount },
}

impl Attachment {
    pub fn type_id(&self) -> u8 {
        match self {
            Attachment::OrdinaryPayment => 0,
            Attachment::AssetTransfer { .. } => 2,
        }
    }

    pub fn subtype_id(&self) -> u8 {
        match self {
            Attachment::OrdinaryPayment => 0,
            Attachment::AssetTransfer { .. } => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Attachment::OrdinaryPayment => "OrdinaryPayment",
            Attachment::AssetTransfer { .. } => "AssetTransfer",
        }
    }
}

/// Caller-supplied parameters for a HEAT transfer
///
/// Fields are untyped JSON so that callers coming from JSON payloads get the
/// same argument checks regardless of how they built the request. Missing
/// fields deserialize to `null`.
///
/// # Example JSON
/// ```json
/// {
///   "key": "secret phrase",
///   "recipientAddress": "12345",
///   "amount": "100000000",
///   "fee": "1000000",
///   "networkType": "test",
///   "messageIsPrivate": false,
///   "messageIsBinary": false
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferParams {
    pub key: Value,
    pub recipient_address: Value,
    pub recipient_public_key: Value,
    pub amount: Value,
    pub fee: Value,
    pub network_type: Value,
    pub message: Value,
    pub message_is_private: Value,
    pub message_is_binary: Value,
}

/// Caller-supplied parameters for an asset transfer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetTransferParams {
    #[serde(flatten)]
    pub transfer: TransferParams,
    #[serde(default)]
    pub asset: Value,
}

/// Validated HEAT transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub key: String,
    pub recipient_address: Address,
    pub recipient_public_key: Option<String>,
    pub amount: Amount,
    pub fee: Amount,
    pub network: Network,
    pub message: Option<Message>,
}

impl TransferRequest {
    /// The public key when one was supplied, otherwise the numeric address.
    ///
    /// An empty public key was dropped during validation, so it falls back to
    /// the address. The JavaScript module this replaces would have sent to
    /// the empty string instead.
    pub fn recipient(&self) -> &str {
        self.recipient_public_key
            .as_deref()
            .unwrap_or_else(|| self.recipient_address.as_str())
    }
}

/// Validated asset transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTransferRequest {
    pub transfer: TransferRequest,
    pub asset: Address,
}

/// Hex encoding of a signed transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignedTransactionBytes(String);

impl SignedTransactionBytes {
    pub fn new(hex: String) -> Self {
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SignedTransactionBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SignedTransactionBytes> for String {
    fn from(bytes: SignedTransactionBytes) -> Self {
        bytes.0
    }
}
