use crate::types::{Amount, Attachment, Message};
use super::ResolvedConfig;
use serde::{Deserialize, Serialize};

/// Default transaction deadline in minutes
pub const DEFAULT_DEADLINE: u16 = 1440;

/// Everything the SDK needs to build a transaction body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionConfig {
    pub is_testnet: bool,
    pub genesis_key: String,
    pub attachment: Attachment,
    pub amount_hqt: Amount,
    pub fee_hqt: Amount,
    pub deadline: u16,
}

impl TransactionConfig {
    /// Start from the network constants an SDK instance resolved.
    pub fn for_network(
        resolved: &ResolvedConfig,
        attachment: Attachment,
        amount_hqt: Amount,
        fee_hqt: Amount,
    ) -> Self {
        Self {
            is_testnet: resolved.is_testnet,
            genesis_key: resolved.genesis_key.clone(),
            attachment,
            amount_hqt,
            fee_hqt,
            deadline: DEFAULT_DEADLINE,
        }
    }

    pub fn with_deadline(mut self, deadline: u16) -> Self {
        self.deadline = deadline;
        self
    }
}

/// A transaction ready to be signed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedTransaction {
    /// Recipient account id or public key
    pub recipient: String,
    pub config: TransactionConfig,
    pub message: Option<Message>,
}

/// Assemble a transaction from its configuration, recipient and optional message.
pub fn assemble_transaction(
    config: TransactionConfig,
    recipient: impl Into<String>,
    message: Option<Message>,
) -> UnsignedTransaction {
    UnsignedTransaction {
        recipient: recipient.into(),
        config,
        message,
    }
}
