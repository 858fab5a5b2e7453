use crate::{
    error::ValidationError,
    types::{
        Address, Amount, AssetTransferParams, AssetTransferRequest, Message, Network,
        TransferParams, TransferRequest,
    },
};
use super::address::{is_truthy, value_to_number};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// How `amount` and `fee` are checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountPolicy {
    /// A string of ASCII digits that parses as `u64` and is greater than zero.
    #[default]
    Strict,
    /// Rejects only non-string values that convert to a positive number.
    /// Everything else is forwarded to the SDK, which decides.
    Legacy,
}

/// Transfer parameter validator
///
/// Turns loosely typed `TransferParams` into a `TransferRequest`, failing on the
/// first parameter that does not pass its check.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    amount_policy: AmountPolicy,
}

impl Validator {
    pub fn new(amount_policy: AmountPolicy) -> Self {
        Self { amount_policy }
    }

    pub fn amount_policy(&self) -> AmountPolicy {
        self.amount_policy
    }

    /// Validate the parameters of a HEAT transfer
    ///
    /// Order: key, recipientAddress, recipientPublicKey, amount, fee,
    /// networkType, message, messageIsPrivate, messageIsBinary.
    pub fn validate_transfer(
        &self,
        params: &TransferParams,
    ) -> Result<TransferRequest, ValidationError> {
        debug!("Validating transfer parameters");
        self.validate(params, None)
            .map(|(request, _)| request)
            .inspect_err(|e| warn!("Transfer validation failed: {}", e))
    }

    /// Validate the parameters of an asset transfer
    ///
    /// Same order as [`Validator::validate_transfer`] with `asset` checked
    /// right after `networkType`.
    pub fn validate_asset_transfer(
        &self,
        params: &AssetTransferParams,
    ) -> Result<AssetTransferRequest, ValidationError> {
        debug!("Validating asset transfer parameters");
        let (transfer, asset) = self
            .validate(&params.transfer, Some(&params.asset))
            .inspect_err(|e| warn!("Asset transfer validation failed: {}", e))?;

        // `validate` always returns an asset when one was asked for
        let asset = asset.ok_or(ValidationError::InvalidAsset)?;
        Ok(AssetTransferRequest { transfer, asset })
    }

    fn validate(
        &self,
        params: &TransferParams,
        asset: Option<&Value>,
    ) -> Result<(TransferRequest, Option<Address>), ValidationError> {
        let key = params
            .key
            .as_str()
            .ok_or_else(|| ValidationError::string("Key"))?;

        let recipient_address = Address::from_value(&params.recipient_address)
            .ok_or_else(|| ValidationError::string("recipientAddress"))?;

        let recipient_public_key = optional_string(
            &params.recipient_public_key,
            "recipientPublicKey",
        )?;

        let amount = self.check_amount(&params.amount, "amount")?;
        let fee = self.check_amount(&params.fee, "fee")?;

        let network_type = params
            .network_type
            .as_str()
            .ok_or_else(|| ValidationError::string("networkType"))?;

        let asset = asset
            .map(|value| Address::from_value(value).ok_or(ValidationError::InvalidAsset))
            .transpose()?;

        let body = optional_string(&params.message, "message")?;

        let is_private = params
            .message_is_private
            .as_bool()
            .ok_or_else(|| ValidationError::boolean("messageIsPrivate"))?;
        let is_binary = params
            .message_is_binary
            .as_bool()
            .ok_or_else(|| ValidationError::boolean("messageIsBinary"))?;

        let request = TransferRequest {
            key: key.to_string(),
            recipient_address,
            recipient_public_key,
            amount,
            fee,
            network: Network::from_selector(network_type),
            message: body.map(|body| Message {
                body,
                is_private,
                is_binary,
            }),
        };

        debug!(
            "Transfer parameters valid: network={}, recipient={}",
            request.network, request.recipient_address
        );
        Ok((request, asset))
    }

    fn check_amount(&self, value: &Value, param: &'static str) -> Result<Amount, ValidationError> {
        match self.amount_policy {
            AmountPolicy::Strict => {
                let s = value.as_str().ok_or_else(|| ValidationError::string(param))?;
                let well_formed = !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
                match s.parse::<u64>() {
                    Ok(n) if well_formed && n > 0 => Ok(Amount::new(s)),
                    _ => Err(ValidationError::string(param)),
                }
            }
            AmountPolicy::Legacy => {
                if !value.is_string() && value_to_number(value).is_some_and(|n| n > 0.0) {
                    return Err(ValidationError::string(param));
                }
                Ok(match value {
                    Value::String(s) => Amount::new(s.as_str()),
                    Value::Null => Amount::new(""),
                    other => Amount::new(other.to_string()),
                })
            }
        }
    }
}

/// Optional string argument: falsy values count as absent, any other
/// non-string is rejected.
fn optional_string(value: &Value, param: &'static str) -> Result<Option<String>, ValidationError> {
    if !is_truthy(value) {
        return Ok(None);
    }
    value
        .as_str()
        .map(|s| Some(s.to_string()))
        .ok_or_else(|| ValidationError::string(param))
}
