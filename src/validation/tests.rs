//! Tests for address and parameter validation

#[cfg(test)]
mod tests {
    use crate::{
        error::{ArgType, ValidationError},
        validation::{is_valid_address, AmountPolicy, Validator},
        AssetTransferParams, Network, TransferParams,
    };
    use serde_json::{json, Value};

    /// Helper function to create parameters that pass every check
    fn valid_params() -> TransferParams {
        TransferParams {
            key: json!("secret phrase"),
            recipient_address: json!("12345"),
            recipient_public_key: Value::Null,
            amount: json!("100000000"),
            fee: json!("1000000"),
            network_type: json!("test"),
            message: Value::Null,
            message_is_private: json!(false),
            message_is_binary: json!(false),
        }
    }

    fn valid_asset_params() -> AssetTransferParams {
        AssetTransferParams {
            transfer: valid_params(),
            asset: json!("9876543210"),
        }
    }

    fn message_of(err: ValidationError) -> String {
        err.to_string()
    }

    #[test]
    fn test_is_valid_address_examples() {
        assert!(is_valid_address(&json!("123")));
        assert!(!is_valid_address(&json!("0")));
        assert!(!is_valid_address(&json!("abc")));
        assert!(!is_valid_address(&json!(123)));
        assert!(!is_valid_address(&json!("")));
    }

    #[test]
    fn test_is_valid_address_number_conversion() {
        // Whitespace is trimmed before conversion
        assert!(is_valid_address(&json!(" 42 ")));
        assert!(!is_valid_address(&json!("   ")));
        // Large ids stay valid as strings
        assert!(is_valid_address(&json!("18446744073709551615")));
        assert!(is_valid_address(&json!("0x1A")));
        assert!(is_valid_address(&json!("1e3")));
        assert!(!is_valid_address(&json!("-0")));
        assert!(!is_valid_address(&json!("0.0")));
        assert!(!is_valid_address(&json!("12abc")));
        assert!(!is_valid_address(&json!("inf")));
        assert!(!is_valid_address(&json!("NaN")));
        assert!(!is_valid_address(&Value::Null));
        assert!(!is_valid_address(&json!(true)));
        assert!(!is_valid_address(&json!(["123"])));
    }

    #[test]
    fn test_is_valid_address_radix_literals() {
        // No sign after the radix prefix
        assert!(!is_valid_address(&json!("0x+1")));
        assert!(!is_valid_address(&json!("0b+1")));
        assert!(!is_valid_address(&json!("0o-7")));
        assert!(!is_valid_address(&json!("0x")));
        assert!(!is_valid_address(&json!("0x00")));
        assert!(is_valid_address(&json!("0b101")));
        assert!(is_valid_address(&json!("0O17")));

        // Wider than 128 bits still converts to a non-zero number
        let wide = format!("0x{}", "f".repeat(33));
        assert!(is_valid_address(&json!(wide)));
        let wide_zero = format!("0x{}", "0".repeat(40));
        assert!(!is_valid_address(&json!(wide_zero)));
    }

    #[test]
    fn test_valid_params_produce_request() {
        let request = Validator::default().validate_transfer(&valid_params()).unwrap();

        assert_eq!(request.key, "secret phrase");
        assert_eq!(request.recipient_address.as_str(), "12345");
        assert_eq!(request.recipient_public_key, None);
        assert_eq!(request.amount.as_str(), "100000000");
        assert_eq!(request.fee.as_str(), "1000000");
        assert_eq!(request.network, Network::Testnet);
        assert_eq!(request.message, None);
        assert_eq!(request.recipient(), "12345");
    }

    #[test]
    fn test_key_must_be_string() {
        let mut params = valid_params();
        params.key = json!(42);

        let err = Validator::default().validate_transfer(&params).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongType { param: "Key", expected: ArgType::String }
        );
        assert_eq!(message_of(err), "Key arg should be \"String\"");
    }

    #[test]
    fn test_first_failing_param_wins() {
        let mut params = valid_params();
        params.key = Value::Null;
        params.recipient_address = json!("0");
        params.message_is_binary = json!("yes");

        let err = Validator::default().validate_transfer(&params).unwrap_err();
        assert_eq!(err.param(), "Key");
    }

    #[test]
    fn test_recipient_address_must_be_valid() {
        for bad in [json!("0"), json!("abc"), json!(12345), Value::Null] {
            let mut params = valid_params();
            params.recipient_address = bad;

            let err = Validator::default().validate_transfer(&params).unwrap_err();
            assert_eq!(message_of(err), "recipientAddress arg should be \"String\"");
        }
    }

    #[test]
    fn test_recipient_public_key_when_present_must_be_string() {
        let mut params = valid_params();
        params.recipient_public_key = json!(7);
        let err = Validator::default().validate_transfer(&params).unwrap_err();
        assert_eq!(message_of(err), "recipientPublicKey arg should be \"String\"");

        // Falsy values count as absent, an empty key included
        for absent in [Value::Null, json!(false), json!(0), json!("")] {
            let mut params = valid_params();
            params.recipient_public_key = absent;
            let request = Validator::default().validate_transfer(&params).unwrap();
            assert_eq!(request.recipient_public_key, None);
            assert_eq!(request.recipient(), "12345");
        }
    }

    #[test]
    fn test_recipient_prefers_public_key() {
        let mut params = valid_params();
        params.recipient_public_key = json!("a1b2c3d4");

        let request = Validator::default().validate_transfer(&params).unwrap();
        assert_eq!(request.recipient(), "a1b2c3d4");
        assert_eq!(request.recipient_address.as_str(), "12345");
    }

    #[test]
    fn test_strict_amount_and_fee() {
        let validator = Validator::new(AmountPolicy::Strict);

        for bad in [json!(100), json!("abc"), json!("0"), json!(""), json!("-5"), json!("1.5"), json!("1e8")] {
            let mut params = valid_params();
            params.amount = bad.clone();
            let err = validator.validate_transfer(&params).unwrap_err();
            assert_eq!(message_of(err), "amount arg should be \"String\"");

            let mut params = valid_params();
            params.fee = bad;
            let err = validator.validate_transfer(&params).unwrap_err();
            assert_eq!(message_of(err), "fee arg should be \"String\"");
        }
    }

    #[test]
    fn test_legacy_amount_rejects_only_positive_non_strings() {
        let validator = Validator::new(AmountPolicy::Legacy);

        let mut params = valid_params();
        params.amount = json!(100);
        let err = validator.validate_transfer(&params).unwrap_err();
        assert_eq!(message_of(err), "amount arg should be \"String\"");

        let mut params = valid_params();
        params.fee = json!(true);
        let err = validator.validate_transfer(&params).unwrap_err();
        assert_eq!(message_of(err), "fee arg should be \"String\"");

        // Strings of any shape, null and non-positive numbers are forwarded
        let mut params = valid_params();
        params.amount = json!("abc");
        params.fee = Value::Null;
        let request = validator.validate_transfer(&params).unwrap();
        assert_eq!(request.amount.as_str(), "abc");
        assert_eq!(request.fee.as_str(), "");

        // Arrays convert through their single element
        for rejected in [json!([100]), json!(["7"]), json!([[5]])] {
            let mut params = valid_params();
            params.amount = rejected;
            let err = validator.validate_transfer(&params).unwrap_err();
            assert_eq!(message_of(err), "amount arg should be \"String\"");
        }
        for forwarded in [json!([]), json!([0]), json!([null]), json!([true]), json!([1, 2])] {
            let mut params = valid_params();
            params.amount = forwarded.clone();
            let request = validator.validate_transfer(&params).unwrap();
            assert_eq!(request.amount.as_str(), forwarded.to_string());
        }

        let mut params = valid_params();
        params.amount = json!(0);
        params.fee = json!(-3);
        let request = validator.validate_transfer(&params).unwrap();
        assert_eq!(request.amount.as_str(), "0");
        assert_eq!(request.fee.as_str(), "-3");
    }

    #[test]
    fn test_network_type_must_be_string() {
        let mut params = valid_params();
        params.network_type = Value::Null;
        let err = Validator::default().validate_transfer(&params).unwrap_err();
        assert_eq!(message_of(err), "networkType arg should be \"String\"");
    }

    #[test]
    fn test_only_literal_test_selects_testnet() {
        for (selector, expected) in [
            ("test", Network::Testnet),
            ("prod", Network::Mainnet),
            ("mainnet", Network::Mainnet),
            ("TEST", Network::Mainnet),
            ("testnet", Network::Mainnet),
            ("", Network::Mainnet),
        ] {
            let mut params = valid_params();
            params.network_type = json!(selector);
            let request = Validator::default().validate_transfer(&params).unwrap();
            assert_eq!(request.network, expected, "selector {selector:?}");
        }
    }

    #[test]
    fn test_message_when_present_must_be_string() {
        let mut params = valid_params();
        params.message = json!({"text": "hi"});
        let err = Validator::default().validate_transfer(&params).unwrap_err();
        assert_eq!(message_of(err), "message arg should be \"String\"");

        let mut params = valid_params();
        params.message = json!("");
        let request = Validator::default().validate_transfer(&params).unwrap();
        assert_eq!(request.message, None);
    }

    #[test]
    fn test_message_flags_must_be_booleans() {
        let mut params = valid_params();
        params.message_is_private = Value::Null;
        let err = Validator::default().validate_transfer(&params).unwrap_err();
        assert_eq!(message_of(err), "messageIsPrivate arg should be \"Boolean\"");

        let mut params = valid_params();
        params.message_is_binary = json!("false");
        let err = Validator::default().validate_transfer(&params).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongType { param: "messageIsBinary", expected: ArgType::Boolean }
        );
    }

    #[test]
    fn test_message_flags_are_carried() {
        let mut params = valid_params();
        params.message = json!("hello");
        params.message_is_private = json!(true);

        let request = Validator::default().validate_transfer(&params).unwrap();
        let message = request.message.unwrap();
        assert_eq!(message.body, "hello");
        assert!(message.is_private);
        assert!(!message.is_binary);
    }

    #[test]
    fn test_asset_must_be_valid_address() {
        for bad in [json!("0"), json!("asset"), json!(77), Value::Null] {
            let mut params = valid_asset_params();
            params.asset = bad;
            let err = Validator::default().validate_asset_transfer(&params).unwrap_err();
            assert_eq!(err, ValidationError::InvalidAsset);
            assert_eq!(message_of(err), "asset arg not valid should be \"String\"");
        }
    }

    #[test]
    fn test_asset_checked_after_network_type_before_message() {
        let mut params = valid_asset_params();
        params.asset = json!("0");
        params.transfer.network_type = json!(1);
        let err = Validator::default().validate_asset_transfer(&params).unwrap_err();
        assert_eq!(err.param(), "networkType");

        let mut params = valid_asset_params();
        params.asset = json!("0");
        params.transfer.message = json!(5);
        let err = Validator::default().validate_asset_transfer(&params).unwrap_err();
        assert_eq!(err.param(), "asset");
    }

    #[test]
    fn test_valid_asset_request() {
        let request = Validator::default()
            .validate_asset_transfer(&valid_asset_params())
            .unwrap();
        assert_eq!(request.asset.as_str(), "9876543210");
        assert_eq!(request.transfer.amount.as_str(), "100000000");
    }

    #[test]
    fn test_params_deserialize_from_camel_case_json() {
        let params: AssetTransferParams = serde_json::from_value(json!({
            "key": "secret phrase",
            "recipientAddress": "12345",
            "amount": "5",
            "fee": "1000000",
            "networkType": "prod",
            "asset": "555",
            "messageIsPrivate": false,
            "messageIsBinary": false
        }))
        .unwrap();

        assert_eq!(params.transfer.recipient_public_key, Value::Null);
        assert_eq!(params.transfer.message, Value::Null);

        let request = Validator::default().validate_asset_transfer(&params).unwrap();
        assert_eq!(request.asset.as_str(), "555");
        assert_eq!(request.transfer.network, Network::Mainnet);
    }
}
