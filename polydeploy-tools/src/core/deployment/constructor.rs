// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::{Constructor, StateMutability::Payable},
    primitives::U256,
};

use crate::core::config::ConfigurationError::{self, InvalidConstructor};

/// ABI-encodes constructor arguments given as strings, to be appended to the creation code.
///
/// A contract without a constructor in its ABI takes no arguments and no value.
pub fn encode_constructor_args(
    constructor: Option<&Constructor>,
    args: &[String],
    value: U256,
) -> Result<Vec<u8>, ConfigurationError> {
    let Some(constructor) = constructor else {
        if !args.is_empty() {
            return Err(InvalidConstructor(format!(
                "contract has no constructor but {} argument(s) were given",
                args.len()
            )));
        }
        if !value.is_zero() {
            return Err(InvalidConstructor(
                "attempting to send Ether to non-payable constructor".to_string(),
            ));
        }
        return Ok(Vec::new());
    };

    if constructor.state_mutability != Payable && !value.is_zero() {
        return Err(InvalidConstructor(
            "attempting to send Ether to non-payable constructor".to_string(),
        ));
    }
    if args.len() != constructor.inputs.len() {
        return Err(InvalidConstructor(format!(
            "mismatch number of constructor arguments (want {:?} ({}); got {})",
            constructor
                .inputs
                .iter()
                .map(|param| param.ty.as_str())
                .collect::<Vec<_>>(),
            constructor.inputs.len(),
            args.len(),
        )));
    }

    let mut values = Vec::<DynSolValue>::with_capacity(args.len());
    for (arg, param) in args.iter().zip(constructor.inputs.iter()) {
        let ty = param.resolve().map_err(|err| {
            InvalidConstructor(format!("could not resolve constructor arg {param}: {err}"))
        })?;
        let value = ty.coerce_str(arg).map_err(|err| {
            InvalidConstructor(format!("could not parse constructor arg {param}: {err}"))
        })?;
        values.push(value);
    }
    constructor
        .abi_encode_input_raw(&values)
        .map_err(|err| InvalidConstructor(err.to_string()))
}

#[cfg(test)]
mod tests {
    use alloy::json_abi::JsonAbi;

    use super::*;

    fn constructor(mutability: &str) -> Constructor {
        let abi: JsonAbi = serde_json::from_str(&format!(
            r#"[{{
                "type": "constructor",
                "stateMutability": "{mutability}",
                "inputs": [
                    {{"name": "supply", "type": "uint256", "internalType": "uint256"}},
                    {{"name": "owner", "type": "address", "internalType": "address"}}
                ]
            }}]"#
        ))
        .unwrap();
        abi.constructor.unwrap()
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn encodes_arguments() {
        let encoded = encode_constructor_args(
            Some(&constructor("nonpayable")),
            &args(&["1000", "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"]),
            U256::ZERO,
        )
        .unwrap();
        assert_eq!(encoded.len(), 64);
        assert_eq!(U256::from_be_slice(&encoded[..32]), U256::from(1000));
        assert_eq!(
            hex::encode(&encoded[44..64]),
            "f39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn rejects_wrong_argument_count() {
        let err = encode_constructor_args(
            Some(&constructor("nonpayable")),
            &args(&["1000"]),
            U256::ZERO,
        )
        .unwrap_err();
        assert!(err.to_string().contains("mismatch number of constructor arguments"));
    }

    #[test]
    fn rejects_unparsable_argument() {
        let err = encode_constructor_args(
            Some(&constructor("nonpayable")),
            &args(&["lots", "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"]),
            U256::ZERO,
        )
        .unwrap_err();
        assert!(matches!(err, InvalidConstructor(_)));
    }

    #[test]
    fn value_requires_payable_constructor() {
        let owner = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
        let value = U256::from(1);
        assert!(encode_constructor_args(
            Some(&constructor("nonpayable")),
            &args(&["1", owner]),
            value
        )
        .is_err());
        assert!(
            encode_constructor_args(Some(&constructor("payable")), &args(&["1", owner]), value)
                .is_ok()
        );
        assert!(encode_constructor_args(None, &[], value).is_err());
    }

    #[test]
    fn default_constructor_takes_nothing() {
        assert!(encode_constructor_args(None, &[], U256::ZERO)
            .unwrap()
            .is_empty());
        assert!(encode_constructor_args(None, &args(&["1"]), U256::ZERO).is_err());
    }
}
