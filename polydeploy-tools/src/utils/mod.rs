// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use alloy::primitives::U256;

use color::Color;

pub mod color;

/// Decimals of the native currency on every EVM chain we deploy to.
pub const ETHER_DECIMALS: u8 = 18;

/// Formats a base-unit amount with `decimals` decimal places.
///
/// Trailing zeros of the fraction are dropped but at least one fractional digit is kept, so one
/// whole unit prints as `1.0` and one wei prints as `0.000000000000000001`.
pub fn format_units(value: U256, decimals: u8) -> String {
    let base = U256::from(10).pow(U256::from(decimals));
    let whole = value / base;
    let fraction = (value % base).to_string();
    let fraction = format!("{fraction:0>width$}", width = decimals as usize);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{whole}.0")
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Formats a wei amount in ether (or the chain's equivalent display unit).
pub fn format_ether(wei: U256) -> String {
    format_units(wei, ETHER_DECIMALS)
}

/// Pretty-prints a balance, red when empty.
pub fn format_balance(wei: U256, symbol: &str) -> String {
    let text = format!("{} {symbol}", format_ether(wei));
    if wei.is_zero() {
        text.red()
    } else {
        text.mint()
    }
}

/// Decodes hex text with or without a `0x` prefix.
pub fn decode0x(text: impl AsRef<str>) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.as_ref().trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_ether() {
        let wei = U256::from(1_000_000_000_000_000_000u128);
        assert_eq!(format_ether(wei), "1.0");
    }

    #[test]
    fn formats_fractions() {
        let test_cases = [
            (0u128, "0.0"),
            (1, "0.000000000000000001"),
            (1_500_000_000_000_000_000, "1.5"),
            (123_456_789_000_000_000_000, "123.456789"),
            (10_000_000_000_000_000_000, "10.0"),
        ];
        for (wei, expected) in test_cases {
            assert_eq!(format_ether(U256::from(wei)), expected);
        }
    }

    #[test]
    fn formats_other_decimals() {
        assert_eq!(format_units(U256::from(1_234_500u64), 6), "1.2345");
        assert_eq!(format_units(U256::from(7u64), 0), "7.0");
    }

    #[test]
    fn decodes_hex_with_and_without_prefix() {
        assert_eq!(decode0x("0x0aff").unwrap(), vec![0x0a, 0xff]);
        assert_eq!(decode0x(" 0aff\n").unwrap(), vec![0x0a, 0xff]);
        assert!(decode0x("0xzz").is_err());
    }
}
