//! Hexadecimal block-number decoding

use crate::errors::MonitorError;

/// Decode a hex block number as returned by the chain RPC.
///
/// Accepts an optional `0x` prefix; the remainder must be non-empty and
/// consist of hex digits only. Values are limited to 64 bits.
pub fn decode_block_number(hex: &str) -> Result<u64, MonitorError> {
    let digits = hex.strip_prefix("0x").unwrap_or(hex);

    // from_str_radix tolerates a leading sign, so validate digits first
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(MonitorError::InvalidFormat {
            value: hex.to_string(),
            reason: "not a hexadecimal number".to_string(),
        });
    }

    u64::from_str_radix(digits, 16).map_err(|e| MonitorError::InvalidFormat {
        value: hex.to_string(),
        reason: e.to_string(),
    })
}
