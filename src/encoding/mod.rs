//! Byte Encoding
//!
//! Primitive-to-bytes converters shared by every transaction layout.
//! All multi-byte integers are big-endian; variable-length fields carry a
//! two-byte big-endian length prefix.

pub mod base58;

use crate::error::{WavesError, WavesResult};

/// Eight-byte big-endian encoding of amounts, fees and timestamps
pub fn long_to_bytes(value: i64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Four-byte big-endian encoding
pub fn int_to_bytes(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Two-byte big-endian encoding, used for length prefixes
pub fn short_to_bytes(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

pub fn boolean_to_bytes(flag: bool) -> [u8; 1] {
    [u8::from(flag)]
}

/// UTF-8 bytes of a string, no prefix
pub fn string_to_bytes(value: &str) -> Vec<u8> {
    value.as_bytes().to_vec()
}

/// Prefix `bytes` with their length as a two-byte big-endian integer
pub fn byte_array_with_size(bytes: &[u8]) -> WavesResult<Vec<u8>> {
    let len = u16::try_from(bytes.len()).map_err(|_| {
        WavesError::invalid_input(format!(
            "Field is too long to be length-prefixed: {} bytes",
            bytes.len()
        ))
    })?;

    let mut out = Vec::with_capacity(2 + bytes.len());
    out.extend_from_slice(&short_to_bytes(len));
    out.extend_from_slice(bytes);
    Ok(out)
}

/// UTF-8 bytes of a string prefixed with their length
pub fn string_to_bytes_with_size(value: &str) -> WavesResult<Vec<u8>> {
    byte_array_with_size(value.as_bytes())
}

/// Encode an asset id.
///
/// Mandatory ids are the raw decoded bytes and must be present. Optional ids
/// carry a presence flag: `[0]` for the native asset, `[1] ++ id` otherwise.
pub fn currency_to_bytes(asset_id: Option<&str>, mandatory: bool) -> WavesResult<Vec<u8>> {
    let id = asset_id.filter(|id| !id.is_empty());

    if mandatory {
        let id = id.ok_or_else(|| WavesError::missing_field("Asset id is required"))?;
        return base58::decode(id);
    }

    match id {
        None => Ok(vec![0]),
        Some(id) => {
            let decoded = base58::decode(id)?;
            let mut out = Vec::with_capacity(1 + decoded.len());
            out.push(1);
            out.extend_from_slice(&decoded);
            Ok(out)
        }
    }
}

/// The on-wire network id: the low byte of the network code character
pub fn network_byte(code: char) -> u8 {
    (u32::from(code) & 0xFF) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_to_bytes_is_full_width() {
        assert_eq!(long_to_bytes(0), [0; 8]);
        assert_eq!(long_to_bytes(100_000), [0, 0, 0, 0, 0, 1, 134, 160]);
        assert_eq!(long_to_bytes(1_474_976_994_320), [0, 0, 1, 87, 107, 122, 212, 16]);
        // values needing the most significant byte are kept intact
        assert_eq!(long_to_bytes(i64::MAX)[0], 0x7F);
        assert_eq!(long_to_bytes(0x0102_0304_0506_0708), [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_short_to_bytes_big_endian() {
        assert_eq!(short_to_bytes(14851), [58, 3]);
        assert_eq!(short_to_bytes(1), [0, 1]);
    }

    #[test]
    fn test_int_and_boolean() {
        assert_eq!(int_to_bytes(2), [0, 0, 0, 2]);
        assert_eq!(boolean_to_bytes(true), [1]);
        assert_eq!(boolean_to_bytes(false), [0]);
    }

    #[test]
    fn test_sized_fields() {
        assert_eq!(string_to_bytes_with_size("").unwrap(), vec![0, 0]);
        assert_eq!(string_to_bytes_with_size("abc").unwrap(), vec![0, 3, 97, 98, 99]);
        // UTF-8 length, not char count
        assert_eq!(string_to_bytes_with_size("é").unwrap(), vec![0, 2, 0xC3, 0xA9]);
        assert!(byte_array_with_size(&vec![0u8; 70_000]).is_err());
    }

    #[test]
    fn test_currency_to_bytes() {
        assert_eq!(currency_to_bytes(None, false).unwrap(), vec![0]);
        assert_eq!(currency_to_bytes(Some(""), false).unwrap(), vec![0]);

        let id = "8Nu3gdirpraz8ghmDHscTnoAbmCTLPxLhMeVzG4UxSQY";
        let optional = currency_to_bytes(Some(id), false).unwrap();
        assert_eq!(optional.len(), 33);
        assert_eq!(optional[0], 1);

        let mandatory = currency_to_bytes(Some(id), true).unwrap();
        assert_eq!(&optional[1..], mandatory.as_slice());

        let err = currency_to_bytes(None, true).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::MissingField);
        assert!(currency_to_bytes(Some("0OIl"), false).is_err());
    }

    #[test]
    fn test_network_byte() {
        assert_eq!(network_byte('T'), 84);
        assert_eq!(network_byte('W'), 87);
    }
}
