//! Sortable integer decoding for point-range bounds
//!
//! A point range carries each bound as a fixed-width big-endian integer with
//! its sign bit flipped, so that unsigned byte order equals signed numeric
//! order. Four bytes hold an `i32`, eight bytes an `i64`.
//!
//! Any other width is not an error: the bound degrades to unbounded, i.e.
//! `i64::MIN` for a lower bound and `i64::MAX` for an upper bound.

/// Width of a 32-bit encoded bound
pub const INT_BYTES: usize = 4;

/// Width of a 64-bit encoded bound
pub const LONG_BYTES: usize = 8;

const INT_SIGN_BIT: u32 = 0x8000_0000;
const LONG_SIGN_BIT: u64 = 0x8000_0000_0000_0000;

/// Which end of a range a bound sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundSide {
    Lower,
    Upper,
}

impl BoundSide {
    /// Value used when the bound cannot be decoded
    pub fn sentinel(&self) -> i64 {
        match self {
            BoundSide::Lower => i64::MIN,
            BoundSide::Upper => i64::MAX,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BoundSide::Lower => "lower",
            BoundSide::Upper => "upper",
        }
    }
}

/// Encodes an `i64` into its 8-byte sortable form
pub fn encode_i64(value: i64) -> [u8; LONG_BYTES] {
    ((value as u64) ^ LONG_SIGN_BIT).to_be_bytes()
}

/// Encodes an `i32` into its 4-byte sortable form
pub fn encode_i32(value: i32) -> [u8; INT_BYTES] {
    ((value as u32) ^ INT_SIGN_BIT).to_be_bytes()
}

/// Decodes an 8-byte sortable value
pub fn sortable_bytes_to_i64(bytes: [u8; LONG_BYTES]) -> i64 {
    (u64::from_be_bytes(bytes) ^ LONG_SIGN_BIT) as i64
}

/// Decodes a 4-byte sortable value
pub fn sortable_bytes_to_i32(bytes: [u8; INT_BYTES]) -> i32 {
    (u32::from_be_bytes(bytes) ^ INT_SIGN_BIT) as i32
}

/// Decodes a 4- or 8-byte bound, widening 32-bit values.
///
/// Returns `None` for any other width.
pub fn try_decode(bytes: &[u8]) -> Option<i64> {
    if let Ok(long) = <[u8; LONG_BYTES]>::try_from(bytes) {
        return Some(sortable_bytes_to_i64(long));
    }
    if let Ok(int) = <[u8; INT_BYTES]>::try_from(bytes) {
        return Some(i64::from(sortable_bytes_to_i32(int)));
    }
    None
}

/// Decodes a range bound, substituting the side's sentinel for an
/// unparseable width.
pub fn decode_bound(bytes: &[u8], side: BoundSide) -> i64 {
    try_decode(bytes).unwrap_or_else(|| side.sentinel())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_encodings() {
        assert_eq!(encode_i32(0), [0x80, 0, 0, 0]);
        assert_eq!(encode_i32(-1), [0x7f, 0xff, 0xff, 0xff]);
        assert_eq!(encode_i32(i32::MIN), [0, 0, 0, 0]);
        assert_eq!(encode_i64(1), [0x80, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_int_widths() {
        assert_eq!(try_decode(&encode_i32(10)), Some(10));
        assert_eq!(try_decode(&encode_i32(-20)), Some(-20));
        assert_eq!(try_decode(&encode_i32(i32::MAX)), Some(i64::from(i32::MAX)));
        assert_eq!(try_decode(&encode_i64(i64::MIN)), Some(i64::MIN));
        assert_eq!(try_decode(&encode_i64(200)), Some(200));
    }

    #[test]
    fn test_bad_width_degrades_to_sentinel() {
        assert_eq!(try_decode(&[1, 2, 3]), None);
        assert_eq!(decode_bound(&[1, 2, 3], BoundSide::Lower), i64::MIN);
        assert_eq!(decode_bound(&[1, 2, 3], BoundSide::Upper), i64::MAX);
        assert_eq!(decode_bound(&[], BoundSide::Lower), i64::MIN);
        assert_eq!(decode_bound(&[0; 16], BoundSide::Upper), i64::MAX);
    }

    #[test]
    fn test_byte_order_matches_numeric_order() {
        let values = [i64::MIN, -1_000_000, -1, 0, 1, 42, i64::MAX];
        for pair in values.windows(2) {
            assert!(encode_i64(pair[0]) < encode_i64(pair[1]));
        }
    }
}
