//! Leaf encoders used by the translator
//!
//! - `numeric`: sortable fixed-width integer bounds
//! - `pattern`: wildcard and fuzzy text to regex source
//!
//! Both are pure functions with no logging.

mod numeric;
mod pattern;

pub use numeric::{
    decode_bound, encode_i32, encode_i64, sortable_bytes_to_i32, sortable_bytes_to_i64,
    try_decode, BoundSide, INT_BYTES, LONG_BYTES,
};
pub use pattern::{fuzzy_to_regex, wildcard_to_regex};
