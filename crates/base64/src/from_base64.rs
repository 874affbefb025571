//! Standard base64 decoding function.

use crate::constants::STD_DECODE;
use crate::decode::decode_with;

/// Decodes a standard base64 string to bytes.
///
/// Padding is optional. URL-safe symbols (`-`, `_`) are rejected.
///
/// # Example
///
/// ```
/// use flatbuf_base64::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
/// assert_eq!(from_base64("aGVsbG8gd29ybGQ").unwrap(), b"hello world");
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, crate::Base64Error> {
    decode_with(&STD_DECODE, encoded)
}
