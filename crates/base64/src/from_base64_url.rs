//! URL-safe base64 decoding function.

use crate::constants::URL_DECODE;
use crate::decode::decode_with;

/// Decodes a URL-safe base64 string to bytes.
///
/// Accepts both the URL-safe (`-`, `_`) and the standard (`+`, `/`) symbols,
/// in any mix. Padding is optional.
///
/// # Example
///
/// ```
/// use flatbuf_base64::from_base64_url;
///
/// let decoded = from_base64_url("aGVsbG8gd29ybGQ").unwrap();
/// assert_eq!(decoded, b"hello world");
/// ```
pub fn from_base64_url(encoded: &str) -> Result<Vec<u8>, crate::Base64Error> {
    decode_with(&URL_DECODE, encoded)
}
