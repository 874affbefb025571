//! Quoted text form of `[ubyte]` vectors.

use serde::{Deserialize, Serialize};

use crate::{from_base64, from_base64_url, to_base64, Base64Error, Base64Mode};

/// Printer options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Base64Options {
    /// Omit the trailing `=` in `(base64url)` output. Standard output is
    /// always padded.
    pub cancel_padding: bool,
}

/// Prints `src` as a quoted base64 string.
///
/// Returns `None` for an empty vector, which has no base64 text form.
///
/// ```
/// use flatbuf_base64::{print_base64_vector, Base64Mode, Base64Options};
///
/// let bytes = [255, 141, 254, 1, 234, 224, 20];
/// let opts = Base64Options { cancel_padding: true };
/// assert_eq!(
///     print_base64_vector(Base64Mode::UrlSafe, &bytes, &opts).as_deref(),
///     Some("\"_43-AergFA\""),
/// );
/// ```
pub fn print_base64_vector(
    mode: Base64Mode,
    src: &[u8],
    options: &Base64Options,
) -> Option<String> {
    if src.is_empty() {
        return None;
    }
    let pad = !(options.cancel_padding && mode == Base64Mode::UrlSafe);
    let encoded = to_base64(mode, src, pad);
    let mut text = String::with_capacity(encoded.len() + 2);
    text.push('"');
    text.push_str(&encoded);
    text.push('"');
    Some(text)
}

/// Parses the (unquoted) base64 text of a `[ubyte]` vector.
pub fn parse_base64_vector(mode: Base64Mode, text: &str) -> Result<Vec<u8>, Base64Error> {
    let bytes = match mode {
        Base64Mode::Standard => from_base64(text)?,
        Base64Mode::UrlSafe => from_base64_url(text)?,
    };
    if bytes.is_empty() {
        return Err(Base64Error::Empty);
    }
    Ok(bytes)
}
