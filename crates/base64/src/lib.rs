//! Base64 text form for `[ubyte]` vectors (RFC 4648).
//!
//! Two modes exist, selected by the schema attribute on a byte vector field:
//!
//! - `(base64)`: standard alphabet. Padding is optional on input.
//! - `(base64url)`: URL and filename safe alphabet. The decoder also accepts
//!   the standard `+` and `/`, so any mix of the two alphabets decodes.
//!
//! ```
//! use flatbuf_base64::{from_base64, from_base64_url, to_base64, Base64Mode};
//!
//! let bytes = [255, 141, 254, 1, 234, 224, 20];
//! assert_eq!(to_base64(Base64Mode::Standard, &bytes, true), "/43+AergFA==");
//! assert_eq!(to_base64(Base64Mode::UrlSafe, &bytes, true), "_43-AergFA==");
//! assert_eq!(from_base64("/43+AergFA").unwrap(), bytes);
//! assert_eq!(from_base64_url("_43+AergFA==").unwrap(), bytes);
//! ```

mod constants;
mod create_to_base64;
mod decode;
mod from_base64;
mod from_base64_url;
mod vector;

pub use constants::{ALPHABET, ALPHABET_URL, PAD};
pub use create_to_base64::{to_base64, Base64Encoder};
pub use from_base64::from_base64;
pub use from_base64_url::from_base64_url;
pub use vector::{parse_base64_vector, print_base64_vector, Base64Options};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for base64 operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    #[error("base64 alphabet must have exactly 64 ASCII characters")]
    InvalidCharSetLength,
    #[error("invalid base64 character {ch:?} at position {pos}")]
    InvalidChar { ch: char, pos: usize },
    #[error("invalid base64 length {len}")]
    InvalidLength { len: usize },
    #[error("empty base64 vector")]
    Empty,
}

/// Alphabet selection for a byte vector field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base64Mode {
    /// `(base64)` attribute: standard alphabet.
    #[serde(rename = "base64")]
    Standard,
    /// `(base64url)` attribute: URL and filename safe alphabet.
    #[serde(rename = "base64url")]
    UrlSafe,
}

impl Base64Mode {
    /// Maps a schema attribute name to a mode.
    pub fn from_attribute(name: &str) -> Option<Self> {
        match name {
            "base64" => Some(Self::Standard),
            "base64url" => Some(Self::UrlSafe),
            _ => None,
        }
    }

    pub fn attribute(self) -> &'static str {
        match self {
            Self::Standard => "base64",
            Self::UrlSafe => "base64url",
        }
    }

    /// Encoding alphabet.
    pub fn alphabet(self) -> &'static str {
        match self {
            Self::Standard => ALPHABET,
            Self::UrlSafe => ALPHABET_URL,
        }
    }
}
