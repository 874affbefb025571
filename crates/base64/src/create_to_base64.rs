//! Base64 encoder with a configurable alphabet.

use crate::constants::{ALPHABET, PAD};
use crate::{Base64Error, Base64Mode};

/// Encodes bytes with a fixed 64-character alphabet.
///
/// # Example
///
/// ```
/// use flatbuf_base64::Base64Encoder;
///
/// let encoder = Base64Encoder::new(None, true).unwrap();
/// assert_eq!(encoder.encode(b"hello"), "aGVsbG8=");
/// ```
#[derive(Debug, Clone)]
pub struct Base64Encoder {
    table: [u8; 64],
    pad: bool,
}

impl Base64Encoder {
    /// Creates an encoder for `chars` (standard alphabet when `None`).
    ///
    /// # Errors
    ///
    /// Returns an error if `chars` is not exactly 64 ASCII characters.
    pub fn new(chars: Option<&str>, pad: bool) -> Result<Self, Base64Error> {
        let chars = chars.unwrap_or(ALPHABET);
        if chars.len() != 64 || !chars.is_ascii() {
            return Err(Base64Error::InvalidCharSetLength);
        }
        let mut table = [0u8; 64];
        table.copy_from_slice(chars.as_bytes());
        Ok(Self { table, pad })
    }

    pub fn for_mode(mode: Base64Mode, pad: bool) -> Self {
        let mut table = [0u8; 64];
        table.copy_from_slice(mode.alphabet().as_bytes());
        Self { table, pad }
    }

    #[inline]
    fn sym(&self, v: u32) -> char {
        char::from(self.table[(v & 0x3F) as usize])
    }

    /// Encodes `src`; every 3 input bytes become 4 characters.
    pub fn encode(&self, src: &[u8]) -> String {
        let mut out = String::with_capacity(src.len().div_ceil(3) * 4);
        let mut blocks = src.chunks_exact(3);
        for block in &mut blocks {
            let v = (u32::from(block[0]) << 16) | (u32::from(block[1]) << 8) | u32::from(block[2]);
            out.push(self.sym(v >> 18));
            out.push(self.sym(v >> 12));
            out.push(self.sym(v >> 6));
            out.push(self.sym(v));
        }
        match *blocks.remainder() {
            [o1] => {
                let v = u32::from(o1) << 16;
                out.push(self.sym(v >> 18));
                out.push(self.sym(v >> 12));
                if self.pad {
                    out.push(PAD);
                    out.push(PAD);
                }
            }
            [o1, o2] => {
                let v = (u32::from(o1) << 16) | (u32::from(o2) << 8);
                out.push(self.sym(v >> 18));
                out.push(self.sym(v >> 12));
                out.push(self.sym(v >> 6));
                if self.pad {
                    out.push(PAD);
                }
            }
            _ => {}
        }
        out
    }
}

/// Encodes `src` in the alphabet of `mode`.
pub fn to_base64(mode: Base64Mode, src: &[u8], pad: bool) -> String {
    Base64Encoder::for_mode(mode, pad).encode(src)
}
