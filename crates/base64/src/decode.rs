//! Table-driven base64 decoding shared by both alphabets.

use tracing::trace;

use crate::constants::INVALID;
use crate::Base64Error;

/// Decodes `text` with `table`, accepting input with or without padding.
///
/// Up to two trailing `=` are stripped when the input length is a multiple
/// of 4. Any other `=` is an invalid character.
pub(crate) fn decode_with(table: &[u8; 256], text: &str) -> Result<Vec<u8>, Base64Error> {
    let bytes = text.as_bytes();
    let mut len = bytes.len();
    if len != 0 && len % 4 == 0 {
        if bytes[len - 1] == b'=' {
            len -= 1;
        }
        if bytes[len - 1] == b'=' {
            len -= 1;
        }
    }
    if len % 4 == 1 {
        trace!(len = bytes.len(), "base64 input has a dangling symbol");
        return Err(Base64Error::InvalidLength { len: bytes.len() });
    }

    let mut out = Vec::with_capacity(len / 4 * 3 + 2);
    for (block_index, block) in bytes[..len].chunks(4).enumerate() {
        let mut v: u32 = 0;
        for (i, &c) in block.iter().enumerate() {
            let sextet = table[c as usize];
            if sextet == INVALID {
                let pos = block_index * 4 + i;
                trace!(pos, byte = c, "invalid base64 symbol");
                // Every valid symbol is ASCII, so `pos` is a char boundary.
                let ch = text
                    .get(pos..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(Base64Error::InvalidChar { ch, pos });
            }
            v |= u32::from(sextet) << (18 - 6 * i);
        }
        // 2, 3 or 4 symbols carry 1, 2 or 3 bytes.
        let produced = block.len() - 1;
        out.push((v >> 16) as u8);
        if produced > 1 {
            out.push((v >> 8) as u8);
        }
        if produced > 2 {
            out.push(v as u8);
        }
    }
    Ok(out)
}
