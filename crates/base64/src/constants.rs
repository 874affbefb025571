/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-safe base64 alphabet (uses - and _ instead of + and /).
pub const ALPHABET_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Padding character.
pub const PAD: char = '=';

/// Decode table marker for bytes outside the alphabet.
pub(crate) const INVALID: u8 = 0xFF;

const fn decode_table(alphabet: &str, accept_standard: bool) -> [u8; 256] {
    let chars = alphabet.as_bytes();
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[chars[i] as usize] = i as u8;
        i += 1;
    }
    if accept_standard {
        table[b'+' as usize] = 62;
        table[b'/' as usize] = 63;
    }
    table
}

/// Standard alphabet only.
pub(crate) const STD_DECODE: [u8; 256] = decode_table(ALPHABET, false);

/// URL-safe alphabet, also accepting the standard `+` and `/`.
pub(crate) const URL_DECODE: [u8; 256] = decode_table(ALPHABET_URL, true);
