#![doc = include_str!("../README.md")]
#![no_std]

use three2_core::{base32_value, BASE32_INVALID_CHAR, BASE32_PAD};

/// Number of bytes [`decode_const`] produces for `encoded`, for use as its
/// const parameter. Panics on characters outside `[A-Z2-7=]`.
pub const fn decoded_len_const(encoded: &str) -> usize {
    let bytes = encoded.as_bytes();
    let mut symbols = 0;
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        if c != BASE32_PAD {
            if base32_value(c) == BASE32_INVALID_CHAR {
                panic!("illegal base32 character");
            }
            symbols += 1;
        }
        i += 1;
    }
    symbols * 5 / 8
}

/// Decode a base32 string at compile time.
///
/// `=` padding is skipped wherever it appears. Panics on characters outside
/// `[A-Z2-7=]` and when the decoded length is not exactly `N` — in a const
/// context both become build errors.
///
/// # Examples
/// ```
/// const FOOBAR: [u8; 6] = three2_const::decode_const("MZXW6YTBOI");
/// assert_eq!(&FOOBAR, b"foobar");
/// ```
pub const fn decode_const<const N: usize>(encoded: &str) -> [u8; N] {
    let bytes = encoded.as_bytes();
    let mut out = [0u8; N];
    let mut accumulator: u16 = 0;
    let mut bits_remaining: i32 = 8;
    let mut written = 0;
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        i += 1;
        if c == BASE32_PAD {
            continue;
        }
        let value = base32_value(c);
        if value == BASE32_INVALID_CHAR {
            panic!("illegal base32 character");
        }
        accumulator = (accumulator << 5) | value as u16;
        bits_remaining -= 5;
        if bits_remaining <= 0 {
            if written == N {
                panic!("decoded length does not match output size");
            }
            out[written] = (accumulator >> -bits_remaining) as u8;
            accumulator &= (1 << -bits_remaining) - 1;
            written += 1;
            bits_remaining += 8;
        }
    }
    if written != N {
        panic!("decoded length does not match output size");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOOBAR: [u8; 6] = decode_const("MZXW6YTBOI");
    const F_PADDED: [u8; 1] = decode_const("MY======");
    const EMPTY: [u8; 0] = decode_const("===");

    #[test]
    fn test_const_decoding() {
        assert_eq!(&FOOBAR, b"foobar");
        assert_eq!(F_PADDED, [0x66]);
        assert_eq!(EMPTY, []);
    }

    #[test]
    fn test_decoded_len_const() {
        assert_eq!(decoded_len_const(""), 0);
        assert_eq!(decoded_len_const("MY======"), 1);
        assert_eq!(decoded_len_const("MZXW6YTBOI"), 6);
        const LEN: usize = decoded_len_const("MZXW6");
        assert_eq!(decode_const::<LEN>("MZXW6"), [0x66, 0x6F, 0x6F]);
    }
}
