use three2_core::{base32_value, Base32Error, BASE32_INVALID_CHAR, BASE32_PAD};

use crate::unlikely::unlikely;

/// Number of bytes [`decode`] will produce for `encoded`.
///
/// Every `A`-`Z`/`2`-`7` byte counts as one 5-bit symbol and `=` counts as
/// nothing; the result is `symbols * 5 / 8`, rounding down because trailing
/// bits that never fill a byte are encoder-side padding, not data. Fails
/// with [`Base32Error::InvalidChar`] on the first byte outside `[A-Z2-7=]`.
///
/// # Examples
/// ```
/// assert_eq!(three2::decoded_len("MZXW6YTBOI").unwrap(), 6);
/// assert_eq!(three2::decoded_len("MY======").unwrap(), 1);
/// ```
pub fn decoded_len<I: AsRef<[u8]>>(encoded: I) -> Result<usize, Base32Error> {
    let mut symbols = 0usize;
    for &c in encoded.as_ref() {
        if c == BASE32_PAD {
            continue;
        }
        if unlikely(base32_value(c) == BASE32_INVALID_CHAR) {
            return Err(Base32Error::InvalidChar(c));
        }
        symbols += 1;
    }
    Ok(symbols * 5 / 8)
}

/// Decode base32 symbols into `out`.
///
/// Returns the number of bytes written, which is always exactly
/// [`decoded_len`]`(encoded)`; the rest of `out` is left unchanged. `=` is
/// skipped wherever it appears, without any count or position check. Fails
/// with [`Base32Error::InvalidChar`] on any byte outside `[A-Z2-7=]` and
/// with [`Base32Error::OutputTooSmall`] if `out` is too short, in both
/// cases before anything is written.
///
/// # Examples
/// ```
/// let mut out = [0u8; 6];
/// let written = three2::decode("MZXW6YTBOI", &mut out).unwrap();
/// assert_eq!(&out[..written], b"foobar");
///
/// let mut out = [0u8; 1];
/// three2::decode("MY======", &mut out).unwrap();
/// assert_eq!(out, [0x66]);
/// ```
pub fn decode<I: AsRef<[u8]>>(encoded: I, out: &mut [u8]) -> Result<usize, Base32Error> {
    let encoded = encoded.as_ref();
    let needed = decoded_len(encoded)?;
    if unlikely(out.len() < needed) {
        return Err(Base32Error::OutputTooSmall);
    }
    let mut accumulator: u16 = 0;
    /* Bits still missing from the byte under construction; emitting a byte
    leaves -bits_remaining low bits pending in the accumulator */
    let mut bits_remaining: i32 = 8;
    let mut written = 0usize;
    for &c in encoded {
        if c == BASE32_PAD {
            continue;
        }
        /* decoded_len already rejected everything outside the alphabet */
        accumulator = (accumulator << 5) | base32_value(c) as u16;
        bits_remaining -= 5;
        if bits_remaining <= 0 {
            out[written] = (accumulator >> -bits_remaining) as u8;
            accumulator &= (1 << -bits_remaining) - 1;
            written += 1;
            bits_remaining += 8;
        }
    }
    /* Any bits left in the accumulator here never reached a full byte and
    are discarded */
    Ok(written)
}
