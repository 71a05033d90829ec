//! Base conversion
//!
//! Parsing textual numerals into natural numbers and rendering natural
//! numbers back to text, in any base from 2 to 16.
//!
//! The numeral syntax follows unsigned integer literals: digits `0-9`
//! followed by `a-f` (either case) for the values 10 to 15. When the base
//! is 0 it is taken from the prefix of the text:
//! - `0x` or `0X` selects base 16
//! - a leading `0` selects base 8
//! - anything else selects base 10
//!
//! Scanning stops at the first byte that is not a digit of the selected
//! base, and reports how much of the input was used. This lets a signed or
//! rational parser continue from where the natural number ends.

use crate::NaturalError;
use crate::digit::Digit;
use crate::natural::Natural;

use std::fmt::{self, Binary, Display, Formatter, LowerHex, Octal};
use std::mem;
use std::str::FromStr;

const ALPHABET: &[u8; 16] = b"0123456789abcdef";

const MIN_BASE: u32 = 2;
const MAX_BASE: u32 = 16;

/// Outcome of scanning a numeral prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parsed {
    /// Value of the longest valid prefix.
    pub value: Natural,

    /// Base actually used, after prefix detection.
    pub base: u32,

    /// Number of bytes consumed, including any base prefix.
    pub consumed: usize,
}

fn check_base(base: u32) -> Result<(), NaturalError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(NaturalError::InvalidBase(base))
    }
}

/// Returns the base selected by the prefix of `s` and the prefix length.
fn detect_base(s: &[u8]) -> (u32, usize) {
    match s {
        [b'0', b'x' | b'X', ..] => (16, 2),
        [b'0', ..] => (8, 1),
        _ => (10, 0),
    }
}

impl Natural {
    /// Scans the longest prefix of `text` that forms a natural number.
    ///
    /// With `base == 0` the base is detected from the prefix as described
    /// in the module documentation. Stopping early is not an error; check
    /// [`Parsed::consumed`] to decide whether the whole input was a number.
    ///
    /// # Errors
    /// Returns [`NaturalError::InvalidBase`] when the base, after
    /// detection, is outside `2..=16`.
    pub fn parse(text: &str, base: u32) -> Result<Parsed, NaturalError> {
        Natural::new().scan_into(text, base)
    }

    /// Buffer-reusing form of [`Natural::parse`].
    pub fn scan_into(self, text: &str, base: u32) -> Result<Parsed, NaturalError> {
        let bytes = text.as_bytes();
        let (base, prefix) = match base {
            0 => detect_base(bytes),
            b => (b, 0),
        };

        check_base(base)?;

        let mut z = self.ensure_capacity(0);
        let mut consumed = prefix;

        for d in bytes[prefix..]
            .iter()
            .map_while(|&ch| char::from(ch).to_digit(base))
        {
            z.mul_add_digit_assign(base as Digit, d as Digit);
            consumed += 1;
        }

        Ok(Parsed {
            value: z,
            base,
            consumed,
        })
    }

    /// Parses the whole of `text` in an explicit base.
    ///
    /// No prefix detection takes place, so `base` must be in `2..=16`.
    ///
    /// # Errors
    /// - [`NaturalError::InvalidBase`] for a base outside `2..=16`
    /// - [`NaturalError::MalformedInput`] when `text` is empty or contains
    ///   a byte that is not a digit of `base`
    pub fn from_str_radix(text: &str, base: u32) -> Result<Natural, NaturalError> {
        check_base(base)?;

        let parsed = Natural::parse(text, base)?;

        if text.is_empty() || parsed.consumed != text.len() {
            return Err(NaturalError::MalformedInput {
                consumed: parsed.consumed,
            });
        }

        Ok(parsed.value)
    }

    /// Renders the value in `base`, using lowercase letters above 9.
    ///
    /// Zero renders as `"0"`. `self` is left untouched; the division runs on
    /// a working copy.
    ///
    /// # Errors
    /// Returns [`NaturalError::InvalidBase`] for a base outside `2..=16`.
    pub fn to_str_radix(&self, base: u32) -> Result<String, NaturalError> {
        check_base(base)?;

        let Some(log) = self.bit_length() else {
            return Ok("0".to_owned());
        };

        // upper bound on the digit count; +1: round up
        let mut i = (log + 1) / base.ilog2() as usize + 1;
        let mut buf = vec![0u8; i];

        let mut q = self.clone();
        let mut spare = Natural::new();

        while !q.is_zero() {
            let (next, r) = spare.div_rem_digit_into(&q, base as Digit)?;
            spare = mem::replace(&mut q, next);

            i -= 1;
            buf[i] = ALPHABET[r as usize];
        }

        Ok(buf[i..].iter().map(|&b| char::from(b)).collect())
    }

    fn fmt_radix(&self, f: &mut Formatter<'_>, base: u32, prefix: &str) -> fmt::Result {
        let digits = self.to_str_radix(base).map_err(|_| fmt::Error)?;

        f.pad_integral(true, prefix, &digits)
    }
}

impl FromStr for Natural {
    type Err = NaturalError;

    /// Parses a decimal numeral spanning the whole string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Natural::from_str_radix(s, 10)
    }
}

impl Display for Natural {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 10, "")
    }
}

impl LowerHex for Natural {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 16, "0x")
    }
}

impl Octal for Natural {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 8, "0o")
    }
}

impl Binary for Natural {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 2, "0b")
    }
}
