//! The 32-bit machine word type.
//!
//! This module defines a strong type for machine words to keep raw `u32`
//! values out of the instruction-level API. It provides:
//! 1. **Parsing:** Accepts hex text (optional `0x` prefix, interior
//!    whitespace tolerated) or a full 32-character binary-digit string.
//! 2. **Rendering:** Canonical 8-hex-digit and 32-bit-binary forms.
//! 3. **Bit Extraction:** MSB-first slicing of named instruction fields.

use std::fmt;

use super::error::CodecError;

/// Width of a machine word in bits.
pub const WORD_BITS: u8 = 32;

/// A 32-bit machine word.
///
/// Construction from text always normalizes: `0x012A4020`, `012a4020`,
/// `0x 12a 4020`, and the 32-character binary form all produce the same word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Word(u32);

impl Word {
    /// Creates a word from a raw 32-bit value.
    #[inline]
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// Parses a word from hex or binary text.
    ///
    /// Whitespace anywhere in the input is ignored. A 32-character string of
    /// `0`/`1` digits parses as binary; anything else parses as hexadecimal
    /// after an optional `0x`/`0X` prefix, at most 8 hex digits.
    ///
    /// # Arguments
    ///
    /// * `text` - The textual word to parse.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::MalformedInput`] when the input is empty, longer
    /// than a 32-bit word, or contains non-digit characters.
    pub fn parse(text: &str) -> Result<Self, CodecError> {
        let malformed = |reason: &'static str| CodecError::MalformedInput {
            input: text.to_owned(),
            reason,
        };

        let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        if cleaned.len() == usize::from(WORD_BITS)
            && cleaned.bytes().all(|b| b == b'0' || b == b'1')
        {
            return u32::from_str_radix(&cleaned, 2)
                .map(Self)
                .map_err(|_| malformed("expected a 32-bit binary string"));
        }

        let digits = cleaned
            .strip_prefix("0x")
            .or_else(|| cleaned.strip_prefix("0X"))
            .unwrap_or(&cleaned);
        if digits.is_empty() {
            return Err(malformed("expected hex digits"));
        }
        if digits.len() > 8 {
            return Err(malformed("more than 32 bits of hex digits"));
        }
        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| malformed("expected a hex machine word"))
    }

    /// Returns the raw 32-bit value.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Extracts a field as the `width`-bit slice starting `offset` bits from
    /// the most-significant end of the word.
    ///
    /// # Arguments
    ///
    /// * `offset` - Bit position of the field's first (most significant) bit.
    /// * `width` - The field's width in bits; `offset + width` must be ≤ 32.
    #[inline]
    pub const fn extract(self, offset: u8, width: u8) -> u32 {
        debug_assert!(offset + width <= WORD_BITS);
        let shifted = (self.0 as u64) >> (WORD_BITS - offset - width);
        (shifted & ((1u64 << width) - 1)) as u32
    }

    /// Renders the canonical 8-hex-digit form with the `0x` marker.
    pub fn hex(self) -> String {
        format!("{:#010x}", self.0)
    }

    /// Renders the full 32-character binary-digit form.
    pub fn binary(self) -> String {
        format!("{:032b}", self.0)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl From<u32> for Word {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}
