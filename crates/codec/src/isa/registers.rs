//! The architectural register set.
//!
//! Bidirectional mapping between register ordinals (0–31, with a gap at 26
//! and 27) and their conventional names. Display form always carries the `$`
//! sigil; lookup accepts names or ordinals, sigil optional.

use crate::common::error::CodecError;

/// The sigil prefixing register operands in assembly text.
pub const REG_SIGIL: char = '$';

/// Number of architectural register slots.
pub const REG_COUNT: usize = 32;

/// Conventional names by ordinal. Slots 26 and 27 are reserved for the
/// kernel and have no name in this set.
const REG_NAMES: [Option<&str>; REG_COUNT] = [
    Some("zero"),
    Some("at"),
    Some("v0"),
    Some("v1"),
    Some("a0"),
    Some("a1"),
    Some("a2"),
    Some("a3"),
    Some("t0"),
    Some("t1"),
    Some("t2"),
    Some("t3"),
    Some("t4"),
    Some("t5"),
    Some("t6"),
    Some("t7"),
    Some("s0"),
    Some("s1"),
    Some("s2"),
    Some("s3"),
    Some("s4"),
    Some("s5"),
    Some("s6"),
    Some("s7"),
    Some("t8"),
    Some("t9"),
    None,
    None,
    Some("gp"),
    Some("sp"),
    Some("fp"),
    Some("ra"),
];

/// Returns the sigil-prefixed display name for a register ordinal.
///
/// # Arguments
///
/// * `ordinal` - The register number, 0–31.
///
/// # Errors
///
/// Returns [`CodecError::UnknownRegister`] for ordinals past 31 and for the
/// unnamed slots 26 and 27.
pub fn name_of(ordinal: u8) -> Result<String, CodecError> {
    REG_NAMES
        .get(usize::from(ordinal))
        .copied()
        .flatten()
        .map(|name| format!("{REG_SIGIL}{name}"))
        .ok_or_else(|| CodecError::UnknownRegister(ordinal.to_string()))
}

/// Resolves a register token to its ordinal.
///
/// Accepts a conventional name or a decimal ordinal, either optionally
/// prefixed by the sigil: `$t0`, `t0`, `$8`, and `8` all resolve to 8.
/// Names are case-sensitive.
///
/// # Arguments
///
/// * `token` - The register token from assembly text.
///
/// # Errors
///
/// Returns [`CodecError::UnknownRegister`] when neither form resolves,
/// including ordinals in the 26/27 gap.
pub fn ordinal_of(token: &str) -> Result<u8, CodecError> {
    let unknown = || CodecError::UnknownRegister(token.to_owned());

    let bare = token.strip_prefix(REG_SIGIL).unwrap_or(token);
    if !bare.is_empty() && bare.bytes().all(|b| b.is_ascii_digit()) {
        let ordinal: u8 = bare.parse().map_err(|_| unknown())?;
        // An ordinal must land on a named slot; the 26/27 gap fails here.
        return if matches!(REG_NAMES.get(usize::from(ordinal)), Some(Some(_))) {
            Ok(ordinal)
        } else {
            Err(unknown())
        };
    }

    REG_NAMES
        .iter()
        .position(|slot| *slot == Some(bare))
        .map(|idx| idx as u8)
        .ok_or_else(unknown)
}
