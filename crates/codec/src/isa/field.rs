//! Per-field conversion between raw bits and symbolic text.
//!
//! A [`Field`] is one named bit range of an instruction, carrying its raw
//! bits, its interpreted numeric value, and its symbolic text together. It is
//! built from exactly one source — either raw bits or a text token — and the
//! other representations are always computed from it, so the three can never
//! disagree. Interpretation is dispatched on the field's [`FieldKind`]:
//! opcode/function symbols come from the catalog, registers from the register
//! set, immediates are two's-complement decimals, and jump targets reconstruct
//! the word-aligned absolute address.

use crate::common::error::CodecError;

use super::layout::{FieldKind, FieldName, FieldSpec};
use super::operations::OperationCatalog;
use super::registers;

/// Mask of the 26 target bits within a jump-format word.
const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Bits an absolute address is shifted to form a jump target (word alignment).
const TARGET_SHIFT: u32 = 2;

/// One decoded or encoded bit range of an instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    name: FieldName,
    width: u8,
    raw: u32,
    value: i64,
    symbol: String,
}

impl Field {
    /// Builds a field from raw bits, computing its value and symbol.
    ///
    /// # Arguments
    ///
    /// * `spec` - The field's name and width from its layout.
    /// * `raw` - The field's bits, right-aligned in a `u32`.
    /// * `catalog` - Operation tables for opcode/function symbols.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownOperation`] or
    /// [`CodecError::UnknownRegister`] when the bits name nothing in the
    /// catalog or register set.
    pub fn decode(
        spec: FieldSpec,
        raw: u32,
        catalog: &OperationCatalog,
    ) -> Result<Self, CodecError> {
        debug_assert!(u64::from(raw) < (1u64 << spec.width));

        let value = match spec.name.kind() {
            FieldKind::SignedImmediate => signed_value(raw, spec.width),
            _ => i64::from(raw),
        };
        let symbol = match spec.name.kind() {
            FieldKind::Opcode => catalog.opcode_name(raw as u8)?.to_owned(),
            FieldKind::Function => catalog.function_name(raw as u8)?.to_owned(),
            FieldKind::Register => registers::name_of(raw as u8)?,
            FieldKind::SignedImmediate | FieldKind::UnsignedValue => value.to_string(),
            // Reattach the stripped top 4 and bottom 2 zero bits of the
            // word-aligned address.
            FieldKind::JumpTarget => format!("{:#010x}", raw << TARGET_SHIFT),
        };

        Ok(Self {
            name: spec.name,
            width: spec.width,
            raw,
            value,
            symbol,
        })
    }

    /// Builds a field from a text token, computing its bits, then deriving
    /// value and symbol from those bits ([`Field::decode`] is the single
    /// source of the computed forms, which also canonicalizes the symbol:
    /// `$2` comes back as `$v0`).
    ///
    /// # Arguments
    ///
    /// * `spec` - The field's name and width from its layout.
    /// * `token` - The operand token (or mnemonic) from assembly text.
    /// * `catalog` - Operation tables for opcode/function lookups.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownOperation`] or
    /// [`CodecError::UnknownRegister`] for unresolvable symbols,
    /// [`CodecError::MalformedInput`] for unparsable numerics, and
    /// [`CodecError::FieldOverflow`] for values outside the field's width.
    pub fn encode(
        spec: FieldSpec,
        token: &str,
        catalog: &OperationCatalog,
    ) -> Result<Self, CodecError> {
        let raw = match spec.name.kind() {
            FieldKind::Opcode => u32::from(catalog.opcode_bits(token)?),
            FieldKind::Function => u32::from(catalog.function_bits(token)?),
            FieldKind::Register => u32::from(registers::ordinal_of(token)?),
            FieldKind::SignedImmediate => {
                let value = parse_decimal(token, "expected a signed decimal operand")?;
                encode_signed(spec, value)?
            }
            FieldKind::UnsignedValue => {
                let value = parse_decimal(token, "expected an unsigned decimal operand")?;
                encode_unsigned(spec, value)?
            }
            FieldKind::JumpTarget => {
                let address = parse_address(token)?;
                (address >> TARGET_SHIFT) & TARGET_MASK
            }
        };
        Self::decode(spec, raw, catalog)
    }

    /// The field's name.
    pub const fn name(&self) -> FieldName {
        self.name
    }

    /// The field's interpretation kind.
    pub const fn kind(&self) -> FieldKind {
        self.name.kind()
    }

    /// The field's width in bits.
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// The field's bits, right-aligned.
    pub const fn raw(&self) -> u32 {
        self.raw
    }

    /// The interpreted numeric value (negative for signed fields with the
    /// sign bit set).
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// The symbolic text form.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The field's bits as a zero-padded binary string of its exact width.
    pub fn bits(&self) -> String {
        format!("{:0width$b}", self.raw, width = usize::from(self.width))
    }
}

/// Two's-complement interpretation of `width` bits.
const fn signed_value(raw: u32, width: u8) -> i64 {
    let sign_bit = 1u32 << (width - 1);
    if raw & sign_bit == 0 {
        raw as i64
    } else {
        raw as i64 - (1i64 << width)
    }
}

/// Two's-complement encoding into `width` bits, rejecting values outside the
/// representable band.
fn encode_signed(spec: FieldSpec, value: i64) -> Result<u32, CodecError> {
    if value.unsigned_abs() >= 1u64 << (spec.width - 1) {
        return Err(overflow(spec, value));
    }
    Ok((value & ((1i64 << spec.width) - 1)) as u32)
}

fn encode_unsigned(spec: FieldSpec, value: i64) -> Result<u32, CodecError> {
    if value < 0 || value >= 1i64 << spec.width {
        return Err(overflow(spec, value));
    }
    Ok(value as u32)
}

fn overflow(spec: FieldSpec, value: i64) -> CodecError {
    CodecError::FieldOverflow {
        field: spec.name.as_str(),
        value,
        width: spec.width,
    }
}

fn parse_decimal(token: &str, reason: &'static str) -> Result<i64, CodecError> {
    token.parse().map_err(|_| CodecError::MalformedInput {
        input: token.to_owned(),
        reason,
    })
}

/// Parses a jump-target token as a hex address with an optional `0x` marker.
fn parse_address(token: &str) -> Result<u32, CodecError> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u32::from_str_radix(digits, 16).map_err(|_| CodecError::MalformedInput {
        input: token.to_owned(),
        reason: "expected a hex jump address",
    })
}
