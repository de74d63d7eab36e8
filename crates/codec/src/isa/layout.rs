//! The four fixed field layouts and format dispatch.
//!
//! A 32-bit word decomposes into named fields one of four ways:
//! 1. **R:** register-register operations under the all-zero opcode.
//! 2. **R-shift:** same fields as R, but the text names the shift amount.
//! 3. **I:** opcode plus two registers and a 16-bit immediate.
//! 4. **J:** opcode plus a 26-bit jump target.
//!
//! The set is closed, so the layouts are static values, and every field name
//! carries a [`FieldKind`] deciding how its bits are interpreted — dispatch
//! never compares name strings.

use crate::common::error::CodecError;

use super::operations::OperationCatalog;

/// The format class of a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatClass {
    /// Register-register formats (including the shift variant).
    R,
    /// Immediate formats.
    I,
    /// Jump formats.
    J,
}

/// Every field name an instruction layout (or the field codec) can carry.
///
/// `Offset`, `Src1`, and `Src2` appear in none of the four layouts but remain
/// valid names for standalone field work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldName {
    /// Primary opcode bits.
    Op,
    /// First source register.
    Rs,
    /// Second source register.
    Rt,
    /// Destination register.
    Rd,
    /// Shift amount.
    Shamt,
    /// Function code of the `special` class.
    Func,
    /// Signed 16-bit immediate.
    Immediate,
    /// Signed branch offset.
    Offset,
    /// Alternate name for a first source register.
    Src1,
    /// Alternate name for a second source register.
    Src2,
    /// 26-bit jump target.
    Target,
}

/// How a field's bits are interpreted, decided statically by its name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Primary-opcode table symbol.
    Opcode,
    /// Function-code table symbol.
    Function,
    /// Register ordinal with a `$` name.
    Register,
    /// Two's-complement signed integer.
    SignedImmediate,
    /// Plain unsigned integer.
    UnsignedValue,
    /// Word-aligned absolute jump target.
    JumpTarget,
}

impl FieldName {
    /// Returns the lowercase field name as it appears in display tables.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Op => "op",
            Self::Rs => "rs",
            Self::Rt => "rt",
            Self::Rd => "rd",
            Self::Shamt => "shamt",
            Self::Func => "func",
            Self::Immediate => "immediate",
            Self::Offset => "offset",
            Self::Src1 => "src1",
            Self::Src2 => "src2",
            Self::Target => "target",
        }
    }

    /// Returns the interpretation kind this name implies.
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Op => FieldKind::Opcode,
            Self::Func => FieldKind::Function,
            Self::Rs | Self::Rt | Self::Rd | Self::Src1 | Self::Src2 => FieldKind::Register,
            Self::Immediate | Self::Offset => FieldKind::SignedImmediate,
            Self::Shamt => FieldKind::UnsignedValue,
            Self::Target => FieldKind::JumpTarget,
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named bit range in a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// The field's name.
    pub name: FieldName,
    /// The field's width in bits.
    pub width: u8,
}

/// A fixed decomposition of a 32-bit word into named fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// The format class.
    pub class: FormatClass,
    /// Fields in bit order; widths sum to exactly 32.
    pub fields: &'static [FieldSpec],
    /// Field names in assembly-text order; the leading `Op` or `Func` entry
    /// is the mnemonic position.
    pub syntax: &'static [FieldName],
}

/// Primary opcodes with dedicated dispatch rules.
pub mod opcode {
    /// The all-zero opcode escaping to the function-code table.
    pub const SPECIAL: u8 = 0b00_0000;
    /// Unconditional jump.
    pub const J: u8 = 0b00_0010;
    /// Jump and link.
    pub const JAL: u8 = 0b00_0011;
}

/// Function codes of the shift operations, which use the shift syntax.
pub mod funct {
    /// Shift left logical.
    pub const SLL: u8 = 0b00_0000;
    /// Shift right logical.
    pub const SRL: u8 = 0b00_0010;
    /// Shift right arithmetic.
    pub const SRA: u8 = 0b00_0011;
    /// Shift left logical variable.
    pub const SLLV: u8 = 0b00_0100;
    /// Shift right logical variable.
    pub const SRLV: u8 = 0b00_0110;
    /// Shift right arithmetic variable.
    pub const SRAV: u8 = 0b00_0111;
}

/// The function codes selecting the shift variant of the R format.
pub const SHIFT_FUNCTS: [u8; 6] = [
    funct::SLL,
    funct::SRL,
    funct::SRA,
    funct::SLLV,
    funct::SRLV,
    funct::SRAV,
];

/// Field table shared by the R format and its shift variant.
const R_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: FieldName::Op, width: 6 },
    FieldSpec { name: FieldName::Rs, width: 5 },
    FieldSpec { name: FieldName::Rt, width: 5 },
    FieldSpec { name: FieldName::Rd, width: 5 },
    FieldSpec { name: FieldName::Shamt, width: 5 },
    FieldSpec { name: FieldName::Func, width: 6 },
];

/// Register-register format: `func rd rs rt`.
pub static R_FORMAT: Layout = Layout {
    class: FormatClass::R,
    fields: R_FIELDS,
    syntax: &[FieldName::Func, FieldName::Rd, FieldName::Rs, FieldName::Rt],
};

/// Shift variant of the R format: same fields, syntax `func rs rt shamt`.
pub static SHIFT_FORMAT: Layout = Layout {
    class: FormatClass::R,
    fields: R_FIELDS,
    syntax: &[
        FieldName::Func,
        FieldName::Rs,
        FieldName::Rt,
        FieldName::Shamt,
    ],
};

/// Immediate format: `op rt rs immediate`.
pub static I_FORMAT: Layout = Layout {
    class: FormatClass::I,
    fields: &[
        FieldSpec { name: FieldName::Op, width: 6 },
        FieldSpec { name: FieldName::Rs, width: 5 },
        FieldSpec { name: FieldName::Rt, width: 5 },
        FieldSpec { name: FieldName::Immediate, width: 16 },
    ],
    syntax: &[
        FieldName::Op,
        FieldName::Rt,
        FieldName::Rs,
        FieldName::Immediate,
    ],
};

/// Jump format: `op target`.
pub static J_FORMAT: Layout = Layout {
    class: FormatClass::J,
    fields: &[
        FieldSpec { name: FieldName::Op, width: 6 },
        FieldSpec { name: FieldName::Target, width: 26 },
    ],
    syntax: &[FieldName::Op, FieldName::Target],
};

/// All four layouts, for totality checks.
pub static LAYOUTS: [&Layout; 4] = [&R_FORMAT, &SHIFT_FORMAT, &I_FORMAT, &J_FORMAT];

impl Layout {
    /// Selects the layout for a word's opcode and function bits.
    ///
    /// The all-zero opcode requires function bits and picks the shift variant
    /// for the shift function codes. Opcodes `000010`/`000011` are jumps.
    /// Every other opcode falls through to the I format — a deliberate
    /// permissive default, not a validation gate: unknown opcodes fail later,
    /// at symbol lookup.
    ///
    /// # Arguments
    ///
    /// * `op` - The 6 opcode bits.
    /// * `func` - The 6 function-code bits, when the caller has them.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::AmbiguousFormat`] for the all-zero opcode with
    /// no function bits.
    pub fn select_by_bits(op: u8, func: Option<u8>) -> Result<&'static Self, CodecError> {
        match op {
            opcode::SPECIAL => match func {
                Some(func) if SHIFT_FUNCTS.contains(&func) => Ok(&SHIFT_FORMAT),
                Some(_) => Ok(&R_FORMAT),
                None => Err(CodecError::AmbiguousFormat),
            },
            opcode::J | opcode::JAL => Ok(&J_FORMAT),
            _ => Ok(&I_FORMAT),
        }
    }

    /// Selects the layout for a mnemonic by resolving its operation bits.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The operation tables to resolve the mnemonic against.
    /// * `mnemonic` - The operation name from assembly text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownOperation`] for a mnemonic in neither
    /// table, or [`CodecError::AmbiguousFormat`] when the mnemonic resolves
    /// to the all-zero opcode with no function bits.
    pub fn select_by_mnemonic(
        catalog: &OperationCatalog,
        mnemonic: &str,
    ) -> Result<&'static Self, CodecError> {
        let bits = catalog.lookup(mnemonic)?;
        Self::select_by_bits(bits.op, bits.func)
    }
}
