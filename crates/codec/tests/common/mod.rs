//! Shared test infrastructure for the codec test suite.

use mips_codec::{InstructionCodec, OperationCatalog};

/// A stub catalog exercising dependency injection: one mnemonic present in
/// both tables, one opcode-only mnemonic, and no `special` entry.
pub const STUB_CATALOG: &str = r#"{
    "opcodes": { "000001": "dual", "001000": "addi" },
    "func_codes": { "100110": "dual", "100000": "add" }
}"#;

/// Loads the bundled operation catalog.
pub fn bundled_catalog() -> OperationCatalog {
    OperationCatalog::bundled().unwrap()
}

/// A codec over the bundled catalog.
pub fn codec() -> InstructionCodec {
    InstructionCodec::new(bundled_catalog())
}

/// A codec over [`STUB_CATALOG`].
pub fn stub_codec() -> InstructionCodec {
    InstructionCodec::new(OperationCatalog::from_json_str(STUB_CATALOG).unwrap())
}

// ──────────────────────────────────────────────────────────
// Encoding helpers (construct raw 32-bit words)
// ──────────────────────────────────────────────────────────

/// Builds an R-format word (all-zero opcode) from its variable fields.
pub fn r_word(rs: u32, rt: u32, rd: u32, shamt: u32, func: u32) -> u32 {
    (rs & 0x1F) << 21 | (rt & 0x1F) << 16 | (rd & 0x1F) << 11 | (shamt & 0x1F) << 6 | (func & 0x3F)
}

/// Builds an I-format word.
pub fn i_word(op: u32, rs: u32, rt: u32, imm: u32) -> u32 {
    (op & 0x3F) << 26 | (rs & 0x1F) << 21 | (rt & 0x1F) << 16 | (imm & 0xFFFF)
}

/// Builds a J-format word.
pub fn j_word(op: u32, target: u32) -> u32 {
    (op & 0x3F) << 26 | (target & 0x03FF_FFFF)
}
