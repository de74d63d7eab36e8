//! Opcode and function-code tables.
//!
//! The operation catalog is a read-only resource mapping 6-bit patterns to
//! mnemonics, in two sub-tables: primary opcodes, and function codes for the
//! `special` (all-zero opcode) class. It provides:
//! 1. **Loading:** From the bundled JSON resource, a file path, or a string,
//!    with key validation. Loading is the only place this crate logs.
//! 2. **Forward Lookup:** 6-bit pattern to mnemonic, per sub-table.
//! 3. **Reverse Lookup:** Mnemonic to opcode/function bits, opcode table
//!    taking precedence.
//!
//! The catalog is an explicit handle passed into the codec, never a global;
//! a stub table is one [`OperationCatalog::from_json_str`] call away.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::{CatalogError, CodecError};

/// Width of an opcode or function-code field in bits.
pub const CODE_BITS: u8 = 6;

/// The JSON table bundled into the library (standard MIPS I integer set).
const BUNDLED_JSON: &str = include_str!("../../data/mips_codes.json");

/// Raw resource shape: both sub-tables keyed by 6-character bit strings.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    opcodes: BTreeMap<String, String>,
    func_codes: BTreeMap<String, String>,
}

/// The operation bits a mnemonic resolves to.
///
/// `func` is present only for mnemonics from the function-code table, whose
/// opcode bits are forced to zero (the `special` class).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationBits {
    /// Primary opcode bits.
    pub op: u8,
    /// Function-code bits, for `special`-class operations.
    pub func: Option<u8>,
}

/// The opcode/function-code tables, validated and keyed by their bit value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperationCatalog {
    opcodes: BTreeMap<u8, String>,
    functions: BTreeMap<u8, String>,
}

impl OperationCatalog {
    /// Loads the catalog bundled into the library.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the bundled resource is corrupt; the test
    /// suite pins that it parses.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_JSON)
    }

    /// Loads a catalog from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a file with the `{ "opcodes": {..}, "func_codes": {..} }` shape.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the file cannot be read, is not valid
    /// JSON, or holds a key that is not six binary digits.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Parses a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] for malformed JSON or invalid table keys.
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(text)?;
        let opcodes = convert_table("opcodes", raw.opcodes)?;
        let functions = convert_table("func_codes", raw.func_codes)?;
        tracing::debug!(
            opcodes = opcodes.len(),
            functions = functions.len(),
            "operation catalog loaded"
        );
        Ok(Self { opcodes, functions })
    }

    /// Returns the mnemonic for primary opcode bits.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownOperation`] carrying the rendered 6-bit
    /// pattern when the opcode is not in the table.
    pub fn opcode_name(&self, bits: u8) -> Result<&str, CodecError> {
        lookup_name(&self.opcodes, bits)
    }

    /// Returns the mnemonic for function-code bits.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownOperation`] carrying the rendered 6-bit
    /// pattern when the function code is not in the table.
    pub fn function_name(&self, bits: u8) -> Result<&str, CodecError> {
        lookup_name(&self.functions, bits)
    }

    /// Returns the opcode bits for a mnemonic from the primary table.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownOperation`] when the mnemonic is absent.
    pub fn opcode_bits(&self, mnemonic: &str) -> Result<u8, CodecError> {
        lookup_bits(&self.opcodes, mnemonic)
    }

    /// Returns the function-code bits for a mnemonic from the function table.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownOperation`] when the mnemonic is absent.
    pub fn function_bits(&self, mnemonic: &str) -> Result<u8, CodecError> {
        lookup_bits(&self.functions, mnemonic)
    }

    /// Resolves a mnemonic to its operation bits.
    ///
    /// The opcode table takes precedence; a mnemonic found only in the
    /// function table resolves with opcode bits forced to zero, identifying
    /// the `special` class.
    ///
    /// # Arguments
    ///
    /// * `mnemonic` - The operation name from assembly text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownOperation`] when the mnemonic appears in
    /// neither table.
    pub fn lookup(&self, mnemonic: &str) -> Result<OperationBits, CodecError> {
        if let Ok(op) = self.opcode_bits(mnemonic) {
            return Ok(OperationBits { op, func: None });
        }
        let func = self.function_bits(mnemonic)?;
        Ok(OperationBits {
            op: 0,
            func: Some(func),
        })
    }
}

/// Renders bits at the catalog key width, for error reporting.
fn render_code(bits: u8) -> String {
    format!("{bits:0width$b}", width = usize::from(CODE_BITS))
}

fn lookup_name(table: &BTreeMap<u8, String>, bits: u8) -> Result<&str, CodecError> {
    table
        .get(&bits)
        .map(String::as_str)
        .ok_or_else(|| CodecError::UnknownOperation(render_code(bits)))
}

/// Reverse scan; the tables are small enough that no inverted index is kept.
fn lookup_bits(table: &BTreeMap<u8, String>, mnemonic: &str) -> Result<u8, CodecError> {
    table
        .iter()
        .find(|(_, name)| name.as_str() == mnemonic)
        .map(|(bits, _)| *bits)
        .ok_or_else(|| CodecError::UnknownOperation(mnemonic.to_owned()))
}

/// Re-keys a raw sub-table by bit value, validating every key.
fn convert_table(
    table: &'static str,
    entries: BTreeMap<String, String>,
) -> Result<BTreeMap<u8, String>, CatalogError> {
    entries
        .into_iter()
        .map(|(key, mnemonic)| {
            parse_code(&key)
                .map(|bits| (bits, mnemonic))
                .ok_or_else(|| CatalogError::InvalidKey { table, key })
        })
        .collect()
}

/// Parses a key as exactly six binary digits.
fn parse_code(key: &str) -> Option<u8> {
    if key.len() != usize::from(CODE_BITS) || !key.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    u8::from_str_radix(key, 2).ok()
}
