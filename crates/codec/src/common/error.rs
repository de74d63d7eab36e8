//! Error definitions for the codec.
//!
//! This module defines the two error surfaces of the crate:
//! 1. **Codec Errors:** Every way a decode or encode call can fail, surfaced
//!    synchronously to the caller. A failed call yields no partial result.
//! 2. **Catalog Errors:** Failures while loading the opcode/function-code
//!    tables from their JSON resource.

use thiserror::Error;

/// Failure kinds for decode and encode operations.
///
/// All variants carry enough context to report the failure without access to
/// the original call arguments.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input that matches neither a machine-word form nor an instruction line.
    ///
    /// Raised for unparsable hex/binary words, empty instruction text, and
    /// operand tokens that fail numeric parsing.
    #[error("malformed input `{input}`: {reason}")]
    MalformedInput {
        /// The offending input, as received.
        input: String,
        /// What was expected of it.
        reason: &'static str,
    },

    /// An opcode, function code, or mnemonic absent from the catalog.
    ///
    /// The associated value is the looked-up text: a mnemonic on encode, or
    /// a rendered 6-bit pattern on decode.
    #[error("unknown operation `{0}`")]
    UnknownOperation(String),

    /// A register ordinal or name outside the architectural set.
    ///
    /// The associated value is the offending token or rendered ordinal.
    /// Ordinals 26 and 27 are part of this set's gap and fail like any
    /// out-of-range value.
    #[error("unknown register `{0}`")]
    UnknownRegister(String),

    /// Opcode bits `000000` with no function bits to pick the R-format member.
    #[error("special opcode bits (000000) need function bits to select a layout")]
    AmbiguousFormat,

    /// Operand count that does not match the selected layout's syntax.
    #[error("`{mnemonic}` takes {expected} operand(s), found {found}")]
    ArityMismatch {
        /// The mnemonic whose layout set the expectation.
        mnemonic: String,
        /// Operands the layout's syntax order calls for.
        expected: usize,
        /// Operands actually supplied.
        found: usize,
    },

    /// A numeric operand that does not fit in its field's declared width.
    #[error("value {value} does not fit in the {width}-bit `{field}` field")]
    FieldOverflow {
        /// Name of the field being encoded.
        field: &'static str,
        /// The rejected value.
        value: i64,
        /// The field's width in bits.
        width: u8,
    },
}

/// Failures while loading an operation catalog from its JSON resource.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The resource could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The resource is not valid JSON or not the expected shape.
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A table key that is not exactly six binary digits.
    #[error("catalog key `{key}` in `{table}` is not a 6-bit binary pattern")]
    InvalidKey {
        /// Which sub-table held the key.
        table: &'static str,
        /// The rejected key.
        key: String,
    },
}
