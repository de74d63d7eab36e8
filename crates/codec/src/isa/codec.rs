//! Whole-instruction decode and encode.
//!
//! The codec drives the layout registry and the field codec:
//! 1. **Decode:** machine word → layout dispatch on opcode/function bits →
//!    one [`Field`] per layout entry → syntax-ordered text.
//! 2. **Encode:** assembly line → layout dispatch on the mnemonic → operand
//!    tokens zipped against the syntax order → fields assembled back into
//!    the 32-bit word, unnamed fields zero-filled.
//!
//! Both directions produce the same [`Instruction`] shape, so callers render
//! text, hex, and per-field tables uniformly. A failed call yields no partial
//! instruction. Decode and encode are pure: the injected catalog is the only
//! state, and it is never mutated.

use std::fmt;

use crate::common::error::CodecError;
use crate::common::word::{Word, WORD_BITS};

use super::field::Field;
use super::layout::Layout;
use super::operations::OperationCatalog;

/// Bit offset of the function-code field within a word.
const FUNC_OFFSET: u8 = WORD_BITS - super::operations::CODE_BITS;

/// A decoded or encoded instruction: the word, its layout, and every field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    word: Word,
    layout: &'static Layout,
    fields: Vec<Field>,
}

impl Instruction {
    /// The 32-bit machine word.
    pub const fn word(&self) -> Word {
        self.word
    }

    /// The layout the word decomposes under.
    pub const fn layout(&self) -> &'static Layout {
        self.layout
    }

    /// Every field of the layout, in bit order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The fields named by the layout's syntax, in text order.
    pub fn syntax_fields(&self) -> impl Iterator<Item = &Field> {
        self.layout
            .syntax
            .iter()
            .filter_map(|name| self.fields.iter().find(|field| field.name() == *name))
    }

    /// The canonical assembly text: syntax-ordered symbols joined by single
    /// spaces, first token the mnemonic.
    pub fn text(&self) -> String {
        self.syntax_fields()
            .map(Field::symbol)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The canonical 8-hex-digit word form with the `0x` marker.
    pub fn hex(&self) -> String {
        self.word.hex()
    }

    /// The full 32-character binary form of the word.
    pub fn binary(&self) -> String {
        self.word.binary()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// The codec entry point, owning its operation catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionCodec {
    catalog: OperationCatalog,
}

impl InstructionCodec {
    /// Creates a codec around an operation catalog.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The opcode/function tables to resolve symbols against.
    pub const fn new(catalog: OperationCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this codec resolves symbols against.
    pub const fn catalog(&self) -> &OperationCatalog {
        &self.catalog
    }

    /// Decodes a machine word into its fields and assembly text.
    ///
    /// The input accepts the forms [`Word::parse`] accepts. The opcode bits
    /// and function bits select the layout, every field is sliced at its bit
    /// position, and each is interpreted by the field codec.
    ///
    /// # Arguments
    ///
    /// * `input` - The machine word as hex or 32-character binary text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::MalformedInput`] for unparsable words and
    /// [`CodecError::UnknownOperation`] / [`CodecError::UnknownRegister`]
    /// when a field's bits name nothing in the catalogs.
    pub fn decode(&self, input: &str) -> Result<Instruction, CodecError> {
        let word = Word::parse(input)?;
        let op = word.extract(0, super::operations::CODE_BITS) as u8;
        let func = word.extract(FUNC_OFFSET, super::operations::CODE_BITS) as u8;
        let layout = Layout::select_by_bits(op, Some(func))?;

        let mut fields = Vec::with_capacity(layout.fields.len());
        let mut offset = 0;
        for spec in layout.fields {
            let raw = word.extract(offset, spec.width);
            fields.push(Field::decode(*spec, raw, &self.catalog)?);
            offset += spec.width;
        }

        Ok(Instruction {
            word,
            layout,
            fields,
        })
    }

    /// Encodes an assembly line into a machine word.
    ///
    /// Commas are treated as whitespace. The first token is the mnemonic and
    /// selects the layout; the full token list is zipped against the layout's
    /// syntax order. Fields the syntax does not name are zero-filled, which
    /// still decodes them to a symbol (the op field of an R-format line comes
    /// back as `special`, unused registers as `$zero`).
    ///
    /// # Arguments
    ///
    /// * `line` - The assembly text, mnemonic first.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::MalformedInput`] for an empty line or unparsable
    /// operand, [`CodecError::UnknownOperation`] for an unknown mnemonic,
    /// [`CodecError::AmbiguousFormat`] when the mnemonic cannot select an
    /// R-format member, [`CodecError::ArityMismatch`] when the operand count
    /// does not match the syntax, [`CodecError::UnknownRegister`] for bad
    /// register tokens, and [`CodecError::FieldOverflow`] for out-of-range
    /// numerics.
    pub fn encode(&self, line: &str) -> Result<Instruction, CodecError> {
        let cleaned = line.replace(',', " ");
        let tokens: Vec<&str> = cleaned.split_whitespace().collect();
        let Some(mnemonic) = tokens.first().copied() else {
            return Err(CodecError::MalformedInput {
                input: line.to_owned(),
                reason: "expected a mnemonic and its operands",
            });
        };

        let layout = Layout::select_by_mnemonic(&self.catalog, mnemonic)?;
        if tokens.len() != layout.syntax.len() {
            return Err(CodecError::ArityMismatch {
                mnemonic: mnemonic.to_owned(),
                expected: layout.syntax.len() - 1,
                found: tokens.len() - 1,
            });
        }

        let mut bits: u32 = 0;
        let mut fields = Vec::with_capacity(layout.fields.len());
        let mut offset = 0;
        for spec in layout.fields {
            let field = layout
                .syntax
                .iter()
                .position(|name| *name == spec.name)
                .map_or_else(
                    || Field::decode(*spec, 0, &self.catalog),
                    |idx| Field::encode(*spec, tokens[idx], &self.catalog),
                )?;
            bits |= field.raw() << (WORD_BITS - offset - spec.width);
            offset += spec.width;
            fields.push(field);
        }

        Ok(Instruction {
            word: Word::new(bits),
            layout,
            fields,
        })
    }
}
