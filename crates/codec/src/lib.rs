//! MIPS machine-word / assembly-text codec library.
//!
//! This crate converts between 32-bit MIPS machine words and human-readable
//! assembly text, in both directions, with the following pieces:
//! 1. **Word:** Parsing and rendering of 32-bit machine words (hex or binary form).
//! 2. **Registers:** The architectural register set with its `$` names.
//! 3. **Operations:** Opcode and function-code tables loaded from a JSON catalog.
//! 4. **Layouts:** The four fixed field layouts (R, R-shift, I, J) and format dispatch.
//! 5. **Fields:** Per-field conversion between raw bits and symbolic text.
//! 6. **Codec:** Whole-instruction decode and encode over the above.
//!
//! Decode and encode are pure functions of their input plus an immutable
//! [`OperationCatalog`] injected at construction; the library performs no I/O
//! outside catalog loading and is safe for concurrent read-only use.

/// Common types: machine words and error definitions.
pub mod common;
/// Instruction set: registers, operation tables, layouts, fields, and the codec.
pub mod isa;

/// Errors produced while loading an operation catalog.
pub use crate::common::error::CatalogError;
/// Errors produced by decode/encode operations.
pub use crate::common::error::CodecError;
/// A 32-bit machine word with parsing and rendering helpers.
pub use crate::common::word::Word;
/// The result of a decode or encode: word, layout, and interpreted fields.
pub use crate::isa::codec::Instruction;
/// The codec entry point; construct with `InstructionCodec::new`.
pub use crate::isa::codec::InstructionCodec;
/// Opcode/function-code tables; load with `bundled`, `from_path`, or `from_json_str`.
pub use crate::isa::operations::OperationCatalog;
