//! Instruction set definitions for the classic 32-bit MIPS integer encodings.
//!
//! Contains the register catalog, the opcode/function-code tables, the four
//! fixed field layouts with their dispatch rules, the per-field codec, and
//! the whole-instruction codec that ties them together.

/// Whole-instruction decode and encode.
pub mod codec;

/// Per-field conversion between raw bits and symbolic text.
pub mod field;

/// The four fixed field layouts and format dispatch.
pub mod layout;

/// Opcode and function-code tables loaded from a JSON catalog.
pub mod operations;

/// The architectural register set and its `$` names.
pub mod registers;
