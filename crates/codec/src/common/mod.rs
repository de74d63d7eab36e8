//! Common types shared across the codec.
//!
//! This module provides the building blocks the instruction-level code sits
//! on. It includes:
//! 1. **Machine Words:** A strong type for 32-bit words with parsing,
//!    rendering, and bit-slice extraction.
//! 2. **Error Handling:** The codec's failure kinds and catalog-loading
//!    errors, integrated with standard Rust error traits.

/// Error types for decode/encode failures and catalog loading.
pub mod error;

/// The 32-bit machine word type.
pub mod word;

pub use error::{CatalogError, CodecError};
pub use word::Word;
