//! # Unit Tests
//!
//! This module is the hub for the per-module unit tests of the codec
//! library, split the same way the library itself is.
