//! # Operation Catalog Tests
//!
//! Verifies loading from the bundled resource, a JSON string, and a file;
//! key validation; forward and reverse lookups; and the opcode-over-function
//! precedence rule for mnemonics present in both tables.

use mips_codec::isa::operations::{OperationBits, OperationCatalog};
use mips_codec::{CatalogError, CodecError};

use crate::common::STUB_CATALOG;

// ══════════════════════════════════════════════════════════
// 1. Loading
// ══════════════════════════════════════════════════════════

#[test]
fn bundled_catalog_parses() {
    let catalog = OperationCatalog::bundled().unwrap();
    assert_eq!(catalog.opcode_name(0b00_0000).unwrap(), "special");
    assert_eq!(catalog.opcode_name(0b00_1000).unwrap(), "addi");
    assert_eq!(catalog.function_name(0b10_0110).unwrap(), "xor");
}

#[test]
fn from_json_str_accepts_the_stub() {
    let catalog = OperationCatalog::from_json_str(STUB_CATALOG).unwrap();
    assert_eq!(catalog.opcode_name(0b00_0001).unwrap(), "dual");
    assert_eq!(catalog.function_name(0b10_0000).unwrap(), "add");
}

#[test]
fn from_json_str_rejects_short_key() {
    let err = OperationCatalog::from_json_str(
        r#"{ "opcodes": { "00000": "bad" }, "func_codes": {} }"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::InvalidKey {
            table: "opcodes",
            ..
        }
    ));
}

#[test]
fn from_json_str_rejects_non_binary_key() {
    let err = OperationCatalog::from_json_str(
        r#"{ "opcodes": {}, "func_codes": { "00200a": "bad" } }"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::InvalidKey {
            table: "func_codes",
            ..
        }
    ));
}

#[test]
fn from_json_str_rejects_missing_table() {
    let err = OperationCatalog::from_json_str(r#"{ "opcodes": {} }"#).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn from_json_str_rejects_garbage() {
    assert!(matches!(
        OperationCatalog::from_json_str("not json"),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn from_path_loads_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("codes.json");
    std::fs::write(&path, STUB_CATALOG).unwrap();

    let catalog = OperationCatalog::from_path(&path).unwrap();
    assert_eq!(catalog.opcode_bits("addi").unwrap(), 0b00_1000);
}

#[test]
fn from_path_missing_file_is_io() {
    let dir = tempfile::tempdir().unwrap();
    let err = OperationCatalog::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn loading_logs_under_a_subscriber() {
    // Smoke test: catalog loading emits its debug event without panicking
    // when a subscriber is installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .try_init();
    assert!(OperationCatalog::bundled().is_ok());
}

// ══════════════════════════════════════════════════════════
// 2. Forward lookup
// ══════════════════════════════════════════════════════════

#[test]
fn unknown_opcode_bits_render_the_pattern() {
    let catalog = OperationCatalog::bundled().unwrap();
    assert_eq!(
        catalog.opcode_name(0b11_0111).unwrap_err(),
        CodecError::UnknownOperation("110111".to_owned())
    );
}

#[test]
fn unknown_function_bits_render_the_pattern() {
    let catalog = OperationCatalog::bundled().unwrap();
    assert_eq!(
        catalog.function_name(0b11_1110).unwrap_err(),
        CodecError::UnknownOperation("111110".to_owned())
    );
}

// ══════════════════════════════════════════════════════════
// 3. Reverse lookup and precedence
// ══════════════════════════════════════════════════════════

#[test]
fn lookup_opcode_table_mnemonic() {
    let catalog = OperationCatalog::bundled().unwrap();
    assert_eq!(
        catalog.lookup("addi").unwrap(),
        OperationBits {
            op: 0b00_1000,
            func: None
        }
    );
}

#[test]
fn lookup_function_table_mnemonic_forces_zero_opcode() {
    let catalog = OperationCatalog::bundled().unwrap();
    assert_eq!(
        catalog.lookup("add").unwrap(),
        OperationBits {
            op: 0,
            func: Some(0b10_0000)
        }
    );
    assert_eq!(
        catalog.lookup("sll").unwrap(),
        OperationBits {
            op: 0,
            func: Some(0)
        }
    );
}

#[test]
fn lookup_prefers_the_opcode_table() {
    // `dual` sits in both stub tables; the opcode bits must win.
    let catalog = OperationCatalog::from_json_str(STUB_CATALOG).unwrap();
    assert_eq!(
        catalog.lookup("dual").unwrap(),
        OperationBits {
            op: 0b00_0001,
            func: None
        }
    );
}

#[test]
fn lookup_unknown_mnemonic_fails() {
    let catalog = OperationCatalog::bundled().unwrap();
    assert_eq!(
        catalog.lookup("frobnicate").unwrap_err(),
        CodecError::UnknownOperation("frobnicate".to_owned())
    );
}
