use std::fs;
use std::path::PathBuf;

use config_tree::{parse_file, ParseError};
use pretty_assertions::assert_eq;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn parses_nvue_export_in_document_order() {
    let root = parse_file(&fixture("fixtures/leaf01.yaml")).expect("parse should succeed");

    assert_eq!(root.len(), 2);
    assert_eq!(root.text(&["0", "header", "model"]), "VX");
    assert_eq!(root.text(&["1", "set", "system", "hostname"]), "leaf01");
    assert_eq!(
        root.keys_of(&["1", "set", "interface"]),
        vec!["bond0", "eth0", "lo", "swp1", "swp2", "swp51"]
    );
    assert_eq!(
        root.keys_of(&["1", "set", "bridge", "domain", "br_default", "vlan"]),
        vec!["10", "20"]
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = parse_file(&dir.path().join("absent.yaml")).expect_err("should fail");
    assert!(matches!(err, ParseError::Io(_)));
}

#[test]
fn empty_file_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty.yaml");
    fs::write(&path, "").expect("write empty file");

    assert!(parse_file(&path).is_err());
}
