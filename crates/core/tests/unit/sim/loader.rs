//! Memory-image parsing tests.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use rv32sim_core::SimError;
use rv32sim_core::sim::loader::{DMEM_FILE, IMEM_FILE, load_io_dir, parse_image};

fn binary_lines(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:08b}\n")).collect()
}

#[test]
fn parses_one_byte_per_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("image.txt");
    fs::write(&path, binary_lines(&[0x00, 0xff, 0x80, 0x01])).unwrap();

    let bytes = parse_image(&path).unwrap();
    assert_eq!(bytes, vec![0x00, 0xff, 0x80, 0x01]);
}

#[test]
fn tolerates_crlf_line_endings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("image.txt");
    fs::write(&path, "00000001\r\n11110000\r\n").unwrap();

    let bytes = parse_image(&path).unwrap();
    assert_eq!(bytes, vec![0x01, 0xf0]);
}

#[test]
fn rejects_short_lines_with_position() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("image.txt");
    fs::write(&path, "00000001\n0101\n").unwrap();

    match parse_image(&path).unwrap_err() {
        SimError::MalformedMemoryFile { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_non_binary_digits() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("image.txt");
    fs::write(&path, "0000002x\n").unwrap();
    assert!(parse_image(&path).is_err());
}

#[test]
fn loads_a_complete_io_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(IMEM_FILE), binary_lines(&[0, 0, 0, 0x7f])).unwrap();
    fs::write(dir.path().join(DMEM_FILE), binary_lines(&[1, 2, 3, 4])).unwrap();

    let (imem, dmem) = load_io_dir(dir.path()).unwrap();
    assert_eq!(imem, vec![0, 0, 0, 0x7f]);
    assert_eq!(dmem, vec![1, 2, 3, 4]);
}

#[test]
fn missing_directory_is_reported_as_such() {
    let err = load_io_dir(std::path::Path::new("/definitely/not/here")).unwrap_err();
    assert!(matches!(err, SimError::IoDirectoryMissing(_)));
}

#[test]
fn missing_image_file_is_an_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(IMEM_FILE), "00000000\n").unwrap();
    // dmem.txt absent
    assert!(load_io_dir(dir.path()).is_err());
}
