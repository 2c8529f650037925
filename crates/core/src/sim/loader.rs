//! Memory-image loading.
//!
//! A memory image on disk is a text file with one byte per line, rendered as
//! exactly eight binary digits, lowest address first. The I/O directory holds
//! `imem.txt` (the program) and `dmem.txt` (initial data memory).

use std::path::Path;

use tracing::debug;

use crate::common::error::SimError;

/// File name of the instruction-memory image inside the I/O directory.
pub const IMEM_FILE: &str = "imem.txt";
/// File name of the data-memory image inside the I/O directory.
pub const DMEM_FILE: &str = "dmem.txt";

/// Parses a memory-image file into raw bytes.
///
/// # Errors
///
/// Returns [`SimError::MalformedMemoryFile`] for a missing file or any line
/// that is not exactly eight binary digits.
pub fn parse_image(path: &Path) -> Result<Vec<u8>, SimError> {
    let text = std::fs::read_to_string(path).map_err(|e| SimError::MalformedMemoryFile {
        path: path.to_path_buf(),
        line: 0,
        reason: e.to_string(),
    })?;

    let mut bytes = Vec::new();
    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim_end_matches('\r');
        if line.len() != 8 || !line.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(SimError::MalformedMemoryFile {
                path: path.to_path_buf(),
                line: idx + 1,
                reason: format!("expected 8 binary digits, got {line:?}"),
            });
        }
        let byte = u8::from_str_radix(line, 2).map_err(|e| SimError::MalformedMemoryFile {
            path: path.to_path_buf(),
            line: idx + 1,
            reason: e.to_string(),
        })?;
        bytes.push(byte);
    }

    debug!(path = %path.display(), bytes = bytes.len(), "loaded memory image");
    Ok(bytes)
}

/// Loads both memory images from an I/O directory.
///
/// # Returns
///
/// The raw `(imem, dmem)` byte images; each engine builds its own private
/// data memory from the `dmem` bytes.
///
/// # Errors
///
/// Returns [`SimError::IoDirectoryMissing`] when the directory does not
/// exist, or a [`SimError::MalformedMemoryFile`] from image parsing.
pub fn load_io_dir(iodir: &Path) -> Result<(Vec<u8>, Vec<u8>), SimError> {
    if !iodir.is_dir() {
        return Err(SimError::IoDirectoryMissing(iodir.to_path_buf()));
    }
    let imem = parse_image(&iodir.join(IMEM_FILE))?;
    let dmem = parse_image(&iodir.join(DMEM_FILE))?;
    Ok((imem, dmem))
}
