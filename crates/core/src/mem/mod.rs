//! Byte-addressable instruction and data memories.
//!
//! Both memories are flat byte arrays with 32-bit words stored big-endian:
//! the byte at the lowest address holds the most significant bits, matching
//! the one-byte-per-line layout of the on-disk memory images.

use crate::common::error::{AccessType, SimError};

/// Read-only instruction memory.
///
/// Sized exactly by its image; a fetch past the end is not a fault, the
/// engines treat it as running off the end of the program and drain.
#[derive(Clone, Debug)]
pub struct InstructionMemory {
    bytes: Vec<u8>,
}

impl InstructionMemory {
    /// Creates an instruction memory from a raw byte image.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Size of the memory in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the memory holds no program at all.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether a full 4-byte word exists at `addr`.
    pub fn contains_word(&self, addr: u32) -> bool {
        (addr as usize)
            .checked_add(4)
            .is_some_and(|end| end <= self.bytes.len())
    }

    /// Fetches the big-endian word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MemoryOutOfBounds`] when the word is not fully
    /// inside the image.
    pub fn read_word(&self, addr: u32) -> Result<u32, SimError> {
        word_at(&self.bytes, addr, AccessType::Fetch)
    }
}

/// Read-write data memory.
///
/// Fixed-size for the life of a run; accesses outside the image are faults,
/// never grounds for growth.
#[derive(Clone, Debug)]
pub struct DataMemory {
    bytes: Vec<u8>,
}

impl DataMemory {
    /// Creates a data memory from an image, zero-padded up to `min_size` bytes.
    ///
    /// An image longer than `min_size` is kept in full.
    pub fn new(mut bytes: Vec<u8>, min_size: usize) -> Self {
        if bytes.len() < min_size {
            bytes.resize(min_size, 0);
        }
        Self { bytes }
    }

    /// Size of the memory in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the memory is zero-sized.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Loads the big-endian word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MemoryOutOfBounds`] when the word is not fully
    /// inside the image.
    pub fn read_word(&self, addr: u32) -> Result<u32, SimError> {
        word_at(&self.bytes, addr, AccessType::Read)
    }

    /// Stores `val` big-endian at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MemoryOutOfBounds`] when the word is not fully
    /// inside the image.
    pub fn write_word(&mut self, addr: u32, val: u32) -> Result<(), SimError> {
        let start = addr as usize;
        let end = start.checked_add(4).filter(|&end| end <= self.bytes.len());
        match end {
            Some(end) => {
                self.bytes[start..end].copy_from_slice(&val.to_be_bytes());
                Ok(())
            }
            None => Err(SimError::MemoryOutOfBounds {
                access: AccessType::Write,
                addr,
                len: self.bytes.len(),
            }),
        }
    }

    /// Returns the full byte image, for the final memory dump.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

fn word_at(bytes: &[u8], addr: u32, access: AccessType) -> Result<u32, SimError> {
    let start = addr as usize;
    start
        .checked_add(4)
        .filter(|&end| end <= bytes.len())
        .map(|end| {
            let mut word = [0u8; 4];
            word.copy_from_slice(&bytes[start..end]);
            u32::from_be_bytes(word)
        })
        .ok_or(SimError::MemoryOutOfBounds {
            access,
            addr,
            len: bytes.len(),
        })
}
