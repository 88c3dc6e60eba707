//! Flat big-endian memory image.
//!
//! A byte-addressable array shared by fetch and the memory stage. Word
//! accesses are 32-bit aligned and big-endian (most-significant byte at the
//! lowest address), the same convention for fetch, load, and store.
//! Alignment and range are checked before any byte is touched, so a faulting
//! access never partially completes.

use crate::common::Fault;

/// The flat memory image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    /// Creates a zero-filled image of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Size of the image in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the image holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Validates alignment and range for a word access at `addr`.
    fn check_word(&self, addr: u32) -> Result<usize, Fault> {
        if addr % 4 != 0 {
            return Err(Fault::MisalignedAccess { addr });
        }
        let idx = addr as usize;
        if idx + 4 > self.bytes.len() {
            return Err(Fault::OutOfRangeAccess {
                addr,
                size: self.bytes.len(),
            });
        }
        Ok(idx)
    }

    /// Reads a big-endian 32-bit word.
    ///
    /// # Errors
    ///
    /// [`Fault::MisalignedAccess`] if `addr` is not 4-byte aligned,
    /// [`Fault::OutOfRangeAccess`] if the word does not fit in the image.
    pub fn read_word(&self, addr: u32) -> Result<u32, Fault> {
        let idx = self.check_word(addr)?;
        let bytes = [
            self.bytes[idx],
            self.bytes[idx + 1],
            self.bytes[idx + 2],
            self.bytes[idx + 3],
        ];
        Ok(u32::from_be_bytes(bytes))
    }

    /// Writes a big-endian 32-bit word.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::read_word`]; the image is untouched on
    /// failure.
    pub fn write_word(&mut self, addr: u32, value: u32) -> Result<(), Fault> {
        let idx = self.check_word(addr)?;
        self.bytes[idx..idx + 4].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    /// Reads a single byte, for dumps and tests.
    ///
    /// # Errors
    ///
    /// [`Fault::OutOfRangeAccess`] if `addr` is outside the image.
    pub fn read_byte(&self, addr: u32) -> Result<u8, Fault> {
        self.bytes
            .get(addr as usize)
            .copied()
            .ok_or(Fault::OutOfRangeAccess {
                addr,
                size: self.bytes.len(),
            })
    }
}
