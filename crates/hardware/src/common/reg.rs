//! General-purpose register file.

use crate::isa::abi;

/// The 32 general-purpose registers.
///
/// Register 0 (`$zero`) is hardwired: reads always return zero and writes
/// are discarded at the port, so no caller needs to special-case it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; 32],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with every register cleared.
    pub const fn new() -> Self {
        Self { regs: [0; 32] }
    }

    /// Reads a register. Register 0 always reads as zero; out-of-range
    /// indices cannot occur because field extraction masks to 5 bits.
    #[inline(always)]
    pub fn read(&self, idx: usize) -> u32 {
        if idx == abi::REG_ZERO {
            0
        } else {
            self.regs[idx & 0x1F]
        }
    }

    /// Writes a register. Writes to register 0 are discarded.
    #[inline(always)]
    pub fn write(&mut self, idx: usize, value: u32) {
        if idx != abi::REG_ZERO {
            self.regs[idx & 0x1F] = value;
        }
    }

    /// Prints all 32 registers with their ABI names, four per row.
    pub fn dump(&self) {
        for row in 0..8 {
            let i = row * 4;
            println!(
                "{:>5} = {:#010x}   {:>5} = {:#010x}   {:>5} = {:#010x}   {:>5} = {:#010x}",
                abi::reg_name(i),
                self.read(i),
                abi::reg_name(i + 1),
                self.read(i + 1),
                abi::reg_name(i + 2),
                self.read(i + 2),
                abi::reg_name(i + 3),
                self.read(i + 3),
            );
        }
    }
}
