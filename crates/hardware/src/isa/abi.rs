//! MIPS Application Binary Interface (ABI) register name constants.
//!
//! Defines the conventional MIPS register names and their corresponding
//! indices for use in the disassembler, register dumps, and tests.

/// Register 0 ($zero, hardwired to zero).
pub const REG_ZERO: usize = 0;
/// Register 1 ($at, assembler temporary).
pub const REG_AT: usize = 1;
/// Register 2 ($v0, first return value).
pub const REG_V0: usize = 2;
/// Register 3 ($v1, second return value).
pub const REG_V1: usize = 3;
/// Register 4 ($a0, first argument).
pub const REG_A0: usize = 4;
/// Register 5 ($a1, second argument).
pub const REG_A1: usize = 5;
/// Register 8 ($t0, first caller-saved temporary).
pub const REG_T0: usize = 8;
/// Register 9 ($t1, second caller-saved temporary).
pub const REG_T1: usize = 9;
/// Register 10 ($t2, third caller-saved temporary).
pub const REG_T2: usize = 10;
/// Register 11 ($t3, fourth caller-saved temporary).
pub const REG_T3: usize = 11;
/// Register 16 ($s0, first callee-saved register).
pub const REG_S0: usize = 16;
/// Register 17 ($s1, second callee-saved register).
pub const REG_S1: usize = 17;
/// Register 29 ($sp, stack pointer).
pub const REG_SP: usize = 29;
/// Register 31 ($ra, return address, written by `jal`).
pub const REG_RA: usize = 31;

/// Conventional names for all 32 general-purpose registers, indexed by
/// register number.
pub const REG_NAMES: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Returns the conventional name for a register index, or `"$??"` for an
/// out-of-range index.
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("$??")
}
