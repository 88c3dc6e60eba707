//! MIPS-I instruction set definitions.
//!
//! This module contains everything needed to interpret the 32-bit instruction
//! stream:
//! 1. **Encoding constants:** Major opcodes and R-format funct values.
//! 2. **Field extraction:** Bit-level access to the R/I/J format fields.
//! 3. **Decoding:** The single operation turning a raw word into the closed
//!    [`Instruction`](instruction::Instruction) set.
//! 4. **ABI:** Conventional register names and indices.
//! 5. **Disassembly:** Human-readable rendering for traces and fault reports.

/// Conventional ABI register indices (`$zero`, `$t0`, `$ra`, ...).
pub mod abi;
/// Raw word to [`Instruction`](instruction::Instruction) decoding.
pub mod decode;
/// Instruction-to-assembly-text rendering.
pub mod disasm;
/// R-format funct field values.
pub mod funct;
/// Instruction model and bit-level field extraction.
pub mod instruction;
/// Major opcode values (bits 31-26).
pub mod opcodes;

pub use self::decode::decode;
pub use self::instruction::{Instruction, InstructionBits};
