//! Interstage pipeline latches.
//!
//! One struct per stage boundary, each owned by the [`Cpu`](crate::core::Cpu)
//! as an `Option`: `None` is a bubble, `Some` is an in-flight instruction.
//! Ownership transfers every tick — the consuming stage takes the latch and
//! the producing stage builds a fresh one, so no stage can observe or mutate
//! a latch it does not currently own.
//!
//! Every entry carries a `trap` slot. A stage that detects a fatal fault
//! records it there and the entry rides the rest of the pipe with its
//! semantics suppressed, surfacing in program order at write-back.

use crate::common::Trap;
use crate::isa::Instruction;

/// What the memory stage should do with an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemOpKind {
    /// No memory access; the ALU result passes through.
    #[default]
    None,
    /// Read a word at the computed effective address.
    Load,
    /// Write the store value at the computed effective address.
    Store,
}

/// Fetch → Decode latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfId {
    /// Address this instruction was fetched from.
    pub pc: u32,
    /// Post-increment program counter (`pc + 4`).
    pub next_pc: u32,
    /// Raw instruction word, not yet decoded.
    pub raw: u32,
    /// Fault detected during fetch, if any.
    pub trap: Option<Trap>,
}

/// Decode → Execute latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdEx {
    /// Address this instruction was fetched from.
    pub pc: u32,
    /// Post-increment program counter, used for branch targets and linking.
    pub next_pc: u32,
    /// The decoded instruction. For a trapped entry this holds the
    /// canonical no-op and must not be interpreted.
    pub inst: Instruction,
    /// Raw instruction word, kept for diagnostics and tracing.
    pub raw: u32,
    /// First operand value (the rs register read, possibly forwarded).
    pub op_a: u32,
    /// Second operand value (the rt register read, possibly forwarded).
    pub op_b: u32,
    /// Immediate, already sign- or zero-extended by the decoder.
    pub imm: i32,
    /// Destination-register selection, `None` for instructions that write
    /// no register.
    pub dest: Option<usize>,
    /// Fault detected at or before decode, if any.
    pub trap: Option<Trap>,
}

/// Execute → Memory latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExMem {
    /// Address this instruction was fetched from.
    pub pc: u32,
    /// Post-increment program counter.
    pub next_pc: u32,
    /// The decoded instruction.
    pub inst: Instruction,
    /// Raw instruction word.
    pub raw: u32,
    /// ALU result, effective address, or branch/jump outcome value.
    pub result: u32,
    /// Value to write for stores (the rt operand).
    pub store_value: u32,
    /// Destination-register selection.
    pub dest: Option<usize>,
    /// Memory operation this instruction performs, if any.
    pub mem_op: MemOpKind,
    /// Fault detected at or before execute, if any.
    pub trap: Option<Trap>,
}

/// Memory → Write-back latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemWb {
    /// Address this instruction was fetched from.
    pub pc: u32,
    /// The decoded instruction, used for retirement accounting.
    pub inst: Instruction,
    /// Raw instruction word.
    pub raw: u32,
    /// Final value to commit: the loaded word for loads, the ALU result
    /// otherwise.
    pub value: u32,
    /// Destination-register selection.
    pub dest: Option<usize>,
    /// Fault to surface at write-back, if any.
    pub trap: Option<Trap>,
}
