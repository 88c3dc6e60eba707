//! Fault and trap definitions.
//!
//! This module defines the fatal error model for the simulator:
//! 1. **Faults:** The conditions a stage can detect (bad encodings, bad
//!    memory accesses, a broken hazard invariant).
//! 2. **Traps:** A fault plus the pipeline context it was detected in, the
//!    diagnostic the driving framework receives.
//!
//! A detected fault does not abort the cycle it is found in. It is recorded
//! in the faulting instruction's latch entry and rides the pipeline until
//! write-back, so older instructions commit first and nothing younger
//! commits after it. The architectural state past a trapped instruction is
//! undefined.

use std::fmt;

use thiserror::Error;

/// Pipeline stage identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Instruction fetch.
    Fetch,
    /// Decode and register read.
    Decode,
    /// ALU and branch resolution.
    Execute,
    /// Data memory access.
    Memory,
    /// Register write-back.
    Writeback,
}

impl Stage {
    /// Conventional short label used in pipeline diagrams.
    pub const fn short(self) -> &'static str {
        match self {
            Self::Fetch => "IF",
            Self::Decode => "ID",
            Self::Execute => "EX",
            Self::Memory => "MEM",
            Self::Writeback => "WB",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetch => "fetch",
            Self::Decode => "decode",
            Self::Execute => "execute",
            Self::Memory => "memory",
            Self::Writeback => "write-back",
        };
        write!(f, "{name}")
    }
}

/// Fatal conditions detectable inside the pipeline.
///
/// All of them end the simulation; there is no recoverable error path in the
/// datapath itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// An opcode or funct value outside the supported instruction set.
    ///
    /// Never coerced to a no-op; the associated value is the full encoding.
    #[error("unsupported instruction encoding {raw:#010x}")]
    UnsupportedEncoding {
        /// The rejected 32-bit word.
        raw: u32,
    },

    /// A word access whose address is not 4-byte aligned.
    #[error("misaligned word address {addr:#010x}")]
    MisalignedAccess {
        /// The offending effective address.
        addr: u32,
    },

    /// A word access outside the provisioned memory image.
    #[error("address {addr:#010x} outside the {size}-byte memory image")]
    OutOfRangeAccess {
        /// The offending effective address.
        addr: u32,
        /// Size of the provisioned image in bytes.
        size: usize,
    },

    /// An operand that could neither be forwarded nor have been stalled for.
    ///
    /// Unreachable when the load-use stall logic is intact; raised as an
    /// internal invariant violation rather than silently computing with a
    /// stale register value.
    #[error("operand register {reg} unavailable for forwarding")]
    HazardUnresolved {
        /// The register whose value was still in flight.
        reg: usize,
    },
}

/// A fault bound to the pipeline context it was detected in.
///
/// This is what [`Cpu::tick`](crate::core::Cpu::tick) returns when a trapped
/// instruction reaches write-back: the detecting stage, the cycle of
/// detection, and the faulting instruction's pc and raw word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{fault} [{stage} stage, cycle {cycle}, pc={pc:#010x}, inst={raw:#010x}]")]
pub struct Trap {
    /// What went wrong.
    pub fault: Fault,
    /// The stage that detected the fault.
    pub stage: Stage,
    /// Cycle number at detection time.
    pub cycle: u64,
    /// Program counter of the faulting instruction.
    pub pc: u32,
    /// Raw encoding of the faulting instruction.
    pub raw: u32,
}
