//! Cycle-accurate five-stage pipelined MIPS-I simulator library.
//!
//! This crate implements the classic in-order pipeline at cycle granularity:
//! 1. **Core:** The CPU context, ALU, interstage latches, hazard logic, and
//!    the five stage operations (fetch, decode, execute, memory, writeback).
//! 2. **ISA:** Decoding, ABI names, and disassembly for the MIPS-I subset
//!    (R/I/J formats, word loads/stores, branches, jumps).
//! 3. **Memory:** A flat big-endian word-addressable image.
//! 4. **Simulation:** Program loader, run-to-completion driver,
//!    configuration, and statistics collection.
//!
//! Data hazards resolve through operand forwarding into decode with a
//! one-cycle load-use stall; control hazards flush the two younger pipeline
//! slots when execute takes a branch or jump. Faults (bad encodings, bad
//! memory accesses) ride the latches and surface in program order at
//! write-back.

/// Common types (register file, faults, traps, stage identifiers).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (context object, ALU, pipeline).
pub mod core;
/// Instruction set (decode, instruction model, ABI, disassembly).
pub mod isa;
/// Flat big-endian memory image.
pub mod memory;
/// Program loader and run-to-completion driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; owns registers, memory, latches, and stats.
pub use crate::core::Cpu;
/// Fatal pipeline diagnostic surfaced at write-back.
pub use crate::common::Trap;
/// Run-to-completion driver over a [`Cpu`].
pub use crate::sim::Simulator;
