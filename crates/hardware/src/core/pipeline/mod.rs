//! The five-stage instruction pipeline.
//!
//! Four latch boundaries connect the stages:
//! 1. **IF/ID:** Raw fetched word and the advanced program counter.
//! 2. **ID/EX:** Decoded instruction, operand values, extended immediate.
//! 3. **EX/MEM:** ALU result or effective address, store value, memory op.
//! 4. **MEM/WB:** Final value and destination selection.
//!
//! Stages run oldest-first within a tick (WB, MEM, EX, ID, IF) so each one
//! consumes only the previous tick's latches.

/// Hazard detection and operand forwarding.
pub mod hazards;
/// Interstage latch definitions.
pub mod latches;
/// The five stage operations.
pub mod stages;
