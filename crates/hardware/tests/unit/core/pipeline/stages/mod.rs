//! Per-stage tests with directly injected latch state.

/// Instruction fetch and the text-end drain rule.
pub mod fetch;
