//! Common types shared across the simulator.
//!
//! Holds the register file and the fault/trap model used by every pipeline
//! stage.

/// Fault and trap definitions.
pub mod error;
/// General-purpose register file.
pub mod reg;

pub use self::error::{Fault, Stage, Trap};
pub use self::reg::RegisterFile;
