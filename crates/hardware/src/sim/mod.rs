//! Simulation utilities and program loading.
//!
//! Provides the program-image loader and the driver that runs a processor
//! to completion.

/// Program image loading.
pub mod loader;
/// Run-to-completion driver.
pub mod simulator;

pub use self::loader::LoadError;
pub use self::simulator::{RunError, Simulator};
