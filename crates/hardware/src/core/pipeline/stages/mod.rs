//! The five pipeline stage operations.
//!
//! Each stage is a free function over the [`Cpu`](crate::core::Cpu) context,
//! invoked once per tick. A stage takes the previous tick's input latch by
//! value and produces this tick's output latch; an empty input short-circuits
//! to an empty output with no side effects.

/// Instruction decode and register read.
pub mod decode;
/// ALU, effective addresses, branch and jump resolution.
pub mod execute;
/// Instruction fetch.
pub mod fetch;
/// Data memory access.
pub mod memory;
/// Register write-back and retirement.
pub mod writeback;

pub use self::decode::decode_stage;
pub use self::execute::execute_stage;
pub use self::fetch::fetch_stage;
pub use self::memory::memory_stage;
pub use self::writeback::writeback_stage;
