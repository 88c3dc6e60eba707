//! Simulation driver.

use thiserror::Error;
use tracing::{debug, error, info};

use crate::common::{Fault, Trap};
use crate::config::Config;
use crate::core::Cpu;

/// Terminal outcome of a run that did not drain cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    /// A fatal pipeline fault surfaced at write-back.
    #[error(transparent)]
    Trap(#[from] Trap),

    /// The watchdog fired before the pipeline drained.
    #[error("no halt after {limit} cycles (watchdog)")]
    CycleLimit {
        /// The configured cycle budget.
        limit: u64,
    },
}

/// Owns a [`Cpu`] and drives it to completion.
///
/// The pipeline itself has no notion of a finished program; the driver
/// watches for the drained state (fetch idle past program text, every latch
/// empty) and enforces the configured watchdog budget.
#[derive(Debug)]
pub struct Simulator {
    /// The processor under simulation.
    pub cpu: Cpu,
    max_cycles: u64,
}

impl Simulator {
    /// Creates a simulator with a reset processor.
    pub fn new(config: &Config) -> Self {
        debug!(
            start_pc = config.general.start_pc,
            memory = config.memory.size,
            max_cycles = config.general.max_cycles,
            "simulator created"
        );
        Self {
            cpu: Cpu::new(config),
            max_cycles: config.general.max_cycles,
        }
    }

    /// Loads a program image at `base` and makes it fetchable.
    ///
    /// # Errors
    ///
    /// Propagates the memory fault if the image does not fit at `base`.
    pub fn load_program(&mut self, words: &[u32], base: u32) -> Result<(), Fault> {
        info!(words = words.len(), base, "loading program image");
        self.cpu.load_program(words, base)
    }

    /// Advances the pipeline by one tick.
    ///
    /// # Errors
    ///
    /// Returns the [`Trap`] of a faulted instruction reaching write-back.
    pub fn tick(&mut self) -> Result<(), Trap> {
        self.cpu.tick()
    }

    /// Runs at most `cycles` additional ticks, stopping early on drain.
    ///
    /// # Errors
    ///
    /// Propagates a surfaced [`Trap`].
    pub fn run(&mut self, cycles: u64) -> Result<(), RunError> {
        for _ in 0..cycles {
            if self.cpu.drained() {
                break;
            }
            self.cpu.tick()?;
        }
        Ok(())
    }

    /// Runs until the pipeline drains, returning the total cycle count.
    ///
    /// # Errors
    ///
    /// A surfaced [`Trap`], or [`RunError::CycleLimit`] when the watchdog
    /// budget is exhausted first.
    pub fn run_to_halt(&mut self) -> Result<u64, RunError> {
        while !self.cpu.drained() {
            if self.cpu.stats.cycles >= self.max_cycles {
                error!(limit = self.max_cycles, "watchdog fired");
                return Err(RunError::CycleLimit {
                    limit: self.max_cycles,
                });
            }
            self.cpu.tick().inspect_err(|trap| {
                error!(%trap, "fatal trap");
            })?;
        }
        info!(
            cycles = self.cpu.stats.cycles,
            retired = self.cpu.stats.instructions_retired,
            "pipeline drained"
        );
        Ok(self.cpu.stats.cycles)
    }
}
