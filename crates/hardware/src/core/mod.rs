//! Core processor implementation.
//!
//! This module contains the CPU context object that owns all architectural
//! and pipeline state, the ALU, and the pipeline itself (latches, hazard
//! logic, stage operations).

/// Arithmetic logic unit.
pub mod alu;
/// Pipeline latches, hazards, and stage operations.
pub mod pipeline;

use crate::common::{Fault, RegisterFile, Stage, Trap};
use crate::config::Config;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::{hazards, stages};
use crate::isa::abi;
use crate::memory::Memory;
use crate::stats::SimStats;

/// The processor context.
///
/// Owns every piece of shared state the stages touch: the register file,
/// the memory image, the program counter, the four interstage latches, and
/// the statistics counters. Single-writer discipline is enforced by which
/// stage operation is handed `&mut` access for which structure: write-back
/// alone mutates registers, the memory stage alone mutates memory, and only
/// fetch and execute move the program counter.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose register file.
    pub regs: RegisterFile,
    /// Flat memory image.
    pub mem: Memory,
    /// Program counter of the next fetch.
    pub pc: u32,
    /// End of loaded program text; fetch idles at or past this address.
    pub text_end: u32,
    /// Emit per-stage trace lines and the per-tick pipeline diagram.
    pub trace: bool,
    /// Fetch → Decode latch (`None` is a bubble).
    pub if_id: Option<IfId>,
    /// Decode → Execute latch.
    pub id_ex: Option<IdEx>,
    /// Execute → Memory latch.
    pub ex_mem: Option<ExMem>,
    /// Memory → Write-back latch.
    pub mem_wb: Option<MemWb>,
    /// The entry write-back retired this tick, kept for observability.
    pub retired: Option<MemWb>,
    /// Simulation statistics.
    pub stats: SimStats,
    stall_cycles: u32,
    redirected: bool,
}

impl Cpu {
    /// Creates a reset processor per the configuration: empty pipeline,
    /// cleared registers, zero-filled memory, `pc` at the configured start.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            mem: Memory::new(config.memory.size),
            pc: config.general.start_pc,
            text_end: config.general.start_pc,
            trace: config.general.trace,
            if_id: None,
            id_ex: None,
            ex_mem: None,
            mem_wb: None,
            retired: None,
            stats: SimStats::default(),
            stall_cycles: 0,
            redirected: false,
        }
    }

    /// Copies a program image into memory at `base` and extends the fetchable
    /// text region over it.
    ///
    /// # Errors
    ///
    /// Propagates the memory fault if the image does not fit at `base`.
    pub fn load_program(&mut self, words: &[u32], base: u32) -> Result<(), Fault> {
        for (i, &word) in words.iter().enumerate() {
            self.mem.write_word(base + 4 * i as u32, word)?;
        }
        self.text_end = self.text_end.max(base + 4 * words.len() as u32);
        Ok(())
    }

    /// Advances the whole pipeline by one clock tick.
    ///
    /// Stages run oldest-first (WB, MEM, EX, ID, IF) so each consumes only
    /// the previous tick's latches. A taken control transfer resolved in
    /// execute squashes the fetched-but-undecoded slot and skips this tick's
    /// decode and fetch; a pending load-use stall skips them too, holding
    /// the consumer in place. The zero register is re-asserted at the end of
    /// every tick.
    ///
    /// # Errors
    ///
    /// Returns the [`Trap`] of a faulted instruction when it reaches
    /// write-back. The pipeline state past that instruction is undefined.
    pub fn tick(&mut self) -> Result<(), Trap> {
        self.stats.cycles += 1;
        if self.trace {
            self.print_pipeline_diagram();
        }

        if hazards::need_stall_load_use(self.id_ex.as_ref(), self.if_id.as_ref()) {
            self.request_stall(1);
        }

        stages::writeback_stage(self)?;
        stages::memory_stage(self);
        stages::execute_stage(self);

        if std::mem::take(&mut self.redirected) {
            // Flush: the front end was squashed by execute this tick.
        } else if self.stall_cycles > 0 {
            self.stall_cycles -= 1;
            self.stats.stalls_data += 1;
        } else {
            stages::decode_stage(self);
            stages::fetch_stage(self);
        }

        self.regs.write(abi::REG_ZERO, 0);
        Ok(())
    }

    /// Redirects control flow to `target`, flushing younger work.
    ///
    /// Called by execute when a branch is taken or a jump resolves. The
    /// fetched-but-undecoded instruction is squashed, this tick's decode and
    /// fetch are skipped, and any pending stall dies with the squashed
    /// instruction. Costs the two control-hazard cycles.
    pub fn redirect(&mut self, target: u32) {
        if self.trace {
            eprintln!("EX  redirect pc <= {target:#010x} (flush)");
        }
        self.pc = target;
        self.if_id = None;
        self.stall_cycles = 0;
        self.redirected = true;
        self.stats.stalls_control += 2;
    }

    /// Requests that the fetch/decode pair hold for `cycles` additional
    /// ticks.
    pub fn request_stall(&mut self, cycles: u32) {
        self.stall_cycles = self.stall_cycles.max(cycles);
    }

    /// Ticks of front-end hold still pending.
    pub const fn pending_stall(&self) -> u32 {
        self.stall_cycles
    }

    /// True when the named stage currently holds no real instruction.
    pub const fn is_bubble(&self, stage: Stage) -> bool {
        match stage {
            Stage::Fetch => self.if_id.is_none(),
            Stage::Decode => self.id_ex.is_none(),
            Stage::Execute => self.ex_mem.is_none(),
            Stage::Memory => self.mem_wb.is_none(),
            Stage::Writeback => self.retired.is_none(),
        }
    }

    /// True when no instruction is in flight and fetch has run off the end
    /// of program text: the run is complete.
    pub const fn drained(&self) -> bool {
        self.pc >= self.text_end
            && self.if_id.is_none()
            && self.id_ex.is_none()
            && self.ex_mem.is_none()
            && self.mem_wb.is_none()
    }

    /// Builds a [`Trap`] for a fault detected this cycle.
    pub const fn trap_at(&self, stage: Stage, fault: Fault, pc: u32, raw: u32) -> Trap {
        Trap {
            fault,
            stage,
            cycle: self.stats.cycles,
            pc,
            raw,
        }
    }

    /// Prints one diagram line showing the instruction resident in each
    /// stage, oldest on the right.
    fn print_pipeline_diagram(&self) {
        fn slot(pc: Option<u32>) -> String {
            pc.map_or_else(|| "[  nop   ]".to_owned(), |pc| format!("[{pc:08x}]"))
        }
        eprintln!(
            "C{:<6} IF {} -> ID {} -> EX {} -> MEM {} -> WB {}",
            self.stats.cycles,
            slot(self.if_id.as_ref().map(|l| l.pc)),
            slot(self.id_ex.as_ref().map(|l| l.pc)),
            slot(self.ex_mem.as_ref().map(|l| l.pc)),
            slot(self.mem_wb.as_ref().map(|l| l.pc)),
            slot(self.retired.as_ref().map(|l| l.pc)),
        );
    }

    /// Prints the program counter and the full register file.
    pub fn dump_state(&self) {
        println!("pc    = {:#010x}", self.pc);
        self.regs.dump();
    }
}
