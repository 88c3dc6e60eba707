//! Simulation statistics collection and reporting.

/// Counters accumulated over a simulation run.
///
/// Cycle and stall counters are driven by [`Cpu::tick`](crate::core::Cpu);
/// retirement counters by the write-back stage, so bubbles and squashed
/// instructions are never counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total clock ticks simulated.
    pub cycles: u64,
    /// Instructions that completed write-back.
    pub instructions_retired: u64,

    /// Front-end hold cycles spent on load-use hazards.
    pub stalls_data: u64,
    /// Cycles lost to flushes after taken branches and jumps.
    pub stalls_control: u64,

    /// Retired arithmetic/logical/shift/comparison instructions.
    pub inst_alu: u64,
    /// Retired loads.
    pub inst_load: u64,
    /// Retired stores.
    pub inst_store: u64,
    /// Retired branches and jumps.
    pub inst_branch: u64,
}

impl SimStats {
    /// Prints the end-of-run report.
    pub fn print(&self) {
        println!("\n=========================================================");

        println!("\n[General]");
        println!("  Cycles:               {}", self.cycles);
        println!("  Instructions Retired: {}", self.instructions_retired);

        let ipc = if self.cycles > 0 {
            self.instructions_retired as f64 / self.cycles as f64
        } else {
            0.0
        };
        println!("  IPC:                  {ipc:.4}");

        println!("\n[Pipeline Stalls]");
        let total_stalls = self.stalls_data + self.stalls_control;
        if total_stalls > 0 {
            println!("  Total Stalled Cycles: {total_stalls}");
            println!(
                "    Data Hazards:       {:<10} ({:.2}%)",
                self.stalls_data,
                (self.stalls_data as f64 / total_stalls as f64) * 100.0
            );
            println!(
                "    Control Hazards:    {:<10} ({:.2}%)",
                self.stalls_control,
                (self.stalls_control as f64 / total_stalls as f64) * 100.0
            );
        } else {
            println!("  Total Stalled Cycles: 0");
        }

        println!("\n[Instruction Mix]");
        let total_inst = self.instructions_retired as f64;
        if total_inst > 0.0 {
            println!(
                "  ALU Operations:       {:<10} ({:.2}%)",
                self.inst_alu,
                (self.inst_alu as f64 / total_inst) * 100.0
            );
            println!(
                "  Loads:                {:<10} ({:.2}%)",
                self.inst_load,
                (self.inst_load as f64 / total_inst) * 100.0
            );
            println!(
                "  Stores:               {:<10} ({:.2}%)",
                self.inst_store,
                (self.inst_store as f64 / total_inst) * 100.0
            );
            println!(
                "  Branches/Jumps:       {:<10} ({:.2}%)",
                self.inst_branch,
                (self.inst_branch as f64 / total_inst) * 100.0
            );
        }

        println!("=========================================================\n");
    }
}
