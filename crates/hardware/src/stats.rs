//! Simulation statistics collection and reporting.
//!
//! Counters are sampled once per cycle by the engine and never read back by
//! it, so collecting them cannot change scheduling. The report covers:
//! 1. **Throughput:** cycles, retired instructions and IPC.
//! 2. **Issue:** instructions fired into functional units, per class.
//! 3. **Dispatch queue:** average and peak occupancy, head-of-queue stalls.

use std::io::{self, Write};
use std::time::Instant;

use serde::Serialize;

use crate::common::{NUM_UNIT_CLASSES, UnitClass};

/// Simulation statistics for one run.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Total simulated cycles.
    pub cycles: u64,
    /// Instructions retired by the commit stage.
    pub instructions_retired: u64,
    /// Instructions issued into a functional-unit lane.
    pub instructions_fired: u64,
    /// Issued instructions broken down by unit class.
    pub fired_per_class: [u64; NUM_UNIT_CLASSES],
    /// Sum over all cycles of the end-of-cycle dispatch queue length.
    pub dispatch_queue_occupancy: u64,
    /// Largest end-of-cycle dispatch queue length.
    pub max_dispatch_queue_len: u64,
    /// Cycles in which dispatch stopped on a full reservation-station pool.
    pub dispatch_stalls: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            instructions_fired: 0,
            fired_per_class: [0; NUM_UNIT_CLASSES],
            dispatch_queue_occupancy: 0,
            max_dispatch_queue_len: 0,
            dispatch_stalls: 0,
        }
    }
}

impl SimStats {
    /// Records one instruction issued into a lane of `class`.
    pub const fn record_fire(&mut self, class: UnitClass) {
        self.instructions_fired += 1;
        self.fired_per_class[class.index()] += 1;
    }

    /// Samples the dispatch queue length at the end of a cycle.
    pub fn sample_dispatch_queue(&mut self, len: usize) {
        let len = len as u64;
        self.dispatch_queue_occupancy += len;
        self.max_dispatch_queue_len = self.max_dispatch_queue_len.max(len);
    }

    /// Retired instructions per cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Average number of instructions fired per cycle.
    pub fn avg_fired(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_fired as f64 / self.cycles as f64
        }
    }

    /// Average end-of-cycle dispatch queue length.
    pub fn avg_dispatch_queue_len(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.dispatch_queue_occupancy as f64 / self.cycles as f64
        }
    }

    /// Writes the statistics report.
    ///
    /// # Errors
    ///
    /// Returns the first write error from `out`.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let khz = if seconds > 0.0 {
            (self.cycles as f64 / seconds) / 1000.0
        } else {
            0.0
        };
        let fired = self.instructions_fired.max(1) as f64;

        writeln!(out, "\n==========================================================")?;
        writeln!(out, "TOMASULO CORE SIMULATION STATISTICS")?;
        writeln!(out, "==========================================================")?;
        writeln!(out, "host_seconds             {seconds:.4} s")?;
        writeln!(out, "sim_cycles               {}", self.cycles)?;
        writeln!(out, "sim_freq                 {khz:.2} kHz")?;
        writeln!(out, "sim_insts                {}", self.instructions_retired)?;
        writeln!(out, "sim_ipc                  {:.4}", self.ipc())?;
        writeln!(out, "----------------------------------------------------------")?;
        writeln!(out, "ISSUE")?;
        writeln!(out, "  fired.total            {}", self.instructions_fired)?;
        writeln!(out, "  fired.per_cycle        {:.4}", self.avg_fired())?;
        for class in UnitClass::ALL {
            let n = self.fired_per_class[class.index()];
            writeln!(
                out,
                "  fired.{class}               {n} ({:.2}%)",
                (n as f64 / fired) * 100.0
            )?;
        }
        writeln!(out, "----------------------------------------------------------")?;
        writeln!(out, "DISPATCH QUEUE")?;
        writeln!(out, "  dq.avg_len             {:.4}", self.avg_dispatch_queue_len())?;
        writeln!(out, "  dq.max_len             {}", self.max_dispatch_queue_len)?;
        writeln!(out, "  dq.stall_cycles        {}", self.dispatch_stalls)?;
        writeln!(out, "==========================================================")?;
        Ok(())
    }
}
