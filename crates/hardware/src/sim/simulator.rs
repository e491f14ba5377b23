//! Simulator: owns the core and its trace source side by side.
//!
//! The source is kept outside `Cpu` so the core state stays free of I/O;
//! only the fetch stage borrows it, once per cycle.

use tracing::info;

use crate::common::{SimError, Tag};
use crate::config::Config;
use crate::core::Cpu;
use crate::stats::SimStats;
use crate::timeline::Timeline;
use crate::trace::TraceSource;

/// Top-level simulator: core state plus the trace it consumes.
#[derive(Debug)]
pub struct Simulator<S> {
    /// Core state (structures, counters, stats).
    pub cpu: Cpu,
    source: S,
}

impl<S: TraceSource> Simulator<S> {
    /// Validates `config` and builds an idle core reading from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if a width, unit count or multiplier is
    /// zero. No cycle runs in that case.
    pub fn new(config: &Config, source: S) -> Result<Self, SimError> {
        config.validate()?;
        let p = &config.pipeline;
        info!(
            "simulator: F={} k0={} k1={} k2={} D={} M={} dq={}",
            p.fetch_width,
            p.k0_units,
            p.k1_units,
            p.k2_units,
            p.dispatch_multiplier,
            p.schedule_multiplier,
            p.dispatch_queue_capacity()
        );
        Ok(Self {
            cpu: Cpu::new(config),
            source,
        })
    }

    /// Advances the simulator by one clock cycle.
    pub fn tick(&mut self) {
        self.cpu.tick(&mut self.source);
    }

    /// True once the whole trace has retired.
    pub fn is_done(&self) -> bool {
        self.cpu.is_drained()
    }

    /// Runs cycles until the trace has drained.
    ///
    /// At least one cycle always runs, so an empty trace takes one cycle to
    /// discover that it is empty.
    pub fn run(&mut self) {
        loop {
            self.tick();
            if self.is_done() {
                break;
            }
        }
        info!(
            "simulator: retired {} instructions in {} cycles (ipc {:.4})",
            self.cpu.stats.instructions_retired,
            self.cpu.stats.cycles,
            self.cpu.stats.ipc()
        );
    }

    /// Performance statistics gathered so far.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Retired tags in retirement order, if recording is enabled.
    pub fn retired(&self) -> Option<&[Tag]> {
        self.cpu.retired.as_deref()
    }

    /// Per-instruction stage cycles, if recording is enabled.
    pub const fn timeline(&self) -> Option<&Timeline> {
        self.cpu.timeline.as_ref()
    }

    /// The trace source.
    pub const fn source(&self) -> &S {
        &self.source
    }
}
