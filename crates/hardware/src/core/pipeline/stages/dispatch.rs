//! Dispatch (DP) Stage.
//!
//! Moves instructions from the head of the dispatch queue into their
//! class's reservation-station pool, renaming operands on the way. Dispatch
//! is strictly in order: the first instruction whose pool is full blocks
//! everything behind it.

use tracing::trace;

use crate::core::Cpu;
use crate::timeline::Stage;

/// Executes the dispatch stage.
pub fn dispatch_stage(cpu: &mut Cpu) {
    while let Some(unit) = cpu.dispatch_queue.front().map(|inst| inst.unit) {
        if !cpu.pools[unit.index()].has_free_slot() {
            cpu.stats.dispatch_stalls += 1;
            trace!("DP  stall: {unit} pool full, {} queued", cpu.dispatch_queue.len());
            break;
        }
        let Some(inst) = cpu.dispatch_queue.pop() else {
            break;
        };
        cpu.pools[unit.index()].admit(inst, &mut cpu.regs);
        cpu.stamp(inst.tag, Stage::Dispatch);
    }
}
