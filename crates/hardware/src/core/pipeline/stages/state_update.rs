//! State-Update (SU) Stage.
//!
//! Publishes the results of instructions that left their lane in the
//! previous cycle: the register file marks their tags ready, every pooled
//! station waiting on them wakes, and they move into the commit queue.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::ReservationStation;
use crate::timeline::Stage;

/// Executes the state-update stage.
///
/// Drains the completion list in ascending tag order so that broadcasts are
/// deterministic regardless of which bank finished first.
pub fn state_update_stage(cpu: &mut Cpu) {
    let mut done = std::mem::take(&mut cpu.completed);
    done.sort_unstable_by_key(ReservationStation::tag);

    for station in done.drain(..) {
        let tag = station.tag();
        cpu.regs.mark_tag_ready(tag);
        let woken: usize = cpu.pools.iter_mut().map(|pool| pool.broadcast(tag)).sum();
        trace!("SU  tag={tag} woke={woken}");

        cpu.stamp(tag, Stage::StateUpdate);
        cpu.commit_queue.push(station);
    }

    // Hand the allocation back for the next execute stage
    cpu.completed = done;
}
