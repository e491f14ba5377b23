//! Execute (EX) Stage.
//!
//! Advances every functional-unit lane by one slot. A tag leaving the last
//! slot has finished executing: its station leaves the reservation pool and
//! joins the completion list, which the next cycle's state-update stage
//! publishes.

use tracing::trace;

use crate::common::UnitClass;
use crate::core::Cpu;
use crate::timeline::Stage;

/// Executes the execute stage.
///
/// # Panics
///
/// Panics if a finished tag has no station in its class's pool.
pub fn execute_stage(cpu: &mut Cpu) {
    for class in UnitClass::ALL {
        let idx = class.index();
        for tag in cpu.banks[idx].advance() {
            let Some(station) = cpu.pools[idx].take(tag) else {
                panic!("{class} bank finished tag {tag} with no pooled station");
            };
            trace!("EX  tag={tag} class={class}");

            cpu.stamp(tag, Stage::Execute);
            cpu.completed.push(station);
        }
    }
}
