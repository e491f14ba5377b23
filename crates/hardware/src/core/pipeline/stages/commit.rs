//! Commit (CM) Stage.
//!
//! Retires completed instructions strictly in program order. Only the
//! station whose tag equals `expected_tag` may leave the commit queue, so a
//! younger instruction that finished early waits for every older one.

use tracing::trace;

use crate::core::Cpu;
use crate::timeline::Stage;

/// Executes the commit stage.
///
/// Pops the commit queue while its minimum tag is the expected one,
/// appending each tag to the retirement log (when recorded) and bumping
/// `expected_tag`.
///
/// # Panics
///
/// Panics if the commit queue holds a tag older than `expected_tag`, which
/// would mean an instruction completed after it should have retired.
pub fn commit_stage(cpu: &mut Cpu) {
    while let Some(station) = cpu.commit_queue.pop_expected(cpu.expected_tag) {
        let tag = station.tag();
        trace!("CM  {}", station.inst);

        cpu.stamp(tag, Stage::Commit);
        if let Some(retired) = cpu.retired.as_mut() {
            retired.push(tag);
        }
        cpu.stats.instructions_retired += 1;
        cpu.expected_tag = tag.next();
    }
}
