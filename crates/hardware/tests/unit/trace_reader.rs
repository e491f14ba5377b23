//! # Trace Reader Tests
//!
//! Reads trace files from disk, skips blank lines and checks how malformed
//! input ends a trace.

use std::io::{Cursor, Write};

use procsim_core::common::{RegId, SimError, UnitClass};
use procsim_core::config::Config;
use procsim_core::sim::Simulator;
use procsim_core::trace::{TraceReader, TraceSource, parse_line};
use tempfile::NamedTempFile;

use crate::common::builder::instruction::{InstBuilder, trace_text};

fn drain<S: TraceSource>(source: &mut S) -> Vec<procsim_core::trace::TraceInst> {
    std::iter::from_fn(|| source.next_inst()).collect()
}

#[test]
fn test_reads_file_to_end() {
    let program = [
        InstBuilder::k0().at(0x40_0000).dest(1).src(2, 3),
        InstBuilder::k2().at(0x40_0004).dest(4).src1(1),
        InstBuilder::k1().at(0x40_0008).src(4, -1),
    ];
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(trace_text(&program).as_bytes()).unwrap();

    let mut reader = TraceReader::open(file.path()).unwrap();
    let insts = drain(&mut reader);

    let expected: Vec<_> = program.iter().map(|b| b.build()).collect();
    assert_eq!(insts, expected);
    assert_eq!(reader.lines_read(), 3);
}

#[test]
fn test_missing_file_is_trace_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.trace");
    match TraceReader::open(&path) {
        Err(SimError::TraceOpen { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected TraceOpen, got {other:?}"),
    }
}

#[test]
fn test_bad_line_ends_trace() {
    let text = "1000 0 1 2 3\n1004 7 1 2 3\n1008 0 1 2 3\n";
    let mut reader = TraceReader::new(Cursor::new(text));
    assert_eq!(drain(&mut reader).len(), 1);
    // Ended for good, even though a valid line follows
    assert!(reader.next_inst().is_none());
}

#[test]
fn test_register_out_of_range_ends_trace() {
    let text = "1000 0 1 2 3\n1004 1 128 2 3\n";
    let mut reader = TraceReader::new(Cursor::new(text));
    assert_eq!(drain(&mut reader).len(), 1);
}

#[test]
fn test_truncated_line_ends_trace() {
    let mut reader = TraceReader::new(Cursor::new("1000 0 1 2\n"));
    assert!(reader.next_inst().is_none());
}

#[test]
fn test_debug_marker_and_missing_registers() {
    let inst = parse_line("7ffe 2 -1 -1 127 !").unwrap();
    assert_eq!(inst.unit, UnitClass::K2);
    assert_eq!(inst.dest, None);
    assert_eq!(inst.src, [None, RegId::new(127)]);
}

#[test]
fn test_untyped_opcode_runs_on_k1() {
    assert_eq!(parse_line("0 -1 1 2 3").map(|i| i.unit), Some(UnitClass::K1));
    assert!(parse_line("0 -2 1 2 3").is_none());
    assert!(parse_line("0 3 1 2 3").is_none());
}

#[test]
fn test_blank_lines_between_records() {
    let text = "1000 0 1 2 3\n\n1004 0 4 5 6\n \t\n\n1008 1 7 8 9\n";
    let mut reader = TraceReader::new(Cursor::new(text));
    let insts = drain(&mut reader);
    assert_eq!(
        insts.iter().map(|i| i.address).collect::<Vec<_>>(),
        vec![0x1000, 0x1004, 0x1008]
    );
    assert_eq!(reader.lines_read(), 6);
}

#[test]
fn test_blank_line_does_not_cut_a_run_short() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"1000 0 1 2 3\n\n1004 1 4 1 1\n\n\n").unwrap();

    let reader = TraceReader::open(file.path()).unwrap();
    let mut sim = Simulator::new(&Config::default(), reader).unwrap();
    sim.run();
    assert_eq!(sim.stats().instructions_retired, 2);
}
