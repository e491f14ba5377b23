//! Trace sources.
//!
//! A trace is one instruction per line:
//!
//! ```text
//! <address:hex> <opcode> <dest> <src1> <src2> [debug-marker]
//! ```
//!
//! Register fields use `-1` for "no register". Blank lines are skipped. The
//! first non-blank line that cannot be decoded ends the trace, exactly like
//! reaching end of file.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use super::inst::TraceInst;
use crate::common::{RegId, SimError, UnitClass};

/// Anything the fetch stage can pull instructions from.
pub trait TraceSource {
    /// Returns the next instruction, or `None` once the trace has ended.
    ///
    /// After the first `None` the fetch stage never calls this again.
    fn next_inst(&mut self) -> Option<TraceInst>;
}

impl<T: TraceSource + ?Sized> TraceSource for Box<T> {
    fn next_inst(&mut self) -> Option<TraceInst> {
        (**self).next_inst()
    }
}

/// Decodes one trace line.
///
/// Returns `None` when fewer than five fields parse, the opcode is not a
/// unit class, or a register number is out of range. Extra trailing fields
/// are ignored.
pub fn parse_line(line: &str) -> Option<TraceInst> {
    let mut fields = line.split_whitespace();

    let addr = fields.next()?;
    let addr = addr
        .strip_prefix("0x")
        .or_else(|| addr.strip_prefix("0X"))
        .unwrap_or(addr);
    let address = u32::from_str_radix(addr, 16).ok()?;

    let mut next_int = || fields.next()?.parse::<i32>().ok();
    let opcode = next_int()?;
    let dest = next_int()?;
    let src1 = next_int()?;
    let src2 = next_int()?;

    Some(TraceInst {
        address,
        unit: UnitClass::from_opcode(opcode)?,
        dest: RegId::from_trace(dest).ok()?,
        src: [
            RegId::from_trace(src1).ok()?,
            RegId::from_trace(src2).ok()?,
        ],
    })
}

/// Line-oriented trace reader over any buffered input.
#[derive(Debug)]
pub struct TraceReader<R> {
    input: R,
    line: String,
    line_number: u64,
    ended: bool,
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps a buffered reader.
    pub const fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
            line_number: 0,
            ended: false,
        }
    }

    /// Number of lines consumed so far.
    pub const fn lines_read(&self) -> u64 {
        self.line_number
    }
}

impl TraceReader<BufReader<File>> {
    /// Opens a trace file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::TraceOpen`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SimError::TraceOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl TraceReader<io::StdinLock<'static>> {
    /// Reads the trace from standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> TraceSource for TraceReader<R> {
    fn next_inst(&mut self) -> Option<TraceInst> {
        if self.ended {
            return None;
        }

        // Blank lines are whitespace between records, not the end of the trace
        loop {
            self.line.clear();
            match self.input.read_line(&mut self.line) {
                Ok(0) => {
                    self.ended = true;
                    return None;
                }
                Ok(_) => self.line_number += 1,
                Err(e) => {
                    warn!(line = self.line_number + 1, error = %e, "trace read failed, ending trace");
                    self.ended = true;
                    return None;
                }
            }
            if !self.line.trim().is_empty() {
                break;
            }
        }

        let inst = parse_line(&self.line);
        if inst.is_none() {
            warn!(
                line = self.line_number,
                text = self.line.trim_end(),
                "bad instruction, ending trace"
            );
            self.ended = true;
        }
        inst
    }
}

/// In-memory trace, handy for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryTrace {
    insts: Vec<TraceInst>,
    pos: usize,
}

impl MemoryTrace {
    /// Creates a trace that yields `insts` in order.
    pub const fn new(insts: Vec<TraceInst>) -> Self {
        Self { insts, pos: 0 }
    }

    /// Number of instructions not yet handed out.
    pub const fn remaining(&self) -> usize {
        self.insts.len() - self.pos
    }
}

impl TraceSource for MemoryTrace {
    fn next_inst(&mut self) -> Option<TraceInst> {
        let inst = self.insts.get(self.pos).copied()?;
        self.pos += 1;
        Some(inst)
    }
}
