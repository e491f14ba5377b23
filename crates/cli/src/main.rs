//! Tomasulo core simulator CLI.
//!
//! This binary runs one trace through the simulated core. It performs:
//! 1. **Configuration:** built-in defaults, an optional JSON file, then flag overrides.
//! 2. **Simulation:** reads the trace from a file or stdin and runs it to completion.
//! 3. **Reporting:** processor settings, an optional per-instruction timeline, and statistics.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use procsim_core::common::SimError;
use procsim_core::config::Config;
use procsim_core::sim::Simulator;
use procsim_core::trace::{TraceReader, TraceSource};

#[derive(Parser, Debug)]
#[command(
    name = "procsim",
    author,
    version,
    about = "Tomasulo out-of-order core simulator",
    long_about = "Run an instruction trace through a dynamically scheduled core.\n\nEach trace line is `<hex address> <opcode> <dest> <src1> <src2>`; opcode 0/1/2 selects the k0/k1/k2 unit class and -1 means no register.\n\nExamples:\n  procsim -i traces/gcc.trace\n  procsim -f 8 -j 2 -k 2 -l 2 -d 2 -m 2 < traces/gcc.trace\n  procsim --config core.json --timeline -i traces/small.trace"
)]
struct Cli {
    /// Trace file to simulate (stdin when absent).
    #[arg(short = 'i', value_name = "TRACE")]
    input: Option<PathBuf>,

    /// Instructions fetched per cycle (F).
    #[arg(short = 'f', value_name = "F")]
    fetch_width: Option<usize>,

    /// Number of k0 functional units.
    #[arg(short = 'j', value_name = "K0")]
    k0_units: Option<usize>,

    /// Number of k1 functional units.
    #[arg(short = 'k', value_name = "K1")]
    k1_units: Option<usize>,

    /// Number of k2 functional units.
    #[arg(short = 'l', value_name = "K2")]
    k2_units: Option<usize>,

    /// Dispatch queue multiplier (D).
    #[arg(short = 'd', value_name = "D")]
    dispatch_multiplier: Option<usize>,

    /// Reservation stations per functional unit (M).
    #[arg(short = 'm', value_name = "M")]
    schedule_multiplier: Option<usize>,

    /// JSON configuration file; flags override its values.
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    /// Print the per-instruction stage timeline.
    #[arg(long)]
    timeline: bool,

    /// Emit statistics as JSON instead of the text report.
    #[arg(long)]
    json: bool,

    /// Log every pipeline event to stderr.
    #[arg(long)]
    trace: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Builds the configuration, runs the trace, and prints the report.
fn run(cli: &Cli) -> Result<(), SimError> {
    let config = load_config(cli)?;
    init_tracing(cli.trace || config.general.trace_instructions);

    let source: Box<dyn TraceSource> = match &cli.input {
        Some(path) => {
            debug!("reading trace from {}", path.display());
            Box::new(TraceReader::open(path)?)
        }
        None => {
            debug!("reading trace from stdin");
            Box::new(TraceReader::stdin())
        }
    };

    let mut sim = Simulator::new(&config, source)?;
    sim.run();

    let mut out = io::stdout().lock();
    write_report(cli, &config, &sim, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Writes the settings block, the optional timeline and the statistics.
///
/// Any write error (a closed pipe, a full disk) is returned as
/// [`SimError::Output`] instead of being dropped.
fn write_report<S, W: Write>(
    cli: &Cli,
    config: &Config,
    sim: &Simulator<S>,
    out: &mut W,
) -> Result<(), SimError>
where
    S: TraceSource,
{
    if cli.json {
        let timeline = sim.timeline().filter(|_| cli.timeline);
        let report = serde_json::json!({
            "stats": sim.stats(),
            "timeline": timeline,
        });
        writeln!(out, "{report:#}")?;
        return Ok(());
    }

    write_settings(config, out)?;
    if cli.timeline {
        if let Some(timeline) = sim.timeline() {
            timeline.write_table(out)?;
            writeln!(out)?;
        }
    }
    sim.stats().write_report(out)?;
    Ok(())
}

/// Defaults, then the optional JSON file, then command-line overrides.
fn load_config(cli: &Cli) -> Result<Config, SimError> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => Config::default(),
    };

    let p = &mut config.pipeline;
    let overrides = [
        (&mut p.fetch_width, cli.fetch_width),
        (&mut p.k0_units, cli.k0_units),
        (&mut p.k1_units, cli.k1_units),
        (&mut p.k2_units, cli.k2_units),
        (&mut p.dispatch_multiplier, cli.dispatch_multiplier),
        (&mut p.schedule_multiplier, cli.schedule_multiplier),
    ];
    for (field, value) in overrides {
        if let Some(v) = value {
            *field = v;
        }
    }
    config.general.record_timeline |= cli.timeline;

    config.validate()?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<Config, SimError> {
    let text = fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_json(&text)
}

/// Installs the stderr log subscriber. `RUST_LOG` wins when set.
fn init_tracing(trace_pipeline: bool) {
    let default = if trace_pipeline { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn write_settings<W: Write>(config: &Config, out: &mut W) -> io::Result<()> {
    let p = &config.pipeline;
    writeln!(out, "Processor Settings")?;
    writeln!(out, "D: {}", p.dispatch_multiplier)?;
    writeln!(out, "k0: {}", p.k0_units)?;
    writeln!(out, "k1: {}", p.k1_units)?;
    writeln!(out, "k2: {}", p.k2_units)?;
    writeln!(out, "F: {}", p.fetch_width)?;
    writeln!(out, "M: {}", p.schedule_multiplier)?;
    writeln!(out)
}
