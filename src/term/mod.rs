extern crate ansi_term;
extern crate ctrlc;
use crate::lang;
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use clap::Parser;
use std::convert::TryFrom;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command line of the `basic` executable.
#[derive(Parser, Debug)]
#[command(name = "basic", version, about = "Run a line-numbered BASIC program")]
pub struct Args {
    /// Program file, one numbered statement per line
    pub file: PathBuf,

    /// Don't print the memory dump before running
    #[arg(long)]
    pub no_dump: bool,

    /// Instructions executed between checks for CTRL-C
    #[arg(long, default_value_t = 5000)]
    pub cycles: usize,

    /// Stop with an error once this many instructions have run
    #[arg(long)]
    pub max_steps: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("{0}")]
    Basic(#[from] lang::Error),
    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("STEP LIMIT OF {0} EXCEEDED")]
    StepLimit(u64),
}

pub fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "CTRL-C will not interrupt the program");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match main_loop(&args, &mut out, interrupted) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            ExitCode::FAILURE
        }
    }
}

/// Loads the program, dumps memory, then runs in slices so CTRL-C
/// and the step limit are checked between them.
pub fn main_loop<W: Write>(
    args: &Args,
    out: &mut W,
    interrupted: Arc<AtomicBool>,
) -> Result<(), Error> {
    let mut runtime = load(&args.file)?;
    if !args.no_dump {
        write!(out, "{}", runtime.listing())?;
    }
    runtime.start()?;
    let cycles = args.cycles.max(1);
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        let mut slice = cycles;
        if let Some(max_steps) = args.max_steps {
            let left = max_steps.saturating_sub(runtime.steps());
            if left == 0 && runtime.is_running() && !runtime.at_end() {
                out.flush()?;
                return Err(Error::StepLimit(max_steps));
            }
            // At least one, so a program that fits exactly still reaches Stopped.
            slice = slice.min(usize::try_from(left).unwrap_or(usize::MAX)).max(1);
        }
        match runtime.execute(slice) {
            Event::Print(s) => out.write_all(s.as_bytes())?,
            Event::Running => {}
            Event::Stopped => {
                info!(steps = runtime.steps(), "program finished");
                out.flush()?;
                return Ok(());
            }
            Event::Error(error) => {
                out.flush()?;
                return Err(error.into());
            }
        }
    }
}

fn load(path: &Path) -> Result<Runtime, Error> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(source) => {
            return Err(Error::Open {
                path: path.display().to_string(),
                source,
            })
        }
    };
    let mut runtime = Runtime::new();
    let lines = runtime.load(BufReader::new(file))?;
    info!(path = %path.display(), lines, "program loaded");
    Ok(runtime)
}
