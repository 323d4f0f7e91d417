//! shabench: time SHA-256 hashing of a file against a plain read of it.

mod bench;
mod digest;
mod mode;
mod reader;
mod report;
mod timing;
mod transcript;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::bench::run_pass;
use crate::mode::Mode;
use crate::report::{open_failure_line, print_usage, Report, TOOL_VERSION};
use crate::timing::truncated_ms;
use crate::transcript::Transcript;

/// Exit status for an unopenable input (`-1` as seen by the shell).
const OPEN_FAILURE_STATUS: u8 = 255;

/// Single-dash arguments handed to clap; every other single-dash argument
/// is a positional such as a `-1` mode or a `-data.bin` file name.
const SHORT_FLAGS: [&str; 2] = ["-h", "-V"];

/// CLI arguments for the benchmark.
#[derive(Parser, Debug)]
#[command(
    name = "shabench",
    version,
    about = "Time SHA-256 hashing of a file against just reading it"
)]
struct Args {
    /// Input file followed by the mode (1 = SHA-256, anything else = read only)
    #[arg(value_name = "FILENAME MODE")]
    inputs: Vec<OsString>,

    /// Print a JSON report instead of text lines
    #[arg(long)]
    json: bool,

    /// Log each step to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse_from(split_positionals(std::env::args_os())) {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                print_usage();
                return ExitCode::SUCCESS;
            }
        },
    };
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Reorder argv so that `--long` flags and `-h`/`-V` come first and every
/// other argument follows a `--` separator. Arguments after a user-supplied
/// `--` are always positional.
fn split_positionals(raw: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut raw = raw.into_iter();
    let mut argv: Vec<OsString> = raw.next().into_iter().collect();
    let mut positionals = Vec::new();
    let mut escaped = false;
    for arg in raw {
        if escaped {
            positionals.push(arg);
            continue;
        }
        if arg == "--" {
            escaped = true;
            continue;
        }
        let is_flag = arg
            .to_str()
            .is_some_and(|value| value.starts_with("--") || SHORT_FLAGS.contains(&value));
        if is_flag {
            argv.push(arg);
        } else {
            positionals.push(arg);
        }
    }
    argv.push(OsString::from("--"));
    argv.extend(positionals);
    argv
}

/// Open the input, time one pass in the selected mode, and report it.
fn run(args: Args) -> Result<ExitCode> {
    let mut transcript = Transcript::new(args.verbose);

    let [path, raw_mode] = args.inputs.as_slice() else {
        transcript.note(format!("expected 2 arguments, got {}", args.inputs.len()));
        print_usage();
        return Ok(ExitCode::SUCCESS);
    };
    let path = PathBuf::from(path);
    let raw_mode = raw_mode.to_string_lossy();
    let mode = Mode::from_arg(&raw_mode);
    transcript.note(format!("mode {mode:?} selected by argument {raw_mode:?}"));

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(err) => {
            transcript.note(format!("open failed: {err}"));
            println!("{}", open_failure_line(&path));
            return Ok(ExitCode::from(OPEN_FAILURE_STATUS));
        }
    };
    transcript.note(format!("opened {}", path.display()));

    let pass = run_pass(file, mode)
        .with_context(|| format!("read input file {}", path.display()))?;
    transcript.pass(&pass);

    let report = Report {
        tool_version: TOOL_VERSION,
        mode,
        path: path.display().to_string(),
        bytes: pass.stats.bytes,
        chunks: pass.stats.chunks,
        elapsed_ms: truncated_ms(pass.elapsed),
        sha256: pass.digest.map(|digest| digest.as_str().to_owned()),
    };
    report.emit(args.json)?;
    Ok(ExitCode::SUCCESS)
}
