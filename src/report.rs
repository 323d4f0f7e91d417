//! Benchmark output: fixed text lines or a JSON report.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::mode::Mode;

/// Tool version emitted in JSON reports.
pub(crate) const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed when the argument count is wrong.
pub(crate) const USAGE: [&str; 2] = [
    "usage: shabench <filename> <mode>",
    "  mode: 1 = SHA-256 digest of the file, anything else = read the file only",
];

/// Result of one timed pass.
#[derive(Serialize, Debug)]
pub(crate) struct Report {
    pub(crate) tool_version: &'static str,
    pub(crate) mode: Mode,
    pub(crate) path: String,
    pub(crate) bytes: u64,
    pub(crate) chunks: u64,
    pub(crate) elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sha256: Option<String>,
}

impl Report {
    /// Human-readable lines in the benchmark's fixed output format.
    pub(crate) fn text_lines(&self) -> Vec<String> {
        match &self.sha256 {
            Some(digest) => vec![
                format!("OpenSSL SHA256 = {digest}"),
                format!("OpenSSL SHA256 took {} ms", self.elapsed_ms),
            ],
            None => vec![format!("Reading file took {} ms", self.elapsed_ms)],
        }
    }

    pub(crate) fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("serialize report")
    }

    /// Print the report to stdout.
    pub(crate) fn emit(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", self.to_json()?);
        } else {
            for line in self.text_lines() {
                println!("{line}");
            }
        }
        Ok(())
    }
}

/// Diagnostic printed when the input cannot be opened.
pub(crate) fn open_failure_line(path: &Path) -> String {
    format!("Could not open input file {}", path.display())
}

pub(crate) fn print_usage() {
    for line in USAGE {
        println!("{line}");
    }
}
