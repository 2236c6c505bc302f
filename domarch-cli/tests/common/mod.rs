//! Shared helpers for the domarch CLI integration tests.

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use sha2::{Digest, Sha256};

/// Path of a fixture file under `tests/data/`, relative to the crate root
/// (the working directory Cargo runs test binaries from).
pub fn fixture(name: &str) -> String {
    format!("tests/data/{name}")
}

/// Build a `domarch` invocation with the four mandatory positional
/// arguments. Callers append further positionals or options before running.
pub fn domarch_cmd(
    fasta: &str,
    hits: &str,
    families: &str,
    summary: &str,
) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("domarch")?;
    cmd.arg(fasta).arg(hits).arg(families).arg(summary);
    Ok(cmd)
}

/// Run the pipeline and assert it exits cleanly.
pub fn run_domarch(
    fasta: &str,
    hits: &str,
    families: &str,
    summary: &str,
    extra_args: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = domarch_cmd(fasta, hits, families, summary)?;
    for arg in extra_args {
        cmd.arg(arg);
    }
    cmd.assert().success();
    Ok(())
}

/// Same as [`run_domarch`] but pins the Rayon worker count for the child
/// process via `RAYON_NUM_THREADS`.
pub fn run_domarch_with_threads(
    fasta: &str,
    hits: &str,
    families: &str,
    summary: &str,
    extra_args: &[&str],
    threads: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = domarch_cmd(fasta, hits, families, summary)?;
    cmd.env("RAYON_NUM_THREADS", threads.to_string());
    for arg in extra_args {
        cmd.arg(arg);
    }
    cmd.assert().success();
    Ok(())
}

/// SHA-256 digest of a generated artifact, as lowercase hex.
pub fn sha256_file(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Line-based similarity ratio between two artifacts (1.0 = identical).
pub fn similarity(a: &str, b: &str) -> f32 {
    similar::TextDiff::from_lines(a, b).ratio() as f32
}
