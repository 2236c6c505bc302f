//! # Domarch CLI - Domain Architecture Annotation
//!
//! A command-line interface for collapsing protein annotation hit tables into
//! ordered domain architectures.
//!
//! ## Usage
//!
//! ```bash
//! # Architecture summary only
//! domarch proteins.fa hits.tsv families.tsv summary.tsv
//!
//! # Extract NB-LRR windows with a 50-residue N-terminal flank
//! domarch proteins.fa hits.tsv families.tsv summary.tsv domains.fa -d NB-LRR -n 50
//!
//! # Collect unannotated regions for a secondary scan
//! domarch proteins.fa hits.tsv families.tsv summary.tsv -u undefined.fa
//! ```
//!
//! ## Options
//!
//! - `FASTA`: Protein sequences in FASTA format
//! - `HITS`: Tab-separated annotation hit table
//! - `FAMILIES`: Two-column table mapping raw identifiers to abbreviations
//! - `SUMMARY`: Output file for the architecture summary table
//! - `[DOMAIN_FASTA]`: Output file for extracted pattern windows
//! - `-d, --domain <PATTERN>`: Dash-joined family pattern to extract
//! - `-n, --nextend <FLOAT>`: N-terminal extension (>= 1 residues, (0,1) span fraction)
//! - `-c, --cextend <FLOAT>`: C-terminal extension (same convention)
//! - `-u, --undefined <FILE>`: Write unannotated regions to FILE
//! - `-q, --quiet`: Suppress progress messages
//!
//! ## Examples
//!
//! ### Full Extraction Pipeline
//!
//! ```bash
//! domarch proteins.fa interproscan.tsv families.tsv summary.tsv nblrr.fa -d NB-LRR
//! ```
//!
//! ### Proportional Flanks
//!
//! ```bash
//! domarch proteins.fa hits.tsv families.tsv summary.tsv kinases.fa -d PK -n 0.25 -c 0.25
//! ```
//!
//! ### Undefined Region Scan
//!
//! ```bash
//! domarch proteins.fa hits.tsv families.tsv summary.tsv -u undefined.fa -q
//! ```

use clap::{Arg, ArgAction, Command};
use domarch_core::DomarchAnalyzer;
use domarch_core::config::{DomarchConfig, Extension};
use domarch_core::output::{write_domain_matches, write_summary, write_undefined_regions};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Main entry point for the domarch CLI application.
///
/// Parses command-line arguments, configures the analyzer, derives one
/// architecture report per sequence, and writes the configured artifacts.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("domarch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Collapse protein annotation hits into domain architectures")
        .arg(
            Arg::new("fasta")
                .value_name("FASTA")
                .help("Protein sequences in FASTA format")
                .required(true),
        )
        .arg(
            Arg::new("hits")
                .value_name("HITS")
                .help("Tab-separated annotation hit table")
                .required(true),
        )
        .arg(
            Arg::new("families")
                .value_name("FAMILIES")
                .help("Two-column table mapping raw identifiers to family abbreviations")
                .required(true),
        )
        .arg(
            Arg::new("summary")
                .value_name("SUMMARY")
                .help("Output file for the architecture summary table")
                .required(true),
        )
        .arg(
            Arg::new("domain-fasta")
                .value_name("DOMAIN_FASTA")
                .help("Output file for extracted pattern windows"),
        )
        .arg(
            Arg::new("domain")
                .short('d')
                .long("domain")
                .value_name("PATTERN")
                .help("Dash-joined family pattern to locate and extract"),
        )
        .arg(
            Arg::new("nextend")
                .short('n')
                .long("nextend")
                .value_name("FLOAT")
                .help("N-terminal extension: >= 1 fixed residues, (0,1) fraction of span"),
        )
        .arg(
            Arg::new("cextend")
                .short('c')
                .long("cextend")
                .value_name("FLOAT")
                .help("C-terminal extension: >= 1 fixed residues, (0,1) fraction of span"),
        )
        .arg(
            Arg::new("undefined")
                .short('u')
                .long("undefined")
                .value_name("FILE")
                .help("Write unannotated regions of every sequence to FILE"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Quiet mode")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    // Parse options
    let mut config = DomarchConfig {
        domain_pattern: matches.get_one::<String>("domain").cloned(),
        scan_undefined: matches.contains_id("undefined"),
        quiet: matches.get_flag("quiet"),
        ..Default::default()
    };

    if let Some(value) = matches.get_one::<String>("nextend") {
        let value: f64 = value
            .parse()
            .map_err(|_| "Invalid N-terminal extension value")?;
        config.n_extension = Extension::from_value(value);
    }

    if let Some(value) = matches.get_one::<String>("cextend") {
        let value: f64 = value
            .parse()
            .map_err(|_| "Invalid C-terminal extension value")?;
        config.c_extension = Extension::from_value(value);
    }

    let analyzer = DomarchAnalyzer::new(config);
    let reports = analyzer.analyze_files(
        matches.get_one::<String>("fasta").unwrap(),
        matches.get_one::<String>("hits").unwrap(),
        matches.get_one::<String>("families").unwrap(),
    )?;

    // Write output
    let summary_path = matches.get_one::<String>("summary").unwrap();
    let mut summary = BufWriter::new(File::create(summary_path)?);
    write_summary(&mut summary, &reports)?;
    summary.flush()?;

    if let Some(domain_path) = matches.get_one::<String>("domain-fasta") {
        let mut domains = BufWriter::new(File::create(domain_path)?);
        write_domain_matches(&mut domains, &reports)?;
        domains.flush()?;
    }

    if let Some(undefined_path) = matches.get_one::<String>("undefined") {
        let mut undefined = BufWriter::new(File::create(undefined_path)?);
        write_undefined_regions(&mut undefined, &reports)?;
        undefined.flush()?;
    }

    if !analyzer.config.quiet {
        eprintln!(
            "Analysis complete! {} sequences, {} domain segments, {} pattern windows, {} undefined regions.",
            reports.len(),
            reports.iter().map(|r| r.structure.len()).sum::<usize>(),
            reports.iter().map(|r| r.matches.len()).sum::<usize>(),
            reports.iter().map(|r| r.undefined.len()).sum::<usize>()
        );
    }

    Ok(())
}
