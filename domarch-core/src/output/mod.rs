//! Output formatting for domain architecture reports.
//!
//! This module provides writers for converting
//! [`SequenceReport`](crate::results::SequenceReport)s into the run's output
//! artifacts.
//!
//! ## Artifacts
//!
//! - **Summary**: tab-separated architecture table, one line per sequence
//! - **Domain FASTA**: extracted pattern windows with architecture headers
//! - **Undefined FASTA**: unannotated stretches, numbered per sequence
//!
//! ## Examples
//!
//! ### Write artifacts to files
//!
//! ```rust,no_run
//! use domarch_core::{DomarchAnalyzer, config::DomarchConfig};
//! use domarch_core::output::{write_domain_matches, write_summary};
//! use std::fs::File;
//!
//! let analyzer = DomarchAnalyzer::new(DomarchConfig {
//!     domain_pattern: Some("NB-LRR".to_string()),
//!     ..Default::default()
//! });
//! let reports = analyzer.analyze_files("proteins.fa", "hits.tsv", "families.tsv")?;
//!
//! let mut summary = File::create("architecture.tsv")?;
//! write_summary(&mut summary, &reports)?;
//!
//! let mut domains = File::create("domains.fa")?;
//! write_domain_matches(&mut domains, &reports)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Write to stdout
//!
//! ```rust,no_run
//! use domarch_core::{DomarchAnalyzer, config::DomarchConfig};
//! use domarch_core::output::write_summary;
//! use std::io::stdout;
//!
//! let analyzer = DomarchAnalyzer::new(DomarchConfig::default());
//! let reports = analyzer.analyze_files("proteins.fa", "hits.tsv", "families.tsv")?;
//!
//! write_summary(&mut stdout(), &reports)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod formats {
    pub mod domains;
    pub mod summary;
    pub mod undefined;
}

pub use formats::{
    domains::write_domain_matches, summary::write_summary, undefined::write_undefined_regions,
};
