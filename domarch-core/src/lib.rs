//! # Domarch - Protein Domain Architecture Analysis
//!
//! A library for post-processing protein domain annotation into ordered
//! domain architectures. It consumes a protein FASTA, a tab-separated
//! annotation hit table (InterProScan-style), and a family table mapping raw
//! annotation identifiers to short family abbreviations.
//!
//! ## Overview
//!
//! Per-residue annotation hits rarely describe a protein directly: they
//! overlap, repeat, and carry verbose identifiers. Domarch projects all hits
//! onto each sequence, collapses covered runs into an ordered list of family
//! segments, and renders the result as a dash-joined architecture signature
//! such as `CC-NB-LRR`. On top of that derivation it can locate dash-joined
//! family patterns and extract the matching residue windows, and collect the
//! unannotated stretches left between domains.
//!
//! ## Features
//!
//! - **Architecture Derivation**: collapse per-residue hits into ordered
//!   domain architectures
//! - **Pattern Extraction**: locate family patterns and extract their residue
//!   windows with configurable N- and C-terminal flanks
//! - **Undefined Regions**: collect maximal unannotated stretches, numbered
//!   per sequence
//! - **Parallel Processing**: multi-threaded execution using Rayon
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use domarch_core::{DomarchAnalyzer, config::DomarchConfig};
//!
//! // Create analyzer with default configuration
//! let analyzer = DomarchAnalyzer::new(DomarchConfig::default());
//!
//! // Derive one architecture report per sequence
//! let reports = analyzer.analyze_files("proteins.fa", "hits.tsv", "families.tsv")?;
//!
//! for report in &reports {
//!     println!("{}\t{}", report.sequence_id, report.structure.render());
//! }
//! # Ok::<(), domarch_core::types::DomarchError>(())
//! ```
//!
//! ## Architecture
//!
//! The derivation passes are plain functions over explicit values, so the
//! pipeline can also be driven step by step:
//!
//! ```rust
//! use domarch_core::coverage::PositionCoverage;
//! use domarch_core::families::FamilyTable;
//! use domarch_core::structure::build_gene_structure;
//! use domarch_core::types::{AnnotationHit, SequenceRecord};
//!
//! let table = FamilyTable::from_rows(vec![("PF00931".to_string(), "NB".to_string())]);
//! let sequence = SequenceRecord::new("q1", b"MADSSSKLMNPQ".to_vec());
//! let hits = vec![AnnotationHit::new("q1", "PF00931", 3, 8)];
//!
//! let coverage = PositionCoverage::build(&sequence, &hits, &table)?;
//! let structure = build_gene_structure(&coverage, &table);
//! assert_eq!(structure.render(), "NB");
//! # Ok::<(), domarch_core::types::DomarchError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Configuration options and extension policies
//! - [`engine`]: Main analysis engine
//! - [`types`]: Core data types and structures
//! - [`results`]: Per-sequence analysis reports
//! - [`families`]: Family table mapping raw identifiers to abbreviations
//! - [`coverage`]: Per-residue annotation coverage maps
//! - [`structure`]: Architecture derivation from coverage runs
//! - [`extract`]: Pattern window extraction with flanking extensions
//! - [`regions`]: Undefined (unannotated) region collection
//! - [`io`]: Input readers for the three file formats
//! - [`output`]: Output writers for the run artifacts
//!
//! ## Output Artifacts
//!
//! Writers in [`output`] produce the artifacts of a run:
//!
//! - **Summary**: tab-separated architecture table, one line per sequence
//! - **Domain FASTA**: extracted pattern windows with architecture headers
//! - **Undefined FASTA**: unannotated stretches, numbered per sequence
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, DomarchError>`](types::DomarchError),
//! providing detailed error information for:
//!
//! - Malformed hit-table records (missing fields, non-numeric coordinates)
//! - Hits naming sequences absent from the FASTA
//! - Hits whose coordinates exceed their sequence
//! - I/O errors during file operations

pub mod config;
pub mod constants;
pub mod coverage;
pub mod engine;
pub mod extract;
pub mod families;
pub mod io;
pub mod output;
pub mod regions;
pub mod results;
pub mod structure;
pub mod types;

pub use engine::DomarchAnalyzer;
