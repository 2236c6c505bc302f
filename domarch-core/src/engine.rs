use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use crate::config::DomarchConfig;
use crate::coverage::PositionCoverage;
use crate::extract::find_domain_matches;
use crate::families::FamilyTable;
use crate::io::{read_family_table, read_hit_table, read_protein_fasta};
use crate::regions::find_undefined_regions;
use crate::results::SequenceReport;
use crate::structure::build_gene_structure;
use crate::types::{AnnotationHit, DomarchError, SequenceRecord};

/// High-level domain architecture analyzer.
///
/// This struct is the recommended entry point: it loads the three input
/// collections, validates hit/sequence consistency, and runs the derivation
/// passes over every sequence, in parallel, preserving input order.
///
/// # Pipeline
///
/// For each sequence the analyzer:
///
/// 1. Projects the sequence's hits onto a per-residue coverage map
/// 2. Collapses covered runs into an ordered [`GeneStructure`](crate::types::GeneStructure)
/// 3. Optionally extracts pattern-matching windows (when a domain pattern is
///    configured)
/// 4. Optionally collects maximal unannotated regions (when the undefined
///    scan is enabled)
///
/// # Examples
///
/// ## Analyze a file set
///
/// ```rust,no_run
/// use domarch_core::{DomarchAnalyzer, config::DomarchConfig};
///
/// let analyzer = DomarchAnalyzer::new(DomarchConfig::default());
/// let reports = analyzer.analyze_files("proteins.fa", "hits.tsv", "families.tsv")?;
///
/// for report in &reports {
///     println!("{}: {}", report.sequence_id, report.structure.render());
/// }
/// # Ok::<(), domarch_core::types::DomarchError>(())
/// ```
///
/// ## With custom configuration
///
/// ```rust,no_run
/// use domarch_core::{DomarchAnalyzer, config::{DomarchConfig, Extension}};
///
/// let config = DomarchConfig {
///     domain_pattern: Some("NB-LRR".to_string()),
///     n_extension: Extension::from_value(50.0),
///     c_extension: Extension::from_value(0.25),
///     scan_undefined: true,
///     num_threads: Some(4),
///     ..Default::default()
/// };
///
/// let analyzer = DomarchAnalyzer::new(config);
/// # Ok::<(), domarch_core::types::DomarchError>(())
/// ```
#[derive(Debug)]
pub struct DomarchAnalyzer {
    /// Configuration options for architecture derivation
    pub config: DomarchConfig,
}

impl DomarchAnalyzer {
    /// Creates a new analyzer with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration options for architecture derivation
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domarch_core::{DomarchAnalyzer, config::DomarchConfig};
    ///
    /// let analyzer = DomarchAnalyzer::new(DomarchConfig::default());
    /// ```
    pub const fn new(config: DomarchConfig) -> Self {
        Self { config }
    }

    /// Analyzes a complete input set read from disk.
    ///
    /// Loads the protein FASTA, the annotation hit table, and the family
    /// table, then derives one report per sequence.
    ///
    /// # Arguments
    ///
    /// * `sequence_path` - Path to the protein FASTA file
    /// * `hit_path` - Path to the tab-separated annotation hit table
    /// * `family_path` - Path to the two-column family table
    ///
    /// # Returns
    ///
    /// A vector of [`SequenceReport`], one per sequence, in FASTA order.
    ///
    /// # Errors
    ///
    /// Returns [`DomarchError`] if any input file cannot be read or parsed,
    /// if a hit names a sequence absent from the FASTA, or if a hit's
    /// coordinates fall outside its sequence.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use domarch_core::{DomarchAnalyzer, config::DomarchConfig};
    ///
    /// let analyzer = DomarchAnalyzer::new(DomarchConfig::default());
    /// let reports = analyzer.analyze_files("proteins.fa", "hits.tsv", "families.tsv")?;
    ///
    /// println!("Analyzed {} sequences", reports.len());
    /// # Ok::<(), domarch_core::types::DomarchError>(())
    /// ```
    pub fn analyze_files(
        &self,
        sequence_path: &str,
        hit_path: &str,
        family_path: &str,
    ) -> Result<Vec<SequenceReport>, DomarchError> {
        let sequences = read_protein_fasta(sequence_path)?;
        let hits = read_hit_table(hit_path)?;
        let table = read_family_table(family_path)?;

        self.analyze(&sequences, &hits, &table)
    }

    /// Analyzes in-memory sequence, hit, and family collections.
    ///
    /// Hits are grouped by sequence identifier up front; a hit naming a
    /// sequence that is not in `sequences` aborts the run. Sequences are then
    /// processed in parallel and reports are returned in input order.
    ///
    /// # Arguments
    ///
    /// * `sequences` - Protein sequences, in report order
    /// * `hits` - Annotation hits for any of the sequences
    /// * `table` - Family table mapping raw identifiers to abbreviations
    ///
    /// # Errors
    ///
    /// Returns [`DomarchError::UnknownSequence`] for a hit whose sequence id
    /// is absent from `sequences`, or [`DomarchError::HitOutOfBounds`] for a
    /// hit whose coordinates exceed its sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domarch_core::{DomarchAnalyzer, config::DomarchConfig};
    /// use domarch_core::families::FamilyTable;
    /// use domarch_core::types::{AnnotationHit, SequenceRecord};
    ///
    /// let table = FamilyTable::from_rows(vec![
    ///     ("PF00931".to_string(), "NB".to_string()),
    ///     ("PF08263".to_string(), "LRR".to_string()),
    /// ]);
    /// let sequences = vec![SequenceRecord::new("q1", b"MADSSSKLMNPQRSTVWXYZ".to_vec())];
    /// let hits = vec![
    ///     AnnotationHit::new("q1", "PF00931", 3, 9),
    ///     AnnotationHit::new("q1", "PF08263", 13, 18),
    /// ];
    ///
    /// let analyzer = DomarchAnalyzer::new(DomarchConfig {
    ///     quiet: true,
    ///     ..Default::default()
    /// });
    /// let reports = analyzer.analyze(&sequences, &hits, &table)?;
    /// assert_eq!(reports[0].structure.render(), "NB-LRR");
    /// # Ok::<(), domarch_core::types::DomarchError>(())
    /// ```
    pub fn analyze(
        &self,
        sequences: &[SequenceRecord],
        hits: &[AnnotationHit],
        table: &FamilyTable,
    ) -> Result<Vec<SequenceReport>, DomarchError> {
        if let Some(num_threads) = self.config.num_threads {
            // A failed build means a global pool is already installed.
            let _ = rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build_global();
        }

        let known: HashSet<&str> = sequences
            .iter()
            .map(|sequence| sequence.id.as_str())
            .collect();
        let mut grouped: HashMap<&str, Vec<&AnnotationHit>> = HashMap::new();
        for hit in hits {
            if !known.contains(hit.sequence_id.as_str()) {
                return Err(DomarchError::UnknownSequence(hit.sequence_id.clone()));
            }
            grouped
                .entry(hit.sequence_id.as_str())
                .or_default()
                .push(hit);
        }

        if !self.config.quiet {
            eprintln!(
                "Assigning {} hits across {} sequences ({} domain families)...",
                hits.len(),
                sequences.len(),
                table.len()
            );
        }

        let reports: Vec<SequenceReport> = sequences
            .par_iter()
            .map(|sequence| {
                let sequence_hits = grouped
                    .get(sequence.id.as_str())
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                self.analyze_sequence(sequence, sequence_hits.iter().copied(), table)
            })
            .collect::<Result<Vec<_>, DomarchError>>()?;

        if !self.config.quiet {
            let annotated = reports
                .iter()
                .filter(|report| !report.structure.is_empty())
                .count();
            eprintln!(
                "Derived architectures: {} of {} sequences carry at least one domain",
                annotated,
                reports.len()
            );
        }

        Ok(reports)
    }

    /// Analyzes a single sequence against its annotation hits.
    ///
    /// Hits naming a different sequence are ignored, so the full hit
    /// collection can be passed directly. Optional passes follow the
    /// configuration: pattern windows are extracted only when a non-empty
    /// domain pattern is set, undefined regions only when the scan is
    /// enabled.
    ///
    /// # Arguments
    ///
    /// * `sequence` - The protein sequence to analyze
    /// * `hits` - Annotation hits; entries for other sequences are skipped
    /// * `table` - Family table mapping raw identifiers to abbreviations
    ///
    /// # Errors
    ///
    /// Returns [`DomarchError::HitOutOfBounds`] if one of the sequence's own
    /// hits has coordinates outside the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domarch_core::{DomarchAnalyzer, config::DomarchConfig};
    /// use domarch_core::families::FamilyTable;
    /// use domarch_core::types::{AnnotationHit, SequenceRecord};
    ///
    /// let table = FamilyTable::from_rows(vec![("PF00931".to_string(), "NB".to_string())]);
    /// let sequence = SequenceRecord::new("q1", b"MADSSSKLMNPQ".to_vec());
    /// let hits = vec![AnnotationHit::new("q1", "PF00931", 3, 8)];
    ///
    /// let analyzer = DomarchAnalyzer::new(DomarchConfig::default());
    /// let report = analyzer.analyze_sequence(&sequence, &hits, &table)?;
    /// assert_eq!(report.structure.render(), "NB");
    /// # Ok::<(), domarch_core::types::DomarchError>(())
    /// ```
    pub fn analyze_sequence<'a>(
        &self,
        sequence: &SequenceRecord,
        hits: impl IntoIterator<Item = &'a AnnotationHit>,
        table: &FamilyTable,
    ) -> Result<SequenceReport, DomarchError> {
        let own_hits = hits
            .into_iter()
            .filter(|hit| hit.sequence_id == sequence.id);
        let coverage = PositionCoverage::build(sequence, own_hits, table)?;
        let structure = build_gene_structure(&coverage, table);

        let matches = match self
            .config
            .domain_pattern
            .as_deref()
            .filter(|pattern| !pattern.is_empty())
        {
            Some(pattern) => find_domain_matches(
                &structure,
                sequence,
                pattern,
                self.config.n_extension,
                self.config.c_extension,
            ),
            None => Vec::new(),
        };

        let undefined = if self.config.scan_undefined {
            find_undefined_regions(&coverage, sequence)
        } else {
            Vec::new()
        };

        Ok(SequenceReport {
            sequence_id: sequence.id.clone(),
            length: sequence.len(),
            structure,
            matches,
            undefined,
        })
    }
}
