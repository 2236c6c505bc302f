use crate::types::{DomainMatch, GeneStructure, UndefinedRegion};

/// Everything derived from one sequence in an analysis run.
///
/// Reports come back from the analyzer in input order, one per FASTA record,
/// and carry all the material the output writers need, extracted residues
/// included, so writers never read the sequence collection.
///
/// # Examples
///
/// ```rust,no_run
/// use domarch_core::{DomarchAnalyzer, config::DomarchConfig};
///
/// let analyzer = DomarchAnalyzer::new(DomarchConfig::default());
/// let reports = analyzer.analyze_files("proteins.fa", "hits.tsv", "families.tsv")?;
///
/// for report in &reports {
///     println!("{}\t{}", report.sequence_id, report.structure.render());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceReport {
    /// Identifier of the analyzed sequence.
    pub sequence_id: String,

    /// Length of the analyzed sequence in residues.
    pub length: usize,

    /// Ordered domain architecture derived for the sequence.
    ///
    /// Empty when no residue carried an annotation; the summary line is
    /// still written with an empty rendering.
    pub structure: GeneStructure,

    /// Extraction windows for the configured domain pattern.
    ///
    /// Empty when no pattern was configured or the pattern never matched.
    pub matches: Vec<DomainMatch>,

    /// Numbered unannotated regions of the sequence.
    ///
    /// Empty unless the undefined-region scan was enabled.
    pub undefined: Vec<UndefinedRegion>,
}

impl SequenceReport {
    /// Number of segments in the derived architecture
    #[must_use]
    pub fn num_segments(&self) -> usize {
        self.structure.len()
    }
}
