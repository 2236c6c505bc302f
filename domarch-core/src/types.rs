use std::fmt;

use thiserror::Error;

use crate::constants::ARCHITECTURE_SEPARATOR;

/// Index of a domain family in a [`FamilyTable`](crate::families::FamilyTable).
///
/// Families are interned when the table is built; the derivation passes move
/// these indices around instead of cloning label strings.
pub type FamilyId = usize;

/// A protein sequence loaded from a FASTA file.
///
/// The identifier is the first whitespace-delimited token of the header line;
/// residues are stored as raw bytes in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Unique sequence identifier
    pub id: String,
    /// Residues, 0-indexed
    pub residues: Vec<u8>,
}

impl SequenceRecord {
    /// Create a record from an identifier and residue bytes
    #[must_use]
    pub fn new(id: impl Into<String>, residues: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            residues: residues.into(),
        }
    }

    /// Number of residues in the sequence
    #[must_use]
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Whether the sequence has no residues
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

/// One predicted domain occurrence over a residue range.
///
/// Coordinates are 1-based and inclusive on both ends, exactly as they appear
/// in the hit table; [`PositionCoverage`](crate::coverage::PositionCoverage)
/// converts them to 0-based half-open ranges when projecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationHit {
    /// Identifier of the sequence the hit belongs to
    pub sequence_id: String,
    /// Raw annotation identifier (e.g. a signature accession)
    pub raw_id: String,
    /// 1-based inclusive start residue
    pub start: usize,
    /// 1-based inclusive stop residue
    pub stop: usize,
}

impl AnnotationHit {
    /// Create a hit from its four fields
    #[must_use]
    pub fn new(
        sequence_id: impl Into<String>,
        raw_id: impl Into<String>,
        start: usize,
        stop: usize,
    ) -> Self {
        Self {
            sequence_id: sequence_id.into(),
            raw_id: raw_id.into(),
            start,
            stop,
        }
    }
}

/// One domain-family segment of a protein's architecture.
///
/// `start` is inclusive, `stop` exclusive, both 0-based. Segments from the
/// same annotated run share their range: a run observed under two families is
/// reported as two parallel segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSegment {
    /// Family abbreviation this segment is reported under
    pub label: String,
    /// First residue offset covered by the run
    pub start: usize,
    /// One past the last residue offset covered by the run
    pub stop: usize,
}

impl DomainSegment {
    /// Create a segment from a label and a half-open residue range
    #[must_use]
    pub fn new(label: impl Into<String>, start: usize, stop: usize) -> Self {
        Self {
            label: label.into(),
            start,
            stop,
        }
    }

    /// Number of residues spanned by the segment
    #[must_use]
    pub const fn len(&self) -> usize {
        self.stop.saturating_sub(self.start)
    }

    /// Whether the segment spans no residues
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.stop <= self.start
    }
}

impl fmt::Display for DomainSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}..{})", self.label, self.start, self.stop)
    }
}

/// Ordered list of [`DomainSegment`]s describing one protein's architecture.
///
/// The rendering — segment labels joined by `-` in emission order — is the
/// architecture signature used for reporting and pattern matching.
///
/// # Examples
///
/// ```rust
/// use domarch_core::types::{DomainSegment, GeneStructure};
///
/// let structure = GeneStructure::new(vec![
///     DomainSegment::new("NB", 10, 40),
///     DomainSegment::new("LRR", 55, 90),
/// ]);
/// assert_eq!(structure.render(), "NB-LRR");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneStructure {
    /// Segments in residue order
    pub segments: Vec<DomainSegment>,
}

impl GeneStructure {
    /// Create a structure from an ordered segment list
    #[must_use]
    pub fn new(segments: Vec<DomainSegment>) -> Self {
        Self { segments }
    }

    /// Number of segments in the architecture
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the architecture has no segments
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment labels in emission order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|segment| segment.label.as_str())
    }

    /// Architecture signature: labels joined by `-` (empty when no segments)
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GeneStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                write!(f, "{ARCHITECTURE_SEPARATOR}")?;
            }
            write!(f, "{}", segment.label)?;
        }
        Ok(())
    }
}

/// One extraction window produced by a pattern match.
///
/// `start`/`stop` are the extended window bounds, already clamped to the
/// sequence; `residues` is the extracted substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainMatch {
    /// Extended window start, 0-based inclusive
    pub start: usize,
    /// Extended window stop, 0-based exclusive
    pub stop: usize,
    /// Residues of `sequence[start..stop]`
    pub residues: Vec<u8>,
}

/// One maximal unannotated stretch of a protein.
///
/// Regions are numbered per sequence starting at 1, in scan order. A stretch
/// still open when the scan reaches the end of the sequence is never emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndefinedRegion {
    /// 1-based sequential index within the sequence
    pub index: usize,
    /// First unannotated residue offset
    pub start: usize,
    /// One past the last unannotated residue offset
    pub stop: usize,
    /// Residues of `sequence[start..stop]`
    pub residues: Vec<u8>,
}

/// Error types that can occur during architecture analysis
#[derive(Error, Debug)]
pub enum DomarchError {
    /// Invalid sequence file format or content
    #[error("Invalid sequence file: {0}")]
    InvalidSequenceFile(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// A hit-table record could not be parsed
    #[error("Invalid hit record at line {line}: {reason}")]
    InvalidHitRecord {
        /// 1-based line number in the hit table
        line: usize,
        /// What made the record unusable
        reason: String,
    },
    /// A hit names a sequence absent from the FASTA input
    #[error("Hit table references unknown sequence '{0}'")]
    UnknownSequence(String),
    /// A hit's coordinates fall outside its sequence
    #[error(
        "Hit '{raw_id}' covers residues {start}..={stop} but sequence '{sequence_id}' has {length} residues"
    )]
    HitOutOfBounds {
        /// Sequence the hit belongs to
        sequence_id: String,
        /// Raw annotation identifier of the hit
        raw_id: String,
        /// 1-based inclusive start from the hit table
        start: usize,
        /// 1-based inclusive stop from the hit table
        stop: usize,
        /// Length of the named sequence
        length: usize,
    },
}
