//! Undefined-region extraction.
//!
//! Scans a coverage map for maximal stretches of residues with no annotation
//! at all, independently of the derived architecture. Regions are numbered
//! per sequence starting at 1; a stretch still open when the scan reaches the
//! end of the sequence is dropped.

use crate::coverage::PositionCoverage;
use crate::types::{SequenceRecord, UndefinedRegion};

/// Collect the numbered unannotated regions of one sequence.
///
/// A region opens at the first unannotated residue after annotated ground and
/// closes at the next annotated residue; the closing residue is excluded. The
/// trailing stretch of an unannotated sequence end is never emitted, so a
/// sequence with no annotation at all yields no regions.
#[must_use]
pub fn find_undefined_regions(
    coverage: &PositionCoverage,
    sequence: &SequenceRecord,
) -> Vec<UndefinedRegion> {
    let mut regions = Vec::new();
    let mut run_start: Option<usize> = None;
    let mut counter = 1;

    for (position, labels) in coverage.iter().enumerate() {
        if labels.is_empty() {
            if run_start.is_none() {
                run_start = Some(position);
            }
        } else if let Some(start) = run_start.take() {
            regions.push(UndefinedRegion {
                index: counter,
                start,
                stop: position,
                residues: sequence.residues[start..position].to_vec(),
            });
            counter += 1;
        }
    }

    regions
}
