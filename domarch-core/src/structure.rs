//! Domain structure inference.
//!
//! Collapses a sequence's per-residue coverage into an ordered list of
//! non-overlapping domain-family segments: maximal annotated runs, each
//! reported once per family observed inside it.

use crate::coverage::PositionCoverage;
use crate::families::FamilyTable;
use crate::types::{DomainSegment, GeneStructure};

/// Derive the domain architecture of one sequence from its coverage map.
///
/// Scans residue positions left to right, opening a run at the first
/// annotated position and accumulating every family label observed until an
/// unannotated position closes it. A closed run emits one segment per
/// accumulated family, in family-table order, all sharing the run's
/// half-open range. A run still open at the end of the sequence closes with
/// the final residue index as its stop.
///
/// # Arguments
///
/// * `coverage` - Per-residue label sets for the sequence
/// * `table` - Family table that produced the coverage labels
///
/// # Returns
///
/// The ordered segment list; empty when no residue is annotated.
#[must_use]
pub fn build_gene_structure(coverage: &PositionCoverage, table: &FamilyTable) -> GeneStructure {
    let mut segments = Vec::new();
    let mut run_start: Option<usize> = None;
    let mut accumulator = vec![false; table.len()];

    for (position, labels) in coverage.iter().enumerate() {
        if !labels.is_empty() {
            if run_start.is_none() {
                run_start = Some(position);
            }
            for &family in labels {
                accumulator[family] = true;
            }
        } else if let Some(start) = run_start.take() {
            close_run(table, &mut accumulator, start, position, &mut segments);
        }
    }

    // a run still open at the end closes at the final residue index
    if let Some(start) = run_start {
        close_run(
            table,
            &mut accumulator,
            start,
            coverage.len() - 1,
            &mut segments,
        );
    }

    GeneStructure::new(segments)
}

/// Emit one segment per accumulated family, in family-table order, and clear
/// the accumulator for the next run.
fn close_run(
    table: &FamilyTable,
    accumulator: &mut [bool],
    start: usize,
    stop: usize,
    segments: &mut Vec<DomainSegment>,
) {
    for (family, observed) in accumulator.iter_mut().enumerate() {
        if *observed {
            segments.push(DomainSegment::new(table.label(family), start, stop));
            *observed = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnnotationHit, SequenceRecord};

    fn nlr_table() -> FamilyTable {
        FamilyTable::from_rows(vec![
            ("PF00931".to_string(), "NB".to_string()),
            ("PF08263".to_string(), "LRR".to_string()),
            ("PF05659".to_string(), "CC".to_string()),
        ])
    }

    fn coverage_for(
        length: usize,
        hits: &[(&str, usize, usize)],
        table: &FamilyTable,
    ) -> PositionCoverage {
        let sequence = SequenceRecord::new("seq1", vec![b'M'; length]);
        let hits: Vec<AnnotationHit> = hits
            .iter()
            .map(|&(raw_id, start, stop)| AnnotationHit::new("seq1", raw_id, start, stop))
            .collect();
        PositionCoverage::build(&sequence, &hits, table).unwrap()
    }

    #[test]
    fn test_single_run_round_trip() {
        let table = nlr_table();
        // 1-based hit 3..=5 annotates offsets 2..5; offsets 5,6 stay empty
        let coverage = coverage_for(7, &[("PF00931", 3, 5)], &table);

        let structure = build_gene_structure(&coverage, &table);

        assert_eq!(structure.segments, vec![DomainSegment::new("NB", 2, 5)]);
        assert_eq!(structure.render(), "NB");
    }

    #[test]
    fn test_separate_runs_emit_ordered_segments() {
        let table = nlr_table();
        let coverage = coverage_for(
            40,
            &[("PF05659", 1, 8), ("PF00931", 12, 20), ("PF08263", 25, 38)],
            &table,
        );

        let structure = build_gene_structure(&coverage, &table);

        assert_eq!(structure.render(), "CC-NB-LRR");
        assert_eq!(
            structure.segments,
            vec![
                DomainSegment::new("CC", 0, 8),
                DomainSegment::new("NB", 11, 20),
                DomainSegment::new("LRR", 24, 38),
            ]
        );
    }

    #[test]
    fn test_segment_starts_increase_and_stay_in_bounds() {
        let table = nlr_table();
        let coverage = coverage_for(
            50,
            &[("PF05659", 2, 10), ("PF00931", 15, 30), ("PF08263", 33, 50)],
            &table,
        );

        let structure = build_gene_structure(&coverage, &table);

        let starts: Vec<usize> = structure.segments.iter().map(|s| s.start).collect();
        assert!(starts.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(structure.segments.iter().all(|s| s.stop <= coverage.len()));
    }

    #[test]
    fn test_overlapping_families_share_run_range() {
        let table = nlr_table();
        // NB and LRR overlap inside one contiguous run at offsets 4..12
        let coverage = coverage_for(20, &[("PF00931", 5, 10), ("PF08263", 8, 12)], &table);

        let structure = build_gene_structure(&coverage, &table);

        assert_eq!(
            structure.segments,
            vec![
                DomainSegment::new("NB", 4, 12),
                DomainSegment::new("LRR", 4, 12),
            ]
        );
        assert_eq!(structure.render(), "NB-LRR");
    }

    #[test]
    fn test_shared_run_segments_follow_table_order() {
        let table = nlr_table();
        // LRR is observed before NB inside the run, but NB precedes LRR in
        // the table, so NB is emitted first
        let coverage = coverage_for(20, &[("PF08263", 2, 6), ("PF00931", 5, 9)], &table);

        let structure = build_gene_structure(&coverage, &table);
        assert_eq!(structure.render(), "NB-LRR");
    }

    #[test]
    fn test_run_reaching_sequence_end_stops_at_final_residue() {
        let table = nlr_table();
        // run covers offsets 2..5 of a length-5 sequence; the trailing
        // closure records the final residue index, not the length
        let coverage = coverage_for(5, &[("PF00931", 3, 5)], &table);

        let structure = build_gene_structure(&coverage, &table);
        assert_eq!(structure.segments, vec![DomainSegment::new("NB", 2, 4)]);
    }

    #[test]
    fn test_fully_annotated_sequence_is_one_run() {
        let table = nlr_table();
        let coverage = coverage_for(10, &[("PF00931", 1, 10)], &table);

        let structure = build_gene_structure(&coverage, &table);
        assert_eq!(structure.segments, vec![DomainSegment::new("NB", 0, 9)]);
    }

    #[test]
    fn test_unannotated_sequence_has_empty_structure() {
        let table = nlr_table();
        let coverage = coverage_for(12, &[], &table);

        let structure = build_gene_structure(&coverage, &table);
        assert!(structure.is_empty());
        assert_eq!(structure.render(), "");
    }

    #[test]
    fn test_rebuilding_is_idempotent() {
        let table = nlr_table();
        let coverage = coverage_for(30, &[("PF05659", 1, 6), ("PF00931", 10, 25)], &table);

        let first = build_gene_structure(&coverage, &table);
        let second = build_gene_structure(&coverage, &table);

        assert_eq!(first, second);
        assert_eq!(first.render(), second.render());
    }

    #[test]
    fn test_repeated_family_appears_once_per_run() {
        let table = nlr_table();
        // two LRR hits with a gap produce two separate LRR segments
        let coverage = coverage_for(30, &[("PF08263", 1, 8), ("PF08263", 15, 22)], &table);

        let structure = build_gene_structure(&coverage, &table);
        assert_eq!(
            structure.segments,
            vec![
                DomainSegment::new("LRR", 0, 8),
                DomainSegment::new("LRR", 14, 22),
            ]
        );
        assert_eq!(structure.render(), "LRR-LRR");
    }
}
