//! Pattern-driven window extraction.
//!
//! Slides a fixed-width window over an architecture's segment labels, and for
//! every exact match of the requested dash-joined pattern computes an
//! extraction window under the configured flanking extensions.

use crate::config::Extension;
use crate::constants::ARCHITECTURE_SEPARATOR;
use crate::types::{DomainMatch, DomainSegment, GeneStructure, SequenceRecord};

/// Locate every occurrence of a dash-joined family pattern in an architecture
/// and extract the corresponding sequence windows.
///
/// The window width is the number of labels in the pattern. Each matched
/// window spans from its first segment's start to its last segment's stop;
/// the N and C extensions then widen that range independently, clamped to
/// the sequence. Matches at consecutive indices are all kept — overlap is
/// never suppressed.
///
/// # Arguments
///
/// * `structure` - The sequence's derived architecture
/// * `sequence` - The sequence the windows are cut from
/// * `pattern` - Dash-joined family labels to match exactly
/// * `n_extension` - Policy widening the window start
/// * `c_extension` - Policy widening the window stop
///
/// # Returns
///
/// One [`DomainMatch`] per matching window, in window order.
#[must_use]
pub fn find_domain_matches(
    structure: &GeneStructure,
    sequence: &SequenceRecord,
    pattern: &str,
    n_extension: Extension,
    c_extension: Extension,
) -> Vec<DomainMatch> {
    let width = pattern_width(pattern);
    if structure.len() < width {
        return Vec::new();
    }

    let mut matches = Vec::new();
    for window in structure.segments.windows(width) {
        if !window_matches(window, pattern) {
            continue;
        }
        let first = &window[0];
        let last = &window[width - 1];
        let span = last.stop - first.start;

        let start = n_extension.extended_start(first.start, span);
        let stop = c_extension.extended_stop(last.stop, span, sequence.len());
        matches.push(DomainMatch {
            start,
            stop,
            residues: sequence.residues[start..stop].to_vec(),
        });
    }
    matches
}

/// Number of labels in a dash-joined pattern
fn pattern_width(pattern: &str) -> usize {
    pattern
        .matches(ARCHITECTURE_SEPARATOR)
        .count()
        .saturating_add(1)
}

/// Whether a segment window's joined labels equal the pattern exactly
fn window_matches(window: &[DomainSegment], pattern: &str) -> bool {
    let mut rendered = String::with_capacity(pattern.len());
    for (index, segment) in window.iter().enumerate() {
        if index > 0 {
            rendered.push(ARCHITECTURE_SEPARATOR);
        }
        rendered.push_str(&segment.label);
    }
    rendered == pattern
}
