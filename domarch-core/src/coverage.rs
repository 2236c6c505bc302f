//! Per-residue annotation coverage.
//!
//! Projects a sequence's annotation hits through the family table into one
//! label-set per residue. The map is built once per sequence and read by the
//! structure builder and the undefined-region scan.

use crate::families::FamilyTable;
use crate::types::{AnnotationHit, DomarchError, FamilyId, SequenceRecord};

/// Family labels covering each residue of one sequence.
///
/// Slot `i` holds the families whose hits cover residue offset `i`; a slot
/// never stores the same family twice. Hits whose raw identifier is not in
/// the family table contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionCoverage {
    slots: Vec<Vec<FamilyId>>,
}

impl PositionCoverage {
    /// Project hits onto a sequence.
    ///
    /// Hit coordinates are 1-based inclusive; slot indices are 0-based. A hit
    /// with start > stop covers nothing and is skipped. Labeled hits whose
    /// coordinates fall outside the sequence are fatal.
    ///
    /// # Errors
    ///
    /// Returns [`DomarchError::HitOutOfBounds`] when a labeled hit starts at
    /// residue 0 or stops beyond the sequence length.
    pub fn build<'a>(
        sequence: &SequenceRecord,
        hits: impl IntoIterator<Item = &'a AnnotationHit>,
        table: &FamilyTable,
    ) -> Result<Self, DomarchError> {
        let mut slots = vec![Vec::new(); sequence.len()];

        for hit in hits {
            // unknown annotation types are dropped before any coordinate check
            let Some(family) = table.family_of(&hit.raw_id) else {
                continue;
            };
            if hit.start > hit.stop {
                continue;
            }
            if hit.start < 1 || hit.stop > sequence.len() {
                return Err(DomarchError::HitOutOfBounds {
                    sequence_id: sequence.id.clone(),
                    raw_id: hit.raw_id.clone(),
                    start: hit.start,
                    stop: hit.stop,
                    length: sequence.len(),
                });
            }
            for slot in &mut slots[hit.start - 1..hit.stop] {
                if !slot.contains(&family) {
                    slot.push(family);
                }
            }
        }

        Ok(Self { slots })
    }

    /// Families covering the residue at `position`
    #[must_use]
    pub fn labels_at(&self, position: usize) -> &[FamilyId] {
        &self.slots[position]
    }

    /// Whether the residue at `position` carries at least one label
    #[must_use]
    pub fn is_annotated(&self, position: usize) -> bool {
        !self.slots[position].is_empty()
    }

    /// Label sets in residue order
    pub fn iter(&self) -> impl Iterator<Item = &[FamilyId]> {
        self.slots.iter().map(Vec::as_slice)
    }

    /// Number of residue slots (the sequence length)
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the map has no slots
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
