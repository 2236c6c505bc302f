//! Domain family table: raw annotation identifiers grouped under family
//! abbreviations.
//!
//! The table is built once from two-column (raw id, abbreviation) rows and
//! passed read-only into the derivation passes. Later rows for the same raw
//! id overwrite earlier ones, and group membership reflects only the final
//! assignments, so a re-mapped raw id never lingers in its old family.

use std::collections::HashMap;

use crate::types::FamilyId;

/// One domain family: its abbreviation and the raw identifiers mapped to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyGroup {
    /// Family abbreviation used in architecture renderings
    pub label: String,
    /// Raw annotation identifiers carrying this abbreviation
    pub members: Vec<String>,
}

/// Immutable mapping between raw annotation identifiers and domain families.
///
/// Groups iterate in a deterministic order: the first row whose assignment
/// survived last-wins resolution fixes its family's position. Family labels
/// are interned as [`FamilyId`] indices into that order.
///
/// # Examples
///
/// ```rust
/// use domarch_core::families::FamilyTable;
///
/// let table = FamilyTable::from_rows(vec![
///     ("PF00931".to_string(), "NB".to_string()),
///     ("PF08263".to_string(), "LRR".to_string()),
///     ("PF13306".to_string(), "LRR".to_string()),
/// ]);
/// let nb = table.family_of("PF00931").unwrap();
/// assert_eq!(table.label(nb), "NB");
/// assert_eq!(table.members_of("LRR").unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FamilyTable {
    groups: Vec<FamilyGroup>,
    label_index: HashMap<String, FamilyId>,
    raw_index: HashMap<String, FamilyId>,
}

impl FamilyTable {
    /// Build a table from (raw id, abbreviation) rows.
    ///
    /// Later rows for the same raw id overwrite earlier ones; groups are
    /// ordered by the first surviving row that names their abbreviation.
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = (String, String)>) -> Self {
        let rows: Vec<(String, String)> = rows.into_iter().collect();

        let mut final_label: HashMap<&str, &str> = HashMap::new();
        for (raw_id, label) in &rows {
            final_label.insert(raw_id.as_str(), label.as_str());
        }

        let mut table = Self::default();
        for (raw_id, label) in &rows {
            if final_label.get(raw_id.as_str()).copied() != Some(label.as_str()) {
                continue;
            }
            let family = match table.label_index.get(label.as_str()) {
                Some(&family) => family,
                None => {
                    table.groups.push(FamilyGroup {
                        label: label.clone(),
                        members: Vec::new(),
                    });
                    let family = table.groups.len() - 1;
                    table.label_index.insert(label.clone(), family);
                    family
                }
            };
            let members = &mut table.groups[family].members;
            if !members.iter().any(|member| member == raw_id) {
                members.push(raw_id.clone());
            }
            table.raw_index.insert(raw_id.clone(), family);
        }
        table
    }

    /// Family of a raw annotation identifier, or `None` if the identifier is
    /// not in the table (unknown annotation types contribute no label).
    #[must_use]
    pub fn family_of(&self, raw_id: &str) -> Option<FamilyId> {
        self.raw_index.get(raw_id).copied()
    }

    /// Abbreviation of a family
    #[must_use]
    pub fn label(&self, family: FamilyId) -> &str {
        &self.groups[family].label
    }

    /// Raw identifiers grouped under an abbreviation, or `None` for an
    /// unknown abbreviation
    #[must_use]
    pub fn members_of(&self, label: &str) -> Option<&[String]> {
        self.label_index
            .get(label)
            .map(|&family| self.groups[family].members.as_slice())
    }

    /// Family abbreviations in table iteration order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.label.as_str())
    }

    /// Number of families in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the table has no families
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
