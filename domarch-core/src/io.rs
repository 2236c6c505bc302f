//! Input collaborators: FASTA sequences, annotation hit tables, and family
//! abbreviation tables.
//!
//! Hit-table records are tab-separated with at least
//! [`HIT_TABLE_MIN_FIELDS`] fields; malformed records abort the run with the
//! offending line number. Family-table rows with fewer than two columns are
//! skipped silently.

use std::fs::File;
use std::io::{BufRead, BufReader};

use bio::io::fasta;

use crate::constants::{
    FAMILY_TABLE_MIN_FIELDS, HIT_FIELD_RAW_ID, HIT_FIELD_SEQUENCE_ID, HIT_FIELD_START,
    HIT_FIELD_STOP, HIT_TABLE_MIN_FIELDS,
};
use crate::families::FamilyTable;
use crate::types::{AnnotationHit, DomarchError, SequenceRecord};

/// Read protein sequences from a FASTA file.
///
/// The record identifier is the first whitespace-delimited token of the
/// header line; residue lines are concatenated.
///
/// # Errors
///
/// Returns [`DomarchError::IoError`] if the file cannot be opened and
/// [`DomarchError::InvalidSequenceFile`] on malformed FASTA content.
pub fn read_protein_fasta(filename: &str) -> Result<Vec<SequenceRecord>, DomarchError> {
    let file = File::open(filename)?;
    let reader = fasta::Reader::new(file);
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| DomarchError::InvalidSequenceFile(e.to_string()))?;
        sequences.push(SequenceRecord::new(record.id(), record.seq().to_vec()));
    }

    Ok(sequences)
}

/// Read annotation hits from a tab-separated hit table.
///
/// Field positions follow the hit-table convention: sequence identifier in
/// field 0, raw annotation identifier in field 4, 1-based inclusive start
/// and stop in fields 6 and 7. Extra fields are ignored.
///
/// # Errors
///
/// Returns [`DomarchError::InvalidHitRecord`] for records with too few
/// fields or non-numeric coordinates; parsing stops at the first bad record.
pub fn read_hit_table(filename: &str) -> Result<Vec<AnnotationHit>, DomarchError> {
    let file = File::open(filename)?;
    let mut hits = Vec::new();

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < HIT_TABLE_MIN_FIELDS {
            return Err(DomarchError::InvalidHitRecord {
                line: line_number,
                reason: format!(
                    "expected at least {HIT_TABLE_MIN_FIELDS} fields, found {}",
                    fields.len()
                ),
            });
        }
        let start = parse_coordinate(fields[HIT_FIELD_START], "start", line_number)?;
        let stop = parse_coordinate(fields[HIT_FIELD_STOP], "stop", line_number)?;
        hits.push(AnnotationHit::new(
            fields[HIT_FIELD_SEQUENCE_ID],
            fields[HIT_FIELD_RAW_ID],
            start,
            stop,
        ));
    }

    Ok(hits)
}

/// Read a two-column (raw id, abbreviation) family table.
///
/// Rows with fewer than two tab-separated columns are skipped; extra columns
/// are ignored. Later rows for the same raw id overwrite earlier ones.
///
/// # Errors
///
/// Returns [`DomarchError::IoError`] if the file cannot be read.
pub fn read_family_table(filename: &str) -> Result<FamilyTable, DomarchError> {
    let file = File::open(filename)?;
    let mut rows = Vec::new();

    for line in BufReader::new(file).lines() {
        let line = line?;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < FAMILY_TABLE_MIN_FIELDS {
            continue;
        }
        rows.push((fields[0].to_string(), fields[1].to_string()));
    }

    Ok(FamilyTable::from_rows(rows))
}

/// Parse one 1-based coordinate field of a hit record
fn parse_coordinate(field: &str, name: &str, line: usize) -> Result<usize, DomarchError> {
    field
        .trim()
        .parse::<usize>()
        .map_err(|_| DomarchError::InvalidHitRecord {
            line,
            reason: format!("{name} coordinate '{field}' is not a valid residue number"),
        })
}
