use std::io::Write;

use crate::{results::SequenceReport, types::DomarchError};

/// Write the architecture summary table: one tab-separated line per sequence
pub fn write_summary<W: Write>(
    writer: &mut W,
    reports: &[SequenceReport],
) -> Result<(), DomarchError> {
    for report in reports {
        writeln!(writer, "{}\t{}", report.sequence_id, report.structure)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::types::{DomainSegment, GeneStructure};

    use super::*;

    #[test]
    fn test_write_summary_single_sequence() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        let reports = vec![SequenceReport {
            sequence_id: "AT3G14460.1".to_string(),
            length: 1166,
            structure: GeneStructure::new(vec![
                DomainSegment::new("CC", 6, 130),
                DomainSegment::new("NB", 180, 460),
                DomainSegment::new("LRR", 520, 1100),
            ]),
            matches: vec![],
            undefined: vec![],
        }];

        write_summary(&mut cursor, &reports).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(output, "AT3G14460.1\tCC-NB-LRR\n");
    }

    #[test]
    fn test_write_summary_empty_architecture_still_writes_line() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        let reports = vec![SequenceReport {
            sequence_id: "AT5G01010.1".to_string(),
            length: 312,
            structure: GeneStructure::default(),
            matches: vec![],
            undefined: vec![],
        }];

        write_summary(&mut cursor, &reports).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(output, "AT5G01010.1\t\n");
    }

    #[test]
    fn test_write_summary_multiple_sequences_in_order() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        let reports = vec![
            SequenceReport {
                sequence_id: "AT3G14460.1".to_string(),
                length: 1166,
                structure: GeneStructure::new(vec![
                    DomainSegment::new("CC", 6, 130),
                    DomainSegment::new("NB", 180, 460),
                    DomainSegment::new("LRR", 520, 1100),
                ]),
                matches: vec![],
                undefined: vec![],
            },
            SequenceReport {
                sequence_id: "AT5G01010.1".to_string(),
                length: 312,
                structure: GeneStructure::new(vec![DomainSegment::new("PK", 40, 300)]),
                matches: vec![],
                undefined: vec![],
            },
        ];

        write_summary(&mut cursor, &reports).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(output, "AT3G14460.1\tCC-NB-LRR\nAT5G01010.1\tPK\n");
    }

    #[test]
    fn test_write_summary_no_reports() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        write_summary(&mut cursor, &[]).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(output, "");
    }
}
