use std::io::Write;

use crate::{results::SequenceReport, types::DomarchError};

/// Write extracted pattern windows as FASTA records
pub fn write_domain_matches<W: Write>(
    writer: &mut W,
    reports: &[SequenceReport],
) -> Result<(), DomarchError> {
    for report in reports {
        for window in &report.matches {
            writeln!(
                writer,
                ">{}_{}_{} {}",
                report.sequence_id, window.start, window.stop, report.structure
            )?;
            writeln!(writer, "{}", String::from_utf8_lossy(&window.residues))?;
        }
    }
    Ok(())
}
