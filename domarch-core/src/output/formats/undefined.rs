use std::io::Write;

use crate::{results::SequenceReport, types::DomarchError};

/// Write unannotated stretches as FASTA records
pub fn write_undefined_regions<W: Write>(
    writer: &mut W,
    reports: &[SequenceReport],
) -> Result<(), DomarchError> {
    for report in reports {
        for region in &report.undefined {
            writeln!(
                writer,
                ">{}_{}_{}_{}",
                report.sequence_id, region.index, region.start, region.stop
            )?;
            writeln!(writer, "{}", String::from_utf8_lossy(&region.residues))?;
        }
    }
    Ok(())
}
