use crate::domain::report::StationReport;
use crate::error::Result;
use std::io::Write;

/// Writes the full report, pumps included, as pretty-printed JSON.
pub fn write_report<W: Write>(mut sink: W, report: &StationReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, report)?;
    writeln!(sink)?;
    Ok(())
}
