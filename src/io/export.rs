//! CSV export of the loan repayment schedule.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::finance::RepaymentSchedule;

/// Column header for the schedule CSV export.
const HEADER: [&str; 3] = ["year", "payment", "cumulative"];

/// Exports a repayment schedule to a CSV file at the given path.
///
/// Writes a header row followed by one data row per loan year. Produces
/// deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(schedule: &RepaymentSchedule, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(schedule, buf)
}

/// Writes a repayment schedule as CSV to any writer.
///
/// # Arguments
///
/// * `schedule` - Schedule to export, one row per year
/// * `writer` - Destination implementing `Write`
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(schedule: &RepaymentSchedule, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER)?;

    let mut cumulative = 0.0;
    for r in schedule {
        cumulative += r.payment;
        wtr.write_record(&[
            r.year.to_string(),
            format!("{:.2}", r.payment),
            format!("{cumulative:.2}"),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
