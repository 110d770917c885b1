use crate::core::io::traits::ResultWriter;
use crate::core::models::assignment::{DecayRole, ResolvedDecayAssignment};
use crate::core::models::event::EventId;
use crate::core::models::target::DecayTargets;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResultTableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
}

/// One row per resolved event: `event` followed by the six indices in
/// [`DecayRole::ALL`] order.
pub struct AssignmentCsv;

impl ResultWriter for AssignmentCsv {
    type Row = (EventId, ResolvedDecayAssignment);
    type Error = ResultTableError;

    fn write_to(rows: &[Self::Row], writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        let mut header = vec!["event".to_string()];
        header.extend(DecayRole::ALL.iter().map(|role| role.key().to_string()));
        csv_writer.write_record(&header)?;

        for (event_id, assignment) in rows {
            let mut record = Vec::with_capacity(header.len());
            record.push(event_id.to_string());
            record.extend(DecayRole::ALL.iter().map(|role| assignment.index(*role).to_string()));
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

/// Regression targets in GeV, headed by `eventNumber` and the
/// [`DecayTargets::column_names`] columns.
pub struct TargetCsv;

impl ResultWriter for TargetCsv {
    type Row = (EventId, DecayTargets);
    type Error = ResultTableError;

    fn write_to(rows: &[Self::Row], writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        let mut header = vec!["eventNumber".to_string()];
        header.extend(DecayTargets::column_names());
        csv_writer.write_record(&header)?;

        for (event_id, targets) in rows {
            let mut record = Vec::with_capacity(header.len());
            record.push(event_id.to_string());
            for (_, vector) in targets.iter() {
                record.extend(vector.to_array().iter().map(|value| value.to_string()));
            }
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
