use crate::core::io::traits::EventReader;
use crate::core::models::event::{Event, EventId};
use crate::core::models::kinematics::FourMomentum;
use crate::core::models::record::{DecayRecord, RecordError};
use serde::Deserialize;
use std::collections::HashSet;
use std::io::{self, Read};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ParticleTableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Rows of event {event} are not contiguous (line {line})")]
    NonContiguousEvent { event: EventId, line: u64 },
    #[error("Line {line} has only some of the px, py, pz, e columns filled")]
    PartialMomentum { line: u64 },
    #[error("Event {event} mixes rows with and without four-momenta")]
    InconsistentMomenta { event: EventId },
    #[error("Event {event} is malformed: {source}")]
    Record {
        event: EventId,
        #[source]
        source: RecordError,
    },
}

#[derive(Debug, Deserialize)]
struct ParticleRow {
    event: u64,
    pid: i32,
    d1: i32,
    d2: i32,
    #[serde(default)]
    px: Option<f64>,
    #[serde(default)]
    py: Option<f64>,
    #[serde(default)]
    pz: Option<f64>,
    #[serde(default)]
    e: Option<f64>,
}

impl ParticleRow {
    fn momentum(&self, line: u64) -> Result<Option<FourMomentum>, ParticleTableError> {
        match (self.px, self.py, self.pz, self.e) {
            (Some(px), Some(py), Some(pz), Some(e)) => Ok(Some(FourMomentum::new(px, py, pz, e))),
            (None, None, None, None) => Ok(None),
            _ => Err(ParticleTableError::PartialMomentum { line }),
        }
    }
}

struct PendingEvent {
    id: EventId,
    record: DecayRecord,
    momenta: Vec<Option<FourMomentum>>,
}

impl PendingEvent {
    fn new(id: EventId) -> Self {
        Self {
            id,
            record: DecayRecord::default(),
            momenta: Vec::new(),
        }
    }

    fn finish(self) -> Result<Event, ParticleTableError> {
        let event = Event::new(self.id, self.record);
        if self.momenta.iter().all(Option::is_none) {
            return Ok(event);
        }
        let momenta: Option<Vec<FourMomentum>> = self.momenta.into_iter().collect();
        let momenta = momenta.ok_or(ParticleTableError::InconsistentMomenta { event: self.id })?;
        event
            .with_momenta(momenta)
            .map_err(|source| ParticleTableError::Record {
                event: self.id,
                source,
            })
    }
}

/// Flat particle table with one row per particle.
///
/// The header must name `event`, `pid`, `d1` and `d2`; the momentum columns `px`, `py`,
/// `pz` and `e` (MeV) are optional. Rows of one event must be contiguous, and the row
/// position within its event is the particle's record index, so daughter columns refer
/// to positions inside the same event.
pub struct ParticleTableCsv;

impl EventReader for ParticleTableCsv {
    type Error = ParticleTableError;

    fn read_from(reader: &mut impl Read) -> Result<Vec<Event>, Self::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut events = Vec::new();
        let mut seen = HashSet::new();
        let mut pending: Option<PendingEvent> = None;

        for (row_index, result) in csv_reader.deserialize::<ParticleRow>().enumerate() {
            let row = result?;
            let line = row_index as u64 + 2;
            let id = EventId(row.event);

            let mut current = match pending.take() {
                Some(current) if current.id == id => current,
                previous => {
                    if let Some(previous) = previous {
                        events.push(previous.finish()?);
                    }
                    if !seen.insert(id) {
                        return Err(ParticleTableError::NonContiguousEvent { event: id, line });
                    }
                    PendingEvent::new(id)
                }
            };

            current.momenta.push(row.momentum(line)?);
            current.record.push(row.pid, row.d1, row.d2);
            pending = Some(current);
        }

        if let Some(last) = pending {
            events.push(last.finish()?);
        }

        debug!("Read {} event(s) from particle table.", events.len());
        Ok(events)
    }
}
