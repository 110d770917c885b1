use super::kinematics::FourMomentum;
use super::record::{DecayRecord, DecayRecordView, RecordError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an event across asynchronous processing, so results emitted in
/// completion order can be matched back to their source.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub record: DecayRecord,
    momenta: Option<Vec<FourMomentum>>,
}

impl Event {
    pub fn new(id: EventId, record: DecayRecord) -> Self {
        Self {
            id,
            record,
            momenta: None,
        }
    }

    /// Attaches one four-momentum per particle.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MomentaLengthMismatch`] if the number of momenta differs
    /// from the number of particles in the record.
    pub fn with_momenta(mut self, momenta: Vec<FourMomentum>) -> Result<Self, RecordError> {
        if momenta.len() != self.record.len() {
            return Err(RecordError::MomentaLengthMismatch {
                particles: self.record.len(),
                momenta: momenta.len(),
            });
        }
        self.momenta = Some(momenta);
        Ok(self)
    }

    pub fn view(&self) -> DecayRecordView<'_> {
        self.record.view()
    }

    pub fn momenta(&self) -> Option<&[FourMomentum]> {
        self.momenta.as_deref()
    }
}
