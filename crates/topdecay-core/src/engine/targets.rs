use crate::core::models::assignment::{DecayRole, ResolvedDecayAssignment};
use crate::core::models::event::Event;
use crate::core::models::target::{DecayTargets, TargetVector};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("Event carries no four-momenta")]
    MissingMomenta,

    #[error("Index {index} for {role} has no four-momentum (event has {len})")]
    IndexOutOfRange {
        role: DecayRole,
        index: usize,
        len: usize,
    },
}

/// Reads the four-momenta at the six resolved indices and converts them to targets.
pub fn extract_targets(
    event: &Event,
    assignment: &ResolvedDecayAssignment,
) -> Result<DecayTargets, TargetError> {
    let momenta = event.momenta().ok_or(TargetError::MissingMomenta)?;

    let mut targets = DecayTargets::default();
    for (role, index) in assignment.entries() {
        let p4 = momenta.get(index).ok_or(TargetError::IndexOutOfRange {
            role,
            index,
            len: momenta.len(),
        })?;
        targets.set(role, TargetVector::from_momentum(p4));
    }
    Ok(targets)
}
