use crate::core::models::assignment::Branch;
use crate::core::models::pdg::ParticleCode;
use crate::core::models::record::RecordError;
use std::fmt;
use thiserror::Error;

/// Every way resolving a single event can fail.
///
/// Variants fall into two tiers, see [`DecayError::severity`]: invariant violations
/// point at a bug or corrupt input, rejections are expected outcomes for events whose
/// topology the classifier does not accept.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecayError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("Self-decay chain starting at index {start} did not terminate within {steps} steps")]
    SelfDecayCycleDetected { start: usize, steps: usize },

    #[error("No particle with code {code} in the event")]
    ParticleNotFound { code: ParticleCode },

    #[error(
        "Particle {code} at index {first} recurs at index {other}, which is not a self-decay copy of it"
    )]
    AmbiguousParticle {
        code: ParticleCode,
        first: usize,
        other: usize,
    },

    #[error("Particle at index {index} is missing a daughter required to follow its decay")]
    IncompleteDecay { index: usize },

    #[error("No W boson among the decay products of the top quark at index {top}")]
    NoWBosonInDecay { top: usize },

    #[error("Both decay products of the top quark at index {top} are W bosons")]
    MultipleWBosonsInDecay { top: usize },

    #[error("W boson at index {w_boson} decays to {child1} and {child2}, which is neither hadronic nor leptonic")]
    InvalidWDecayTopology {
        w_boson: usize,
        child1: ParticleCode,
        child2: ParticleCode,
    },

    #[error("Top quarks at indices {first} and {second} both decay leptonically")]
    DuplicateLeptonicBranch { first: usize, second: usize },

    #[error("Top quarks at indices {first} and {second} both decay hadronically")]
    DuplicateHadronicBranch { first: usize, second: usize },

    #[error("Internal logic error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Corrupt record or broken invariant; fatal to the call that hit it.
    Invariant,
    /// The event's topology is not classifiable; skip it and continue.
    Rejection,
}

/// Payload-free discriminant of [`DecayError`], used as a counting key for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RejectionKind {
    IndexOutOfRange,
    MismatchedLengths,
    SelfDecayCycleDetected,
    ParticleNotFound,
    AmbiguousParticle,
    IncompleteDecay,
    NoWBosonInDecay,
    MultipleWBosonsInDecay,
    InvalidWDecayTopology,
    DuplicateLeptonicBranch,
    DuplicateHadronicBranch,
    Internal,
}

impl RejectionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            RejectionKind::IndexOutOfRange => "index-out-of-range",
            RejectionKind::MismatchedLengths => "mismatched-lengths",
            RejectionKind::SelfDecayCycleDetected => "self-decay-cycle",
            RejectionKind::ParticleNotFound => "particle-not-found",
            RejectionKind::AmbiguousParticle => "ambiguous-particle",
            RejectionKind::IncompleteDecay => "incomplete-decay",
            RejectionKind::NoWBosonInDecay => "no-w-boson",
            RejectionKind::MultipleWBosonsInDecay => "multiple-w-bosons",
            RejectionKind::InvalidWDecayTopology => "invalid-w-decay",
            RejectionKind::DuplicateLeptonicBranch => "duplicate-leptonic-branch",
            RejectionKind::DuplicateHadronicBranch => "duplicate-hadronic-branch",
            RejectionKind::Internal => "internal",
        }
    }
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DecayError {
    pub fn kind(&self) -> RejectionKind {
        match self {
            DecayError::Record(RecordError::IndexOutOfRange { .. }) => {
                RejectionKind::IndexOutOfRange
            }
            DecayError::Record(
                RecordError::MismatchedLengths { .. } | RecordError::MomentaLengthMismatch { .. },
            ) => RejectionKind::MismatchedLengths,
            DecayError::SelfDecayCycleDetected { .. } => RejectionKind::SelfDecayCycleDetected,
            DecayError::ParticleNotFound { .. } => RejectionKind::ParticleNotFound,
            DecayError::AmbiguousParticle { .. } => RejectionKind::AmbiguousParticle,
            DecayError::IncompleteDecay { .. } => RejectionKind::IncompleteDecay,
            DecayError::NoWBosonInDecay { .. } => RejectionKind::NoWBosonInDecay,
            DecayError::MultipleWBosonsInDecay { .. } => RejectionKind::MultipleWBosonsInDecay,
            DecayError::InvalidWDecayTopology { .. } => RejectionKind::InvalidWDecayTopology,
            DecayError::DuplicateLeptonicBranch { .. } => RejectionKind::DuplicateLeptonicBranch,
            DecayError::DuplicateHadronicBranch { .. } => RejectionKind::DuplicateHadronicBranch,
            DecayError::Internal(_) => RejectionKind::Internal,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            DecayError::Record(_) | DecayError::Internal(_) => Severity::Invariant,
            _ => Severity::Rejection,
        }
    }

    pub fn is_rejection(&self) -> bool {
        self.severity() == Severity::Rejection
    }

    pub(crate) fn duplicate_branch(branch: Branch, first: usize, second: usize) -> Self {
        match branch {
            Branch::Hadronic => DecayError::DuplicateHadronicBranch { first, second },
            Branch::Leptonic => DecayError::DuplicateLeptonicBranch { first, second },
        }
    }
}
