use crate::core::models::pdg::ParticleCode;
use crate::core::models::record::DecayRecordView;
use crate::engine::config::ResolverConfig;
use crate::engine::error::DecayError;
use crate::engine::self_decay;
use tracing::trace;

/// Finds the record index of the single physical particle carrying `code`.
///
/// A particle may appear several times in a record because the generator writes a
/// new copy after every radiation. Every match after the first must therefore be a
/// self-decay descendant of the first match; the index returned is the last copy of
/// that chain, which is the node whose daughters hold the genuine decay products.
///
/// # Errors
///
/// * [`DecayError::ParticleNotFound`] when no particle carries `code`. This is an
///   expected outcome for topologies without the requested particle.
/// * [`DecayError::AmbiguousParticle`] when a match lies outside the self-decay chain
///   of the first match, i.e. the event holds two distinct particles of that species.
/// * [`DecayError::SelfDecayCycleDetected`] or [`DecayError::Record`] if the chain walk
///   hits a malformed record.
pub fn locate(
    record: &DecayRecordView,
    code: ParticleCode,
    config: &ResolverConfig,
) -> Result<usize, DecayError> {
    let mut matches = record.indices_of(code);
    let first = matches.next().ok_or(DecayError::ParticleNotFound { code })?;

    let copies = self_decay::chain(record, first, config)?;
    if let Some(other) = matches.find(|index| !copies.contains(index)) {
        return Err(DecayError::AmbiguousParticle { code, first, other });
    }

    let last = copies[copies.len() - 1];
    trace!(code = code.value(), first, last, copies = copies.len(), "Located particle.");
    Ok(last)
}
