use crate::core::models::record::DecayRecordView;
use crate::engine::config::ResolverConfig;
use crate::engine::error::DecayError;

/// Follows the self-decay chain that starts at `index` and returns its last node.
///
/// A self-decay is a first daughter carrying the same code as its parent: the
/// generator re-emits the same physical particle after radiation or recoil. The walk
/// stops at the first node whose first daughter is missing or of a different species.
/// A chain without self-decays (k = 0) returns `index` unchanged.
///
/// # Errors
///
/// * [`DecayError::SelfDecayCycleDetected`] if the chain is longer than the configured
///   step bound, which for the default bound can only happen on a cycle.
/// * [`DecayError::Record`] if `index` or a daughter pointer is out of range.
pub fn resolve(
    record: &DecayRecordView,
    index: usize,
    config: &ResolverConfig,
) -> Result<usize, DecayError> {
    let mut steps = 0;
    let mut current = index;
    let limit = config.step_limit(record.len());

    while let Some(next) = successor(record, current)? {
        steps += 1;
        if steps > limit {
            return Err(DecayError::SelfDecayCycleDetected {
                start: index,
                steps: limit,
            });
        }
        current = next;
    }
    Ok(current)
}

/// Collects every node of the self-decay chain starting at `index`, in chain order.
///
/// The first element is `index` itself and the last is what [`resolve`] returns.
pub fn chain(
    record: &DecayRecordView,
    index: usize,
    config: &ResolverConfig,
) -> Result<Vec<usize>, DecayError> {
    let limit = config.step_limit(record.len());
    let mut nodes = vec![index];
    let mut current = index;

    while let Some(next) = successor(record, current)? {
        if nodes.len() > limit {
            return Err(DecayError::SelfDecayCycleDetected {
                start: index,
                steps: limit,
            });
        }
        nodes.push(next);
        current = next;
    }
    Ok(nodes)
}

fn successor(record: &DecayRecordView, index: usize) -> Result<Option<usize>, DecayError> {
    let code = record.code(index)?;
    match record.daughter1(index)? {
        Some(daughter) if record.code(daughter)? == code => Ok(Some(daughter)),
        _ => Ok(None),
    }
}
