use crate::core::models::assignment::{Branch, BranchIndices, ResolvedDecayAssignment};
use crate::core::models::record::DecayRecordView;
use crate::engine::config::ResolverConfig;
use crate::engine::error::DecayError;
use crate::engine::self_decay;
use tracing::trace;

/// Classifies the two top-quark branches of a semileptonic event.
///
/// For each top, the direct daughters are followed through their self-decay chains to
/// find the W boson and the b quark, and the W's own final daughters decide the branch:
/// two lepton-like codes make it leptonic, two quark-like codes hadronic. The order of
/// `tops` does not affect the result.
///
/// # Errors
///
/// Returns the first topology violation encountered, in the order the tops are given:
/// [`DecayError::IncompleteDecay`], [`DecayError::NoWBosonInDecay`],
/// [`DecayError::MultipleWBosonsInDecay`], [`DecayError::InvalidWDecayTopology`],
/// [`DecayError::DuplicateLeptonicBranch`] or [`DecayError::DuplicateHadronicBranch`].
pub fn classify(
    record: &DecayRecordView,
    tops: (usize, usize),
    config: &ResolverConfig,
) -> Result<ResolvedDecayAssignment, DecayError> {
    let mut hadronic: Option<BranchIndices> = None;
    let mut leptonic: Option<BranchIndices> = None;

    for top in [tops.0, tops.1] {
        let (branch, indices) = classify_branch(record, top, config)?;
        let slot = match branch {
            Branch::Hadronic => &mut hadronic,
            Branch::Leptonic => &mut leptonic,
        };
        if let Some(existing) = slot.as_ref() {
            return Err(DecayError::duplicate_branch(branch, existing.top, top));
        }
        *slot = Some(indices);
    }

    match (hadronic, leptonic) {
        (Some(hadronic), Some(leptonic)) => Ok(ResolvedDecayAssignment::new(hadronic, leptonic)),
        _ => Err(DecayError::Internal(
            "two classified tops did not fill both branches".to_string(),
        )),
    }
}

/// Resolves one top into its branch and the indices of its W boson and b quark.
pub fn classify_branch(
    record: &DecayRecordView,
    top: usize,
    config: &ResolverConfig,
) -> Result<(Branch, BranchIndices), DecayError> {
    let (first, second) = final_daughters(record, top, config)?;

    let is_w = |index: usize| -> Result<bool, DecayError> {
        Ok(record.code(index)?.magnitude() == config.w_boson_code.magnitude())
    };
    let (w_boson, b_quark) = match (is_w(first)?, is_w(second)?) {
        (true, false) => (first, second),
        (false, true) => (second, first),
        (false, false) => return Err(DecayError::NoWBosonInDecay { top }),
        (true, true) => return Err(DecayError::MultipleWBosonsInDecay { top }),
    };

    let (child1, child2) = final_daughters(record, w_boson, config)?;
    let child1 = record.code(child1)?;
    let child2 = record.code(child2)?;
    let threshold = config.lepton_threshold;

    let branch = if child1.is_lepton_like(threshold) && child2.is_lepton_like(threshold) {
        Branch::Leptonic
    } else if child1.is_quark_like(threshold) && child2.is_quark_like(threshold) {
        Branch::Hadronic
    } else {
        return Err(DecayError::InvalidWDecayTopology {
            w_boson,
            child1,
            child2,
        });
    };

    trace!(top, w_boson, b_quark, %branch, "Classified top branch.");
    Ok((
        branch,
        BranchIndices {
            top,
            w_boson,
            b_quark,
        },
    ))
}

// Both daughters of `parent`, each followed to the end of its self-decay chain.
fn final_daughters(
    record: &DecayRecordView,
    parent: usize,
    config: &ResolverConfig,
) -> Result<(usize, usize), DecayError> {
    match record.daughters(parent)? {
        (Some(first), Some(second)) => Ok((
            self_decay::resolve(record, first, config)?,
            self_decay::resolve(record, second, config)?,
        )),
        _ => Err(DecayError::IncompleteDecay { index: parent }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::pdg::ParticleCode;
    use crate::core::models::record::RecordError;
    use crate::engine::fixtures::{self, RecordBuilder};

    fn assert_matches_expected(
        assignment: &ResolvedDecayAssignment,
        expected: &fixtures::Expected,
    ) {
        assert_eq!(assignment.hadronic(), &expected.hadronic);
        assert_eq!(assignment.leptonic(), &expected.leptonic);
    }

    #[test]
    fn minimal_semileptonic_record_is_classified() {
        let (record, expected) = fixtures::semileptonic();
        let tops = (expected.hadronic.top, expected.leptonic.top);
        let assignment = classify(&record.view(), tops, &ResolverConfig::default()).unwrap();
        assert_matches_expected(&assignment, &expected);
    }

    #[test]
    fn classification_does_not_depend_on_top_order() {
        let (record, expected) = fixtures::semileptonic();
        let config = ResolverConfig::default();
        let forward = classify(
            &record.view(),
            (expected.hadronic.top, expected.leptonic.top),
            &config,
        )
        .unwrap();
        let reversed = classify(
            &record.view(),
            (expected.leptonic.top, expected.hadronic.top),
            &config,
        )
        .unwrap();
        assert_eq!(forward, reversed);
        assert_matches_expected(&reversed, &expected);
    }

    #[test]
    fn w_listed_as_second_daughter_is_found() {
        let (record, expected) = fixtures::semileptonic_with_radiation();
        let tops = (expected.hadronic.top, expected.leptonic.top);
        let assignment = classify(&record.view(), tops, &ResolverConfig::default()).unwrap();
        assert_matches_expected(&assignment, &expected);
    }

    #[test]
    fn mixed_w_decay_is_an_invalid_topology() {
        let (record, expected) = fixtures::semileptonic_with(6, -6, [2, -11], [11, -12]);
        let result = classify(
            &record.view(),
            (expected.hadronic.top, expected.leptonic.top),
            &ResolverConfig::default(),
        );
        assert_eq!(
            result,
            Err(DecayError::InvalidWDecayTopology {
                w_boson: expected.hadronic.w_boson,
                child1: ParticleCode(2),
                child2: ParticleCode(-11),
            })
        );
    }

    #[test]
    fn two_leptonic_tops_are_rejected() {
        let (record, expected) = fixtures::semileptonic_with(6, -6, [13, -14], [11, -12]);
        let result = classify(
            &record.view(),
            (expected.hadronic.top, expected.leptonic.top),
            &ResolverConfig::default(),
        );
        assert_eq!(
            result,
            Err(DecayError::DuplicateLeptonicBranch {
                first: expected.hadronic.top,
                second: expected.leptonic.top,
            })
        );
    }

    #[test]
    fn two_hadronic_tops_are_rejected() {
        let (record, expected) = fixtures::semileptonic_with(6, -6, [2, -1], [-4, 3]);
        let result = classify(
            &record.view(),
            (expected.hadronic.top, expected.leptonic.top),
            &ResolverConfig::default(),
        );
        assert!(matches!(
            result,
            Err(DecayError::DuplicateHadronicBranch { .. })
        ));
    }

    #[test]
    fn top_without_w_daughter_is_rejected() {
        let mut b = RecordBuilder::new();
        let top = b.add(6);
        let gluon = b.add(21);
        let quark = b.add(5);
        b.decays(top, gluon, Some(quark));
        let record = b.build();

        let result = classify_branch(&record.view(), top, &ResolverConfig::default());
        assert_eq!(result, Err(DecayError::NoWBosonInDecay { top }));
    }

    #[test]
    fn top_with_two_w_daughters_is_rejected() {
        let mut b = RecordBuilder::new();
        let top = b.add(6);
        let w1 = b.add(24);
        let w2 = b.add(-24);
        b.decays(top, w1, Some(w2));
        let record = b.build();

        let result = classify_branch(&record.view(), top, &ResolverConfig::default());
        assert_eq!(result, Err(DecayError::MultipleWBosonsInDecay { top }));
    }

    #[test]
    fn stable_top_is_an_incomplete_decay() {
        let mut b = RecordBuilder::new();
        let top = b.add(6);
        let record = b.build();

        let result = classify_branch(&record.view(), top, &ResolverConfig::default());
        assert_eq!(result, Err(DecayError::IncompleteDecay { index: top }));
    }

    #[test]
    fn w_with_single_daughter_is_an_incomplete_decay() {
        let mut b = RecordBuilder::new();
        let top = b.add(6);
        let w = b.add(24);
        let quark = b.add(5);
        let lepton = b.add(11);
        b.decays(top, w, Some(quark)).decays(w, lepton, None);
        let record = b.build();

        let result = classify_branch(&record.view(), top, &ResolverConfig::default());
        assert_eq!(result, Err(DecayError::IncompleteDecay { index: w }));
    }

    #[test]
    fn w_children_are_followed_through_self_decays() {
        let mut b = RecordBuilder::new();
        let top = b.add(6);
        let w = b.add(24);
        let quark = b.add(5);
        let lepton = b.add(-11);
        let neutrino = b.add(12);
        let lepton_copy = b.add(-11);
        let photon = b.add(22);
        b.decays(top, w, Some(quark))
            .decays(w, lepton, Some(neutrino))
            .decays(lepton, lepton_copy, Some(photon));
        let record = b.build();

        let (branch, indices) =
            classify_branch(&record.view(), top, &ResolverConfig::default()).unwrap();
        assert_eq!(branch, Branch::Leptonic);
        assert_eq!(indices.w_boson, w);
        assert_eq!(indices.b_quark, quark);
    }

    #[test]
    fn dangling_daughter_pointer_is_an_invariant_error() {
        let mut b = RecordBuilder::new();
        let top = b.add(6);
        b.raw_daughters(top, 1, 40);
        b.add(24);
        let record = b.build();

        let result = classify_branch(&record.view(), top, &ResolverConfig::default());
        assert_eq!(
            result,
            Err(DecayError::Record(RecordError::IndexOutOfRange {
                index: 40,
                len: 2
            }))
        );
    }

    #[test]
    fn custom_lepton_threshold_changes_the_classification() {
        let (record, expected) = fixtures::semileptonic();
        let config = ResolverConfig {
            lepton_threshold: 11,
            ..ResolverConfig::default()
        };
        let result = classify(
            &record.view(),
            (expected.hadronic.top, expected.leptonic.top),
            &config,
        );
        assert!(matches!(
            result,
            Err(DecayError::InvalidWDecayTopology { .. })
        ));
    }
}
