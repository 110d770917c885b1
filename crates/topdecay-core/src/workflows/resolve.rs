use crate::core::models::assignment::ResolvedDecayAssignment;
use crate::core::models::event::{Event, EventId};
use crate::core::models::target::DecayTargets;
use crate::engine::config::BatchConfig;
use crate::engine::error::{DecayError, RejectionKind, Severity};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::resolver::DecayIndexResolver;
use crate::engine::targets::{TargetError, extract_targets};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;
use tracing::{debug, error, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEvent {
    pub event_id: EventId,
    pub assignment: ResolvedDecayAssignment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEvent {
    pub event_id: EventId,
    pub error: DecayError,
}

/// Per-reason counts of skipped events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectionSummary {
    counts: BTreeMap<RejectionKind, usize>,
}

impl RejectionSummary {
    pub fn record(&mut self, kind: RejectionKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    pub fn count(&self, kind: RejectionKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RejectionKind, usize)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Successfully classified events, sorted by event id.
    pub resolved: Vec<ResolvedEvent>,
    /// Skipped events with their reason, sorted by event id.
    pub rejected: Vec<RejectedEvent>,
    pub summary: RejectionSummary,
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Event {event_id} violates a record invariant: {source}")]
    InvariantViolation {
        event_id: EventId,
        #[source]
        source: DecayError,
    },
}

/// Resolves every event of a batch.
///
/// Events are independent, so with the `parallel` feature they are classified on the
/// rayon pool and re-associated by id afterwards. Rejections never stop the batch; an
/// invariant violation stops it only when
/// [`BatchConfig::abort_on_invariant_violation`] is set.
#[instrument(skip_all, name = "resolve_workflow", fields(events = events.len()))]
pub fn run(
    events: &[Event],
    config: &BatchConfig,
    reporter: &ProgressReporter,
) -> Result<BatchOutcome, BatchError> {
    reporter.report(Progress::PhaseStart {
        name: "Resolving decay chains",
    });
    info!("Resolving decay chains for {} event(s).", events.len());

    let resolver = DecayIndexResolver::new(config.resolver.clone());
    reporter.report(Progress::TaskStart {
        total_steps: events.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = events.iter();

    #[cfg(feature = "parallel")]
    let iterator = events.par_iter();

    let results: Vec<(EventId, Result<ResolvedDecayAssignment, DecayError>)> = iterator
        .map(|event| {
            let result = resolver.resolve_event(&event.view());
            if let Err(err) = &result {
                reporter.report(Progress::EventRejected { kind: err.kind() });
            }
            reporter.report(Progress::TaskIncrement);
            (event.id, result)
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    let mut outcome = BatchOutcome::default();
    let mut invariant_violations = 0usize;
    for (event_id, result) in results {
        match result {
            Ok(assignment) => outcome.resolved.push(ResolvedEvent {
                event_id,
                assignment,
            }),
            Err(err) => {
                match err.severity() {
                    Severity::Invariant => {
                        error!(event = %event_id, "Record invariant violated: {}", err);
                        invariant_violations += 1;
                        if config.abort_on_invariant_violation {
                            reporter.report(Progress::PhaseFinish);
                            return Err(BatchError::InvariantViolation {
                                event_id,
                                source: err,
                            });
                        }
                    }
                    Severity::Rejection => {
                        debug!(event = %event_id, reason = %err.kind(), "Skipping event: {}", err);
                    }
                }
                outcome.summary.record(err.kind());
                outcome.rejected.push(RejectedEvent {
                    event_id,
                    error: err,
                });
            }
        }
    }

    if invariant_violations > 0 {
        reporter.report(Progress::Message(format!(
            "{} event(s) with corrupt records were skipped",
            invariant_violations
        )));
    }

    outcome.resolved.sort_by_key(|r| r.event_id);
    outcome.rejected.sort_by_key(|r| r.event_id);

    info!(
        resolved = outcome.resolved.len(),
        rejected = outcome.rejected.len(),
        "Decay-chain resolution finished."
    );
    reporter.report(Progress::PhaseFinish);
    Ok(outcome)
}

#[derive(Debug, Clone, Default)]
pub struct TargetOutcome {
    pub targets: Vec<(EventId, DecayTargets)>,
    pub failures: Vec<(EventId, TargetError)>,
}

/// Extracts regression targets for every resolved event of a batch.
///
/// Events that lack momenta are listed in [`TargetOutcome::failures`] and skipped.
#[instrument(skip_all, name = "target_extraction")]
pub fn collect_targets(events: &[Event], resolved: &[ResolvedEvent]) -> TargetOutcome {
    let by_id: HashMap<EventId, &Event> = events.iter().map(|e| (e.id, e)).collect();
    let mut outcome = TargetOutcome::default();

    for entry in resolved {
        let Some(event) = by_id.get(&entry.event_id) else {
            debug!(event = %entry.event_id, "Resolved event is not part of this batch.");
            continue;
        };
        match extract_targets(event, &entry.assignment) {
            Ok(targets) => outcome.targets.push((entry.event_id, targets)),
            Err(err) => {
                debug!(event = %entry.event_id, "Skipping targets: {}", err);
                outcome.failures.push((entry.event_id, err));
            }
        }
    }

    info!(
        extracted = outcome.targets.len(),
        failed = outcome.failures.len(),
        "Target extraction finished."
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::kinematics::FourMomentum;
    use crate::core::models::record::DecayRecord;
    use crate::engine::fixtures;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn batch() -> Vec<Event> {
        let (good, _) = fixtures::semileptonic();
        let (radiating, _) = fixtures::semileptonic_with_radiation();
        let (mixed, _) = fixtures::semileptonic_with(6, -6, [2, 11], [11, -12]);
        let no_tops = DecayRecord::new(vec![21, 21], vec![-1, -1], vec![-1, -1]).unwrap();
        let dangling = DecayRecord::new(vec![6, -6], vec![5, -1], vec![-1, -1]).unwrap();

        vec![
            Event::new(EventId(40), radiating),
            Event::new(EventId(10), good),
            Event::new(EventId(30), mixed),
            Event::new(EventId(20), no_tops),
            Event::new(EventId(50), dangling),
        ]
    }

    #[test]
    fn batch_separates_resolved_and_rejected_events() {
        let events = batch();
        let outcome = run(&events, &BatchConfig::default(), &ProgressReporter::new()).unwrap();

        let resolved: Vec<_> = outcome.resolved.iter().map(|r| r.event_id).collect();
        assert_eq!(resolved, vec![EventId(10), EventId(40)]);

        let rejected: Vec<_> = outcome
            .rejected
            .iter()
            .map(|r| (r.event_id, r.error.kind()))
            .collect();
        assert_eq!(
            rejected,
            vec![
                (EventId(20), RejectionKind::ParticleNotFound),
                (EventId(30), RejectionKind::InvalidWDecayTopology),
                (EventId(50), RejectionKind::IndexOutOfRange),
            ]
        );
    }

    #[test]
    fn summary_counts_every_rejection_once() {
        let events = batch();
        let outcome = run(&events, &BatchConfig::default(), &ProgressReporter::new()).unwrap();
        assert_eq!(outcome.summary.total(), 3);
        assert_eq!(outcome.summary.count(RejectionKind::ParticleNotFound), 1);
        assert_eq!(outcome.summary.count(RejectionKind::AmbiguousParticle), 0);
    }

    #[test]
    fn strict_batch_aborts_on_invariant_violation() {
        let events = batch();
        let config = BatchConfig {
            abort_on_invariant_violation: true,
            ..BatchConfig::default()
        };
        let result = run(&events, &config, &ProgressReporter::new());
        assert!(matches!(
            result,
            Err(BatchError::InvariantViolation {
                event_id: EventId(50),
                ..
            })
        ));
    }

    #[test]
    fn progress_is_reported_once_per_event() {
        let events = batch();
        let increments = AtomicU64::new(0);
        let rejections = AtomicU64::new(0);
        let total = AtomicU64::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event| match event {
            Progress::TaskIncrement => {
                increments.fetch_add(1, Ordering::SeqCst);
            }
            Progress::EventRejected { .. } => {
                rejections.fetch_add(1, Ordering::SeqCst);
            }
            Progress::TaskStart { total_steps } => total.store(total_steps, Ordering::SeqCst),
            _ => {}
        }));

        run(&events, &BatchConfig::default(), &reporter).unwrap();
        drop(reporter);
        assert_eq!(total.load(Ordering::SeqCst), 5);
        assert_eq!(increments.load(Ordering::SeqCst), 5);
        assert_eq!(rejections.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn skipped_corrupt_records_are_announced() {
        let events = batch();
        let messages = std::sync::Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::Message(msg) = event {
                messages.lock().unwrap().push(msg);
            }
        }));

        run(&events, &BatchConfig::default(), &reporter).unwrap();
        drop(reporter);
        assert_eq!(
            messages.into_inner().unwrap(),
            vec!["1 event(s) with corrupt records were skipped".to_string()]
        );
    }

    #[test]
    fn clean_batch_sends_no_messages() {
        let events: Vec<_> = batch()
            .into_iter()
            .filter(|e| e.id == EventId(10))
            .collect();
        let messages = AtomicU64::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if matches!(event, Progress::Message(_)) {
                messages.fetch_add(1, Ordering::SeqCst);
            }
        }));

        run(&events, &BatchConfig::default(), &reporter).unwrap();
        drop(reporter);
        assert_eq!(messages.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn empty_batch_yields_empty_outcome() {
        let outcome = run(&[], &BatchConfig::default(), &ProgressReporter::new()).unwrap();
        assert!(outcome.resolved.is_empty());
        assert!(outcome.summary.is_empty());
    }

    #[test]
    fn targets_are_collected_only_for_events_with_momenta() {
        let (record, _) = fixtures::semileptonic();
        let momenta = vec![FourMomentum::new(0.0, 0.0, 0.0, 1000.0); record.len()];
        let with_momenta = Event::new(EventId(1), record.clone())
            .with_momenta(momenta)
            .unwrap();
        let without_momenta = Event::new(EventId(2), record);
        let events = vec![with_momenta, without_momenta];

        let outcome = run(&events, &BatchConfig::default(), &ProgressReporter::new()).unwrap();
        let targets = collect_targets(&events, &outcome.resolved);

        assert_eq!(targets.targets.len(), 1);
        assert_eq!(targets.targets[0].0, EventId(1));
        assert_eq!(
            targets.failures,
            vec![(EventId(2), TargetError::MissingMomenta)]
        );
    }
}
