use crate::engine::error::RejectionKind;

/// Notifications emitted while a batch is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    /// An event was skipped. Sent before the matching `TaskIncrement`.
    EventRejected { kind: RejectionKind },

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional front-end callback.
///
/// Workflows call [`report`](Self::report) from worker threads, so the callback must be
/// `Send + Sync`; without one every event is dropped.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
