use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use topdecay::engine::progress::{Progress, ProgressCallback};
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

struct BarState {
    bar: ProgressBar,
    phase: String,
    rejected: u64,
}

/// Renders core progress events as a single stderr progress bar.
#[derive(Clone)]
pub struct CliProgressHandler {
    state: Arc<Mutex<BarState>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::new(0).with_style(Self::spinner_style());
        bar.set_draw_target(target);
        bar.finish_and_clear();

        Self {
            state: Arc::new(Mutex::new(BarState {
                bar,
                phase: String::new(),
                rejected: 0,
            })),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let state = self.state.clone();

        Box::new(move |progress: Progress| {
            let Ok(mut state) = state.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::PhaseStart { name } => {
                    state.phase = name.to_string();
                    state.rejected = 0;
                    state.bar.reset();
                    state.bar.set_length(0);
                    state.bar.set_style(Self::spinner_style());
                    state
                        .bar
                        .enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    state.bar.set_message(name.to_string());
                }
                Progress::TaskStart { total_steps } => {
                    state.bar.disable_steady_tick();
                    state.bar.reset();
                    state.bar.set_length(total_steps);
                    state.bar.set_style(Self::bar_style());
                }
                Progress::TaskIncrement => state.bar.inc(1),
                Progress::EventRejected { .. } => {
                    state.rejected += 1;
                    let message = format!("{} ({} rejected)", state.phase, state.rejected);
                    state.bar.set_message(message);
                }
                Progress::TaskFinish => {
                    let total = state.bar.length().unwrap_or(0);
                    state.bar.set_position(total);
                }
                Progress::PhaseFinish => {
                    state.bar.disable_steady_tick();
                    let message = format!("✓ {}", state.phase);
                    state.bar.finish_with_message(message);
                }
                Progress::Message(msg) => state.bar.println(format!("  {}", msg)),
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .expect("Failed to create spinner style template")
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template(
            "{msg:<24} [{bar:40.cyan/blue}] {pos}/{len} events ({per_sec}, {eta})",
        )
        .expect("Failed to create bar style template")
        .with_key(
            "eta",
            |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
            },
        )
        .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
