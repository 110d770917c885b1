use crate::cli::ResolveArgs;
use crate::config::PartialConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use std::path::Path;
use topdecay::{
    core::io::{
        particles::ParticleTableCsv,
        results::{AssignmentCsv, TargetCsv},
        traits::{EventReader, ResultWriter},
    },
    engine::progress::ProgressReporter,
    workflows::resolve::{self as resolve_workflow, BatchOutcome},
};
use tracing::{info, warn};

pub async fn run(args: ResolveArgs) -> Result<()> {
    let partial_config = PartialConfig::load(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let settings = partial_config.merge_with_cli(&args)?;

    info!("Loading events from {:?}", &args.input);
    let events =
        ParticleTableCsv::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
            path: args.input.clone(),
            source: e.into(),
        })?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Resolving {} event(s)...", events.len());
    let outcome = tokio::task::block_in_place(|| {
        resolve_workflow::run(&events, &settings.batch, &reporter)
    })?;

    let rows: Vec<_> = outcome
        .resolved
        .iter()
        .map(|r| (r.event_id, r.assignment))
        .collect();
    write_table::<AssignmentCsv>(&rows, &args.output)?;
    println!(
        "✓ {} assignment(s) written to: {}",
        rows.len(),
        args.output.display()
    );

    if let Some(targets_path) = &settings.targets {
        let targets = resolve_workflow::collect_targets(&events, &outcome.resolved);
        if !targets.failures.is_empty() {
            warn!(
                "{} resolved event(s) have no usable four-momenta and were left out of the target table.",
                targets.failures.len()
            );
        }
        write_table::<TargetCsv>(&targets.targets, targets_path)?;
        println!(
            "✓ {} target row(s) written to: {}",
            targets.targets.len(),
            targets_path.display()
        );
    }

    print!("{}", summary_report(&outcome, events.len()));
    Ok(())
}

fn write_table<W>(rows: &[W::Row], path: &Path) -> Result<()>
where
    W: ResultWriter,
    W::Error: Send + Sync + 'static,
{
    info!("Writing {} row(s) to {:?}", rows.len(), path);
    W::write_to_path(rows, path).map_err(|e| CliError::FileWriting {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

/// Human-readable batch summary with one line per rejection reason.
pub fn summary_report(outcome: &BatchOutcome, total: usize) -> String {
    let mut report = format!(
        "Resolved {} of {} event(s); {} rejected.\n",
        outcome.resolved.len(),
        total,
        outcome.summary.total()
    );
    for (kind, count) in outcome.summary.iter() {
        report.push_str(&format!("  {:<28} {}\n", kind, count));
    }
    report
}
