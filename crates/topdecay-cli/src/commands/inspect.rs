use crate::cli::InspectArgs;
use crate::config::PartialConfig;
use crate::error::{CliError, Result};
use std::fmt::Write;
use topdecay::{
    core::io::{particles::ParticleTableCsv, traits::EventReader},
    core::models::event::{Event, EventId},
    engine::resolver::DecayIndexResolver,
};
use tracing::info;

pub async fn run(args: InspectArgs) -> Result<()> {
    let resolver_config = PartialConfig::load(args.config.as_deref())?.into_resolver_config()?;

    info!("Loading events from {:?}", &args.input);
    let events =
        ParticleTableCsv::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
            path: args.input.clone(),
            source: e.into(),
        })?;

    let event_id = EventId(args.event);
    let event = events
        .iter()
        .find(|event| event.id == event_id)
        .ok_or_else(|| {
            CliError::Argument(format!(
                "Event {} not found in {}",
                event_id,
                args.input.display()
            ))
        })?;

    print!(
        "{}",
        describe_event(event, &DecayIndexResolver::new(resolver_config))
    );
    Ok(())
}

/// Tabulates the record of `event` and appends its resolution result.
pub fn describe_event(event: &Event, resolver: &DecayIndexResolver) -> String {
    let view = event.view();
    let mut out = String::new();
    let _ = writeln!(out, "Event {} ({} particles)", event.id, view.len());
    let _ = writeln!(out, "{:>5}  {:<16} {:>5} {:>5}", "index", "particle", "d1", "d2");

    for index in 0..view.len() {
        let particle = view
            .code(index)
            .map(|code| code.to_string())
            .unwrap_or_else(|_| "?".to_string());
        let (d1, d2) = match view.daughters(index) {
            Ok((d1, d2)) => (slot(d1), slot(d2)),
            Err(_) => ("!".to_string(), "!".to_string()),
        };
        let _ = writeln!(out, "{:>5}  {:<16} {:>5} {:>5}", index, particle, d1, d2);
    }

    match resolver.resolve_event(&view) {
        Ok(assignment) => {
            let _ = writeln!(out, "Resolved: {}", assignment);
        }
        Err(err) => {
            let _ = writeln!(out, "Rejected [{}]: {}", err.kind(), err);
        }
    }
    out
}

fn slot(daughter: Option<usize>) -> String {
    daughter.map_or_else(|| "-".to_string(), |index| index.to_string())
}
