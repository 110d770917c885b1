//! # topdecay Core Library
//!
//! Reconstructs the hadronically- and leptonically-decaying top quarks, W bosons and
//! b quarks of a semileptonic top-pair event from its flat generator particle record.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that the graph logic stays independent
//! of how events are loaded or reported.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`DecayRecord`, `DecayRecordView`,
//!   `ResolvedDecayAssignment`, `FourMomentum`) and the CSV driver surface used by the CLI.
//!
//! - **[`engine`]: The Logic Core.** The decay-chain algorithms: self-decay resolution,
//!   unique particle location, top branch classification and the per-event orchestrator,
//!   together with the error taxonomy, configuration and target extraction.
//!
//! - **[`workflows`]: The Public API.** Batch procedures that run the engine over many
//!   independent events, accumulate rejection diagnostics and report progress.

pub mod core;
pub mod engine;
pub mod workflows;
