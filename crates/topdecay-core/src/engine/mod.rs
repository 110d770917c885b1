//! # Engine Module
//!
//! The decay-chain algorithms that turn a flat particle record into a resolved
//! six-index assignment.
//!
//! ## Overview
//!
//! Data flows strictly downward through four components, each a pure function of an
//! immutable [`DecayRecordView`](crate::core::models::record::DecayRecordView):
//!
//! - [`self_decay`] - collapses chains of self-identical copies to their last node,
//!   with an explicit step bound so malformed cycles fail instead of hanging
//! - [`locator`] - finds the unique particle of a given code, tolerating copies that
//!   belong to the same self-decay chain
//! - [`classifier`] - splits the two top branches into hadronic and leptonic and picks
//!   out each branch's W boson and b quark
//! - [`resolver`] - the per-event entry point composing the three above
//!
//! Around them sit the [`error`] taxonomy, the [`config`] types, [`targets`] for turning
//! resolved indices into regression targets, and the [`progress`] reporting hook used by
//! the batch workflow.

pub mod classifier;
pub mod config;
pub mod error;
pub mod locator;
pub mod progress;
pub mod resolver;
pub mod self_decay;
pub mod targets;

#[cfg(test)]
pub(crate) mod fixtures;
