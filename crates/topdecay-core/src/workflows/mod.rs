//! # Workflows Module
//!
//! High-level entry points that run the decay-chain engine over a whole batch of
//! events.
//!
//! ## Overview
//!
//! A workflow takes already-parsed [`Event`](crate::core::models::event::Event)s and a
//! [`BatchConfig`](crate::engine::config::BatchConfig), resolves every event
//! independently, and organizes the results for writing. Rejected events are kept
//! with their reason so callers can report how many events were skipped and why.
//!
//! ## Architecture
//!
//! - **Resolve Workflow** ([`resolve`]) - Per-event index resolution with optional
//!   parallelism, rejection bookkeeping and regression-target extraction.

pub mod resolve;
