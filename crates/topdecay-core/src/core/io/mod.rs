//! Provides input/output functionality for event tables and resolution results.
//!
//! Events enter as a flat CSV particle table and leave as per-event assignment and
//! regression-target tables. Reading and writing go through the traits in [`traits`],
//! so the workflows never depend on a concrete file format.

pub mod particles;
pub mod results;
pub mod traits;
