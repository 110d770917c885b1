//! # Core Models Module
//!
//! Value types describing one simulated event and the result of classifying it.
//!
//! ## Key Components
//!
//! - [`pdg`] - Particle Data Group codes and the lepton/quark convention used by the classifier
//! - [`record`] - The owned decay record and its read-only, bounds-checked view
//! - [`event`] - An identified event: record plus optional per-particle four-momenta
//! - [`kinematics`] - Four-momentum arithmetic needed for regression targets
//! - [`assignment`] - The six named indices produced for a successfully classified event
//! - [`target`] - Per-role `(Px, Py, Pz, E, M)` regression targets in GeV
//!
//! ## Usage
//!
//! ```ignore
//! use topdecay::core::models::record::DecayRecord;
//!
//! let record = DecayRecord::new(vec![6, 24, 5], vec![1, -1, -1], vec![2, -1, -1])?;
//! let view = record.view();
//! assert_eq!(view.code(0)?.value(), 6);
//! ```

pub mod assignment;
pub mod event;
pub mod kinematics;
pub mod pdg;
pub mod record;
pub mod target;
