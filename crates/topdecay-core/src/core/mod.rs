//! # Core Module
//!
//! Data structures shared by every layer of topdecay.
//!
//! ## Overview
//!
//! A generator-level event is stored as three parallel arrays: the PDG code of each
//! particle and the indices of its first and second daughter. The decay tree is
//! implicit in those indices. This module wraps the arrays in an owned
//! [`models::record::DecayRecord`] and a borrowed, bounds-checked
//! [`models::record::DecayRecordView`], so that no algorithm ever indexes a raw array.
//!
//! - **Event Representation** ([`models`]) - Records, events, PDG codes, four-momenta and
//!   the resolved six-index assignment
//! - **File I/O** ([`io`]) - CSV particle tables in, assignment and target tables out

pub mod io;
pub mod models;
