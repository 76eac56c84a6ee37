#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Zoning compliance evaluation.
//!
//! Combines the geometry engine with district constraint records to
//! answer the review screens' questions: which district a parcel falls
//! in, and whether a proposed development meets that district's
//! constraints. Verdicts are tri-state; missing reference data is
//! reported as indeterminate, never silently passed or failed.

pub mod checks;
pub mod parking;
