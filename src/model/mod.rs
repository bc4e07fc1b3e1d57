//! Core data structures flowing through `molcurate`.
//!
//! - [`descriptor`] – Per-record summary: name, atom count, element sub-counts.
//! - [`level`] – Output records: levels, their molecule projections, and the manifest.
//!
//! Descriptors are produced by [`crate::io`] and consumed by [`crate::curate`],
//! which turns a working set of descriptors into a [`Manifest`].
//!
//! [`Manifest`]: level::Manifest

pub mod descriptor;
pub mod level;
