//! Curation of size-diverse molecule puzzle datasets from pools of MOL2 structure files.
//!
//! Each record in a source pool is reduced to a lightweight descriptor (name,
//! atom count, element sub-counts). The curation pass then pairs target
//! molecules with two size-similar companions, producing an ordered sequence
//! of puzzle levels that grows in molecule size.
//!
//! # Features
//!
//! - **Descriptor extraction**: Name, declared atom count, and SYBYL element
//!   tallies from Tripos MOL2 records
//! - **Representative selection**: Round-robin draw across distinct atom
//!   counts for a size-diverse subset
//! - **Similarity matching**: Closest-by-size companions under a size window
//!   that widens until two candidates are found
//! - **Level building**: Greedy ascending pass where no molecule is ever used
//!   twice
//! - **Dataset output**: JSON manifest plus a copy of every referenced record
//!
//! # Quick Start
//!
//! ```
//! use molcurate::{CurateConfig, MoleculeDescriptor, curate};
//!
//! let molecules: Vec<_> = [5, 5, 6, 6, 7, 50, 52, 55]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &n)| MoleculeDescriptor::new(format!("pool/m{i}.mol2"), format!("m{i}"), n))
//!     .collect();
//!
//! let config = CurateConfig {
//!     level_count: 3,
//!     ..Default::default()
//! };
//! let curation = curate(&molecules, &config)?;
//!
//! // The smallest molecule anchors the first level.
//! let first = &curation.levels[0];
//! assert_eq!(first.target.atom_count, 5);
//! assert_eq!(first.similar[0].atom_count, 5);
//! assert_eq!(first.similar[1].atom_count, 6);
//!
//! // 52 and 55 are left over with only each other as companions.
//! assert_eq!(curation.levels.len(), 2);
//! # Ok::<(), molcurate::CurateError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`]: MOL2 descriptor extraction, corpus loading, manifest and store output
//! - [`curate`]: Representative selection, similarity matching, level building
//!
//! # Data Types
//!
//! - [`MoleculeDescriptor`]: Per-record summary used by every stage
//! - [`ElementCounts`]: Informational C/O/N/H tallies
//! - [`Level`]: One target and exactly two similar molecules
//! - [`MoleculeRef`]: `(name, file, atom_count)` projection stored in levels
//! - [`Manifest`]: Persisted level sequence and its count
//! - [`CurateConfig`]: Floor, level count, similarity window, level pool

mod model;

pub mod curate;
pub mod io;

pub use model::descriptor::{ElementCounts, MoleculeDescriptor};
pub use model::level::{Level, Manifest, MoleculeRef};

pub use curate::{Curation, CurateConfig, LevelPool, SimilarityConfig, curate};

pub use curate::Error as CurateError;
pub use io::Error as IoError;
