//! File I/O around the curation core.
//!
//! - [`mol2::reader`] extracts a [`MoleculeDescriptor`] from one MOL2 record.
//! - [`corpus`] scans a source pool directory into the working set.
//! - [`manifest`] persists the level sequence as JSON.
//! - [`store`] resolves referenced records and copies them into the target store.
//!
//! [`MoleculeDescriptor`]: crate::MoleculeDescriptor

use std::fmt;

pub mod corpus;
pub mod error;
pub mod manifest;
pub mod store;

pub mod mol2 {
    pub mod reader;
}

pub use corpus::{Corpus, LoadReport, MOL2_SUFFIX, load as load_corpus};
pub use error::Error;
pub use manifest::{read as read_manifest, write as write_manifest};
pub use mol2::reader::{read as read_mol2, read_file as read_mol2_file};
pub use store::{copy_into, referenced_sources};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Mol2,
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Mol2 => write!(f, "MOL2"),
            Format::Json => write!(f, "JSON"),
        }
    }
}
