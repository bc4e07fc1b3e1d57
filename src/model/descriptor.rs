use std::path::{Path, PathBuf};

/// Occurrence counts of the four tracked SYBYL element families.
///
/// Extracted for reporting only; matching never reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementCounts {
    pub carbon: usize,
    pub oxygen: usize,
    pub nitrogen: usize,
    pub hydrogen: usize,
}

impl ElementCounts {
    #[inline]
    pub fn total(&self) -> usize {
        self.carbon + self.oxygen + self.nitrogen + self.hydrogen
    }
}

/// Lightweight summary of one structure record.
///
/// `source` is the identity of a descriptor: two descriptors are the same
/// molecule exactly when their source paths are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoleculeDescriptor {
    pub source: PathBuf,
    pub name: String,
    pub atom_count: usize,
    pub elements: ElementCounts,
}

impl MoleculeDescriptor {
    pub fn new(source: impl Into<PathBuf>, name: impl Into<String>, atom_count: usize) -> Self {
        Self {
            source: source.into(),
            name: name.into(),
            atom_count,
            elements: ElementCounts::default(),
        }
    }

    pub fn with_elements(mut self, elements: ElementCounts) -> Self {
        self.elements = elements;
        self
    }

    /// Base name of the source record, as used in manifests and the store.
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    #[inline]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[inline]
    pub fn size_difference(&self, other: &MoleculeDescriptor) -> usize {
        self.atom_count.abs_diff(other.atom_count)
    }

    #[inline]
    pub fn meets_floor(&self, min_atoms: usize) -> bool {
        self.atom_count >= min_atoms
    }
}
