use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::error::Error;
use super::mol2::reader;
use crate::model::descriptor::MoleculeDescriptor;

/// File-name suffix of records considered part of a source pool.
pub const MOL2_SUFFIX: &str = ".mol2";

/// Counts gathered while loading a source pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub scanned: usize,
    pub admitted: usize,
    pub parse_failures: usize,
    pub below_floor: usize,
}

/// The working set of one run: every admitted descriptor in encounter order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub molecules: Vec<MoleculeDescriptor>,
    pub report: LoadReport,
}

impl Corpus {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.molecules.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.molecules.len()
    }

    /// Smallest and largest admitted atom counts.
    pub fn size_range(&self) -> Option<(usize, usize)> {
        let min = self.molecules.iter().map(|m| m.atom_count).min()?;
        let max = self.molecules.iter().map(|m| m.atom_count).max()?;
        Some((min, max))
    }
}

/// Loads every `.mol2` record under `dir` whose atom count reaches `min_atoms`.
///
/// Records that fail to parse are logged and skipped. Files are visited in
/// file-name order, which fixes the encounter order used for tie-breaking.
/// An empty pool is not an error; callers decide whether an empty corpus is
/// fatal.
pub fn load(dir: &Path, min_atoms: usize) -> Result<Corpus, Error> {
    if !dir.is_dir() {
        return Err(Error::SourceNotFound(dir.to_path_buf()));
    }

    let files = list_records(dir)?;
    if files.is_empty() {
        warn!("no {} files found in '{}'", MOL2_SUFFIX, dir.display());
        return Ok(Corpus::default());
    }
    info!(
        "found {} {} files in '{}'",
        files.len(),
        MOL2_SUFFIX,
        dir.display()
    );

    let mut report = LoadReport {
        scanned: files.len(),
        ..Default::default()
    };
    let mut molecules = Vec::with_capacity(files.len());

    for path in files {
        match reader::read_file(&path) {
            Ok(mol) if mol.meets_floor(min_atoms) => molecules.push(mol),
            Ok(mol) => {
                debug!(
                    "skipping '{}': {} atoms is below the floor of {}",
                    path.display(),
                    mol.atom_count,
                    min_atoms
                );
                report.below_floor += 1;
            }
            Err(e) => {
                warn!("error parsing '{}': {}", path.display(), e);
                report.parse_failures += 1;
            }
        }
    }

    report.admitted = molecules.len();
    info!(
        "admitted {} molecules with at least {} atoms ({} below floor, {} unreadable)",
        report.admitted, min_atoms, report.below_floor, report.parse_failures
    );

    Ok(Corpus { molecules, report })
}

fn list_records(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let entries = fs::read_dir(dir).map_err(|source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let is_record = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(MOL2_SUFFIX));
        if is_record && entry.path().is_file() {
            files.push(entry.path());
        }
    }

    files.sort();
    Ok(files)
}
