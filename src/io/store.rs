use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use super::error::Error;
use crate::model::descriptor::MoleculeDescriptor;
use crate::model::level::Level;

/// Resolves every file referenced by `levels` back to its source record.
///
/// Names are matched against the base names of the working set. The result
/// holds each source once, in working-set order.
pub fn referenced_sources<'a>(
    levels: &[Level],
    molecules: &'a [MoleculeDescriptor],
) -> Vec<&'a Path> {
    let wanted: HashSet<&str> = levels
        .iter()
        .flat_map(Level::molecules)
        .map(|m| m.file.as_str())
        .collect();

    let mut resolved = HashSet::new();
    let sources: Vec<&Path> = molecules
        .iter()
        .filter(|mol| {
            let file = mol.file_name();
            wanted.contains(file.as_str()) && resolved.insert(file)
        })
        .map(|mol| mol.source())
        .collect();

    for file in &wanted {
        if !resolved.contains(*file) {
            warn!("referenced file '{}' is not in the working set", file);
        }
    }

    sources
}

/// Copies each source into `store` under its original base name.
///
/// Nothing is copied if any source would land on itself. Otherwise stops at
/// the first failure; files already copied are left in place.
pub fn copy_into(sources: &[&Path], store: &Path) -> Result<usize, Error> {
    fs::create_dir_all(store).map_err(|e| Error::write(store, e))?;

    if let Some(from) = sources
        .iter()
        .find(|from| copies_onto_itself(from, store))
    {
        return Err(Error::SameFile {
            path: from.to_path_buf(),
        });
    }

    for from in sources {
        let Some(name) = from.file_name() else {
            continue;
        };
        let to = store.join(name);
        fs::copy(from, &to).map_err(|source| Error::Copy {
            from: from.to_path_buf(),
            to: to.clone(),
            source,
        })?;
        debug!("copied '{}'", name.to_string_lossy());
    }

    info!(
        "copied {} molecule files to '{}'",
        sources.len(),
        store.display()
    );
    Ok(sources.len())
}

/// Whether `from` and its destination in `store` resolve to the same file.
fn copies_onto_itself(from: &Path, store: &Path) -> bool {
    let Some(name) = from.file_name() else {
        return false;
    };
    match (fs::canonicalize(from), fs::canonicalize(store.join(name))) {
        (Ok(src), Ok(dst)) => src == dst,
        _ => false,
    }
}
