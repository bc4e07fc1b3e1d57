use std::collections::HashSet;
use std::path::Path;

use log::{debug, info};

use super::config::SimilarityConfig;
use super::similar::find_similar;
use crate::model::descriptor::MoleculeDescriptor;
use crate::model::level::Level;

/// Builds up to `level_count` levels in ascending order of target size.
///
/// Walks the molecules from smallest to largest. Each molecule not yet used
/// becomes a target if two unused companions can be found anywhere in the
/// working set; the target and both companions are then used up for the rest
/// of the pass. A molecule that cannot be paired is skipped for good.
pub fn build_levels(
    molecules: &[MoleculeDescriptor],
    min_atoms: usize,
    level_count: usize,
    params: &SimilarityConfig,
) -> Vec<Level> {
    let pool: Vec<MoleculeDescriptor> = molecules
        .iter()
        .filter(|m| m.meets_floor(min_atoms))
        .cloned()
        .collect();

    let mut by_size: Vec<&MoleculeDescriptor> = pool.iter().collect();
    by_size.sort_by_key(|m| m.atom_count);

    let mut used: HashSet<&Path> = HashSet::new();
    let mut levels = Vec::new();

    for target in by_size {
        if levels.len() >= level_count {
            break;
        }
        if used.contains(target.source()) {
            continue;
        }

        let similar = find_similar(target, &pool, params, &used);
        let [first, second] = similar[..] else {
            debug!(
                "skipping '{}' ({} atoms): not enough similar molecules",
                target.name, target.atom_count
            );
            continue;
        };

        used.insert(target.source());
        used.insert(first.source());
        used.insert(second.source());

        levels.push(Level::new(target, first, second));
    }

    info!("created {} levels", levels.len());
    levels
}
