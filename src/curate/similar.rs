use std::collections::HashSet;
use std::path::Path;

use log::trace;

use super::config::SimilarityConfig;
use crate::model::descriptor::MoleculeDescriptor;

/// Number of similar molecules paired with each target.
pub const PAIR_SIZE: usize = 2;

/// Finds the two molecules in `pool` closest in size to `target`.
///
/// Candidates exclude the target itself and every source in `excluded`. The
/// size window starts at `target.atom_count * threshold` and widens through
/// the configured multipliers while fewer than two candidates fit. If even the
/// widest window is too narrow, the whole eligible pool is considered.
///
/// The result is ordered by ascending size difference; ties keep pool order.
/// It holds fewer than two molecules only when fewer than two are eligible.
pub fn find_similar<'a>(
    target: &MoleculeDescriptor,
    pool: &'a [MoleculeDescriptor],
    params: &SimilarityConfig,
    excluded: &HashSet<&Path>,
) -> Vec<&'a MoleculeDescriptor> {
    let eligible: Vec<&MoleculeDescriptor> = pool
        .iter()
        .filter(|mol| mol.source != target.source && !excluded.contains(mol.source()))
        .collect();

    let base = target.atom_count as f64 * params.threshold;
    let mut candidates = within_window(&eligible, target, base);

    if candidates.len() < PAIR_SIZE {
        for multiplier in params.multipliers() {
            let max_diff = target.atom_count as f64 * params.threshold * multiplier;
            candidates = within_window(&eligible, target, max_diff);
            trace!(
                "'{}': window x{} (±{:.2}) holds {} candidates",
                target.name,
                multiplier,
                max_diff,
                candidates.len()
            );
            if candidates.len() >= PAIR_SIZE {
                break;
            }
        }
    }

    if candidates.len() < PAIR_SIZE {
        trace!(
            "'{}': falling back to the closest of {} eligible molecules",
            target.name,
            eligible.len()
        );
        candidates = eligible;
    }

    candidates.sort_by_key(|mol| mol.size_difference(target));
    candidates.truncate(PAIR_SIZE);
    candidates
}

fn within_window<'a>(
    eligible: &[&'a MoleculeDescriptor],
    target: &MoleculeDescriptor,
    max_diff: f64,
) -> Vec<&'a MoleculeDescriptor> {
    eligible
        .iter()
        .copied()
        .filter(|mol| mol.size_difference(target) as f64 <= max_diff)
        .collect()
}
