use std::collections::{BTreeMap, VecDeque};

use log::{debug, info};

use crate::model::descriptor::MoleculeDescriptor;

/// Draws up to `count` molecules spread evenly across distinct atom counts.
///
/// Molecules are bucketed by exact atom count. Each sweep visits the buckets
/// in ascending order and takes the oldest remaining molecule from each, so
/// every size is represented once before any size is represented twice.
/// Returns fewer than `count` molecules when the buckets run dry.
pub fn select_representatives(
    molecules: &[MoleculeDescriptor],
    count: usize,
    min_atoms: usize,
) -> Vec<&MoleculeDescriptor> {
    let mut buckets = bucket_by_size(molecules, min_atoms);
    if buckets.is_empty() {
        info!("no molecules with at least {} atoms to select from", min_atoms);
        return Vec::new();
    }

    debug!("atom count distribution: {}", describe_buckets(&buckets));

    let mut selected = Vec::with_capacity(count.min(molecules.len()));

    while selected.len() < count && !buckets.is_empty() {
        buckets.retain(|_, queue| !queue.is_empty());

        for queue in buckets.values_mut() {
            if let Some(mol) = queue.pop_front() {
                selected.push(mol);
                if selected.len() >= count {
                    break;
                }
            }
        }
    }

    info!(
        "selected {} representative molecules, starting with {} atoms",
        selected.len(),
        min_atoms
    );
    selected
}

/// Groups molecules at or above the floor by exact atom count, keeping input order.
pub fn bucket_by_size(
    molecules: &[MoleculeDescriptor],
    min_atoms: usize,
) -> BTreeMap<usize, VecDeque<&MoleculeDescriptor>> {
    let mut buckets: BTreeMap<usize, VecDeque<&MoleculeDescriptor>> = BTreeMap::new();
    for mol in molecules.iter().filter(|m| m.meets_floor(min_atoms)) {
        buckets.entry(mol.atom_count).or_default().push_back(mol);
    }
    buckets
}

fn describe_buckets(buckets: &BTreeMap<usize, VecDeque<&MoleculeDescriptor>>) -> String {
    buckets
        .iter()
        .map(|(size, queue)| format!("{}: {}", size, queue.len()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(sizes: &[usize]) -> Vec<MoleculeDescriptor> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &n)| MoleculeDescriptor::new(format!("m{i}.mol2"), format!("m{i}"), n))
            .collect()
    }

    fn names(selected: &[&MoleculeDescriptor]) -> Vec<String> {
        selected.iter().map(|m| m.name.clone()).collect()
    }

    #[test]
    fn sweeps_each_size_before_repeating_one() {
        let molecules = corpus(&[7, 5, 5, 6, 5, 7]);
        let selected = select_representatives(&molecules, 10, 5);
        assert_eq!(
            names(&selected),
            vec!["m1", "m3", "m0", "m2", "m5", "m4"]
        );
    }

    #[test]
    fn stops_mid_sweep_at_count() {
        let molecules = corpus(&[5, 6, 7, 8, 5, 6]);
        let selected = select_representatives(&molecules, 5, 5);
        let sizes: Vec<_> = selected.iter().map(|m| m.atom_count).collect();
        assert_eq!(sizes, vec![5, 6, 7, 8, 5]);
    }

    #[test]
    fn returns_fewer_when_exhausted() {
        let molecules = corpus(&[5, 6, 6]);
        let selected = select_representatives(&molecules, 120, 5);
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn reapplies_floor() {
        let molecules = corpus(&[3, 4, 5, 9]);
        let selected = select_representatives(&molecules, 10, 5);
        assert!(selected.iter().all(|m| m.atom_count >= 5));
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn zero_count_selects_nothing() {
        let molecules = corpus(&[5, 6]);
        assert!(select_representatives(&molecules, 0, 5).is_empty());
    }

    #[test]
    fn empty_input_selects_nothing() {
        assert!(select_representatives(&[], 10, 5).is_empty());
    }

    #[test]
    fn buckets_are_keyed_ascending_with_fifo_queues() {
        let molecules = corpus(&[9, 5, 9, 2]);
        let buckets = bucket_by_size(&molecules, 5);
        let keys: Vec<_> = buckets.keys().copied().collect();
        assert_eq!(keys, vec![5, 9]);
        assert_eq!(names(&buckets[&9].iter().copied().collect::<Vec<_>>()), vec!["m0", "m2"]);
        assert_eq!(describe_buckets(&buckets), "5: 1, 9: 2");
    }
}
