mod config;
mod error;
mod levels;
mod select;
mod similar;

pub use config::{
    CurateConfig, DEFAULT_LEVEL_COUNT, DEFAULT_MIN_ATOMS, DEFAULT_THRESHOLD, LevelPool,
    SimilarityConfig,
};
pub use error::Error;
pub use levels::build_levels;
pub use select::{bucket_by_size, select_representatives};
pub use similar::{PAIR_SIZE, find_similar};

use log::info;

use crate::model::descriptor::MoleculeDescriptor;
use crate::model::level::{Level, Manifest};

/// Outcome of one curation pass over a working set.
#[derive(Debug, Clone)]
pub struct Curation<'a> {
    /// Round-robin selection across sizes, always computed.
    pub representatives: Vec<&'a MoleculeDescriptor>,
    /// Levels in the order they were built.
    pub levels: Vec<Level>,
    /// Which molecules the levels were drawn from.
    pub pool: LevelPool,
}

impl Curation<'_> {
    pub fn into_manifest(self) -> Manifest {
        Manifest::new(self.levels)
    }
}

pub fn curate<'a>(
    molecules: &'a [MoleculeDescriptor],
    config: &CurateConfig,
) -> Result<Curation<'a>, Error> {
    config.validate()?;

    if !molecules.iter().any(|m| m.meets_floor(config.min_atoms)) {
        return Err(Error::EmptyCorpus {
            min_atoms: config.min_atoms,
        });
    }

    let representatives =
        select_representatives(molecules, config.representative_count, config.min_atoms);

    let levels = match config.pool {
        LevelPool::All => build_levels(
            molecules,
            config.min_atoms,
            config.level_count,
            &config.similarity,
        ),
        LevelPool::Representatives => {
            info!(
                "building levels from {} representatives only",
                representatives.len()
            );
            let subset: Vec<MoleculeDescriptor> =
                representatives.iter().map(|m| (*m).clone()).collect();
            build_levels(
                &subset,
                config.min_atoms,
                config.level_count,
                &config.similarity,
            )
        }
    };

    Ok(Curation {
        representatives,
        levels,
        pool: config.pool,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn corpus(sizes: &[usize]) -> Vec<MoleculeDescriptor> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &n)| MoleculeDescriptor::new(format!("m{i}.mol2"), format!("m{i}"), n))
            .collect()
    }

    #[test]
    fn empty_working_set_is_an_error() {
        let err = curate(&[], &CurateConfig::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyCorpus { min_atoms: 5 }));
    }

    #[test]
    fn working_set_below_floor_is_an_error() {
        let molecules = corpus(&[2, 3, 4]);
        assert!(curate(&molecules, &CurateConfig::default()).is_err());
    }

    #[test]
    fn invalid_similarity_is_rejected_before_work() {
        let molecules = corpus(&[5, 5, 5]);
        let config = CurateConfig {
            similarity: SimilarityConfig {
                threshold: -1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            curate(&molecules, &config),
            Err(Error::InvalidConfig { .. })
        ));
    }

    #[test]
    fn all_pool_ignores_representative_selection() {
        let molecules = corpus(&[5, 5, 5, 5, 5, 5, 9, 9, 9]);
        let config = CurateConfig {
            representative_count: 2,
            ..Default::default()
        };

        let curation = curate(&molecules, &config).unwrap();

        assert_eq!(curation.representatives.len(), 2);
        assert_eq!(curation.levels.len(), 3);
        assert_eq!(curation.pool, LevelPool::All);
    }

    #[test]
    fn representative_pool_limits_level_members() {
        let molecules = corpus(&[5, 5, 5, 5, 6, 6, 6, 7, 7, 7]);
        let config = CurateConfig {
            representative_count: 6,
            pool: LevelPool::Representatives,
            ..Default::default()
        };

        let curation = curate(&molecules, &config).unwrap();

        let chosen: HashSet<String> = curation
            .representatives
            .iter()
            .map(|m| m.file_name())
            .collect();
        assert_eq!(curation.representatives.len(), 6);
        assert_eq!(curation.levels.len(), 2);
        for level in &curation.levels {
            assert!(level.molecules().all(|m| chosen.contains(&m.file)));
        }
    }

    #[test]
    fn manifest_total_matches_levels() {
        let molecules = corpus(&[5, 5, 5, 8, 8, 8]);
        let curation = curate(&molecules, &CurateConfig::default()).unwrap();
        let levels = curation.levels.clone();
        let manifest = curation.into_manifest();
        assert_eq!(manifest.total, 2);
        assert_eq!(manifest.levels, levels);
    }
}
