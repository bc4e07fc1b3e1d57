use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use molcurate::CurateConfig;

use crate::cli::Cli;

/// Builds the curation config: TOML file first, then explicit CLI values.
pub fn build_curate_config(cli: &Cli) -> Result<CurateConfig> {
    let mut config = match &cli.curation.config {
        Some(path) => load_config_file(path)?,
        None => CurateConfig::default(),
    };

    if let Some(raw) = cli.min_atoms.as_deref() {
        config.min_atoms = resolve_min_atoms(raw, config.min_atoms);
    } else {
        info!("no minimum atom count given, using {} atoms", config.min_atoms);
    }

    let opts = &cli.curation;
    if let Some(n) = opts.level_count {
        config.level_count = n;
    }
    if let Some(n) = opts.representative_count {
        config.representative_count = n;
    }
    if let Some(threshold) = opts.threshold {
        config.similarity.threshold = threshold;
    }
    if let Some(pool) = opts.pool {
        config.pool = pool.into();
    }

    config.validate().context("Invalid curation settings")?;
    Ok(config)
}

/// Parses the positional floor, keeping `fallback` when it is not an integer.
pub fn resolve_min_atoms(raw: &str, fallback: usize) -> usize {
    match raw.trim().parse::<usize>() {
        Ok(n) => {
            info!("using minimum atom count: {}", n);
            n
        }
        Err(_) => {
            warn!(
                "invalid min_atoms value: '{}', using default: {} atoms",
                raw, fallback
            );
            fallback
        }
    }
}

fn load_config_file(path: &Path) -> Result<CurateConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    CurateConfig::from_toml_str(&text)
        .with_context(|| format!("Failed to load config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use molcurate::LevelPool;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("molcurate").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn invalid_floor_falls_back() {
        assert_eq!(resolve_min_atoms("abc", 5), 5);
        assert_eq!(resolve_min_atoms("-3", 5), 5);
        assert_eq!(resolve_min_atoms("7.5", 5), 5);
        assert_eq!(resolve_min_atoms(" 12 ", 5), 12);
    }

    #[test]
    fn defaults_without_overrides() {
        assert_eq!(build_curate_config(&cli(&[])).unwrap(), CurateConfig::default());
    }

    #[test]
    fn cli_values_override_defaults() {
        let config =
            build_curate_config(&cli(&["9", "--levels", "4", "--pool", "representatives"]))
                .unwrap();
        assert_eq!(config.min_atoms, 9);
        assert_eq!(config.level_count, 4);
        assert_eq!(config.pool, LevelPool::Representatives);
    }

    #[test]
    fn cli_values_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curate.toml");
        fs::write(&path, "min_atoms = 8\nlevel_count = 30\n").unwrap();
        let path = path.to_str().unwrap();

        let config = build_curate_config(&cli(&["--config", path, "--levels", "6"])).unwrap();
        assert_eq!(config.min_atoms, 8);
        assert_eq!(config.level_count, 6);

        let config = build_curate_config(&cli(&["oops", "--config", path])).unwrap();
        assert_eq!(config.min_atoms, 8);
    }

    #[test]
    fn invalid_threshold_is_an_error() {
        assert!(build_curate_config(&cli(&["--threshold", "0"])).is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        assert!(build_curate_config(&cli(&["--config", "no/such/curate.toml"])).is_err());
    }
}
