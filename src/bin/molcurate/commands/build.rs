use anyhow::{Context, Result, bail};
use log::info;

use molcurate::io::{copy_into, load_corpus, referenced_sources, write_manifest};
use molcurate::{CurateConfig, Curation, LevelPool, curate};

use crate::cli::Cli;
use crate::config::build_curate_config;
use crate::display::{
    Context as DisplayContext, Progress, print_corpus_summary, print_level_summary,
    print_size_distribution,
};

const TOTAL_STEPS: u8 = 4;
const DRY_RUN_STEPS: u8 = 2;

pub fn run_build(cli: &Cli, ctx: DisplayContext) -> Result<()> {
    let config = build_curate_config(cli)?;
    let paths = &cli.paths;

    let total_steps = if cli.output.dry_run {
        DRY_RUN_STEPS
    } else {
        TOTAL_STEPS
    };
    let mut progress = Progress::new(ctx.interactive, total_steps);

    progress.step("Loading molecules");
    info!(
        "collecting molecule data from '{}' with min {} atoms",
        paths.source.display(),
        config.min_atoms
    );
    let corpus = load_corpus(&paths.source, config.min_atoms).with_context(|| {
        format!(
            "Failed to load source pool: {}",
            paths.source.display()
        )
    })?;

    if corpus.is_empty() {
        bail!(
            "No valid molecules found in '{}' (minimum {} atoms)",
            paths.source.display(),
            config.min_atoms
        );
    }
    info!("found {} valid molecules", corpus.len());

    let report = &corpus.report;
    progress.complete_step(
        "Loading molecules",
        &[
            format!("Scan {} .mol2 files", report.scanned),
            format!(
                "Admit {} molecules with at least {} atoms",
                report.admitted, config.min_atoms
            ),
        ],
    );

    if ctx.interactive {
        print_corpus_summary(&corpus, &paths.source, config.min_atoms);
        print_size_distribution(&corpus.molecules, config.min_atoms);
    }

    progress.step("Curating levels");
    let curation = curate(&corpus.molecules, &config).context("Curation failed")?;
    info!(
        "selected {} representative molecules, created {} levels",
        curation.representatives.len(),
        curation.levels.len()
    );
    progress.complete_step("Curating levels", &curation_substeps(&config, &curation));

    if ctx.interactive {
        print_level_summary(&curation);
    }

    if cli.output.dry_run {
        info!("dry run: manifest and store left untouched");
        progress.finish(&format!("Dry run: {} levels", curation.levels.len()));
        return Ok(());
    }

    progress.step("Writing manifest");
    let sources = referenced_sources(&curation.levels, &corpus.molecules);
    let level_count = curation.levels.len();
    let manifest = curation.into_manifest();
    write_manifest(&paths.manifest, &manifest).with_context(|| {
        format!(
            "Failed to save game dataset: {}",
            paths.manifest.display()
        )
    })?;
    progress.complete_step(
        "Writing manifest",
        &[format!(
            "{} levels → {}",
            manifest.total,
            file_label(&paths.manifest)
        )],
    );

    progress.step("Copying molecule files");
    let copied = copy_into(&sources, &paths.store).with_context(|| {
        format!(
            "Failed to copy molecule files into: {}",
            paths.store.display()
        )
    })?;
    progress.complete_step(
        "Copying molecule files",
        &[format!("{} files → {}", copied, paths.store.display())],
    );

    info!("molecule dataset preparation completed");
    progress.finish(&format!("Created {} levels", level_count));

    Ok(())
}

fn curation_substeps(config: &CurateConfig, curation: &Curation<'_>) -> Vec<String> {
    let pool = match curation.pool {
        LevelPool::All => "all molecules",
        LevelPool::Representatives => "representatives",
    };

    vec![
        format!(
            "Select {} size-diverse representatives",
            curation.representatives.len()
        ),
        format!(
            "Match pairs within {:.0}% of target size",
            config.similarity.threshold * 100.0
        ),
        format!("Build {} levels from {}", curation.levels.len(), pool),
    ]
}

fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}
