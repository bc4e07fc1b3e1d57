use std::collections::HashSet;
use std::fs;
use std::path::Path;

use molcurate::io::{copy_into, load_corpus, read_manifest, referenced_sources, write_manifest};
use molcurate::{CurateConfig, LevelPool, curate};
use tempfile::TempDir;

const SIZES: [usize; 8] = [5, 5, 6, 6, 7, 50, 52, 55];

fn record(name: &str, atoms: usize) -> String {
    let mut body = format!("@<TRIPOS>MOLECULE\n{name}\n {atoms} 0 0 0 0\nSMALL\nNO_CHARGES\n\n");
    body.push_str("@<TRIPOS>ATOM\n");
    for i in 1..=atoms {
        let sybyl = if i % 2 == 0 { "H" } else { "C.3" };
        body.push_str(&format!(
            "{i:>7} X{i:<4} 0.0000 0.0000 0.0000 {sybyl:<5} 1 LIG 0.0000\n"
        ));
    }
    body
}

fn source_pool() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (i, &atoms) in SIZES.iter().enumerate() {
        fs::write(dir.path().join(format!("m{i}.mol2")), record(&format!("mol{i}"), atoms)).unwrap();
    }
    fs::write(dir.path().join("tiny.mol2"), record("tiny", 3)).unwrap();
    fs::write(
        dir.path().join("broken.mol2"),
        "@<TRIPOS>MOLECULE\nbroken\nxx yy\n",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), record("notes", 40)).unwrap();
    dir
}

fn stored_files(store: &Path) -> HashSet<String> {
    fs::read_dir(store)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn full_run_writes_manifest_and_copies_every_referenced_file() {
    let pool = source_pool();
    let out = tempfile::tempdir().unwrap();
    let manifest_path = out.path().join("data").join("molecules.json");
    let store = out.path().join("data").join("DB");

    let config = CurateConfig::default();
    let corpus = load_corpus(pool.path(), config.min_atoms).unwrap();
    assert_eq!(corpus.report.scanned, 10);
    assert_eq!(corpus.report.admitted, 8);
    assert_eq!(corpus.report.below_floor, 1);
    assert_eq!(corpus.report.parse_failures, 1);

    let curation = curate(&corpus.molecules, &config).unwrap();
    let sources = referenced_sources(&curation.levels, &corpus.molecules);
    let manifest = curation.into_manifest();

    write_manifest(&manifest_path, &manifest).unwrap();
    let copied = copy_into(&sources, &store).unwrap();

    let reread = read_manifest(&manifest_path).unwrap();
    assert_eq!(reread, manifest);
    assert_eq!(reread.total, 2);
    assert_eq!(reread.total, reread.levels.len());

    let stored = stored_files(&store);
    assert_eq!(copied, 6);
    assert_eq!(stored.len(), 6);
    for file in reread.referenced_files() {
        assert!(stored.contains(file), "{file} missing from store");
    }
    assert!(!stored.contains("m6.mol2"));
    assert!(!stored.contains("tiny.mol2"));
}

#[test]
fn levels_grow_and_never_reuse_molecules() {
    let pool = source_pool();
    let corpus = load_corpus(pool.path(), 5).unwrap();
    let curation = curate(&corpus.molecules, &CurateConfig::default()).unwrap();

    let mut seen = HashSet::new();
    for level in &curation.levels {
        for mol in level.molecules() {
            assert!(seen.insert(mol.file.clone()), "{} reused", mol.file);
        }
    }

    let targets: Vec<usize> = curation
        .levels
        .iter()
        .map(|l| l.target.atom_count)
        .collect();
    assert!(targets.windows(2).all(|w| w[0] <= w[1]));

    let first = &curation.levels[0];
    assert_eq!(first.target.name, "mol0");
    assert_eq!(first.target.file, "m0.mol2");
    assert_eq!(first.similar[0].file, "m1.mol2");
    assert_eq!(first.similar[1].file, "m2.mol2");
}

#[test]
fn element_tallies_come_from_the_atom_section() {
    let pool = source_pool();
    let corpus = load_corpus(pool.path(), 5).unwrap();
    let m2 = &corpus.molecules[2];
    assert_eq!(m2.atom_count, 6);
    assert_eq!(m2.elements.carbon, 3);
    assert_eq!(m2.elements.hydrogen, 3);
}

#[test]
fn higher_floor_shrinks_the_working_set() {
    let pool = source_pool();
    let corpus = load_corpus(pool.path(), 50).unwrap();
    assert_eq!(corpus.len(), 3);
    assert_eq!(corpus.report.below_floor, 6);

    let config = CurateConfig {
        min_atoms: 50,
        ..Default::default()
    };
    let curation = curate(&corpus.molecules, &config).unwrap();
    assert_eq!(curation.levels.len(), 1);
    assert_eq!(curation.levels[0].target.atom_count, 50);
}

#[test]
fn representative_pool_draws_levels_from_the_selection() {
    let pool = source_pool();
    let corpus = load_corpus(pool.path(), 5).unwrap();
    let config = CurateConfig {
        representative_count: 3,
        pool: LevelPool::Representatives,
        ..Default::default()
    };
    let curation = curate(&corpus.molecules, &config).unwrap();

    let picked: HashSet<&str> = curation
        .representatives
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(picked.len(), 3);
    for level in &curation.levels {
        for mol in level.molecules() {
            assert!(picked.contains(mol.name.as_str()));
        }
    }
}

#[test]
fn missing_pool_is_an_error() {
    let out = tempfile::tempdir().unwrap();
    assert!(load_corpus(&out.path().join("preliminaryDB"), 5).is_err());
}
