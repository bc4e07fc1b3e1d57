use serde::{Deserialize, Serialize};

use super::descriptor::MoleculeDescriptor;

/// The `(name, file, atom_count)` projection of a descriptor stored in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoleculeRef {
    pub name: String,
    pub file: String,
    pub atom_count: usize,
}

impl From<&MoleculeDescriptor> for MoleculeRef {
    fn from(mol: &MoleculeDescriptor) -> Self {
        Self {
            name: mol.name.clone(),
            file: mol.file_name(),
            atom_count: mol.atom_count,
        }
    }
}

/// One puzzle level: a target plus exactly two size-similar companions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub target: MoleculeRef,
    pub similar: [MoleculeRef; 2],
}

impl Level {
    pub fn new(
        target: &MoleculeDescriptor,
        first: &MoleculeDescriptor,
        second: &MoleculeDescriptor,
    ) -> Self {
        Self {
            target: target.into(),
            similar: [first.into(), second.into()],
        }
    }

    /// All molecules referenced by this level, target first.
    pub fn molecules(&self) -> impl Iterator<Item = &MoleculeRef> {
        std::iter::once(&self.target).chain(self.similar.iter())
    }
}

/// The persisted dataset: ordered levels plus their count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub levels: Vec<Level>,
    pub total: usize,
}

impl Manifest {
    pub fn new(levels: Vec<Level>) -> Self {
        let total = levels.len();
        Self { levels, total }
    }

    /// Distinct file names referenced by any level, in first-seen order.
    pub fn referenced_files(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.levels
            .iter()
            .flat_map(Level::molecules)
            .map(|m| m.file.as_str())
            .filter(|f| seen.insert(*f))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mol(file: &str, atoms: usize) -> MoleculeDescriptor {
        MoleculeDescriptor::new(format!("pool/{file}"), file.trim_end_matches(".mol2"), atoms)
    }

    #[test]
    fn molecule_ref_projects_descriptor() {
        let r = MoleculeRef::from(&mol("benzene.mol2", 12));
        assert_eq!(r.name, "benzene");
        assert_eq!(r.file, "benzene.mol2");
        assert_eq!(r.atom_count, 12);
    }

    #[test]
    fn level_molecules_yields_target_first() {
        let level = Level::new(&mol("t.mol2", 6), &mol("a.mol2", 6), &mol("b.mol2", 7));
        let files: Vec<_> = level.molecules().map(|m| m.file.as_str()).collect();
        assert_eq!(files, vec!["t.mol2", "a.mol2", "b.mol2"]);
    }

    #[test]
    fn manifest_total_tracks_levels() {
        let levels = vec![
            Level::new(&mol("t.mol2", 6), &mol("a.mol2", 6), &mol("b.mol2", 7)),
            Level::new(&mol("u.mol2", 9), &mol("c.mol2", 9), &mol("a.mol2", 6)),
        ];
        let manifest = Manifest::new(levels);
        assert_eq!(manifest.total, 2);
        assert_eq!(
            manifest.referenced_files(),
            vec!["t.mol2", "a.mol2", "b.mol2", "u.mol2", "c.mol2"]
        );
    }

    #[test]
    fn manifest_serializes_with_stable_field_order() {
        let manifest = Manifest::new(vec![Level::new(
            &mol("t.mol2", 6),
            &mol("a.mol2", 6),
            &mol("b.mol2", 7),
        )]);
        let json = serde_json::to_string(&manifest).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"levels":[{"target":{"name":"t","file":"t.mol2","atom_count":6},"#,
                r#""similar":[{"name":"a","file":"a.mol2","atom_count":6},"#,
                r#"{"name":"b","file":"b.mol2","atom_count":7}]}],"total":1}"#
            )
        );
    }
}
