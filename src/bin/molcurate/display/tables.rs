use std::io::{self, Write};
use std::path::Path;

use molcurate::curate::bucket_by_size;
use molcurate::io::Corpus;
use molcurate::{Curation, ElementCounts, LevelPool, MoleculeDescriptor};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const MAX_DISTRIBUTION_ROWS: usize = 12;

pub fn print_corpus_summary(corpus: &Corpus, source: &Path, min_atoms: usize) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let report = &corpus.report;
    let mut rows = vec![
        ("Source", source.display().to_string()),
        ("Files Scanned", report.scanned.to_string()),
        ("Admitted", report.admitted.to_string()),
        (
            "Below Floor",
            format!("{} (< {} atoms)", report.below_floor, min_atoms),
        ),
        ("Unreadable", report.parse_failures.to_string()),
    ];

    if let Some((min, max)) = corpus.size_range() {
        rows.push(("Atom Range", format!("{} – {}", min, max)));
    }

    let elements = tally_elements(&corpus.molecules);
    rows.push((
        "C / O / N / H",
        format!(
            "{} / {} / {} / {}",
            elements.carbon, elements.oxygen, elements.nitrogen, elements.hydrogen
        ),
    ));
    rows.push(("Typed Atoms", elements.total().to_string()));

    print_kv_table(&mut out, "Corpus Summary", &rows);
}

fn tally_elements(molecules: &[MoleculeDescriptor]) -> ElementCounts {
    molecules
        .iter()
        .fold(ElementCounts::default(), |mut acc, m| {
            acc.carbon += m.elements.carbon;
            acc.oxygen += m.elements.oxygen;
            acc.nitrogen += m.elements.nitrogen;
            acc.hydrogen += m.elements.hydrogen;
            acc
        })
}

pub fn print_size_distribution(molecules: &[MoleculeDescriptor], min_atoms: usize) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let buckets = bucket_by_size(molecules, min_atoms);
    let counts: Vec<(usize, usize)> = buckets.iter().map(|(k, q)| (*k, q.len())).collect();
    let rows = group_sizes(&counts, MAX_DISTRIBUTION_ROWS);
    let total: usize = counts.iter().map(|(_, n)| n).sum();

    print_distribution_table(&mut out, "Atom Count Distribution", &rows, total);
}

pub fn print_level_summary(curation: &Curation<'_>) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let pool = match curation.pool {
        LevelPool::All => "all molecules",
        LevelPool::Representatives => "representatives",
    };

    let mut rows = vec![
        ("Representatives", curation.representatives.len().to_string()),
        ("Levels", curation.levels.len().to_string()),
        ("Molecules Used", (curation.levels.len() * 3).to_string()),
        ("Level Pool", pool.to_string()),
    ];

    if let (Some(first), Some(last)) = (curation.levels.first(), curation.levels.last()) {
        rows.push((
            "Target Sizes",
            format!("{} – {}", first.target.atom_count, last.target.atom_count),
        ));

        let widest = curation
            .levels
            .iter()
            .flat_map(|l| {
                l.similar
                    .iter()
                    .map(move |s| s.atom_count.abs_diff(l.target.atom_count))
            })
            .max()
            .unwrap_or(0);
        rows.push(("Widest Gap", format!("{} atoms", widest)));
    }

    print_kv_table(&mut out, "Dataset Summary", &rows);
}

/// Merges adjacent atom counts into at most `max_rows` labelled ranges.
fn group_sizes(counts: &[(usize, usize)], max_rows: usize) -> Vec<(String, usize)> {
    if counts.len() <= max_rows {
        return counts
            .iter()
            .map(|(size, n)| (size.to_string(), *n))
            .collect();
    }

    let per_row = counts.len().div_ceil(max_rows);
    counts
        .chunks(per_row)
        .map(|chunk| {
            let lo = chunk[0].0;
            let hi = chunk[chunk.len() - 1].0;
            let label = if lo == hi {
                lo.to_string()
            } else {
                format!("{}–{}", lo, hi)
            };
            (label, chunk.iter().map(|(_, n)| n).sum())
        })
        .collect()
}

fn print_distribution_table(
    out: &mut impl Write,
    title: &str,
    data: &[(String, usize)],
    total: usize,
) {
    let name_w = 10usize;
    let count_w = 8usize;
    let sep_overhead = 6;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{}┬{}┬{}┐",
        INDENT,
        "─".repeat(name_w + 2),
        "─".repeat(count_w + 2),
        "─".repeat(dist_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        INDENT, "Atoms", "Count", "Distribution",
    );
    let _ = writeln!(
        out,
        "{}├{}┼{}┼{}┤",
        INDENT,
        "─".repeat(name_w + 2),
        "─".repeat(count_w + 2),
        "─".repeat(dist_w + 2)
    );

    for (label, count) in data {
        let pct = if total == 0 {
            0.0
        } else {
            (*count as f64 / total as f64) * 100.0
        };
        let dist_cell = format!("{}  {:>5.1}%", make_bar(pct, max_bar_width), pct);
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            INDENT,
            truncate(label, name_w),
            count,
            dist_cell,
        );
    }

    let _ = writeln!(
        out,
        "{}└{}┴{}┴{}┘",
        INDENT,
        "─".repeat(name_w + 2),
        "─".repeat(count_w + 2),
        "─".repeat(dist_w + 2)
    );
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{}┬{}┐",
        INDENT,
        "─".repeat(key_w + 2),
        "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(
        out,
        "{}└{}┴{}┘",
        INDENT,
        "─".repeat(key_w + 2),
        "─".repeat(val_w + 2)
    );
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let empty = max_width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
