use crate::io::{Format, error::Error};
use crate::model::descriptor::{ElementCounts, MoleculeDescriptor};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const MOLECULE_SECTION: &str = "@<TRIPOS>MOLECULE";
const ATOM_SECTION: &str = "@<TRIPOS>ATOM";
const SECTION_PREFIX: &str = "@<TRIPOS>";

pub fn read_file(path: &Path) -> Result<MoleculeDescriptor, Error> {
    let file = File::open(path)?;
    read(BufReader::new(file), path)
}

pub fn read<R: BufRead>(reader: R, source: &Path) -> Result<MoleculeDescriptor, Error> {
    let lines = collect_lines(reader)?;

    let mol_idx = find_section(&lines, MOLECULE_SECTION)
        .ok_or_else(|| Error::parse(Format::Mol2, 1, "missing @<TRIPOS>MOLECULE section"))?;

    let mut cursor = mol_idx + 1;
    let name = name_line(&lines, &mut cursor)
        .and_then(|line| line.split_whitespace().next())
        .filter(|token| !token.chars().all(|c| c == '*'))
        .map(str::to_string)
        .unwrap_or_else(|| fallback_name(source));

    let (count_line_no, count_line) = next_record_line(&lines, &mut cursor)
        .ok_or_else(|| Error::parse(Format::Mol2, mol_idx + 1, "missing counts line"))?;
    let atom_count = parse_atom_count(count_line)
        .ok_or_else(|| Error::parse(Format::Mol2, count_line_no, "missing atom count"))?;

    let elements = find_section(&lines, ATOM_SECTION)
        .map(|idx| count_elements(&lines[idx + 1..]))
        .unwrap_or_default();

    Ok(MoleculeDescriptor::new(source, name, atom_count).with_elements(elements))
}

fn collect_lines<R: BufRead>(reader: R) -> Result<Vec<(usize, String)>, Error> {
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| {
            line.map(|v| (i + 1, v))
                .map_err(|e| Error::Io { source: e })
        })
        .collect()
}

fn find_section(lines: &[(usize, String)], name: &str) -> Option<usize> {
    lines
        .iter()
        .position(|(_, line)| line.trim().eq_ignore_ascii_case(name))
}

fn is_section_header(line: &str) -> bool {
    line.trim_start().starts_with(SECTION_PREFIX)
}

/// The line right after the section header, blank or not.
fn name_line<'a>(lines: &'a [(usize, String)], cursor: &mut usize) -> Option<&'a str> {
    let (_, content) = lines.get(*cursor)?;
    if is_section_header(content) {
        return None;
    }
    *cursor += 1;
    Some(content.as_str())
}

/// Next non-blank, non-comment line of the current section.
fn next_record_line<'a>(
    lines: &'a [(usize, String)],
    cursor: &mut usize,
) -> Option<(usize, &'a str)> {
    while *cursor < lines.len() {
        let (ln, content) = &lines[*cursor];
        if is_section_header(content) {
            return None;
        }
        *cursor += 1;
        let trimmed = content.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        return Some((*ln, content.as_str()));
    }
    None
}

fn parse_atom_count(line: &str) -> Option<usize> {
    let first = line.split_whitespace().next()?;
    let digits: String = first.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

fn count_elements(section: &[(usize, String)]) -> ElementCounts {
    let mut counts = ElementCounts::default();

    for (_, raw) in section {
        if is_section_header(raw) {
            break;
        }
        if let Some(sybyl) = raw.split_whitespace().nth(5) {
            tally_sybyl_type(&mut counts, sybyl);
        }
    }

    counts
}

fn tally_sybyl_type(counts: &mut ElementCounts, sybyl: &str) {
    match sybyl.split_once('.') {
        Some((element, hybrid))
            if !hybrid.is_empty() && hybrid.bytes().all(|b| b.is_ascii_digit()) =>
        {
            match element {
                "C" => counts.carbon += 1,
                "O" => counts.oxygen += 1,
                "N" => counts.nitrogen += 1,
                _ => {}
            }
        }
        None if sybyl == "H" => counts.hydrogen += 1,
        _ => {}
    }
}

fn fallback_name(source: &Path) -> String {
    source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("MOL2"))
}
