use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = hints_for(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

/// Suggestions for the first library error found in the chain, or from its text.
fn hints_for(err: &Error) -> Vec<String> {
    for cause in err.chain() {
        if let Some(io_err) = cause.downcast_ref::<molcurate::IoError>() {
            return io_hints(io_err);
        }
        if let Some(curate_err) = cause.downcast_ref::<molcurate::CurateError>() {
            return curate_hints(curate_err);
        }
    }
    fallback_hints(err)
}

fn io_hints(err: &molcurate::IoError) -> Vec<String> {
    use molcurate::IoError;

    match err {
        IoError::Io { source } => std_io_hints(source),
        IoError::Parse { format, line, .. } => vec![
            format!("The {} data is malformed near line {}", format, line),
            "Inspect the file around that line".into(),
        ],
        IoError::SourceNotFound(path) => vec![
            format!("No directory at '{}'", path.display()),
            "Pass the pool location with --source <DIR>".into(),
        ],
        IoError::ReadDir { source, .. } => {
            let mut hints = vec!["The source pool could not be listed".to_string()];
            hints.extend(std_io_hints(source));
            hints
        }
        IoError::Serialize { .. } => {
            vec!["The manifest could not be encoded; this is a bug worth reporting".into()]
        }
        IoError::Write { path, source } => {
            let mut hints = vec![format!("Could not write under '{}'", path.display())];
            hints.extend(std_io_hints(source));
            hints.push("Choose another location with --manifest or --store".into());
            hints
        }
        IoError::SameFile { .. } => vec![
            "The store resolves to the same directory as the source pool".into(),
            "Pass a different --store so source files are not overwritten".into(),
        ],
        IoError::Copy { source, .. } => {
            let mut hints = vec!["Copying stopped at the first failure".to_string()];
            hints.extend(std_io_hints(source));
            hints.push("Files copied before the failure were left in the store".into());
            hints
        }
    }
}

fn curate_hints(err: &molcurate::CurateError) -> Vec<String> {
    use molcurate::CurateError;

    match err {
        CurateError::ConfigParse(_) => vec![
            "Check the TOML syntax of the --config file".into(),
            "Valid keys: min_atoms, level_count, representative_count, pool, [similarity]".into(),
        ],
        CurateError::InvalidConfig { field, .. } => vec![
            format!("Adjust '{}' in the config file or on the command line", field),
        ],
        CurateError::EmptyCorpus { min_atoms } => vec![
            format!("No molecule reaches the floor of {} atoms", min_atoms),
            "Lower the floor with the MIN_ATOMS argument".into(),
        ],
    }
}

fn std_io_hints(source: &io::Error) -> Vec<String> {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => vec![
            "File or directory not found".into(),
            "Check the path spelling and ensure the file exists".into(),
        ],
        ErrorKind::PermissionDenied => vec![
            "Permission denied".into(),
            "Check file permissions with `ls -la`".into(),
        ],
        ErrorKind::StorageFull => vec!["The destination device is full".into()],
        _ => Vec::new(),
    }
}

fn fallback_hints(err: &Error) -> Vec<String> {
    let text = err
        .chain()
        .map(|c| c.to_string().to_lowercase())
        .collect::<Vec<_>>()
        .join("\n");

    if text.contains("no valid molecules") {
        return vec![
            "No .mol2 record in the pool reached the minimum atom count".into(),
            "Check the --source directory or lower MIN_ATOMS".into(),
        ];
    }

    if text.contains("permission denied") {
        return vec!["Check file permissions with `ls -la`".into()];
    }

    Vec::new()
}
