use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::info;

use super::{Format, error::Error};
use crate::model::level::Manifest;

/// Writes `manifest` as indented JSON, replacing any existing file.
///
/// The parent directory is created when missing.
pub fn write(path: &Path, manifest: &Manifest) -> Result<(), Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::write(parent, e))?;
    }

    let file = File::create(path).map_err(|e| Error::write(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, manifest).map_err(|source| Error::Serialize {
        format: Format::Json,
        source,
    })?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| Error::write(path, e))?;

    info!(
        "saved dataset of {} levels to '{}'",
        manifest.total,
        path.display()
    );
    Ok(())
}

pub fn read(path: &Path) -> Result<Manifest, Error> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        Error::parse(
            Format::Json,
            e.line(),
            format!("invalid manifest: {}", e),
        )
    })
}
