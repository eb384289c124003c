//! Reading and writing GeoJSON feature collections.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use ovt_convert::FeatureCollection;
use tempfile::NamedTempFile;
use tracing::debug;

/// Read a GeoJSON `FeatureCollection` from `path`.
pub fn read_collection(path: &Path) -> Result<FeatureCollection> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let collection: FeatureCollection = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse GeoJSON feature collection {}", path.display()))?;
    debug!(path = %path.display(), features = collection.features.len(), "read collection");
    Ok(collection)
}

/// Write `collection` to `path` as indented JSON, replacing any existing file.
pub fn write_collection(path: &Path, collection: &FeatureCollection) -> Result<()> {
    replace_file(path, |writer| {
        serde_json::to_writer_pretty(&mut *writer, collection)
            .with_context(|| format!("serialize {}", path.display()))?;
        writer
            .write_all(b"\n")
            .with_context(|| format!("write {}", path.display()))
    })?;
    debug!(path = %path.display(), features = collection.features.len(), "wrote collection");
    Ok(())
}

/// Replace `path` with whatever `write` produces.
///
/// Output goes to a temporary file in the same directory, which is renamed
/// over `path` only after `write` succeeds and the data is synced. On any
/// error the existing file is left as it was and the temporary file removed.
pub fn replace_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("create temporary file in {}", dir.display()))?;
    let temp_path = temp.path().to_path_buf();

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        write(&mut writer)?;
        writer
            .flush()
            .with_context(|| format!("write {}", temp_path.display()))?;
    }
    temp.as_file()
        .sync_all()
        .with_context(|| format!("sync {}", temp_path.display()))?;
    temp.persist(path)
        .with_context(|| format!("replace {}", path.display()))?;
    Ok(())
}
