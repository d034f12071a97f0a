//! Staging and emission of zip archives.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use zip::{CompressionMethod, ZipArchive, ZipWriter, write::SimpleFileOptions};

use crate::error::{CleanError, IoResultExt, Result};

/// Makes every directory exist and be empty.
///
/// # Errors
///
/// Fails when a directory cannot be removed or created.
pub fn reset_workspace<P: AsRef<Path>>(dirs: &[P]) -> Result<()> {
    for dir in dirs {
        let dir = dir.as_ref();
        if dir.exists() {
            std::fs::remove_dir_all(dir).at_path(dir)?;
        }
        std::fs::create_dir_all(dir).at_path(dir)?;
        tracing::debug!(dir = %dir.display(), "workspace directory ready");
    }
    Ok(())
}

/// Extracts all entries of the archive under `dest`, keeping their relative paths.
///
/// Returns the names of the file entries in archive order. Directory entries and entries escaping `dest` are not listed.
///
/// # Errors
///
/// Fails when the archive is malformed or a file cannot be written.
pub fn extract_archive(path: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let zip_err = |source| CleanError::Zip {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).at_path(path)?;
    let mut archive = ZipArchive::new(file).map_err(zip_err)?;

    let mut names = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let entry = archive.by_index(index).map_err(zip_err)?;
        if entry.is_dir() || entry.enclosed_name().is_none() {
            continue;
        }
        names.push(entry.name().to_string());
    }
    archive.extract(dest.as_ref()).map_err(zip_err)?;
    Ok(names)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum EntrySource {
    Buffer(Vec<u8>),
    LocalFile(PathBuf),
}

/// Collects entries for a new archive.
///
/// Adding an entry under a name already present replaces the earlier one in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArchiveBuilder {
    entries: Vec<(String, EntrySource)>,
}

impl ArchiveBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: vec![] }
    }

    fn insert(&mut self, name: String, source: EntrySource) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = source,
            None => self.entries.push((name, source)),
        }
    }

    /// Adds an entry with in-memory content.
    pub fn add_buffer(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.insert(name.into(), EntrySource::Buffer(bytes.into()));
    }

    /// Adds an entry read from a file on disk when the archive is written.
    pub fn add_local_file(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.insert(name.into(), EntrySource::LocalFile(path.into()));
    }

    /// Names of the entries in order.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Writes the archive, deflating every entry.
    ///
    /// # Errors
    ///
    /// Fails when a local file cannot be read or the archive cannot be written.
    pub fn write_zip(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let zip_err = |source| CleanError::Zip {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).at_path(parent)?;
        }
        let file = File::create(path).at_path(path)?;
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        for (name, source) in &self.entries {
            let bytes = match source {
                EntrySource::Buffer(bytes) => std::borrow::Cow::Borrowed(bytes.as_slice()),
                EntrySource::LocalFile(local) => {
                    std::borrow::Cow::Owned(std::fs::read(local).at_path(local)?)
                }
            };
            zip.start_file(name.as_str(), options).map_err(zip_err)?;
            zip.write_all(&bytes).at_path(path)?;
        }
        zip.finish().map_err(zip_err)?;
        Ok(())
    }
}
