//! SQL file writer
//!
//! Writes a script to `<table>.sql`, or to the first free `<table>_N.sql`
//! when that name is taken. Existing files are never overwritten.

use crate::error::{Error, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Highest numeric suffix tried before giving up
const MAX_SUFFIX: u32 = 10_000;

/// Writes SQL scripts into a directory
#[derive(Debug, Clone)]
pub struct SqlFileWriter {
    dir: PathBuf,
}

impl SqlFileWriter {
    /// Create a writer targeting the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `content` to a new file named after `table_name`
    ///
    /// Each candidate name is claimed with create-new semantics, so a file
    /// created by a concurrent run between checks is skipped rather than
    /// overwritten. If writing fails the partial file is removed.
    pub fn write(&self, table_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.write_with(table_name, |file| {
            file.write_all(content.as_bytes())?;
            file.sync_all()
        })?;

        info!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(path)
    }

    /// Claim a unique file and fill it with `fill`, removing it if `fill` fails
    pub(crate) fn write_with<F>(&self, table_name: &str, fill: F) -> Result<PathBuf>
    where
        F: FnOnce(&mut File) -> std::io::Result<()>,
    {
        fs::create_dir_all(&self.dir).map_err(|e| Error::write(&self.dir, e))?;

        let (path, mut file) = self.create_unique(table_name)?;
        let result = fill(&mut file);
        drop(file);

        if let Err(e) = result {
            debug!("Removing partial file {}", path.display());
            let _ = fs::remove_file(&path);
            return Err(Error::write(path, e));
        }

        Ok(path)
    }

    fn create_unique(&self, table_name: &str) -> Result<(PathBuf, File)> {
        for suffix in 0..=MAX_SUFFIX {
            let path = candidate_path(&self.dir, table_name, suffix);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    debug!("{} exists, trying next suffix", path.display());
                }
                Err(e) => return Err(Error::write(path, e)),
            }
        }

        Err(Error::write(
            candidate_path(&self.dir, table_name, 0),
            std::io::Error::new(
                ErrorKind::AlreadyExists,
                format!("no free file name up to suffix _{MAX_SUFFIX}"),
            ),
        ))
    }
}

/// Path for a given suffix: 0 is `<table>.sql`, N is `<table>_N.sql`
pub fn candidate_path(dir: &Path, table_name: &str, suffix: u32) -> PathBuf {
    if suffix == 0 {
        dir.join(format!("{table_name}.sql"))
    } else {
        dir.join(format!("{table_name}_{suffix}.sql"))
    }
}
