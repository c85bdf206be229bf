//! Report, copy and truncate actions built on [`locate`](crate::zip::locate).

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};
use crate::io::copy_file;
use crate::zip::locate;

/// Default extension of backup files made before truncation.
pub const DEFAULT_BACKUP_EXT: &str = "bak";

/// Default number of trailing bytes searched for the end of the archive.
pub const DEFAULT_MAX_SEARCH: u64 = 4 * 1024 * 1024;

/// Options shared by every action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Act even when the file has no trailing garbage.
    pub force: bool,
    /// Make a backup before truncating in place.
    pub backup: bool,
    /// Extension appended to the file name of the backup.
    pub backup_ext: String,
    /// Maximum garbage size searched, beyond the 22 byte EOCD record.
    pub max_search: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            force: false,
            backup: true,
            backup_ext: DEFAULT_BACKUP_EXT.to_string(),
            max_search: DEFAULT_MAX_SEARCH,
        }
    }
}

/// Sizes of a file and of the ZIP data at its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZipSize {
    pub file_size: u64,
    pub zip_size: u64,
}

impl ZipSize {
    /// Number of garbage bytes after the archive.
    pub fn garbage(&self) -> u64 {
        self.file_size - self.zip_size
    }
}

/// Result of [`truncate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Truncation {
    /// Backup written before the file was touched.
    pub backup: Option<PathBuf>,
    /// Whether the file was shortened.
    pub truncated: bool,
}

/// Measure the file and the archive it contains.
pub fn measure(path: &Path, max_search: u64) -> Result<ZipSize> {
    let mut file = File::open(path)?;
    let file_size = file.metadata()?.len();
    let zip_size = locate(&mut file, max_search)?;
    Ok(ZipSize {
        file_size,
        zip_size,
    })
}

/// Write `zip_size garbage file_size path` to `out`.
///
/// Nothing is written when there is no garbage unless forced. Returns
/// whether a line was written.
pub fn report<W: Write>(path: &Path, config: &Config, out: &mut W) -> Result<bool> {
    let size = measure(path, config.max_search)?;
    if size.garbage() == 0 && !config.force {
        return Ok(false);
    }

    writeln!(
        out,
        "{} {} {} {}",
        size.zip_size,
        size.garbage(),
        size.file_size,
        path.display()
    )?;
    Ok(true)
}

/// Copy the ZIP portion of `src` to `dst`.
///
/// If `dst` is a directory the copy is named after `src` inside it. An
/// existing destination is only replaced when forced, and never when it is
/// `src` itself. Returns the number of bytes copied, or `None` when there
/// was nothing to strip.
pub fn copy(src: &Path, dst: &Path, config: &Config) -> Result<Option<u64>> {
    let size = measure(src, config.max_search)?;
    if size.garbage() == 0 && !config.force {
        return Ok(None);
    }

    let target = match src.file_name() {
        Some(name) if dst.is_dir() => dst.join(name),
        _ => dst.to_path_buf(),
    };
    if target.exists() && fs::canonicalize(&target)? == fs::canonicalize(src)? {
        return Err(Error::Usage(
            "source and destination are the same file".to_string(),
        ));
    }

    let written = copy_file(src, &target, Some(size.zip_size), config.force)?;
    check_copied(size.zip_size, written)?;

    info!(
        from = %src.display(),
        to = %target.display(),
        bytes = written,
        "Copied ZIP data"
    );
    Ok(Some(written))
}

/// Fail unless the whole ZIP portion was written.
fn check_copied(expected: u64, actual: u64) -> Result<()> {
    if actual != expected {
        return Err(Error::SizeMismatch { expected, actual });
    }
    Ok(())
}

/// Strip the garbage from `path` in place.
///
/// The whole original file is copied to the backup path first, so a
/// failed truncation leaves the backup to recover from.
pub fn truncate(path: &Path, config: &Config) -> Result<Truncation> {
    let size = measure(path, config.max_search)?;
    if size.garbage() == 0 && !config.force {
        return Ok(Truncation::default());
    }

    let mut outcome = Truncation::default();
    if config.backup {
        let backup = backup_path(path, &config.backup_ext);
        let written = copy_file(path, &backup, None, config.force)?;
        info!(backup = %backup.display(), bytes = written, "Wrote backup");
        outcome.backup = Some(backup);
    }

    if size.garbage() == 0 {
        return Ok(outcome);
    }

    OpenOptions::new()
        .write(true)
        .open(path)?
        .set_len(size.zip_size)?;
    info!(
        path = %path.display(),
        zip_size = size.zip_size,
        removed = size.garbage(),
        "Truncated file"
    );
    outcome.truncated = true;
    Ok(outcome)
}

/// Backup location for `path`: same directory, `ext` appended to the name.
///
/// Leading dots of `ext` are ignored and an empty extension falls back to
/// [`DEFAULT_BACKUP_EXT`].
pub fn backup_path(path: &Path, ext: &str) -> PathBuf {
    let ext = match ext.trim_start_matches('.') {
        "" => DEFAULT_BACKUP_EXT,
        ext => ext,
    };
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(ext);
    path.with_file_name(name)
}
