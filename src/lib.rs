//! # ziptrim
//!
//! Detect and clean up garbage bytes appended after the end of a ZIP archive.
//!
//! Downloads, installers and signed bundles sometimes carry extra data after
//! the archive proper. Most unzip tools cope, but some reject such files.
//! This library finds where the ZIP data really ends by locating the End of
//! Central Directory record near the tail of the file, and can report, copy
//! or truncate the archive accordingly.
//!
//! ## Features
//!
//! - Bounded tail search that never scans an entire large file
//! - Standard and ZIP64 archives, with or without a trailing comment
//! - Copy the ZIP portion to a new file, or truncate in place with a backup
//!
//! ## Example
//!
//! ```no_run
//! use std::fs::File;
//! use ziptrim::locate;
//!
//! fn main() -> ziptrim::Result<()> {
//!     let mut file = File::open("download.zip")?;
//!     let file_size = file.metadata()?.len();
//!     let zip_size = locate(&mut file, 4 * 1024 * 1024)?;
//!     println!("{} bytes of garbage", file_size - zip_size);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod cli;
pub mod error;
pub mod io;
pub mod zip;

pub use actions::{Config, Truncation, ZipSize};
pub use cli::{Action, Cli};
pub use error::{Error, Result};
pub use io::ByteSource;
pub use zip::{EndOfCentralDirectory, locate};
