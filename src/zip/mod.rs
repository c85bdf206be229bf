//! Locating the end of ZIP data.
//!
//! This module finds where a ZIP archive really ends inside a file that may
//! carry extra bytes after it, such as a download padded by a server or an
//! archive with a signature block appended.
//!
//! ## Architecture
//!
//! - [`structures`]: layout of the End of Central Directory (EOCD) record
//! - [`locator`]: the tail search and the [`locate`] entry point
//!
//! ## ZIP Format Overview
//!
//! A ZIP file consists of:
//! 1. Local file headers and compressed data for each file
//! 2. Central Directory with metadata for all files
//! 3. End of Central Directory (EOCD) record, then an optional comment
//!
//! ZIP64 archives add their own end records before the EOCD, but the
//! classic EOCD is still the last structure, so its comment length
//! decides the end of the archive in both cases.
//!
//! ## Limitations
//!
//! - The archive itself is not validated beyond the EOCD signature
//! - A comment containing `PK\x05\x06` can be mistaken for the record

pub mod locator;
pub mod structures;

pub use locator::{SearchWindow, TailWindows, find_signature, locate, read_record};
pub use structures::EndOfCentralDirectory;
