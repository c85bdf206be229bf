//! Locating the end of ZIP data inside a file with trailing garbage.
//!
//! ## Search Strategy
//!
//! The end of central directory record sits at the tail of an archive,
//! followed only by its comment. Anything after that comment is garbage.
//! The locator reads the tail of the file in growing windows:
//!
//! 1. Start with a 64 byte window, capped at the search bound plus the
//!    record length
//! 2. Scan each read for the `PK\x05\x06` signature, leftmost match first
//! 3. On a miss, double the window and read only the newly exposed region
//!    plus the first 4 bytes of the previous read, so a signature straddling
//!    both reads is still seen
//! 4. Stop when the capped window has been scanned or the start of the file
//!    is reached
//!
//! Once found, the record's comment length gives the end of the archive.

use memchr::memmem;
use tracing::debug;

use crate::error::{Error, Result};
use crate::io::ByteSource;

use super::structures::EndOfCentralDirectory;

/// Initial size of the tail window.
const INITIAL_WINDOW: u64 = 0x40;

/// Bytes each read reaches back into the previous window.
const OVERLAP: u64 = EndOfCentralDirectory::SIGNATURE.len() as u64;

/// Region of the file read by one search attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    /// Absolute offset of the first byte read.
    pub start: u64,
    /// Number of bytes read.
    pub len: u64,
}

/// Successive tail windows for a file of a given size.
///
/// Each window doubles the previous one up to the cap. The iterator ends
/// after the capped window has been produced or once a window starts at
/// offset zero.
#[derive(Debug, Clone)]
pub struct TailWindows {
    file_size: u64,
    cap: u64,
    target: u64,
    prev_start: u64,
    exhausted: bool,
}

impl TailWindows {
    /// Windows over the last `search_bound + 22` bytes of a `file_size` byte file.
    pub fn new(file_size: u64, search_bound: u64) -> Self {
        let cap = search_bound.saturating_add(EndOfCentralDirectory::SIZE as u64);
        Self {
            file_size,
            cap,
            target: INITIAL_WINDOW.min(cap),
            prev_start: file_size,
            exhausted: false,
        }
    }
}

impl Iterator for TailWindows {
    type Item = SearchWindow;

    fn next(&mut self) -> Option<SearchWindow> {
        if self.exhausted || self.prev_start == 0 {
            return None;
        }

        let start = self.file_size.saturating_sub(self.target);
        let end = (self.prev_start + OVERLAP).min(self.file_size);
        self.prev_start = start;

        if self.target == self.cap {
            self.exhausted = true;
        } else {
            self.target = self.target.saturating_mul(2).min(self.cap);
        }

        Some(SearchWindow {
            start,
            len: end - start,
        })
    }
}

/// Find the leftmost end of central directory signature in `buf`.
pub fn find_signature(buf: &[u8]) -> Option<usize> {
    memmem::find(buf, &EndOfCentralDirectory::SIGNATURE)
}

/// Read the record at `offset` and return the end of its comment.
///
/// Fails with `UnexpectedEof` if fewer than 22 bytes are available, or if
/// the comment would extend past `file_size`.
pub fn read_record<S: ByteSource + ?Sized>(
    source: &mut S,
    offset: u64,
    file_size: u64,
) -> Result<u64> {
    let mut buf = [0u8; EndOfCentralDirectory::SIZE];
    source.seek_to(offset)?;
    source.read_exact_into(&mut buf)?;

    let eocd = EndOfCentralDirectory::from_bytes(&buf)?;
    let end = offset + eocd.total_len();
    debug!(
        offset,
        comment_len = eocd.comment_len,
        zip64 = eocd.is_zip64(),
        "Found end of central directory"
    );

    if end > file_size {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("ZIP comment ends at {end}, past end of file at {file_size}"),
        )));
    }
    Ok(end)
}

/// Compute the end offset of the ZIP data in `source`.
///
/// At most `search_bound` bytes beyond the 22 byte record are inspected
/// at the tail of the source. Returns [`Error::SignatureNotFound`] if no
/// record lies within that range.
pub fn locate<S: ByteSource + ?Sized>(source: &mut S, search_bound: u64) -> Result<u64> {
    let file_size = source.seek_end()?;

    let mut buf = Vec::new();
    for window in TailWindows::new(file_size, search_bound) {
        debug!(start = window.start, len = window.len, "Scanning tail window");

        buf.resize(window.len as usize, 0);
        source.seek_to(window.start)?;
        source.read_exact_into(&mut buf)?;

        if let Some(pos) = find_signature(&buf) {
            return read_record(source, window.start + pos as u64, file_size);
        }
    }

    Err(Error::SignatureNotFound)
}
