mod local;

pub use local::copy_file;

use std::io::{Read, Seek, SeekFrom};

/// Seekable source of archive bytes.
///
/// All positioning is absolute, so a source can be handed to
/// successive calls without resetting it in between.
pub trait ByteSource {
    /// Move to an absolute offset from the start of the source.
    fn seek_to(&mut self, offset: u64) -> std::io::Result<()>;

    /// Move to the end of the source and return its length.
    fn seek_end(&mut self) -> std::io::Result<u64>;

    /// Fill `buf` completely from the current position.
    fn read_exact_into(&mut self, buf: &mut [u8]) -> std::io::Result<()>;
}

impl<T: Read + Seek> ByteSource for T {
    fn seek_to(&mut self, offset: u64) -> std::io::Result<()> {
        self.seek(SeekFrom::Start(offset)).map(|_| ())
    }

    fn seek_end(&mut self) -> std::io::Result<u64> {
        self.seek(SeekFrom::End(0))
    }

    fn read_exact_into(&mut self, buf: &mut [u8]) -> std::io::Result<()> {
        self.read_exact(buf)
    }
}
