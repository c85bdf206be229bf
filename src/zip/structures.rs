use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

use crate::error::Result;

/// End of Central Directory (EOCD) - 22 bytes followed by the archive comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndOfCentralDirectory {
    pub disk_number: u16,
    pub disk_with_cd: u16,
    pub disk_entries: u16,
    pub total_entries: u16,
    pub cd_size: u32,
    pub cd_offset: u32,
    pub comment_len: u16,
}

impl EndOfCentralDirectory {
    pub const SIGNATURE: [u8; 4] = *b"PK\x05\x06";
    pub const SIZE: usize = 22;

    /// Decode the fixed part of the record.
    ///
    /// The signature is assumed to have been matched already; only the
    /// length is checked, and a short buffer is reported as `UnexpectedEof`.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(data.get(4..).unwrap_or_default());

        Ok(Self {
            disk_number: cursor.read_u16::<LittleEndian>()?,
            disk_with_cd: cursor.read_u16::<LittleEndian>()?,
            disk_entries: cursor.read_u16::<LittleEndian>()?,
            total_entries: cursor.read_u16::<LittleEndian>()?,
            cd_size: cursor.read_u32::<LittleEndian>()?,
            cd_offset: cursor.read_u32::<LittleEndian>()?,
            comment_len: cursor.read_u16::<LittleEndian>()?,
        })
    }

    /// Total length of the record including its trailing comment.
    pub fn total_len(&self) -> u64 {
        Self::SIZE as u64 + self.comment_len as u64
    }

    /// Whether the record defers to a ZIP64 end of central directory.
    ///
    /// Informational only: the comment length of this record still decides
    /// where the archive ends.
    pub fn is_zip64(&self) -> bool {
        self.disk_entries == 0xFFFF
            || self.total_entries == 0xFFFF
            || self.cd_size == 0xFFFFFFFF
            || self.cd_offset == 0xFFFFFFFF
    }
}
