//! Minimal ZIP archives for tests.
//!
//! Each archive holds a single stored entry. CRCs are left at zero since
//! nothing here reads entry data.

#![allow(dead_code)]

use byteorder::{LittleEndian, WriteBytesExt};
use std::path::{Path, PathBuf};

const ZIP64_EXTRA_ID: u16 = 0x0001;

fn local_header(out: &mut Vec<u8>, name: &str, data: &[u8], zip64: bool) {
    let size = if zip64 { 0xFFFFFFFF } else { data.len() as u32 };
    out.extend_from_slice(b"PK\x03\x04");
    out.write_u16::<LittleEndian>(if zip64 { 45 } else { 10 }).unwrap();
    out.write_u16::<LittleEndian>(0).unwrap(); // flags
    out.write_u16::<LittleEndian>(0).unwrap(); // stored
    out.write_u16::<LittleEndian>(0x6000).unwrap(); // time
    out.write_u16::<LittleEndian>(0x5A21).unwrap(); // date
    out.write_u32::<LittleEndian>(0).unwrap(); // crc32
    out.write_u32::<LittleEndian>(size).unwrap();
    out.write_u32::<LittleEndian>(size).unwrap();
    out.write_u16::<LittleEndian>(name.len() as u16).unwrap();
    out.write_u16::<LittleEndian>(if zip64 { 20 } else { 0 }).unwrap();
    out.extend_from_slice(name.as_bytes());
    if zip64 {
        out.write_u16::<LittleEndian>(ZIP64_EXTRA_ID).unwrap();
        out.write_u16::<LittleEndian>(16).unwrap();
        out.write_u64::<LittleEndian>(data.len() as u64).unwrap();
        out.write_u64::<LittleEndian>(data.len() as u64).unwrap();
    }
    out.extend_from_slice(data);
}

fn central_header(out: &mut Vec<u8>, name: &str, data: &[u8], zip64: bool) {
    let size = if zip64 { 0xFFFFFFFF } else { data.len() as u32 };
    out.extend_from_slice(b"PK\x01\x02");
    out.write_u16::<LittleEndian>(if zip64 { 45 } else { 10 }).unwrap(); // made by
    out.write_u16::<LittleEndian>(if zip64 { 45 } else { 10 }).unwrap(); // needed
    out.write_u16::<LittleEndian>(0).unwrap();
    out.write_u16::<LittleEndian>(0).unwrap();
    out.write_u16::<LittleEndian>(0x6000).unwrap();
    out.write_u16::<LittleEndian>(0x5A21).unwrap();
    out.write_u32::<LittleEndian>(0).unwrap();
    out.write_u32::<LittleEndian>(size).unwrap();
    out.write_u32::<LittleEndian>(size).unwrap();
    out.write_u16::<LittleEndian>(name.len() as u16).unwrap();
    out.write_u16::<LittleEndian>(if zip64 { 28 } else { 0 }).unwrap();
    out.write_u16::<LittleEndian>(0).unwrap(); // comment
    out.write_u16::<LittleEndian>(0).unwrap(); // disk
    out.write_u16::<LittleEndian>(0).unwrap(); // internal attrs
    out.write_u32::<LittleEndian>(0).unwrap(); // external attrs
    out.write_u32::<LittleEndian>(if zip64 { 0xFFFFFFFF } else { 0 }).unwrap();
    out.extend_from_slice(name.as_bytes());
    if zip64 {
        out.write_u16::<LittleEndian>(ZIP64_EXTRA_ID).unwrap();
        out.write_u16::<LittleEndian>(24).unwrap();
        out.write_u64::<LittleEndian>(data.len() as u64).unwrap();
        out.write_u64::<LittleEndian>(data.len() as u64).unwrap();
        out.write_u64::<LittleEndian>(0).unwrap();
    }
}

fn end_record(out: &mut Vec<u8>, entries: u16, cd_size: u32, cd_offset: u32, comment: &[u8]) {
    out.extend_from_slice(b"PK\x05\x06");
    out.write_u16::<LittleEndian>(0).unwrap();
    out.write_u16::<LittleEndian>(0).unwrap();
    out.write_u16::<LittleEndian>(entries).unwrap();
    out.write_u16::<LittleEndian>(entries).unwrap();
    out.write_u32::<LittleEndian>(cd_size).unwrap();
    out.write_u32::<LittleEndian>(cd_offset).unwrap();
    out.write_u16::<LittleEndian>(comment.len() as u16).unwrap();
    out.extend_from_slice(comment);
}

/// Single entry archive with a classic end of central directory.
pub fn zip32(name: &str, data: &[u8], comment: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    local_header(&mut out, name, data, false);
    let cd_offset = out.len();
    central_header(&mut out, name, data, false);
    let cd_size = out.len() - cd_offset;
    end_record(&mut out, 1, cd_size as u32, cd_offset as u32, comment);
    out
}

/// Single entry archive using ZIP64 end records.
pub fn zip64(name: &str, data: &[u8], comment: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    local_header(&mut out, name, data, true);
    let cd_offset = out.len();
    central_header(&mut out, name, data, true);
    let cd_size = out.len() - cd_offset;

    let eocd64_offset = out.len();
    out.extend_from_slice(b"PK\x06\x06");
    out.write_u64::<LittleEndian>(44).unwrap();
    out.write_u16::<LittleEndian>(45).unwrap();
    out.write_u16::<LittleEndian>(45).unwrap();
    out.write_u32::<LittleEndian>(0).unwrap();
    out.write_u32::<LittleEndian>(0).unwrap();
    out.write_u64::<LittleEndian>(1).unwrap();
    out.write_u64::<LittleEndian>(1).unwrap();
    out.write_u64::<LittleEndian>(cd_size as u64).unwrap();
    out.write_u64::<LittleEndian>(cd_offset as u64).unwrap();

    out.extend_from_slice(b"PK\x06\x07");
    out.write_u32::<LittleEndian>(0).unwrap();
    out.write_u64::<LittleEndian>(eocd64_offset as u64).unwrap();
    out.write_u32::<LittleEndian>(1).unwrap();

    end_record(&mut out, 0xFFFF, 0xFFFFFFFF, 0xFFFFFFFF, comment);
    out
}

/// The 109 byte classic archive.
pub fn standard() -> Vec<u8> {
    zip32("a.txt", b"x", b"")
}

/// The 337 byte ZIP64 archive.
pub fn large() -> Vec<u8> {
    zip64("data.bin", &[b'z'; 99], b"")
}

/// Write `bytes` to `name` inside `dir`.
pub fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// `archive` followed by `len` bytes of garbage.
pub fn with_garbage(archive: &[u8], len: usize) -> Vec<u8> {
    let mut out = archive.to_vec();
    out.extend((0..len).map(|i| (i % 251) as u8 | 0x80));
    out
}
