use std::fs::{File, OpenOptions};
use std::io::{self, Read};
use std::path::Path;

/// Copy `src` into a new file at `dst`.
///
/// At most `limit` bytes are copied, or the whole file when `limit` is
/// `None`. The destination must not exist unless `overwrite` is set, in
/// which case it is truncated first. Returns the number of bytes written.
pub fn copy_file(src: &Path, dst: &Path, limit: Option<u64>, overwrite: bool) -> io::Result<u64> {
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut output = options.open(dst)?;

    let input = File::open(src)?;
    match limit {
        Some(n) => io::copy(&mut input.take(n), &mut output),
        None => io::copy(&mut &input, &mut output),
    }
}
