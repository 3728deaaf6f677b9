use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

// Files at or above this size are memory-mapped instead of read in chunks.
const MMAP_THRESHOLD: u64 = 4 * 1024 * 1024;

/// Counts line-delimited records in a file: one per `\n` terminator, plus one
/// for a non-empty trailing fragment with no terminator. Bytes are counted as
/// raw bytes, never decoded, so the result is the same for any encoding that
/// keeps `\n` intact.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn count_lines(path: &Path) -> Result<usize> {
    let file = File::open(path).with_context(|| format!("open file: {}", path.display()))?;
    if let Ok(meta) = file.metadata()
        && meta.len() >= MMAP_THRESHOLD
    {
        // Safety: file is not mutated while mapping; read-only map
        if let Ok(mmap) = unsafe { memmap2::Mmap::map(&file) } {
            return Ok(count_slice(&mmap[..]));
        }
    }
    count_reader(file, path)
}

fn count_slice(data: &[u8]) -> usize {
    let newlines = memchr::memchr_iter(b'\n', data).count();
    match data.last().copied() {
        None => 0,
        Some(b'\n') => newlines,
        Some(_) => newlines + 1,
    }
}

fn count_reader<R: Read>(mut reader: R, path: &Path) -> Result<usize> {
    let mut buf = [0u8; 8192];
    let mut newlines = 0usize;
    let mut last = None;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).with_context(|| format!("read: {}", path.display())),
        };
        newlines += memchr::memchr_iter(b'\n', &buf[..n]).count();
        last = Some(buf[n - 1]);
    }
    Ok(match last {
        None => 0,
        Some(b'\n') => newlines,
        Some(_) => newlines + 1,
    })
}
