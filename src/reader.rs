//! # Reader Module
//!
//! Reads a file start-to-end one or more times, feeding every byte of every
//! pass into a single streaming CRC32 (IEEE polynomial, as used by ZIP and
//! gzip). Reading a file N times yields the same checksum as hashing N
//! concatenated copies of its contents.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use std::time::Instant;

use crc32fast::Hasher;
use tracing::debug;

use crate::constants::BLOCK_SIZE;
use crate::progress::ProgressSink;

/// Read `path` completely `passes` times and return the CRC32 accumulated
/// over all bytes of all passes.
///
/// The file is reopened for every pass rather than rewound; the checksum
/// accumulator is never reset between passes. Chunks may be shorter than
/// `BLOCK_SIZE`, in particular the final chunk of each pass; only the bytes
/// actually read are hashed. The final checksum is also emitted through the
/// progress sink as `crc32=` followed by eight lowercase hex digits.
pub fn read_checksum<P>(path: &Path, passes: u64, progress: &mut P) -> io::Result<u32>
where
    P: ProgressSink + ?Sized,
{
    debug!(path = %path.display(), passes, "checksumming file");

    let mut crc = Hasher::new();
    let mut buf = vec![0u8; BLOCK_SIZE];

    let start = Instant::now();
    for pass in 0..passes {
        let file = File::open(path)?;
        let mut input = BufReader::with_capacity(BLOCK_SIZE, file);
        let mut chunk = 0u64;
        loop {
            let n = input.read(&mut buf)?;
            if n == 0 {
                break;
            }
            crc.update(&buf[..n]);
            chunk += 1;

            let elapsed = start.elapsed().as_millis();
            progress.update(&format!(
                "read {}/{} # {} ... {}ms",
                pass + 1,
                passes,
                chunk,
                elapsed
            ))?;
        }
    }

    let sum = crc.finalize();
    let elapsed = start.elapsed().as_millis();
    progress.finish(&format!("crc32={sum:08x}"))?;
    progress.finish(&format!("done ... {elapsed}ms"))?;
    Ok(sum)
}
