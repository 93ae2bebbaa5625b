//! # Writer Module
//!
//! Fills a destination file with N one-MiB blocks of cryptographically
//! random bytes, sequentially, reporting progress after each block.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use rand::CryptoRng;
use tracing::debug;

use crate::constants::BLOCK_SIZE;
use crate::progress::ProgressSink;

/// Write `count` blocks of `BLOCK_SIZE` random bytes to `path`, creating or
/// truncating it. The resulting file is exactly `count * BLOCK_SIZE` bytes.
///
/// The generator is passed in rather than constructed here so callers own
/// the single RNG instance for the invocation. Any I/O error propagates
/// immediately; a partially written file is left as-is. The file handle is
/// released on every exit path.
pub fn write_blocks<R, P>(
    path: &Path,
    count: u64,
    rng: &mut R,
    progress: &mut P,
) -> io::Result<()>
where
    R: CryptoRng + ?Sized,
    P: ProgressSink + ?Sized,
{
    debug!(path = %path.display(), count, "writing random blocks");

    let file = File::create(path)?;
    let mut out = BufWriter::with_capacity(BLOCK_SIZE, file);
    let mut buf = vec![0u8; BLOCK_SIZE];

    let start = Instant::now();
    for idx in 0..count {
        rng.fill_bytes(&mut buf);
        out.write_all(&buf)?;

        let elapsed = start.elapsed().as_millis();
        progress.update(&format!("write {}/{} ... {}ms", idx + 1, count, elapsed))?;
    }
    out.flush()?;

    let elapsed = start.elapsed().as_millis();
    progress.finish(&format!("done ... {elapsed}ms"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    use super::*;
    use crate::progress::ConsoleProgress;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn writes_exactly_count_blocks() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("out.bin");
        let mut progress = ConsoleProgress::new(Vec::new(), false);

        write_blocks(&path, 3, &mut test_rng(), &mut progress).unwrap();

        let meta = fs::metadata(&path).unwrap();
        assert_eq!(meta.len(), 3 * BLOCK_SIZE as u64);
    }

    #[test]
    fn output_looks_uniformly_random() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("out.bin");
        let mut progress = ConsoleProgress::new(Vec::new(), false);

        write_blocks(&path, 1, &mut test_rng(), &mut progress).unwrap();

        let data = fs::read(&path).unwrap();
        let mut counts = [0u64; 256];
        for &b in &data {
            counts[b as usize] += 1;
        }
        // 1 MiB of uniform bytes hits every value; expected count per value
        // is 4096, so anything wildly off signals a broken fill.
        for (value, &count) in counts.iter().enumerate() {
            assert!(count > 0, "byte value {value} never occurred");
            assert!(
                (2048..8192).contains(&count),
                "byte value {value} occurred {count} times"
            );
        }
    }

    #[test]
    fn truncates_existing_destination() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("out.bin");
        fs::write(&path, vec![0xAA; 5 * BLOCK_SIZE]).unwrap();
        let mut progress = ConsoleProgress::new(Vec::new(), false);

        write_blocks(&path, 1, &mut test_rng(), &mut progress).unwrap();

        assert_eq!(fs::metadata(&path).unwrap().len(), BLOCK_SIZE as u64);
    }

    #[test]
    fn reports_progress_per_block_and_a_final_line() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("out.bin");
        let mut progress = ConsoleProgress::new(Vec::new(), false);

        write_blocks(&path, 2, &mut test_rng(), &mut progress).unwrap();

        let text = String::from_utf8(progress.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("write 1/2 ... "));
        assert!(lines[1].starts_with("write 2/2 ... "));
        assert!(lines[2].starts_with("done ... "));
    }

    #[test]
    fn fails_on_unwritable_destination() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("no-such-dir").join("out.bin");
        let mut progress = ConsoleProgress::new(Vec::new(), false);

        let err = write_blocks(&path, 1, &mut test_rng(), &mut progress);
        assert!(err.is_err());
    }
}
