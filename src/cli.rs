//! # CLI Module
//!
//! Argument parsing for the legacy single-dash surface:
//!
//! ```text
//! bigblob -create <file> [-size N]
//! bigblob -write  <file> [-size N]
//! bigblob -read   <file> [-count N]
//! ```
//!
//! `-count` and `-size` are synonyms; either is accepted for either mode.
//! Parsing is a pure function so invalid invocations are testable without
//! spawning a process.

use std::path::PathBuf;

use crate::constants::DEFAULT_COUNT;
use crate::error::UsageError;

/// Usage text printed on any invocation error.
pub const USAGE: &str = "\
usage: bigblob -create <file> [-size N]
       bigblob -write  <file> [-size N]
       bigblob -read   <file> [-count N]

  -create, -write   fill <file> with N blocks of 1 MiB of random bytes
  -read             read <file> N times, printing the CRC32 of all passes
  -size, -count     repeat count N, a positive integer (default 1)
";

/// A fully parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write `count` random 1 MiB blocks to `path`
    Write { path: PathBuf, count: u64 },
    /// Read `path` start-to-end `passes` times, checksumming all bytes
    Read { path: PathBuf, passes: u64 },
}

/// Parse the arguments following the program name.
///
/// Shape: `<mode> <file> [(-count|-size) <n>]`. When the option flag is
/// present, exactly four arguments are required; a count of zero (or
/// anything that is not a positive integer) is rejected before any I/O
/// happens.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, UsageError> {
    if args.len() < 2 {
        return Err(UsageError::MissingArguments);
    }

    let mode = args[0].as_ref();
    let path = PathBuf::from(args[1].as_ref());

    let count = if args.len() >= 3 {
        let opt = args[2].as_ref();
        if opt != "-count" && opt != "-size" {
            return Err(UsageError::UnknownOption(opt.to_string()));
        }
        if args.len() != 4 {
            return Err(UsageError::MalformedOptions);
        }
        parse_count(args[3].as_ref())?
    } else {
        DEFAULT_COUNT
    };

    match mode {
        "-create" | "-write" => Ok(Command::Write { path, count }),
        "-read" => Ok(Command::Read {
            path,
            passes: count,
        }),
        other => Err(UsageError::UnknownMode(other.to_string())),
    }
}

fn parse_count(raw: &str) -> Result<u64, UsageError> {
    match raw.parse::<u64>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(UsageError::InvalidCount(raw.to_string())),
    }
}
