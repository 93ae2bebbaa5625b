//! # bigblob
//!
//! Storage/IO throughput tester: generate large files of cryptographically
//! random bytes, or read a file back repeatedly while accumulating a single
//! CRC32 over everything read.
//!
//! Both operations work in fixed 1 MiB blocks and report live progress to
//! the console.

pub mod cli;
pub mod constants;
pub mod error;
pub mod logging;
pub mod progress;
pub mod reader;
pub mod writer;
