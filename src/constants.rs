//! # Constants Module
//!
//! Centralized constants used throughout the bigblob crate.
//! This avoids magic numbers scattered across the codebase.

/// One Mebibyte in bytes
pub const MIB: usize = 1024 * 1024;

/// Block size for all write and read operations (1 MiB)
pub const BLOCK_SIZE: usize = MIB;

/// Default repeat count when `-count`/`-size` is omitted
pub const DEFAULT_COUNT: u64 = 1;
