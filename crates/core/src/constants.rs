//! Shared constants

/// Bytes in one mebibyte (memory is reported in MiB)
pub const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Bytes in one gibibyte (disks are reported in GiB)
pub const BYTES_PER_GIB: u64 = 1024 * 1024 * 1024;
