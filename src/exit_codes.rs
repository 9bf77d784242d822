//! Stable exit codes for deploykit CLI commands.

/// Every manifest entry was materialized.
pub const OK: i32 = 0;
/// Unexpected failure outside of materialization.
pub const ERROR: i32 = 1;
/// Parameters were rejected; nothing was written.
pub const INVALID_CONFIGURATION: i32 = 2;
/// The reference document could not be read; nothing was written.
pub const SOURCE_UNAVAILABLE: i32 = 3;
/// At least one manifest entry failed; earlier and later entries remain on disk.
pub const PARTIAL_WRITE: i32 = 4;
