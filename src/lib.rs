//! District table generation library
//!
//! Re-exports modules for use by the binary and tools.

pub mod districts;
