// ============================================================================
// Interfaces Module
// I/O adapters over the decimal codec
// ============================================================================

pub mod stream;

pub use stream::{write_big_int, writeln_big_int, BigIntReader, StreamError};
