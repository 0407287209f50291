#![allow(clippy::needless_range_loop)]

/// Use mimalloc as the global allocator for both binaries.
/// Sorting churns through many small allocations (record names, working
/// copies, scratch buffers); mimalloc's thread-local caching keeps those
/// cheap.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod bench;
pub mod common;
pub mod record;
pub mod sort;
pub mod summary;
