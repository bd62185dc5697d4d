//! Global allocator for the command-line binary.
//!
//! The library leaves allocator choice to its users; the binary uses mimalloc.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
