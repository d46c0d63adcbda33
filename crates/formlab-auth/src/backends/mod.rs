//! Authentication backends.

mod memory;

pub use memory::InMemoryBackend;
