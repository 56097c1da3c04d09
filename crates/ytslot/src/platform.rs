pub mod browser;
#[cfg(feature = "memory-dom")]
pub mod memory;
