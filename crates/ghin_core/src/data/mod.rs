//! Reading GHIN documents from disk.

pub mod loader;
