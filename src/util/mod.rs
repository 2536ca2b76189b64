//! Utility modules for filesystem, paths, and console output.

pub mod console;
pub mod fs;
pub mod path;
