//! Store parsing, rendering helpers, and file operations.

pub mod key_id;
pub mod parser;
pub mod paths;
pub mod store;
pub mod timestamp;
