//! Tomcat credential store inspection CLI.
//!
//! Lists the users held in a `userDatabase.properties` store, optionally
//! with their public-key material and registration time, and deletes or
//! initialises the store file.
//!
//! ## Modules
//! - `cli` — Argument parsing and action handlers
//! - `core` — Parsing, timestamps, key ids, path resolution, store file operations
//! - `models` — Record types
//! - `util` — Filesystem, path, and console helpers

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod util;
