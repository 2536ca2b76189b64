//! Centralized constants for store locations, file content, and placeholders.

/// Default store location, relative to the invoking user's home directory.
pub const DEFAULT_STORE_RELATIVE: &[&str] = &[
    "libraries",
    "apache-tomcat-10.1.41",
    "bin",
    "data",
    "userDatabase.properties",
];

/// Content written by `--init-db` into a freshly created store.
pub const EMPTY_STORE_CONTENT: &str = "# Empty userDatabase.properties file\n";

/// Permission mode for a store created by `--init-db`.
pub const STORE_FILE_MODE: u32 = 0o600;

/// Lines starting with this prefix are comments.
pub const COMMENT_PREFIX: &str = "#";

/// Separator recognised by the username-only listing.
pub const USERNAME_SEPARATOR: &str = ".username=";

/// First segment of a full-record key (`user.<hash>.<property>`).
pub const RECORD_KEY_PREFIX: &str = "user";

/// Placeholder for a record without a username.
pub const UNKNOWN_USERNAME: &str = "Unknown";

/// Placeholder for any other missing property.
pub const NOT_FOUND: &str = "Not found";

/// Record property names.
pub const PROP_USERNAME: &str = "username";
pub const PROP_PUBLIC_KEY_E: &str = "publicKeyE";
pub const PROP_PUBLIC_KEY_N: &str = "publicKeyN";
pub const PROP_REGISTRATION_TIME: &str = "registrationTime";

/// Rendering format for registration times (`DD-MM-YYYY HH:MM:SS`).
pub const REGISTRATION_TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Valid output formats for `--read-keys`.
pub const VALID_FORMATS: &[&str] = &["text", "table", "json"];

/// Exit status after Ctrl+C; an interrupted run still exits cleanly.
pub const EXIT_INTERRUPTED: i32 = 0;
