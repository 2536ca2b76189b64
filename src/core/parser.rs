//! Line-oriented parsing of the `userDatabase.properties` store.
//!
//! The store is not parsed as a full properties grammar. Two narrow
//! extractions are supported, each with its own line rules:
//! - [`parse_usernames`] scans raw lines for `.username=`.
//! - [`parse_records`] groups `user.<hash>.<property>=<value>` lines by hash.

use crate::constants;
use crate::models::record::RecordSet;
use std::borrow::Cow;

/// Extract usernames in file order.
///
/// A line qualifies only when it does not start with `#`, is terminated by
/// a newline, and contains `.username=`. The text after the separator (up
/// to any second separator) is trimmed and returned. An unterminated last
/// line is never included.
pub fn parse_usernames(content: &str) -> Vec<String> {
    universal_newlines(content)
        .split_inclusive('\n')
        .filter(|line| {
            !line.starts_with(constants::COMMENT_PREFIX)
                && line.ends_with('\n')
                && line.contains(constants::USERNAME_SEPARATOR)
        })
        .filter_map(|line| line.split(constants::USERNAME_SEPARATOR).nth(1))
        .map(|name| name.trim().to_string())
        .collect()
}

/// Group `user.<hash>.<property>=<value>` lines into records.
///
/// Lines are trimmed first; blank lines and comments are skipped. The line
/// is split on its first `=`. The key needs at least three dot-separated
/// segments, the first being exactly `user`; the second is the hash and the
/// third the property name. Anything else is ignored.
pub fn parse_records(content: &str) -> RecordSet {
    let mut records = RecordSet::new();
    for line in universal_newlines(content).lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(constants::COMMENT_PREFIX) {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        if let Some((hash, property)) = split_record_key(key) {
            records.insert(hash, property, value);
        }
    }
    records
}

/// `\r\n` and lone `\r` both end a line.
fn universal_newlines(content: &str) -> Cow<'_, str> {
    if !content.contains('\r') {
        return Cow::Borrowed(content);
    }
    Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
}

fn split_record_key(key: &str) -> Option<(&str, &str)> {
    let mut segments = key.split('.');
    if segments.next()? != constants::RECORD_KEY_PREFIX {
        return None;
    }
    let hash = segments.next()?;
    let property = segments.next()?;
    Some((hash, property))
}
