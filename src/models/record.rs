//! Credential records as parsed from the store file.

use crate::constants;
use indexmap::IndexMap;

/// One user record: every `user.<hash>.<property>` line sharing a hash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialRecord {
    pub hash: String,
    /// Properties in first-seen order; a repeated property keeps the last value.
    pub properties: IndexMap<String, String>,
}

impl CredentialRecord {
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            properties: IndexMap::new(),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    pub fn username(&self) -> &str {
        self.get(constants::PROP_USERNAME)
            .unwrap_or(constants::UNKNOWN_USERNAME)
    }

    pub fn public_key_e(&self) -> &str {
        self.get(constants::PROP_PUBLIC_KEY_E)
            .unwrap_or(constants::NOT_FOUND)
    }

    pub fn public_key_n(&self) -> &str {
        self.get(constants::PROP_PUBLIC_KEY_N)
            .unwrap_or(constants::NOT_FOUND)
    }

    /// Raw registration time (milliseconds since the epoch), or the
    /// `Not found` placeholder.
    pub fn registration_time(&self) -> &str {
        self.get(constants::PROP_REGISTRATION_TIME)
            .unwrap_or(constants::NOT_FOUND)
    }
}

/// All records of a store, keyed by hash in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: IndexMap<String, CredentialRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `record[hash][property]`, creating the record on first sight.
    pub fn insert(&mut self, hash: &str, property: &str, value: &str) {
        self.records
            .entry(hash.to_string())
            .or_insert_with(|| CredentialRecord::new(hash))
            .properties
            .insert(property.to_string(), value.to_string());
    }

    pub fn get(&self, hash: &str) -> Option<&CredentialRecord> {
        self.records.get(hash)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CredentialRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
