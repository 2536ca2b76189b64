//! `--read` and `--read-keys` handlers.

use crate::core::key_id;
use crate::core::{parser, store, timestamp};
use crate::models::record::RecordSet;
use anyhow::{Context, Result};
use chrono::{Local, TimeZone};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Table};
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Table,
    Json,
}

pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    match s {
        "text" => Ok(OutputFormat::Text),
        "table" => Ok(OutputFormat::Table),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!(
            "invalid format '{}', must be one of: {}",
            s,
            crate::constants::VALID_FORMATS.join(", ")
        )),
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordItem {
    pub username: String,
    pub hash: String,
    pub public_key_e: String,
    pub public_key_n: String,
    pub registration_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
}

pub fn run_read<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let Some(content) = store::read(path)? else {
        writeln!(out, "File '{}' not found.", path.display())?;
        return Ok(());
    };

    let users = parser::parse_usernames(&content);
    if users.is_empty() {
        writeln!(out, "No users found.")?;
        return Ok(());
    }

    writeln!(out, "Found users:")?;
    for user in users {
        writeln!(out, "  • {}", user)?;
    }
    Ok(())
}

pub fn run_read_keys<W: Write>(
    path: &Path,
    format: OutputFormat,
    verify: bool,
    out: &mut W,
) -> Result<()> {
    let Some(content) = store::read(path)? else {
        writeln!(out, "File '{}' not found.", path.display())?;
        return Ok(());
    };

    let records = parser::parse_records(&content);
    let items = build_items(&records, verify, &Local);
    render(&items, format, out)
}

/// Resolve placeholders and format timestamps for every record, in store order.
pub fn build_items<Tz>(records: &RecordSet, verify: bool, tz: &Tz) -> Vec<RecordItem>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    records
        .iter()
        .map(|record| RecordItem {
            username: record.username().to_string(),
            hash: record.hash.clone(),
            public_key_e: record.public_key_e().to_string(),
            public_key_n: record.public_key_n().to_string(),
            registration_time: timestamp::render_registration_time(
                record.registration_time(),
                tz,
            ),
            key_id: verify.then(|| key_id::verify(record).to_string()),
        })
        .collect()
}

pub fn render<W: Write>(items: &[RecordItem], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).context("serialize records")?;
            writeln!(out, "{}", json)?;
        }
        _ if items.is_empty() => writeln!(out, "No users found.")?,
        OutputFormat::Text => render_text(items, out)?,
        OutputFormat::Table => writeln!(out, "{}", render_table(items))?,
    }
    Ok(())
}

fn render_text<W: Write>(items: &[RecordItem], out: &mut W) -> Result<()> {
    writeln!(out, "Found users with keys:")?;
    for item in items {
        writeln!(out)?;
        writeln!(out, "  • User: {}", item.username)?;
        writeln!(out, "    Hash: {}", item.hash)?;
        writeln!(out, "    PublicKeyE: {}", item.public_key_e)?;
        writeln!(out, "    PublicKeyN: {}", item.public_key_n)?;
        writeln!(out, "    Registration Time: {}", item.registration_time)?;
        if let Some(key_id) = &item.key_id {
            writeln!(out, "    Key ID: {}", key_id)?;
        }
    }
    Ok(())
}

fn render_table(items: &[RecordItem]) -> Table {
    let verify = items.iter().any(|i| i.key_id.is_some());

    let mut header = vec![
        Cell::new("User").add_attribute(Attribute::Bold),
        Cell::new("Hash").add_attribute(Attribute::Bold),
        Cell::new("PublicKeyE").add_attribute(Attribute::Bold),
        Cell::new("PublicKeyN").add_attribute(Attribute::Bold),
        Cell::new("Registration Time").add_attribute(Attribute::Bold),
    ];
    if verify {
        header.push(Cell::new("Key ID").add_attribute(Attribute::Bold));
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header);

    for item in items {
        let mut row = vec![
            item.username.clone(),
            item.hash.clone(),
            item.public_key_e.clone(),
            item.public_key_n.clone(),
            item.registration_time.clone(),
        ];
        if verify {
            row.push(item.key_id.clone().unwrap_or_else(|| "-".to_string()));
        }
        table.add_row(row);
    }
    table
}
