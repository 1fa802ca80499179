//! Group file loading
//!
//! Reads group descriptions from JSON. A file may hold any of:
//! - an array of group records, as served by the groups backend listing
//! - a single group record: `{"name": ..., "description": ..., "structure": {...}}`
//! - a bare structure: `{"type": "multiplication_table", "table": {...}}`
//! - a bare table: `{"e": {"e": "e", ...}, ...}`
//!
//! Bare structures and tables are wrapped in a record named after the file.

use crate::table::CayleyTable;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name given to bare tables read from a source with no usable file name
const DEFAULT_GROUP_NAME: &str = "group";

/// Errors raised while reading or selecting group records
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the file
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File contents are not a recognised group document
    #[error("Invalid group JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The selected record carries no multiplication table
    #[error("Group {0} has no multiplication table to validate")]
    NoTable(String),

    /// No record matches the requested name
    #[error("No group named {0}")]
    UnknownGroup(String),

    /// No record in the document carries a multiplication table
    #[error("No group with a multiplication table found")]
    NoTables,
}

/// Structure attached to a group record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStructure {
    /// Free-form structure kind, e.g. `"multiplication_table"` or `"cyclic"`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<CayleyTable>,
}

/// A named group as stored by the groups backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub structure: Option<GroupStructure>,
}

impl GroupRecord {
    /// Wrap a bare table in a record
    pub fn from_table(name: impl Into<String>, table: CayleyTable) -> Self {
        Self {
            name: name.into(),
            description: None,
            id: None,
            structure: Some(GroupStructure {
                kind: Some("multiplication_table".to_string()),
                table: Some(table),
            }),
        }
    }

    pub fn table(&self) -> Option<&CayleyTable> {
        self.structure.as_ref().and_then(|s| s.table.as_ref())
    }

    /// Description for display, or a placeholder
    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(description) if !description.is_empty() => description,
            _ => "No description",
        }
    }
}

/// Parse a group document, naming bare structures and tables `default_name`
pub fn parse_group_document(
    json: &str,
    default_name: &str,
) -> Result<Vec<GroupRecord>, serde_json::Error> {
    let value: Value = serde_json::from_str(json)?;

    if value.is_array() {
        return serde_json::from_value(value);
    }

    if value.get("name").is_some_and(Value::is_string) {
        return Ok(vec![serde_json::from_value(value)?]);
    }

    if value.as_object().is_some_and(is_structure_shaped) {
        let structure: GroupStructure = serde_json::from_value(value)?;
        return Ok(vec![GroupRecord {
            name: default_name.to_string(),
            description: None,
            id: None,
            structure: Some(structure),
        }]);
    }

    let table: CayleyTable = serde_json::from_value(value)?;
    Ok(vec![GroupRecord::from_table(default_name, table)])
}

/// Every value is an object, as in a row map
fn is_table_shaped(map: &Map<String, Value>) -> bool {
    map.values().all(Value::is_object)
}

/// Has a scalar `type` field, or a `table` field that is not itself a row
///
/// Anything else is parsed as a table, so a stray scalar row is a parse error.
fn is_structure_shaped(map: &Map<String, Value>) -> bool {
    let scalar_type = map.get("type").is_some_and(|kind| !kind.is_object());
    let table_field = match map.get("table") {
        Some(Value::Object(table)) => !table.is_empty() && is_table_shaped(table),
        Some(_) => true,
        None => false,
    };
    scalar_type || table_field
}

/// Load every group record from a JSON file
pub fn load_group_file(path: &Path) -> Result<Vec<GroupRecord>, LoadError> {
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let default_name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(DEFAULT_GROUP_NAME);

    let records = parse_group_document(&json, default_name).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded {} group record(s) from {}", records.len(), path.display());
    Ok(records)
}

/// Select a record with a table, by name or the first one available
pub fn find_record<'a>(
    records: &'a [GroupRecord],
    name: Option<&str>,
) -> Result<&'a GroupRecord, LoadError> {
    match name {
        Some(name) => {
            let record = records
                .iter()
                .find(|record| record.name == name)
                .ok_or_else(|| LoadError::UnknownGroup(name.to_string()))?;
            match record.table() {
                Some(_) => Ok(record),
                None => Err(LoadError::NoTable(record.name.clone())),
            }
        }
        None => records
            .iter()
            .find(|record| record.table().is_some())
            .ok_or(LoadError::NoTables),
    }
}
