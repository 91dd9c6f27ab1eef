//! Core types for portfolio-core.
//!
//! This module defines the record shape shared by every layer: the
//! [`Project`] itself, the lightweight [`ProjectRef`] used by technique
//! statistics, and [`FieldRef`], a borrowed view of one field looked up by
//! name.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the identifier field.
pub const PROJECT_NO: &str = "project_no";
/// Name of the display-name field.
pub const PROJECT_NAME: &str = "project_name";
/// Name of the tag-list field.
pub const TECHNIQUES_USED: &str = "techniques_used";

/// One portfolio project as stored in the JSON source.
///
/// The three fields the query engine relies on are typed; everything else the
/// source carries (`start_date`, `end_date`, `course_name`, …) lands in
/// `extra` and stays reachable through [`Project::field`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier. The only lookup key.
    pub project_no: i64,
    /// Display name.
    pub project_name: String,
    /// Techniques (tags) used by the project, in source order.
    pub techniques_used: Vec<String>,
    /// Every other top-level field of the source record.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    pub fn new(project_no: i64, project_name: impl Into<String>) -> Self {
        Self {
            project_no,
            project_name: project_name.into(),
            techniques_used: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Look up a field by its source name.
    ///
    /// Returns `None` when the record does not carry the field.
    pub fn field(&self, name: &str) -> Option<FieldRef<'_>> {
        match name {
            PROJECT_NO => Some(FieldRef::Number(self.project_no)),
            PROJECT_NAME => Some(FieldRef::Text(&self.project_name)),
            TECHNIQUES_USED => Some(FieldRef::Tags(&self.techniques_used)),
            other => self.extra.get(other).map(FieldRef::Json),
        }
    }

    /// Whether the record carries a field called `name`.
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Every field of the record, typed fields first.
    pub fn fields(&self) -> impl Iterator<Item = (&str, FieldRef<'_>)> {
        [
            (PROJECT_NO, FieldRef::Number(self.project_no)),
            (PROJECT_NAME, FieldRef::Text(&self.project_name)),
            (TECHNIQUES_USED, FieldRef::Tags(&self.techniques_used)),
        ]
        .into_iter()
        .chain(
            self.extra
                .iter()
                .map(|(name, value)| (name.as_str(), FieldRef::Json(value))),
        )
    }

    /// Whether `technique` appears in `techniques_used`.
    pub fn uses(&self, technique: &str) -> bool {
        self.techniques_used.iter().any(|t| t == technique)
    }

    /// The `{id, name}` reference used by technique statistics.
    pub fn as_ref_entry(&self) -> ProjectRef {
        ProjectRef {
            id: self.project_no,
            name: self.project_name.clone(),
        }
    }
}

/// Lightweight `{id, name}` reference to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: i64,
    pub name: String,
}

/// Borrowed view of a single project field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRef<'a> {
    Number(i64),
    Text(&'a str),
    Tags(&'a [String]),
    Json(&'a Value),
}

impl FieldRef<'_> {
    /// Text form used by free-text search.
    ///
    /// Strings are kept verbatim, numbers are written in decimal, null is the
    /// empty string and lists join their elements with `", "`.
    pub fn to_text(&self) -> String {
        match self {
            FieldRef::Number(n) => n.to_string(),
            FieldRef::Text(s) => (*s).to_string(),
            FieldRef::Tags(tags) => tags.join(", "),
            FieldRef::Json(value) => json_text(value),
        }
    }
}

fn json_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(json_text).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}

impl std::fmt::Display for FieldRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
