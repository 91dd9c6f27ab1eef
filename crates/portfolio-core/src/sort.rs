//! Sort keys and the sort stage of the query engine.
//!
//! Keys are compared by kind: text lexicographically, numbers numerically,
//! lists element by element. Keys of different kinds have no order, and
//! neither do JSON objects; sorting such a mix fails with
//! [`QueryError::IncomparableSortKeys`].

use crate::error::QueryError;
use crate::types::{FieldRef, Project};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(QueryError::InvalidSortOrder(s.to_string())),
        }
    }
}

/// Orderable projection of a field value.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey<'a> {
    Null,
    Bool(bool),
    Number(NumberKey),
    Text(&'a str),
    List(Vec<SortKey<'a>>),
    Object,
}

/// A numeric sort key. Integers compare exactly; any comparison involving a
/// float goes through `f64::total_cmp`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberKey {
    Int(i128),
    Float(f64),
}

impl NumberKey {
    fn as_f64(self) -> f64 {
        match self {
            NumberKey::Int(n) => n as f64,
            NumberKey::Float(x) => x,
        }
    }

    fn compare(self, other: NumberKey) -> Ordering {
        match (self, other) {
            (NumberKey::Int(a), NumberKey::Int(b)) => a.cmp(&b),
            (a, b) => a.as_f64().total_cmp(&b.as_f64()),
        }
    }
}

impl From<&serde_json::Number> for NumberKey {
    fn from(n: &serde_json::Number) -> Self {
        n.as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
            .map(NumberKey::Int)
            .unwrap_or_else(|| NumberKey::Float(n.as_f64().unwrap_or(f64::NAN)))
    }
}

impl<'a> SortKey<'a> {
    pub fn kind(&self) -> &'static str {
        match self {
            SortKey::Null => "null",
            SortKey::Bool(_) => "boolean",
            SortKey::Number(_) => "number",
            SortKey::Text(_) => "text",
            SortKey::List(_) => "list",
            SortKey::Object => "object",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Null => 0,
            SortKey::Bool(_) => 1,
            SortKey::Number(_) => 2,
            SortKey::Text(_) => 3,
            SortKey::List(_) => 4,
            SortKey::Object => 5,
        }
    }

    /// Compare two keys, failing when they are not mutually ordered.
    ///
    /// The error carries the two kinds; the caller fills in the field name.
    pub fn try_cmp(&self, other: &SortKey<'_>) -> Result<Ordering, (&'static str, &'static str)> {
        match (self, other) {
            (SortKey::Null, SortKey::Null) => Ok(Ordering::Equal),
            (SortKey::Bool(a), SortKey::Bool(b)) => Ok(a.cmp(b)),
            (SortKey::Number(a), SortKey::Number(b)) => Ok(a.compare(*b)),
            (SortKey::Text(a), SortKey::Text(b)) => Ok(a.cmp(b)),
            (SortKey::List(a), SortKey::List(b)) => {
                for (x, y) in a.iter().zip(b) {
                    match x.try_cmp(y)? {
                        Ordering::Equal => continue,
                        unequal => return Ok(unequal),
                    }
                }
                Ok(a.len().cmp(&b.len()))
            }
            _ => Err((self.kind(), other.kind())),
        }
    }

    /// Total order over every key: same-kind keys as in [`SortKey::try_cmp`],
    /// different kinds grouped by kind, objects all equal.
    fn grouped_cmp(&self, other: &SortKey<'_>) -> Ordering {
        match (self, other) {
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.compare(*b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::List(a), SortKey::List(b)) => a
                .iter()
                .zip(b)
                .map(|(x, y)| x.grouped_cmp(y))
                .find(|o| o.is_ne())
                .unwrap_or_else(|| a.len().cmp(&b.len())),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn from_json(value: &'a Value) -> Self {
        match value {
            Value::Null => SortKey::Null,
            Value::Bool(b) => SortKey::Bool(*b),
            Value::Number(n) => SortKey::Number(NumberKey::from(n)),
            Value::String(s) => SortKey::Text(s),
            Value::Array(items) => SortKey::List(items.iter().map(SortKey::from_json).collect()),
            Value::Object(_) => SortKey::Object,
        }
    }
}

impl<'a> From<FieldRef<'a>> for SortKey<'a> {
    fn from(field: FieldRef<'a>) -> Self {
        match field {
            FieldRef::Number(n) => SortKey::Number(NumberKey::Int(i128::from(n))),
            FieldRef::Text(s) => SortKey::Text(s),
            FieldRef::Tags(tags) => SortKey::List(tags.iter().map(|t| SortKey::Text(t)).collect()),
            FieldRef::Json(value) => SortKey::from_json(value),
        }
    }
}

/// Sort `projects` by the field `sort_by`.
///
/// Projects that do not carry `sort_by` are dropped from the output. The sort
/// is stable and ascending; [`SortOrder::Desc`] reverses the ascending result,
/// so the desc output is always the asc output reversed.
///
/// The comparator is a total order even over mixed kinds, which places keys
/// of different kinds next to each other. Neighbours are then checked with
/// [`SortKey::try_cmp`] and the first unorderable pair is reported.
pub fn sort_projects<'s>(
    projects: Vec<&'s Project>,
    sort_by: &str,
    order: SortOrder,
) -> Result<Vec<&'s Project>, QueryError> {
    let mut keyed: Vec<(SortKey<'s>, &'s Project)> = projects
        .into_iter()
        .filter_map(|p| p.field(sort_by).map(|field| (SortKey::from(field), p)))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| a.grouped_cmp(b));
    if let Some((left, right)) = keyed
        .windows(2)
        .find_map(|pair| pair[0].0.try_cmp(&pair[1].0).err())
    {
        return Err(QueryError::IncomparableSortKeys {
            field: sort_by.to_string(),
            left,
            right,
        });
    }

    let mut sorted: Vec<&Project> = keyed.into_iter().map(|(_, p)| p).collect();
    if order == SortOrder::Desc {
        sorted.reverse();
    }
    Ok(sorted)
}
