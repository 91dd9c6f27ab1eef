//! Record-matching primitives shared by the accessor, technique statistics and
//! the query engine.

use crate::types::{FieldRef, Project};

/// A record passes iff it uses every technique in `required`.
///
/// An empty `required` list passes every record.
pub fn uses_all<S: AsRef<str>>(project: &Project, required: &[S]) -> bool {
    required.iter().all(|t| project.uses(t.as_ref()))
}

/// Case-insensitive substring test against a field's text form.
///
/// `needle` must already be lowercase.
pub fn field_contains(field: FieldRef<'_>, needle: &str) -> bool {
    field.to_text().to_lowercase().contains(needle)
}

/// Whether any of the named fields contains `needle`.
///
/// Fields the record does not carry never match.
pub fn any_named_field_contains<S: AsRef<str>>(
    project: &Project,
    fields: &[S],
    needle: &str,
) -> bool {
    fields
        .iter()
        .filter_map(|name| project.field(name.as_ref()))
        .any(|field| field_contains(field, needle))
}

/// Whether any field of the record contains `needle`.
pub fn any_field_contains(project: &Project, needle: &str) -> bool {
    project
        .fields()
        .any(|(_, field)| field_contains(field, needle))
}
