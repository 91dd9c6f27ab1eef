//! Test builders: ergonomic constructors for `Project` and `RecordStore`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use portfolio_core::{Project, RecordStore};

// ---------------------------------------------------------------------------
// ProjectBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Project`] test fixtures.
///
/// # Example
///
/// ```rust
/// let project = ProjectBuilder::new(3, "Terminal chess")
///     .techniques(["c++", "ncurses"])
///     .field("start_date", "2012-09-01")
///     .build();
/// ```
pub struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    pub fn new(project_no: i64, name: impl Into<String>) -> Self {
        Self {
            project: Project::new(project_no, name),
        }
    }

    pub fn techniques<I, S>(mut self, techniques: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.project.techniques_used = techniques.into_iter().map(Into::into).collect();
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.project.extra.insert(key.into(), value.into());
        self
    }

    pub fn start_date(self, date: &str) -> Self {
        self.field("start_date", date)
    }

    pub fn build(self) -> Project {
        self.project
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A project with techniques and a start date.
pub fn dated(project_no: i64, name: &str, techniques: &[&str], start_date: &str) -> Project {
    ProjectBuilder::new(project_no, name)
        .techniques(techniques.iter().copied())
        .start_date(start_date)
        .build()
}

/// Wrap projects in a store.
pub fn store_of(projects: impl IntoIterator<Item = Project>) -> RecordStore {
    RecordStore::new(projects.into_iter().collect())
}

/// The two-record store from the worked example: A uses x and y, B uses y.
pub fn example_store() -> RecordStore {
    store_of([
        dated(1, "A", &["x", "y"], "2020"),
        dated(2, "B", &["y"], "2021"),
    ])
}

/// Build a corpus of `n` projects cycling through a small technique pool.
pub fn build_corpus(n: usize) -> Vec<Project> {
    const POOL: &[&str] = &["c", "python", "flask", "sql", "haskell", "javascript"];
    (0..n)
        .map(|i| {
            let techniques: Vec<&str> = POOL
                .iter()
                .enumerate()
                .filter(|(j, _)| (i + j) % 3 == 0)
                .map(|(_, t)| *t)
                .collect();
            ProjectBuilder::new(i as i64, format!("project {i}"))
                .techniques(techniques)
                .start_date(&format!("20{:02}-01-01", i % 30))
                .field("course_name", format!("TDP{:03}", i % 7))
                .build()
        })
        .collect()
}
