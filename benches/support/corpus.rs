//! Synthetic portfolio shared by the benchmark suites.

#![allow(dead_code)]

use portfolio_core::{Project, RecordStore};

const POOL: &[&str] = &[
    "c", "c++", "python", "flask", "sql", "haskell", "javascript", "rust", "jinja2", "json",
];

/// `n` projects with a rotating technique mix, a start date and a course.
pub fn projects(n: usize) -> Vec<Project> {
    (0..n)
        .map(|i| {
            let mut project = Project::new(i as i64, format!("Project {i}"));
            project.techniques_used = POOL
                .iter()
                .enumerate()
                .filter(|(j, _)| (i + j) % 4 == 0)
                .map(|(_, t)| t.to_string())
                .collect();
            project.extra.insert(
                "start_date".into(),
                format!("20{:02}-{:02}-01", i % 25, i % 12 + 1).into(),
            );
            project
                .extra
                .insert("course_name".into(), format!("TDP{:03} Projekt", i % 9).into());
            project.extra.insert(
                "short_description".into(),
                format!("Synthetic project number {i} for benchmarking").into(),
            );
            project
        })
        .collect()
}

pub fn store(n: usize) -> RecordStore {
    RecordStore::new(projects(n))
}

pub fn json(n: usize) -> String {
    serde_json::to_string(&projects(n)).unwrap_or_else(|_| "[]".to_string())
}
