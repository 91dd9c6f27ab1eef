//! Static project corpora used across harnesses.

use portfolio_core::RecordStore;
use std::path::{Path, PathBuf};

/// A small, realistic portfolio in the source format.
///
/// | no | name               | techniques                 | start_date |
/// |----|--------------------|----------------------------|------------|
/// | 1  | Data module        | python, json               | 2012-10-22 |
/// | 2  | Portfolio server   | python, flask, jinja2      | 2012-11-05 |
/// | 3  | Terminal chess     | c++, ncurses               | 2011-09-01 |
/// | 4  | Weather station    | c, python                  | 2012-03-14 |
/// | 5  | Course planner     | haskell                    | 2011-01-17 |
/// | 6  | Lab booking        | flask, python, sql         | (none)     |
pub const PORTFOLIO_JSON: &str = r#"[
    {
        "project_no": 1,
        "project_name": "Data module",
        "techniques_used": ["python", "json"],
        "start_date": "2012-10-22",
        "end_date": "2012-11-01",
        "course_name": "TDP003 Projekt: Egna datormiljön",
        "group_size": 2,
        "short_description": "Reads the project list from a JSON file."
    },
    {
        "project_no": 2,
        "project_name": "Portfolio server",
        "techniques_used": ["python", "flask", "jinja2"],
        "start_date": "2012-11-05",
        "end_date": "2012-12-10",
        "course_name": "TDP003 Projekt: Egna datormiljön",
        "group_size": 2,
        "short_description": "Presentation layer for the data module."
    },
    {
        "project_no": 3,
        "project_name": "Terminal chess",
        "techniques_used": ["c++", "ncurses"],
        "start_date": "2011-09-01",
        "end_date": "2011-12-20",
        "course_name": "TDDC76 Programmering och datastrukturer",
        "group_size": 3,
        "short_description": "Two-player chess in the terminal."
    },
    {
        "project_no": 4,
        "project_name": "Weather station",
        "techniques_used": ["c", "python"],
        "start_date": "2012-03-14",
        "end_date": "2012-05-30",
        "course_name": "TDDI11 Programmering av inbyggda system",
        "group_size": 4,
        "short_description": "Sensor readings plotted by a Python script."
    },
    {
        "project_no": 5,
        "project_name": "Course planner",
        "techniques_used": ["haskell"],
        "start_date": "2011-01-17",
        "end_date": "2011-03-18",
        "course_name": "TDDA69 Data- och programstrukturer",
        "group_size": 1,
        "short_description": "Schedules courses without clashes."
    },
    {
        "project_no": 6,
        "project_name": "Lab booking",
        "techniques_used": ["flask", "python", "sql"],
        "course_name": "TDP003 Projekt: Egna datormiljön",
        "group_size": 2,
        "short_description": "Unfinished; no dates recorded."
    }
]"#;

/// The same records with `start_date` of project 5 given as a number, which
/// makes sorting by `start_date` impossible.
pub const MIXED_SORT_KEYS_JSON: &str = r#"[
    {"project_no": 1, "project_name": "A", "techniques_used": [], "start_date": "2012-10-22"},
    {"project_no": 2, "project_name": "B", "techniques_used": [], "start_date": 2011}
]"#;

/// Parse [`PORTFOLIO_JSON`].
pub fn portfolio_store() -> RecordStore {
    RecordStore::from_json_str(PORTFOLIO_JSON).expect("fixture must parse")
}

/// Write `contents` to `data.json` inside `dir` and return the path.
pub fn write_data_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("data.json");
    std::fs::write(&path, contents).expect("fixture file must be writable");
    path
}
