//! Record store and accessor integration harness.
//!
//! Covers loading from disk (sync and async), load failures, and the three
//! accessor views: `count`, `get`, `distinct_tags`.
//!
//! ```sh
//! cargo test --test store_harness
//! ```

mod common;
use common::assertions::assert_strictly_ascending;
use common::*;
use portfolio_core::{count, distinct_tags, get, LoadError, RecordStore};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn load_reads_file_in_source_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data_file(dir.path(), PORTFOLIO_JSON);

    let store = RecordStore::load(&path).unwrap();
    let nos: Vec<i64> = store.iter().map(|p| p.project_no).collect();
    assert_eq!(nos, vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn async_load_matches_sync_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data_file(dir.path(), PORTFOLIO_JSON);

    let sync = RecordStore::load(&path).unwrap();
    let async_ = RecordStore::load_async(&path).await.unwrap();
    assert_eq!(sync, async_);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RecordStore::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }), "got {err:?}");
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data_file(dir.path(), "[{\"project_no\": 1,");
    let err = RecordStore::load(&path).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }), "got {err:?}");
}

#[test]
fn record_missing_required_field_is_a_parse_error() {
    let err = RecordStore::from_json_str(r#"[{"project_no": 1, "techniques_used": []}]"#).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }), "got {err:?}");
}

#[test]
fn empty_list_loads_as_empty_store() {
    let store = RecordStore::from_json_str("[]").unwrap();
    assert!(store.is_empty());
    assert_eq!(count(&store), 0);
    assert!(distinct_tags(&store).is_empty());
}

#[test]
fn unknown_fields_survive_loading() {
    let store = portfolio_store();
    let chess = get(&store, 3).unwrap();
    assert_eq!(
        chess.field("course_name").map(|f| f.to_text()),
        Some("TDDC76 Programmering och datastrukturer".to_string())
    );
    assert_eq!(chess.field("group_size").map(|f| f.to_text()), Some("3".to_string()));
}

// ---------------------------------------------------------------------------
// Accessor
// ---------------------------------------------------------------------------

#[test]
fn count_is_number_of_records() {
    assert_eq!(count(&portfolio_store()), 6);
    assert_eq!(count(&example_store()), 2);
}

#[test]
fn get_by_project_no() {
    let store = portfolio_store();
    assert_eq!(get(&store, 4).map(|p| p.project_name.as_str()), Some("Weather station"));
    assert!(get(&store, 0).is_none());
    assert!(get(&store, -1).is_none());
}

#[test]
fn get_prefers_first_duplicate() {
    let store = store_of([
        dated(1, "first", &[], "2020"),
        dated(1, "second", &[], "2021"),
    ]);
    assert_eq!(get(&store, 1).unwrap().project_name, "first");
    assert_eq!(store.duplicate_ids(), vec![1]);
}

#[test]
fn distinct_tags_of_portfolio() {
    assert_eq!(
        distinct_tags(&portfolio_store()),
        vec!["c", "c++", "flask", "haskell", "jinja2", "json", "ncurses", "python", "sql"]
    );
}

#[test]
fn distinct_tags_of_worked_example() {
    assert_eq!(distinct_tags(&example_store()), vec!["x", "y"]);
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

fn arb_tags() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,3}", 0..5)
}

proptest! {
    #[test]
    fn prop_distinct_tags_is_sorted_union(rows in prop::collection::vec(arb_tags(), 0..12)) {
        let store = store_of(rows.iter().enumerate().map(|(i, tags)| {
            ProjectBuilder::new(i as i64, "p").techniques(tags.iter().cloned()).build()
        }));
        let tags = distinct_tags(&store);
        assert_strictly_ascending(&tags);

        let union: BTreeSet<String> = rows.into_iter().flatten().collect();
        prop_assert_eq!(tags, union.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn prop_get_finds_only_matching_ids(n in 0usize..20, id in -3i64..25) {
        let store = store_of(build_corpus(n));
        match get(&store, id) {
            Some(project) => prop_assert_eq!(project.project_no, id),
            None => prop_assert!(store.iter().all(|p| p.project_no != id)),
        }
    }
}
