// tests/filtering.rs
//
// Filter engine properties: "All" sentinel, exact grade match,
// case-insensitive substring search, grade option collection, sorting.

use dirview::filter::{self, FilterState};
use dirview::model::{DisplayRow, Household, PersonRecord};

fn row(name: &str, grade: &str, email: &str) -> DisplayRow {
    DisplayRow {
        name: name.into(),
        grade: grade.into(),
        email: email.into(),
        ..DisplayRow::default()
    }
}

fn sample() -> Vec<DisplayRow> {
    vec![
        row("Ann Ash", "5", "ann@x.com"),
        row("Bo Birch", "6", "bo@x.com"),
        row("Cy Cedar", "5", "cy@y.org"),
        row("Dee Dale", "10", "dee@y.org"),
    ]
}

fn state(grade: &str, search: &str) -> FilterState {
    FilterState { grade: grade.into(), search: search.into() }
}

#[test]
fn all_sentinel_passes_everything() {
    let rows = sample();
    let view = filter::apply(&rows, &state("All", ""));
    assert_eq!(view, rows);
}

#[test]
fn grade_filter_is_exact() {
    let rows = sample();
    let view = filter::apply(&rows, &state("5", ""));
    let names: Vec<&str> = view.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Ann Ash", "Cy Cedar"]);

    // "1" is not a prefix match for grade "10"
    assert!(filter::apply(&rows, &state("1", "")).is_empty());
}

#[test]
fn search_is_case_insensitive_substring() {
    let rows = sample();

    let view = filter::apply(&rows, &state("All", "BIRCH"));
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Bo Birch");

    // matches email too
    let view = filter::apply(&rows, &state("All", "y.org"));
    assert_eq!(view.len(), 2);

    // matches grade too
    let view = filter::apply(&rows, &state("All", "10"));
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Dee Dale");
}

#[test]
fn empty_search_is_pass_through() {
    let rows = sample();
    assert_eq!(filter::apply(&rows, &state("All", "")).len(), rows.len());
}

#[test]
fn both_predicates_combine() {
    let rows = sample();
    let view = filter::apply(&rows, &state("5", "cy"));
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Cy Cedar");
}

#[test]
fn grade_options_sorted_distinct_non_empty() {
    let rec = |grade: Option<&str>| PersonRecord {
        name: None,
        grade: grade.map(String::from),
        email: None,
        photo: None,
        households: Vec::<Household>::new(),
    };
    let records = vec![
        rec(Some("6")),
        rec(Some("5")),
        rec(Some("6")),
        rec(Some("")),
        rec(None),
        rec(Some("K")),
    ];
    assert_eq!(filter::grade_options(&records), vec!["5", "6", "K"]);
}

#[test]
fn sort_is_numeric_aware_and_reversible() {
    let mut rows = vec![row("b", "10", ""), row("a", "2", ""), row("c", "2", "")];

    // Grade column: numeric compare, stable for equal cells
    filter::sort_rows(&mut rows, 1, true);
    let grades: Vec<&str> = rows.iter().map(|r| r.grade.as_str()).collect();
    assert_eq!(grades, vec!["2", "2", "10"]);
    assert_eq!(rows[0].name, "a"); // input order kept among equal grades

    filter::sort_rows(&mut rows, 1, false);
    let grades: Vec<&str> = rows.iter().map(|r| r.grade.as_str()).collect();
    assert_eq!(grades, vec!["10", "2", "2"]);

    // Name column: plain text compare
    filter::sort_rows(&mut rows, 0, true);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}
