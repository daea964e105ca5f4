// src/filter.rs
//
// Pure filter engine over projected rows. No incremental update: every
// control change recomputes the view from the full row set. At directory
// scale that is a few thousand string compares per keystroke.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::config::consts::ALL_GRADES;
use crate::model::{DisplayRow, PersonRecord};

#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    /// Selected grade, or the "All" sentinel.
    pub grade: String,
    /// Free-text search; empty = pass-through.
    pub search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self { grade: s!(ALL_GRADES), search: s!() }
    }
}

impl FilterState {
    pub fn is_all_grades(&self) -> bool {
        self.grade == ALL_GRADES
    }
}

/// Sorted distinct non-empty grades across all records; the selector shows
/// these after the "All" sentinel.
pub fn grade_options(records: &[PersonRecord]) -> Vec<String> {
    let set: BTreeSet<&str> = records
        .iter()
        .filter_map(|r| r.grade.as_deref())
        .filter(|g| !g.is_empty())
        .collect();
    set.into_iter().map(String::from).collect()
}

/// Exact-match grade predicate; the sentinel passes everything.
fn keep_grade(row: &DisplayRow, state: &FilterState) -> bool {
    state.is_all_grades() || row.grade == state.grade
}

/// Case-insensitive substring over name, email, and grade.
fn keep_search(row: &DisplayRow, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    row.name.to_lowercase().contains(&needle)
        || row.email.to_lowercase().contains(&needle)
        || row.grade.to_lowercase().contains(&needle)
}

/// Apply both predicates to the full row set. Pure; input order preserved.
pub fn apply(rows: &[DisplayRow], state: &FilterState) -> Vec<DisplayRow> {
    rows.iter()
        .filter(|r| keep_grade(r, state) && keep_search(r, &state.search))
        .cloned()
        .collect()
}

/// In-place sort by table column; stable so equal cells keep input order.
pub fn sort_rows(rows: &mut [DisplayRow], col: usize, ascending: bool) {
    rows.sort_by(|a, b| {
        let ord = cmp_cell(a.cell(col), b.cell(col));
        if ascending { ord } else { ord.reverse() }
    });
}

// Numeric-aware compare so grades "2" < "10". Numbers sort before text and
// the fallback is case-folded; the class split keeps the order total, which
// sort_by requires.
fn cmp_cell(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}
