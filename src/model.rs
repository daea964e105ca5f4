// src/model.rs
//
// Canonical and view-layer data for the directory.
//
// - PersonRecord / Household: the on-disk schema, read-only after load.
// - DisplayRow: derived, flattened projection used by every view.
//   Recomputed from the record set on each filter change; never persisted.

use serde::Deserialize;

use crate::config::consts::PHONE_SEP;

/// One person's directory entry, as stored in directory.json.
/// `households` is required on every record; the scalar fields may be
/// absent and simply render as empty.
#[derive(Clone, Debug, Deserialize)]
pub struct PersonRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    pub households: Vec<Household>,
}

/// One address/phone grouping. A record may carry several; only the
/// first is shown.
#[derive(Clone, Debug, Deserialize)]
pub struct Household {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phones: Vec<String>,
}

/// Flattened, presentation-ready projection of a record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayRow {
    pub name: String,
    pub grade: String,
    pub email: String,
    pub photo: Option<String>,
    pub address: Option<String>,
    /// Joined display string, e.g. "555-1111, 555-2222"
    pub phones: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl DisplayRow {
    /// Table cell text for column `col` (Name, Grade, Email, Address, Phones).
    pub fn cell(&self, col: usize) -> &str {
        match col {
            0 => &self.name,
            1 => &self.grade,
            2 => &self.email,
            3 => self.address.as_deref().unwrap_or(""),
            4 => self.phones.as_deref().unwrap_or(""),
            _ => "",
        }
    }

    pub fn has_point(&self) -> bool {
        self.lat.is_some() && self.lon.is_some()
    }
}

pub const TABLE_HEADERS: &[&str] = &["Name", "Grade", "Email", "Address", "Phones"];

/// Flatten one record into its display row. Address and phones come from
/// the first household only; records without one leave both fields absent.
pub fn project(record: &PersonRecord) -> DisplayRow {
    let mut row = DisplayRow {
        name: record.name.clone().unwrap_or_default(),
        grade: record.grade.clone().unwrap_or_default(),
        email: record.email.clone().unwrap_or_default(),
        photo: record.photo.clone(),
        ..DisplayRow::default()
    };

    if let Some(hh) = record.households.first() {
        row.address = hh.address.clone();
        if !hh.phones.is_empty() {
            row.phones = Some(hh.phones.join(PHONE_SEP));
        }
    }

    row
}

/// Project the whole record set, in input order.
pub fn project_all(records: &[PersonRecord]) -> Vec<DisplayRow> {
    records.iter().map(project).collect()
}
