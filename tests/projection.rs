// tests/projection.rs
//
// Row projection: first-household flattening, phone joining, and the
// tolerant/fatal split of the input schema.

use dirview::filter::{self, FilterState};
use dirview::model::{self, Household, PersonRecord};

fn record(
    name: &str,
    grade: &str,
    email: &str,
    households: Vec<Household>,
) -> PersonRecord {
    PersonRecord {
        name: Some(name.into()),
        grade: Some(grade.into()),
        email: Some(email.into()),
        photo: None,
        households,
    }
}

fn household(address: &str, phones: &[&str]) -> Household {
    Household {
        address: Some(address.into()),
        phones: phones.iter().map(|p| p.to_string()).collect(),
    }
}

#[test]
fn first_household_wins() {
    let rec = record("Ann", "5", "a@x.com", vec![
        household("1 Main St", &["555-1111", "555-2222"]),
        household("9 Other Rd", &["555-9999"]),
    ]);
    let row = model::project(&rec);
    assert_eq!(row.address.as_deref(), Some("1 Main St"));
    assert_eq!(row.phones.as_deref(), Some("555-1111, 555-2222"));
}

#[test]
fn no_household_leaves_fields_absent() {
    let rec = record("Bo", "6", "b@x.com", vec![]);
    let row = model::project(&rec);
    assert!(row.address.is_none());
    assert!(row.phones.is_none());
    assert!(row.lat.is_none() && row.lon.is_none());
}

#[test]
fn empty_phone_list_stays_absent() {
    let rec = record("Cy", "7", "c@x.com", vec![household("2 Elm St", &[])]);
    let row = model::project(&rec);
    assert_eq!(row.address.as_deref(), Some("2 Elm St"));
    assert!(row.phones.is_none());
}

#[test]
fn scalar_fields_default_to_empty() {
    let json = r#"[{"households": []}]"#;
    let records: Vec<PersonRecord> = serde_json::from_str(json).unwrap();
    let row = model::project(&records[0]);
    assert_eq!(row.name, "");
    assert_eq!(row.grade, "");
    assert_eq!(row.email, "");
}

#[test]
fn missing_households_is_a_parse_error() {
    let json = r#"[{"name": "Ann", "grade": "5"}]"#;
    let res: Result<Vec<PersonRecord>, _> = serde_json::from_str(json);
    assert!(res.is_err());
}

// The worked example: project, then filter by grade, then search.
#[test]
fn end_to_end_ann_and_bo() {
    let json = r#"[
        {"name":"Ann","grade":"5","email":"a@x.com",
         "households":[{"address":"1 Main St","phones":["555-1111","555-2222"]}]},
        {"name":"Bo","grade":"6","email":"b@x.com","households":[]}
    ]"#;
    let records: Vec<PersonRecord> = serde_json::from_str(json).unwrap();
    let rows = model::project_all(&records);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Ann");
    assert_eq!(rows[0].address.as_deref(), Some("1 Main St"));
    assert_eq!(rows[0].phones.as_deref(), Some("555-1111, 555-2222"));
    assert_eq!(rows[1].name, "Bo");
    assert!(rows[1].address.is_none());

    let by_grade = FilterState { grade: "5".into(), search: String::new() };
    let view = filter::apply(&rows, &by_grade);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Ann");

    let by_search = FilterState { grade: "All".into(), search: "bo".into() };
    let view = filter::apply(&rows, &by_search);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Bo");
}
