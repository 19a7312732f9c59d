//! End-to-end view queries over CSV-backed tables.

use heatdash_agg::{group_sum, Key};
use heatdash_table::{Row, Scalar, Table};
use heatdash_views::{
    cases_trend, top_conditions, DataStore, ALL_VERSIONS, CASES_FILE, ICD_VERSION, TOTAL_DIAG,
    YEAR,
};
use tempfile::tempdir;

const CASES_CSV: &str = "\
Year,ICD_Version,BaseCondition,TotalDiag
2019,ICD-10,Heat stroke,100
2019,ICD-9,Heat exhaustion,50
2020,ICD-10,Heat stroke,80
2020,ICD-10,Dehydration,30
2020,ICD-9,Dehydration,10
";

fn store_with_cases() -> (tempfile::TempDir, DataStore) {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join(CASES_FILE), CASES_CSV).unwrap();
    let store = DataStore::new(dir.path());
    (dir, store)
}

#[test]
fn trend_over_persisted_cases() {
    let (_dir, store) = store_with_cases();
    let cases = store.load_cases().unwrap();

    let all = cases_trend(&cases, ALL_VERSIONS);
    assert_eq!(all.keys, vec![Key::from(2019), Key::from(2020)]);
    assert_eq!(all.totals, vec![150.0, 120.0]);

    let icd9 = cases_trend(&cases, "ICD-9");
    assert_eq!(icd9.totals, vec![50.0, 10.0]);
}

#[test]
fn ranking_over_persisted_cases() {
    let (_dir, store) = store_with_cases();
    let cases = store.load_cases().unwrap();

    let top = top_conditions(&cases, ALL_VERSIONS, 2);
    assert_eq!(
        top.keys(),
        vec![Key::from("Heat stroke"), Key::from("Heat exhaustion")]
    );
    assert_eq!(top.totals(), vec![180.0, 50.0]);

    // n beyond the distinct-key count returns every key.
    assert_eq!(top_conditions(&cases, ALL_VERSIONS, 10).entries.len(), 3);
}

#[test]
fn filtering_commutes_with_grouping() {
    let (_dir, store) = store_with_cases();
    let cases = store.load_cases().unwrap();

    let pre_filtered: Vec<Row> = cases
        .rows()
        .iter()
        .filter(|row| row[ICD_VERSION] == Scalar::Text("ICD-10".to_string()))
        .cloned()
        .collect();
    let direct = group_sum(
        pre_filtered.iter(),
        |row| Key::from(&row[YEAR]),
        |row| row[TOTAL_DIAG].clone(),
    );

    let via_view = cases_trend(&cases, "ICD-10");
    assert_eq!(direct.project(), via_view);
}

#[test]
fn blank_and_malformed_fields_never_fail_a_view() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join(CASES_FILE),
        "Year,ICD_Version,BaseCondition,TotalDiag\n2019,ICD-10,Heat stroke,n/a\n2019,ICD-10,Heat stroke,25\n",
    )
    .unwrap();

    let cases = DataStore::new(dir.path()).load_cases().unwrap();
    let series = cases_trend(&cases, ALL_VERSIONS);
    assert_eq!(series.totals, vec![25.0]);
}
