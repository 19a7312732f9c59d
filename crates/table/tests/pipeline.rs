//! Whole-pipeline tests: xlsx bytes to canonical rows to CSV and back.

use heatdash_table::{read_workbook, sanitize_sheet_name, Scalar, Table};
use rust_xlsxwriter::Workbook;
use tempfile::tempdir;

#[test]
fn workbook_to_csv_and_back() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("heat.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Heat Related Cases").unwrap();

    // Header with one blank cell at position 3.
    sheet.write_string(0, 0, "Year").unwrap();
    sheet.write_string(0, 1, "BaseCondition").unwrap();
    sheet.write_string(0, 2, "   ").unwrap();
    sheet.write_string(0, 3, "TotalDiag").unwrap();

    sheet.write_number(1, 0, 2019.0).unwrap();
    sheet.write_string(1, 1, "Heat stroke").unwrap();
    sheet.write_string(1, 2, "ICD-10").unwrap();
    sheet.write_number(1, 3, 100.0).unwrap();

    // A row of nothing but whitespace must not survive extraction.
    sheet.write_string(2, 0, " ").unwrap();
    sheet.write_string(2, 2, "  ").unwrap();

    sheet.write_number(3, 0, 2020.0).unwrap();
    sheet.write_string(3, 1, "Dehydration").unwrap();
    sheet.write_string(3, 2, "ICD-10").unwrap();
    sheet.write_number(3, 3, 80.0).unwrap();

    workbook.save(&input).unwrap();

    let grids = read_workbook(&input).unwrap();
    assert_eq!(grids.len(), 1);

    let table = Table::extract(&grids[0]);
    assert_eq!(
        table.columns(),
        ["Year", "BaseCondition", "col_3", "TotalDiag"]
    );
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0]["col_3"], Scalar::Text("ICD-10".to_string()));

    // Persist and reload under numeric coercion.
    let name = sanitize_sheet_name(grids[0].name());
    let csv_path = dir.path().join(format!("{name}.csv"));
    assert_eq!(name, "heat_related_cases");
    table.save_csv(&csv_path).unwrap();

    let restored = Table::from_csv_path(&csv_path).unwrap();
    assert!(restored.warnings.is_empty());
    assert_eq!(restored.table.columns(), table.columns());
    assert_eq!(restored.table.rows()[0]["Year"], Scalar::Int(2019));
    assert_eq!(restored.table.rows()[1]["TotalDiag"], Scalar::Int(80));
}
