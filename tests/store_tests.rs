use std::fs;
use tempfile::TempDir;
use timeyourwork::errors::AppError;
use timeyourwork::store::grid::{CellRef, Table};
use timeyourwork::store::lookup::locate;
use timeyourwork::store::ops::{keys_in, upsert_in};
use timeyourwork::store::{Labels, TableStore, UpsertOutcome, bootstrap};

mod common;
use common::write_sheet;

fn labels() -> Labels {
    Labels::new("task name", "task time")
}

/// Sheet bootstrapped with headers at B2 / C2.
fn fresh_store(dir: &TempDir) -> TableStore {
    let store = TableStore::new(dir.path().join("sheet.csv"));
    store.bootstrap(&labels()).expect("bootstrap");
    store
}

fn hours_at(store: &TableStore, row: usize, column: usize) -> f64 {
    let table = store.open().expect("open");
    table.get(row, column).parse::<f64>().expect("numeric cell")
}

#[test]
fn test_bootstrap_places_headers_at_b2_c2() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("new.csv");

    bootstrap(&path, "task name", "task time").expect("bootstrap");

    let table = Table::read(&path).unwrap();
    assert_eq!(table.get(2, 2), "task name");
    assert_eq!(table.get(2, 3), "task time");
    assert_eq!(table.max_row(), 2);
    assert_eq!(table.max_column(), 3);
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec![",,", ",task name,task time"]);
}

#[test]
fn test_bootstrap_refuses_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sheet.csv");
    write_sheet(&path, "keep me\n");

    let err = bootstrap(&path, "task name", "task time").unwrap_err();
    assert!(matches!(err, AppError::StoreExists(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep me\n");
}

#[test]
fn test_bootstrap_rejects_identical_labels() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sheet.csv");

    let err = bootstrap(&path, "same", "same").unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
    assert!(!path.exists());
}

#[test]
fn test_locate_scans_column_major() {
    // "x" sits at B1 and A3; column A is scanned first.
    let table = Table::from_rows(vec![
        vec!["", "x"],
        vec!["", ""],
        vec!["x", ""],
    ]);

    assert_eq!(locate(&table, "x"), Some(CellRef::new(3, 1)));
    // same answer on every call
    assert_eq!(locate(&table, "x"), locate(&table, "x"));
}

#[test]
fn test_locate_is_exact() {
    let table = Table::from_rows(vec![vec!["Task Name", " task name", "task name"]]);

    assert_eq!(locate(&table, "task name"), Some(CellRef::new(1, 3)));
    assert_eq!(locate(&table, "TASK NAME"), None);
    assert_eq!(locate(&table, ""), None);
}

#[test]
fn test_concrete_scenario_writing() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir);

    let first = store.upsert("writing", 3600, &labels()).unwrap();
    assert_eq!(first, UpsertOutcome::Appended { row: 3, hours: 1.0 });

    let table = store.open().unwrap();
    assert_eq!(table.get(3, 2), "writing");
    assert!((hours_at(&store, 3, 3) - 1.0).abs() < 1e-9);

    let second = store.upsert("writing", 1800, &labels()).unwrap();
    assert_eq!(second, UpsertOutcome::Accumulated { row: 3, hours: 1.5 });

    let table = store.open().unwrap();
    assert_eq!(table.get(3, 2), "writing");
    assert!((hours_at(&store, 3, 3) - 1.5).abs() < 1e-9);
    assert_eq!(table.max_row(), 3);

    assert_eq!(store.list_keys("task name").unwrap(), vec!["writing"]);
}

#[test]
fn test_accumulation_never_duplicates_rows() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir);

    store.upsert("k", 100, &labels()).unwrap();
    store.upsert("k", 50, &labels()).unwrap();

    assert_eq!(store.list_keys("task name").unwrap(), vec!["k"]);
    let expected = 150.0 / 3600.0;
    assert!((hours_at(&store, 3, 3) - expected).abs() < 1e-12);
}

#[test]
fn test_new_key_appends_after_last_row_without_touching_others() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir);

    store.upsert("alpha", 3600, &labels()).unwrap();
    store.upsert("beta", 7200, &labels()).unwrap();
    let before = store.open().unwrap();

    let outcome = store.upsert("gamma", 900, &labels()).unwrap();
    assert_eq!(outcome, UpsertOutcome::Appended { row: 5, hours: 0.25 });

    let after = store.open().unwrap();
    for row in 1..=4 {
        for col in 1..=3 {
            assert_eq!(before.get(row, col), after.get(row, col), "cell ({row},{col})");
        }
    }
    assert_eq!(after.get(5, 2), "gamma");
}

#[test]
fn test_append_uses_last_occupied_row_of_whole_sheet() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sheet.csv");
    // a note further down in column E pushes the extent to row 5
    write_sheet(
        &path,
        ",task name,task time,,\n,a,1,,\n,,,,\n,,,,\n,,,,note\n",
    );
    let store = TableStore::new(&path);

    let outcome = store.upsert("b", 3600, &labels()).unwrap();
    assert_eq!(outcome, UpsertOutcome::Appended { row: 6, hours: 1.0 });

    let keys = store.list_keys("task name").unwrap();
    assert_eq!(keys, vec!["a", "", "", "", "b"]);
}

#[test]
fn test_list_keys_keeps_row_order_and_blanks() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sheet.csv");
    write_sheet(
        &path,
        "task name,task time\nzeta,1\n,\nalpha,2\nzeta,3\n",
    );

    let keys = TableStore::new(&path).list_keys("task name").unwrap();
    assert_eq!(keys, vec!["zeta", "", "alpha", "zeta"]);
}

#[test]
fn test_keys_in_starts_below_header() {
    let table = Table::from_rows(vec![
        vec!["above", ""],
        vec!["task name", "task time"],
        vec!["one", "1"],
    ]);
    assert_eq!(keys_in(&table, "task name").unwrap(), vec!["one"]);
}

#[test]
fn test_missing_label_leaves_file_unchanged() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir);
    store.upsert("writing", 60, &labels()).unwrap();
    let before = fs::read(store.path()).unwrap();

    let err = store
        .upsert("writing", 60, &Labels::new("task name", "duration"))
        .unwrap_err();
    assert!(matches!(err, AppError::LabelNotFound(ref l) if l == "duration"));

    let err = store
        .upsert("writing", 60, &Labels::new("Task", "task time"))
        .unwrap_err();
    assert!(matches!(err, AppError::LabelNotFound(ref l) if l == "Task"));

    let err = store.list_keys("Task").unwrap_err();
    assert!(matches!(err, AppError::LabelNotFound(ref l) if l == "Task"));

    assert_eq!(fs::read(store.path()).unwrap(), before);
}

#[test]
fn test_missing_store_is_reported_and_not_created() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");
    let store = TableStore::new(&path);

    assert!(matches!(
        store.upsert("writing", 60, &labels()).unwrap_err(),
        AppError::StoreNotFound(_)
    ));
    assert!(matches!(
        store.list_keys("task name").unwrap_err(),
        AppError::StoreNotFound(_)
    ));
    assert!(!path.exists());
}

#[test]
fn test_empty_targets_are_no_ops() {
    let unset = TableStore::new("");
    assert!(unset.list_keys("task name").unwrap().is_empty());
    assert_eq!(
        unset.upsert("writing", 60, &labels()).unwrap(),
        UpsertOutcome::Skipped
    );

    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir);
    let before = fs::read(store.path()).unwrap();
    assert_eq!(
        store.upsert("", 60, &labels()).unwrap(),
        UpsertOutcome::Skipped
    );
    assert_eq!(fs::read(store.path()).unwrap(), before);
}

#[test]
fn test_non_numeric_value_aborts_without_writing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sheet.csv");
    write_sheet(&path, "task name,task time\nwriting,lots\n");
    let before = fs::read(&path).unwrap();

    let err = TableStore::new(&path)
        .upsert("writing", 60, &labels())
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidValue { ref cell, .. } if cell == "B2"));
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_non_finite_value_aborts_without_writing() {
    let dir = TempDir::new().unwrap();
    for (i, raw) in ["inf", "-infinity", "NaN"].into_iter().enumerate() {
        let path = dir.path().join(format!("sheet{i}.csv"));
        write_sheet(&path, &format!("task name,task time\nwriting,{raw}\n"));
        let before = fs::read(&path).unwrap();

        let store = TableStore::new(&path);
        let err = store.upsert("writing", 60, &labels()).unwrap_err();
        assert!(
            matches!(err, AppError::InvalidValue { ref value, .. } if value == raw),
            "value {raw:?}"
        );
        assert!(store.records(&labels()).is_err());
        assert_eq!(fs::read(&path).unwrap(), before);
    }
}

#[test]
fn test_empty_value_cell_counts_as_zero() {
    let mut table = Table::from_rows(vec![
        vec!["task name", "task time"],
        vec!["writing", ""],
    ]);

    let outcome = upsert_in(&mut table, "writing", 1800, &labels()).unwrap();
    assert_eq!(outcome, UpsertOutcome::Accumulated { row: 2, hours: 0.5 });
    assert_eq!(table.get(2, 2), "0.5");
}

#[test]
fn test_records_skip_blank_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sheet.csv");
    write_sheet(&path, "task name,task time\na,1.5\n,9\nb,\n");

    let records = TableStore::new(&path).records(&labels()).unwrap();
    let pairs: Vec<(usize, &str, f64)> = records
        .iter()
        .map(|r| (r.row, r.key.as_str(), r.hours))
        .collect();
    assert_eq!(pairs, vec![(2, "a", 1.5), (4, "b", 0.0)]);
}

#[test]
fn test_key_matching_the_header_label_is_a_data_row() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir);

    let outcome = store.upsert("task name", 3600, &labels()).unwrap();
    assert_eq!(outcome, UpsertOutcome::Appended { row: 3, hours: 1.0 });
    assert_eq!(store.open().unwrap().get(2, 2), "task name");
}

#[test]
fn test_grid_extent_ignores_trailing_blanks() {
    let table = Table::from_rows(vec![
        vec!["", "", ""],
        vec!["", "a", ""],
        vec!["", "", ""],
    ]);
    assert_eq!(table.max_row(), 2);
    assert_eq!(table.max_column(), 2);
    assert_eq!(Table::new().max_row(), 0);
}

#[test]
fn test_cell_ref_display() {
    assert_eq!(CellRef::new(3, 2).to_string(), "B3");
    assert_eq!(CellRef::new(1, 26).to_string(), "Z1");
    assert_eq!(CellRef::new(10, 27).to_string(), "AA10");
}
