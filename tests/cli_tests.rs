use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::io::Read;
use std::path::Path;

mod common;
use common::{Sandbox, write_sheet};

fn read_zip_entry(archive: &Path, name: &str) -> String {
    let file = fs::File::open(archive).expect("open archive");
    let mut zip = zip::ZipArchive::new(file).expect("valid zip");
    let mut entry = zip.by_name(name).expect("entry present");
    let mut content = String::new();
    entry.read_to_string(&mut content).expect("read entry");
    content
}

#[test]
fn test_init_creates_sheet_with_headers() {
    let sb = Sandbox::new();
    sb.init();

    assert!(sb.store.exists());
    assert!(sb.state.exists());
    assert!(sb.sheet().contains(",task name,task time"));

    // a second init leaves the sheet alone
    sb.cmd().args(["add", "writing", "1h"]).assert().success();
    sb.init();
    assert!(sb.sheet().contains(",writing,1"));
}

#[test]
fn test_add_accumulates_and_lists() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd()
        .args(["add", "writing", "3600"])
        .assert()
        .success()
        .stdout(contains("New task 'writing' added at row 3: 1.00 h"));

    sb.cmd()
        .args(["add", "writing", "30m"])
        .assert()
        .success()
        .stdout(contains("Task 'writing' (row 3) now totals 1.50 h"));

    sb.cmd()
        .args(["add", "reading", "15m"])
        .assert()
        .success();

    let out = sb.cmd().arg("tasks").output().expect("run tasks");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names, vec!["writing", "reading"]);

    sb.cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(contains("writing").and(contains("1.50")).and(contains("1.75 h")));
}

#[test]
fn test_missing_sheet_is_an_error_unless_create() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["add", "writing", "10m"])
        .assert()
        .failure()
        .stderr(contains("Store not found"));
    assert!(!sb.store.exists());

    sb.cmd()
        .args(["add", "writing", "10m", "--create"])
        .assert()
        .success()
        .stdout(contains("Created new sheet"));
    assert!(sb.sheet().contains(",writing,"));
}

#[test]
fn test_custom_labels_locate_other_columns() {
    let sb = Sandbox::new();
    write_sheet(&sb.store, "Project,Hours\nalpha,2\n");

    sb.cmd()
        .args(["--key-label", "Project", "--value-label", "Hours"])
        .args(["add", "alpha", "30m"])
        .assert()
        .success();

    assert!(sb.sheet().contains("alpha,2.5"));

    sb.cmd()
        .arg("tasks")
        .assert()
        .failure()
        .stderr(contains("Label 'task name' not found"));
}

#[test]
fn test_invalid_duration_is_rejected() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd()
        .args(["add", "writing", "soon"])
        .assert()
        .failure()
        .stderr(contains("Invalid duration"));
}

#[test]
fn test_start_stop_saves_to_task() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd()
        .args(["start", "deep work"])
        .assert()
        .success()
        .stdout(contains("Timer started for 'deep work'"));

    sb.cmd()
        .arg("start")
        .assert()
        .failure()
        .stderr(contains("already running"));

    sb.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Running since").and(contains("deep work")));

    sb.cmd()
        .arg("stop")
        .assert()
        .success()
        .stdout(contains("New task 'deep work' added at row 3"));

    sb.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(contains("No timer running"));

    assert!(sb.sheet().contains(",deep work,"));
}

#[test]
fn test_stop_without_task_keeps_timer_running() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd().arg("start").assert().success();

    sb.cmd()
        .arg("stop")
        .assert()
        .failure()
        .stderr(contains("task name is required"));

    sb.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Running since"));

    sb.cmd().args(["stop", "review"]).assert().success();
    assert!(sb.sheet().contains(",review,"));
}

#[test]
fn test_stop_discard_writes_nothing() {
    let sb = Sandbox::new();
    sb.init();
    let before = sb.sheet();

    sb.cmd().args(["start", "nap"]).assert().success();
    sb.cmd()
        .args(["stop", "--discard"])
        .assert()
        .success()
        .stdout(contains("Timer discarded"));

    assert_eq!(sb.sheet(), before);

    sb.cmd()
        .arg("stop")
        .assert()
        .failure()
        .stderr(contains("No timer is running"));
}

#[test]
fn test_stop_with_missing_label_keeps_timer() {
    let sb = Sandbox::new();
    sb.init();
    let before = sb.sheet();

    sb.cmd().args(["start", "writing"]).assert().success();
    sb.cmd()
        .args(["--value-label", "duration", "stop"])
        .assert()
        .failure()
        .stderr(contains("Label 'duration' not found"));

    assert_eq!(sb.sheet(), before);
    sb.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Running since"));
}

#[test]
fn test_export_formats() {
    let sb = Sandbox::new();
    sb.init();
    sb.cmd().args(["add", "writing", "1h30m"]).assert().success();
    sb.cmd().args(["add", "reading", "45m"]).assert().success();

    let csv_out = sb.path("out.csv");
    sb.cmd()
        .args(["export", "--format", "csv", "--file"])
        .arg(&csv_out)
        .assert()
        .success();
    let csv = fs::read_to_string(&csv_out).expect("read exported csv");
    assert!(csv.starts_with("task,hours,seconds"));
    assert!(csv.contains("writing,1.5,5400"));
    assert!(csv.contains("reading,0.75,2700"));

    let json_out = sb.path("out.json");
    sb.cmd()
        .args(["export", "--format", "json", "--file"])
        .arg(&json_out)
        .assert()
        .success();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).expect("valid json");
    assert_eq!(json[0]["task"], "writing");
    assert_eq!(json[0]["seconds"], 5400);
    assert_eq!(json[1]["hours"], 0.75);

    let xlsx_out = sb.path("out.xlsx");
    sb.cmd()
        .args(["export", "--format", "xlsx", "--file"])
        .arg(&xlsx_out)
        .assert()
        .success();
    let bytes = fs::read(&xlsx_out).unwrap();
    assert!(bytes.starts_with(b"PK"), "xlsx is a zip container");

    // existing file + --force
    sb.cmd()
        .args(["export", "--format", "csv", "--force", "--file"])
        .arg(&csv_out)
        .assert()
        .success();
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let sb = Sandbox::new();
    sb.init();
    sb.cmd().args(["add", "writing", "1h"]).assert().success();

    let out = sb.path("out.csv");
    fs::write(&out, "old").unwrap();

    sb.cmd()
        .args(["export", "--format", "csv", "--file"])
        .arg(&out)
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "old");
}

#[test]
fn test_backup_plain_and_compressed() {
    let sb = Sandbox::new();
    sb.init();
    sb.cmd().args(["add", "writing", "1h"]).assert().success();

    let plain = sb.path("backup/sheet.csv");
    sb.cmd()
        .args(["backup", "--file"])
        .arg(&plain)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&plain).unwrap(), sb.sheet());

    let zipped = sb.path("zipped.csv");
    sb.cmd()
        .args(["backup", "--compress", "--file"])
        .arg(&zipped)
        .assert()
        .success()
        .stdout(contains("Compressed"));
    assert!(sb.path("zipped.zip").exists());
    assert!(!zipped.exists());
}

#[test]
fn test_backup_compress_leaves_existing_plain_file_alone() {
    let sb = Sandbox::new();
    sb.init();
    sb.cmd().args(["add", "writing", "1h"]).assert().success();

    let notes = sb.path("notes.txt");
    fs::write(&notes, "precious").unwrap();

    sb.cmd()
        .args(["backup", "--compress", "--file"])
        .arg(&notes)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&notes).unwrap(), "precious");
    assert_eq!(read_zip_entry(&sb.path("notes.zip"), "notes.txt"), sb.sheet());
}

#[test]
fn test_backup_to_zip_name_keeps_sheet_content() {
    let sb = Sandbox::new();
    sb.init();
    sb.cmd().args(["add", "writing", "1h"]).assert().success();

    let archive = sb.path("b.zip");
    sb.cmd()
        .args(["backup", "--compress", "--file"])
        .arg(&archive)
        .assert()
        .success();

    assert_eq!(read_zip_entry(&archive, "timesheet.csv"), sb.sheet());
}

#[test]
fn test_backup_refuses_the_sheet_itself() {
    let sb = Sandbox::new();
    sb.init();
    sb.cmd().args(["add", "writing", "1h"]).assert().success();
    let before = sb.sheet();

    sb.cmd()
        .args(["backup", "--force", "--file"])
        .arg(&sb.store)
        .assert()
        .failure()
        .stderr(contains("backup target is the sheet itself"));

    assert_eq!(sb.sheet(), before);
}

#[test]
fn test_add_rejects_blank_task() {
    let sb = Sandbox::new();
    sb.init();
    let before = sb.sheet();

    sb.cmd()
        .args(["add", "  ", "1h"])
        .assert()
        .failure()
        .stderr(contains("task name is required"));

    assert_eq!(sb.sheet(), before);
}

#[test]
fn test_log_records_operations() {
    let sb = Sandbox::new();
    sb.init();
    sb.cmd().args(["add", "writing", "1h"]).assert().success();
    sb.cmd().args(["start", "writing"]).assert().success();
    sb.cmd().arg("stop").assert().success();

    sb.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(
            contains("init")
                .and(contains("add (writing)"))
                .and(contains("start (writing)"))
                .and(contains("stop (writing)")),
        );
}

#[test]
fn test_config_check_and_migrate() {
    let sb = Sandbox::new();
    let conf_dir = sb.dir.path().join(".timeyourwork");
    fs::create_dir_all(&conf_dir).unwrap();
    let conf = conf_dir.join("timeyourwork.conf");
    fs::write(&conf, "key_label: Project\n").unwrap();

    sb.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing field: value_label").and(contains("Missing field: key_label").not()));

    sb.cmd().args(["config", "--migrate"]).assert().success();

    let migrated = fs::read_to_string(&conf).unwrap();
    assert!(migrated.contains("key_label: Project"));
    assert!(migrated.contains("value_label: task time"));

    sb.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete"));

    sb.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("key_label: Project"));
}
