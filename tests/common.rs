#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn tyw() -> Command {
    cargo_bin_cmd!("timeyourwork")
}

/// Isolated HOME, sheet and state database for one test.
pub struct Sandbox {
    pub dir: TempDir,
    pub store: PathBuf,
    pub state: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let store = dir.path().join("timesheet.csv");
        let state = dir.path().join("state.sqlite");
        Self { dir, store, state }
    }

    /// Command wired to this sandbox (no colours, private HOME).
    pub fn cmd(&self) -> Command {
        let mut cmd = tyw();
        cmd.env("HOME", self.dir.path())
            .env("APPDATA", self.dir.path())
            .env("NO_COLOR", "1")
            .arg("--store")
            .arg(&self.store)
            .arg("--state")
            .arg(&self.state);
        cmd
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn sheet(&self) -> String {
        fs::read_to_string(&self.store).expect("read sheet")
    }

    /// Initialize state DB and an empty sheet.
    pub fn init(&self) {
        self.cmd().args(["--test", "init"]).assert().success();
    }
}

/// Write raw CSV content to `path`.
pub fn write_sheet(path: &Path, content: &str) {
    fs::write(path, content).expect("write sheet");
}
