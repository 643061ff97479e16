//! Unified application error type.
//! All modules (store, db, core, cli) return AppError so a failure reaches
//! the CLI with its kind intact and can be rendered as a single message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Sheet store
    // ---------------------------
    #[error("Store not found: {0}")]
    StoreNotFound(String),

    #[error("Store already exists: {0}")]
    StoreExists(String),

    #[error("Label '{0}' not found in the store")]
    LabelNotFound(String),

    #[error("Cell {cell} does not hold a number: '{value}'")]
    InvalidValue { cell: String, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // State database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Timer / input
    // ---------------------------
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("A timer is already running (started {0})")]
    TimerRunning(String),

    #[error("No timer is running")]
    TimerNotRunning,

    #[error("A task name is required to save time")]
    TaskRequired,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
