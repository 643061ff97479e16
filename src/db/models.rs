use serde::Serialize;

/// The timer currently running, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveTimer {
    /// RFC 3339, local offset
    pub started_at: String,
    pub task: Option<String>,
}

/// One row of the internal log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}
