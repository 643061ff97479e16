pub mod add;
pub mod backup;
pub mod config;
pub mod log;
pub mod timer;
