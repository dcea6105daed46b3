pub mod add;
pub mod config;
pub mod employee;
pub mod export;
pub mod history;
pub mod import;
pub mod init;
pub mod log;
pub mod map;
pub mod stats;
