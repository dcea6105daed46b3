pub mod add;
pub mod analytics;
pub mod employee;
pub mod import;
pub mod views;
