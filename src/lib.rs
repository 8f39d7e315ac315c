pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod store;
pub mod ui;
pub mod worker;
