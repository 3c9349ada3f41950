pub mod args;
pub mod db;
pub mod questions;
pub mod session;
pub mod statistics;
pub mod ui;
