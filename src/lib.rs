//! Tooling fixture crate
//!
//! Small, self-contained Rust code used to exercise formatters, linters,
//! test runners and benchmark harnesses: scalar arithmetic, integer slice
//! aggregation, string utilities and a tagged record type.

pub mod calculator;
pub mod config;
pub mod demo;
pub mod error;
pub mod processing;
pub mod record;
pub mod text;

pub use calculator::{add, checked_divide, divide, multiply, subtract};
pub use error::FixtureError;
pub use record::Record;
pub use text::{count_words, find_string, process_strings, reverse_string};
