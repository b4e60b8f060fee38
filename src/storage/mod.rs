//! Storage layer wiring the database connection and schema bootstrap.

pub mod db;

pub use db::Storage;
