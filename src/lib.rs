//! groupvault - newsgroup tracking for a usenet indexer
//!
//! This library provides the data-access layer over the indexer's `groups`
//! table and its dependent `releases` rows: lookups, filtered and paginated
//! listings, group-name validation, and cascading removal. Persistence is
//! handled by SeaORM; repositories are generic over the connection so any
//! pool, transaction, or test database can be injected.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - SeaORM entity models for database tables
//! * [`repositories`] - Repository layer for database operations
//! * [`storage`] - Database connection and schema bootstrap

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Typed domain errors
pub mod error;

/// Logging setup
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Database connection and schema bootstrap
pub mod storage;

// Re-export entity models for convenient access
pub use entities::{group, release};
