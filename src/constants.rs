//! Constants used throughout the application
//!
//! This module centralizes magic values and default settings to improve
//! maintainability and consistency.

/// Default page size for group listings
pub const ITEMS_PER_PAGE: u64 = 50;
/// Largest configurable page size
pub const MAX_ITEMS_PER_PAGE: u64 = 500;

/// Default database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite://groupvault.db?mode=rwc";
/// Default connection pool size
pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;
/// Largest configurable connection pool size
pub const MAX_CONNECTIONS_LIMIT: u32 = 64;
