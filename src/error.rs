//! Typed domain errors surfaced through `anyhow`.

use thiserror::Error;

/// Errors callers may need to tell apart from plain store failures.
///
/// Repositories return `anyhow::Result`; use `downcast_ref::<Error>()` on
/// the error to distinguish these from `sea_orm::DbErr`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No group row matched a lookup that was required to succeed.
    #[error("No group entry!")]
    NoGroupEntry,
}
