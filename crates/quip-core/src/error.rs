//! Error types for `quip-core`.

use thiserror::Error;

/// A type-erased error from a storage backend or provider.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures surfaced by the [`Resolver`](crate::Resolver).
///
/// A failed cache write is never one of these: it is logged and dropped at
/// the resolver boundary.
#[derive(Debug, Error)]
pub enum Error {
  /// Neither the local store nor the provider had a match.
  #[error("no jokes found")]
  NoContentFound,

  /// A random pick was requested from a store with no rows.
  #[error("joke store is empty")]
  EmptyStore,

  /// The store is unreachable or a read failed.
  #[error("store error: {0}")]
  Store(#[source] BoxError),

  /// The remote fetch failed. Not retried here.
  #[error("provider error: {0}")]
  Provider(#[source] BoxError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
