//! Client for the `api.chucknorris.io` search endpoint.
//!
//! Implements [`quip_core::provider::JokeProvider`] so the resolver can fall
//! back to the remote API when the local store has no match.

mod client;
mod wire;

pub mod error;

pub use client::{ChuckClient, ProviderConfig};
pub use error::{Error, Result};

#[cfg(test)]
mod tests;
