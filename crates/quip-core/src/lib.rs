//! Core types and the joke resolution pipeline.
//!
//! This crate is deliberately free of HTTP and database dependencies. Storage
//! and the remote content provider are reached only through the
//! [`store::JokeStore`] and [`provider::JokeProvider`] traits.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod joke;
pub mod personalize;
pub mod provider;
pub mod resolver;
pub mod store;

pub use error::{Error, Result};
pub use joke::Joke;
pub use personalize::personalize;
pub use resolver::{MAX_FETCH, Resolver};
