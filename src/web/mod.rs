//! HTTP/JSON front end for the deck registry.
//!
//! Parses raw path and query strings, calls the registry, and maps
//! [`DeckError`](crate::deck_engine::DeckError) to response classes:
//! `NotFound` → 404, `InsufficientCards` → 400.

pub mod handler;
pub mod routes;

pub use handler::{new_registry, SharedRegistry};
pub use routes::router;
