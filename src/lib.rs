//! # deck_registry
//!
//! A shared, in-memory pool of finite playing-card decks that many callers can
//! create, inspect, and draw from at the same time.
//!
//! ## How it works
//!
//! 1. Construct one [`Registry`] at startup and share it (e.g. in an `Arc`).
//! 2. [`Registry::create`] mints a deck, either the standard 52 cards in
//!    canonical order or a uniform shuffle of them, and returns a snapshot.
//! 3. [`Registry::get`] returns a snapshot of a deck's current state.
//! 4. [`Registry::draw`] removes cards from the top of a deck. The
//!    check-and-remove is atomic per deck, so two callers can never receive the
//!    same card and a draw never takes more cards than remain.
//!
//! Failures are ordinary values of [`DeckError`]: `NotFound` for an unknown
//! deck id and `InsufficientCards` for an over-large draw. A failed draw leaves
//! the deck untouched.
//!
//! The [`web`] module serves the registry over HTTP/JSON with axum; the
//! `deck-server` binary wires it to [`config::Config`] and `tracing`.
//!
//! ## Quick start
//!
//! ```rust
//! use deck_registry::{DeckError, Registry};
//!
//! let registry = Registry::new();
//! let deck = registry.create(false, None);
//! assert_eq!(deck.remaining, 52);
//!
//! let hand = registry.draw(deck.deck_id, 2).unwrap();
//! let codes: Vec<String> = hand.iter().map(|c| c.code()).collect();
//! assert_eq!(codes, ["2C", "3C"]);
//!
//! assert_eq!(registry.get(deck.deck_id).unwrap().remaining, 50);
//! assert!(matches!(
//!     registry.draw(deck.deck_id, 51),
//!     Err(DeckError::InsufficientCards { .. })
//! ));
//! ```

pub mod config;
pub mod deck_engine;
pub mod web;

// Convenience re-exports so callers can use `deck_registry::Registry`
// directly without reaching into `deck_engine::`.
pub use deck_engine::{
    shuffle_cards, standard_cards, Card, CardParseError, Deck, DeckError, Rank, Registry, Suit,
    STANDARD_DECK_SIZE,
};
