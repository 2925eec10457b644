//! Deck engine: card types, deck construction, and the concurrent registry.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | Shared types: cards, ranks, suits, the `Deck` snapshot |
//! | `deck`     | Canonical 52-card ordering, Fisher-Yates shuffle, top-of-deck removal |
//! | `registry` | `Registry`: create / get / draw over all live decks |
//! | `error`    | `DeckError` (domain outcomes) and `CardParseError` |

pub mod deck;
pub mod error;
pub mod models;
pub mod registry;

pub use deck::{shuffle_cards, standard_cards, STANDARD_DECK_SIZE};
pub use error::{CardParseError, DeckError};
pub use models::{Card, Deck, Rank, Suit};
pub use registry::Registry;
