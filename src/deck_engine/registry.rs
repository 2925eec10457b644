//! Process-wide store of live decks.
//!
//! The id → deck map sits behind an `RwLock` that is only held long enough to
//! insert a deck or clone its handle. Each deck then has its own `Mutex`, so
//! the check-then-remove in [`Registry::draw`] is serialized per deck while
//! draws on different decks proceed in parallel.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use rand::Rng;
use tracing::debug;
use uuid::Uuid;

use crate::deck_engine::{
    error::DeckError,
    models::{Card, Deck},
};

type DeckHandle = Arc<Mutex<Deck>>;

#[derive(Debug, Default)]
pub struct Registry {
    decks: RwLock<HashMap<Uuid, DeckHandle>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a new deck and return a snapshot of it.
    ///
    /// `cards: None` builds the standard 52-card deck. The deck is visible to
    /// `get`/`draw` before this returns.
    pub fn create(&self, shuffle: bool, cards: Option<Vec<Card>>) -> Deck {
        self.create_with_rng(shuffle, cards, &mut rand::thread_rng())
    }

    /// Same as [`Registry::create`] with a caller-supplied randomness source
    /// for the shuffle.
    pub fn create_with_rng<R: Rng>(
        &self,
        shuffle: bool,
        cards: Option<Vec<Card>>,
        rng: &mut R,
    ) -> Deck {
        // Shuffle outside the map lock; it is only held to pick a free id and insert.
        let mut deck = Deck::build(Uuid::new_v4(), shuffle, cards, rng);

        {
            let mut decks = self.decks.write().unwrap_or_else(PoisonError::into_inner);
            while decks.contains_key(&deck.deck_id) {
                deck.deck_id = Uuid::new_v4();
            }
            decks.insert(deck.deck_id, Arc::new(Mutex::new(deck.clone())));
        }

        debug!(deck_id = %deck.deck_id, shuffled = deck.shuffled, remaining = deck.remaining, "deck created");
        deck
    }

    /// Snapshot of a deck's current state.
    pub fn get(&self, deck_id: Uuid) -> Result<Deck, DeckError> {
        let handle = self.handle(deck_id)?;
        let deck = lock(&handle);
        Ok(deck.clone())
    }

    /// Remove the top `n` cards of a deck and return them in order.
    ///
    /// Fails without touching the deck if it does not exist or holds fewer
    /// than `n` cards. `n == 0` succeeds with no cards.
    pub fn draw(&self, deck_id: Uuid, n: usize) -> Result<Vec<Card>, DeckError> {
        let handle = self.handle(deck_id)?;
        let mut deck = lock(&handle);

        if n > deck.remaining {
            return Err(DeckError::InsufficientCards {
                requested: n,
                remaining: deck.remaining,
            });
        }

        let drawn = deck.take_top(n);
        debug!(%deck_id, drawn = n, remaining = deck.remaining, "cards drawn");
        Ok(drawn)
    }

    /// Number of live decks.
    pub fn len(&self) -> usize {
        self.decks.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn handle(&self, deck_id: Uuid) -> Result<DeckHandle, DeckError> {
        let decks = self.decks.read().unwrap_or_else(PoisonError::into_inner);
        decks
            .get(&deck_id)
            .cloned()
            .ok_or(DeckError::NotFound { deck_id })
    }
}

// A draw cannot panic between its check and its mutation, so a poisoned deck
// is still consistent.
fn lock(handle: &Mutex<Deck>) -> MutexGuard<'_, Deck> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck_engine::deck::{standard_cards, STANDARD_DECK_SIZE};
    use crate::deck_engine::models::{Rank, Suit};
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    #[test]
    fn create_inserts_before_returning() {
        let registry = Registry::new();
        assert!(registry.is_empty());

        let deck = registry.create(false, None);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(deck.deck_id).unwrap(), deck);
    }

    #[test]
    fn ids_are_unique() {
        let registry = Registry::new();
        let a = registry.create(false, None);
        let b = registry.create(false, None);
        assert_ne!(a.deck_id, b.deck_id);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn seeded_shuffles_are_reproducible() {
        let registry = Registry::new();
        let a = registry.create_with_rng(true, None, &mut StdRng::seed_from_u64(5));
        let b = registry.create_with_rng(true, None, &mut StdRng::seed_from_u64(5));
        assert!(a.shuffled);
        assert_eq!(a.cards, b.cards);
        assert_ne!(a.cards, standard_cards());
    }

    /// Fails the test if the registry map is locked whenever randomness is drawn.
    struct LockCheckingRng<'a> {
        registry: &'a Registry,
        inner: StdRng,
        calls: usize,
    }

    impl LockCheckingRng<'_> {
        fn check(&mut self) {
            self.calls += 1;
            assert!(self.registry.decks.try_write().is_ok(), "map locked during shuffle");
        }
    }

    impl RngCore for LockCheckingRng<'_> {
        fn next_u32(&mut self) -> u32 {
            self.check();
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.check();
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.check();
            self.inner.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.check();
            self.inner.try_fill_bytes(dest)
        }
    }

    #[test]
    fn shuffle_runs_without_holding_the_map_lock() {
        let registry = Registry::new();
        registry.create(false, None);

        let mut rng = LockCheckingRng { registry: &registry, inner: StdRng::seed_from_u64(9), calls: 0 };
        let deck = registry.create_with_rng(true, None, &mut rng);

        assert!(rng.calls > 0);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(deck.deck_id).unwrap(), deck);
    }

    #[test]
    fn draw_takes_from_the_top() {
        let registry = Registry::new();
        let deck = registry.create(false, None);

        let drawn = registry.draw(deck.deck_id, 2).unwrap();
        assert_eq!(drawn, &standard_cards()[..2]);

        let after = registry.get(deck.deck_id).unwrap();
        assert_eq!(after.remaining, STANDARD_DECK_SIZE - 2);
        assert_eq!(after.cards, &standard_cards()[2..]);
    }

    #[test]
    fn draw_zero_changes_nothing() {
        let registry = Registry::new();
        let deck = registry.create(true, None);
        assert!(registry.draw(deck.deck_id, 0).unwrap().is_empty());
        assert_eq!(registry.get(deck.deck_id).unwrap(), deck);
    }

    #[test]
    fn overdraw_leaves_deck_untouched() {
        let registry = Registry::new();
        let partial = vec![Card::new(Rank::ACE, Suit::Spades), Card::new(Rank::KING, Suit::Diamonds)];
        let deck = registry.create(false, Some(partial));

        let err = registry.draw(deck.deck_id, 3).unwrap_err();
        assert_eq!(err, DeckError::InsufficientCards { requested: 3, remaining: 2 });
        assert_eq!(registry.get(deck.deck_id).unwrap(), deck);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let registry = Registry::new();
        let deck_id = Uuid::new_v4();
        assert_eq!(registry.get(deck_id), Err(DeckError::NotFound { deck_id }));
        assert_eq!(registry.draw(deck_id, 0), Err(DeckError::NotFound { deck_id }));
        assert!(registry.is_empty());
    }

    #[test]
    fn snapshots_do_not_alias_registry_state() {
        let registry = Registry::new();
        let deck = registry.create(false, None);

        let mut snapshot = registry.get(deck.deck_id).unwrap();
        snapshot.cards.clear();
        snapshot.remaining = 0;

        assert_eq!(registry.get(deck.deck_id).unwrap().remaining, STANDARD_DECK_SIZE);
    }
}
