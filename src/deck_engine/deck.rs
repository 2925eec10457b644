use rand::Rng;
use uuid::Uuid;

use crate::deck_engine::models::{Card, Deck, Rank, Suit};

/// Number of cards in a full standard deck.
pub const STANDARD_DECK_SIZE: usize = 52;

/// The canonical unshuffled order: suit-major (C, D, H, S), rank-minor (2..A).
pub fn standard_cards() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::all().map(move |rank| Card { rank, suit }))
        .collect()
}

/// Fisher-Yates shuffle; every permutation is equally likely.
pub fn shuffle_cards<R: Rng>(cards: &mut [Card], rng: &mut R) {
    for i in (1..cards.len()).rev() {
        let j = rng.gen_range(0..=i);
        cards.swap(i, j);
    }
}

impl Deck {
    /// Build a deck from `cards` (or the standard 52 when `None`), permuting it
    /// with `rng` when `shuffle` is set.
    pub(crate) fn build<R: Rng>(
        deck_id: Uuid,
        shuffle: bool,
        cards: Option<Vec<Card>>,
        rng: &mut R,
    ) -> Self {
        let mut cards = cards.unwrap_or_else(standard_cards);
        if shuffle {
            shuffle_cards(&mut cards, rng);
        }

        Deck {
            deck_id,
            shuffled: shuffle,
            remaining: cards.len(),
            cards,
        }
    }

    /// Remove the top `n` cards. Caller guarantees `n <= self.remaining`.
    pub(crate) fn take_top(&mut self, n: usize) -> Vec<Card> {
        let drawn: Vec<Card> = self.cards.drain(..n).collect();
        self.remaining = self.cards.len();
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn codes(cards: &[Card]) -> Vec<String> {
        cards.iter().map(Card::code).collect()
    }

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let cards = standard_cards();
        assert_eq!(cards.len(), STANDARD_DECK_SIZE);
        let unique: HashSet<Card> = cards.iter().copied().collect();
        assert_eq!(unique.len(), STANDARD_DECK_SIZE);
    }

    #[test]
    fn standard_order_is_suit_major_rank_minor() {
        let expected: Vec<String> = ["C", "D", "H", "S"]
            .iter()
            .flat_map(|suit| {
                ["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A"]
                    .iter()
                    .map(move |rank| format!("{rank}{suit}"))
            })
            .collect();
        assert_eq!(codes(&standard_cards()), expected);
    }

    #[test]
    fn spades_use_the_s_suffix() {
        let cards = standard_cards();
        assert_eq!(cards[39].code(), "2S");
        assert_eq!(cards[51].code(), "AS");
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let make = |seed: u64| {
            let mut cards = standard_cards();
            shuffle_cards(&mut cards, &mut StdRng::seed_from_u64(seed));
            cards
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn shuffle_keeps_the_same_cards() {
        let mut cards = standard_cards();
        shuffle_cards(&mut cards, &mut StdRng::seed_from_u64(7));
        assert_ne!(cards, standard_cards());

        let mut sorted = codes(&cards);
        let mut canonical = codes(&standard_cards());
        sorted.sort();
        canonical.sort();
        assert_eq!(sorted, canonical);
    }

    #[test]
    fn shuffle_handles_tiny_decks() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<Card> = Vec::new();
        shuffle_cards(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let ace = Card::new(Rank::ACE, Suit::Spades);
        let mut single = vec![ace];
        shuffle_cards(&mut single, &mut rng);
        assert_eq!(single, vec![ace]);
    }

    #[test]
    fn first_position_is_roughly_uniform() {
        // Over many shuffles of 4 cards, each card should lead ~25% of the time.
        let base: Vec<Card> = standard_cards().into_iter().take(4).collect();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [0usize; 4];
        let trials = 8_000;
        for _ in 0..trials {
            let mut cards = base.clone();
            shuffle_cards(&mut cards, &mut rng);
            let idx = base.iter().position(|c| *c == cards[0]).unwrap();
            counts[idx] += 1;
        }
        for count in counts {
            assert!((1_700..=2_300).contains(&count), "skewed shuffle: {counts:?}");
        }
    }

    #[test]
    fn build_sets_remaining_from_cards() {
        let mut rng = StdRng::seed_from_u64(3);
        let deck = Deck::build(Uuid::nil(), false, None, &mut rng);
        assert!(!deck.shuffled);
        assert_eq!(deck.remaining, STANDARD_DECK_SIZE);
        assert_eq!(deck.cards, standard_cards());

        let partial = vec![Card::new(Rank::ACE, Suit::Spades), Card::new(Rank::KING, Suit::Diamonds)];
        let deck = Deck::build(Uuid::nil(), false, Some(partial.clone()), &mut rng);
        assert_eq!(deck.remaining, 2);
        assert_eq!(deck.cards, partial);
    }

    #[test]
    fn take_top_removes_from_the_front() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut deck = Deck::build(Uuid::nil(), false, None, &mut rng);
        let drawn = deck.take_top(3);
        assert_eq!(codes(&drawn), ["2C", "3C", "4C"]);
        assert_eq!(deck.remaining, 49);
        assert_eq!(deck.cards[0].code(), "5C");
    }
}
