//! Walk through the deck registry end to end.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Ordered deck**: created unshuffled, so the first draws are 2C, 3C, 4C...
//! 2. **Shuffled deck**: seeded with `StdRng` so the output is reproducible.
//! 3. **Partial deck**: built from explicit card codes.
//! 4. **Errors**: an over-large draw and an unknown deck id.

use deck_registry::{Card, Deck, Registry};
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

fn join(cards: &[Card]) -> String {
    cards.iter().map(Card::code).collect::<Vec<_>>().join(" ")
}

fn print_deck(label: &str, deck: &Deck) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{label}]  ID: {}  Shuffled: {}  Remaining: {}", deck.deck_id, deck.shuffled, deck.remaining);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Top: {}", join(&deck.cards[..deck.remaining.min(8)]));
}

fn main() {
    let registry = Registry::new();

    let ordered = registry.create(false, None);
    print_deck("Ordered", &ordered);
    match registry.draw(ordered.deck_id, 5) {
        Ok(hand) => println!("  Drew: {}", join(&hand)),
        Err(err) => println!("  Draw failed: {err}"),
    }

    let shuffled = registry.create_with_rng(true, None, &mut StdRng::seed_from_u64(42));
    print_deck("Shuffled (seed 42)", &shuffled);
    match registry.draw(shuffled.deck_id, 5) {
        Ok(hand) => println!("  Drew: {}", join(&hand)),
        Err(err) => println!("  Draw failed: {err}"),
    }

    let codes = ["AS", "KD", "10C"];
    let cards: Result<Vec<Card>, _> = codes.iter().map(|c| c.parse::<Card>()).collect();
    match cards {
        Ok(cards) => {
            let partial = registry.create(false, Some(cards));
            print_deck("Partial", &partial);

            if let Err(err) = registry.draw(partial.deck_id, 4) {
                println!("  Drawing 4: {err}");
            }
        }
        Err(err) => println!("  Bad card code: {err}"),
    }

    if let Err(err) = registry.get(Uuid::new_v4()) {
        println!();
        println!("  Unknown deck: {err}");
    }

    println!();
    println!("  Live decks: {}", registry.len());
}
