use axum::{middleware, routing::{get, post}, Router};
use super::handler::{create_deck, draw_cards, get_deck, log_requests, SharedRegistry};

pub fn router(registry: SharedRegistry) -> Router {
    Router::new()
        .route("/v1/decks",                        post(create_deck))
        .route("/v1/decks/:deck_id",               get(get_deck))
        .route("/v1/decks/:deck_id/draw/:number",  post(draw_cards))
        .layer(middleware::from_fn(log_requests))
        .with_state(registry)
}
