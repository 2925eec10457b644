use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::deck_engine::{Card, DeckError, Registry, STANDARD_DECK_SIZE};

// ---------------------------------------------------------------------------
// Shared state: the process-wide deck registry
// ---------------------------------------------------------------------------

pub type SharedRegistry = Arc<Registry>;

pub fn new_registry() -> SharedRegistry {
    Arc::new(Registry::new())
}

type ApiError = (StatusCode, Json<Value>);
type ApiResult = Result<Json<Value>, ApiError>;

/// `{"code": <status>, "message": <text>}`
fn respond_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(json!({ "code": status.as_u16(), "message": message.into() })),
    )
}

impl From<DeckError> for ApiError {
    fn from(err: DeckError) -> Self {
        let status = match err {
            DeckError::NotFound { .. } => StatusCode::NOT_FOUND,
            DeckError::InsufficientCards { .. } => StatusCode::BAD_REQUEST,
        };
        respond_error(status, err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Query / path parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct CreateDeckQuery {
    pub shuffled: Option<String>,
    pub cards: Option<String>,
}

/// Absent or empty means `false`; only the literals `true`/`false` are accepted.
fn parse_shuffled(raw: Option<&str>) -> Option<bool> {
    match raw {
        None | Some("") | Some("false") => Some(false),
        Some("true") => Some(true),
        Some(_) => None,
    }
}

/// Comma-separated card codes. Absent or empty means the standard deck.
/// A code may appear only once.
fn parse_cards(raw: Option<&str>) -> Option<Option<Vec<Card>>> {
    let list = match raw {
        None | Some("") => return Some(None),
        Some(list) => list,
    };

    let mut seen = HashSet::new();
    let mut cards = Vec::new();
    for code in list.split(',') {
        let card = code.parse::<Card>().ok()?;
        if !seen.insert(card) {
            return None;
        }
        cards.push(card);
    }
    Some(Some(cards))
}

fn parse_deck_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| respond_error(StatusCode::BAD_REQUEST, "Invalid deck ID"))
}

fn parse_draw_count(raw: &str) -> Result<usize, ApiError> {
    raw.parse::<usize>()
        .ok()
        .filter(|n| *n <= STANDARD_DECK_SIZE)
        .ok_or_else(|| respond_error(StatusCode::BAD_REQUEST, "Invalid number of cards to draw"))
}

// ---------------------------------------------------------------------------
// POST /v1/decks?shuffled=...&cards=...
// ---------------------------------------------------------------------------

pub async fn create_deck(
    State(registry): State<SharedRegistry>,
    Query(params): Query<CreateDeckQuery>,
) -> ApiResult {
    let shuffled = parse_shuffled(params.shuffled.as_deref())
        .ok_or_else(|| respond_error(StatusCode::BAD_REQUEST, "Invalid shuffled parameter"))?;
    let cards = parse_cards(params.cards.as_deref())
        .ok_or_else(|| respond_error(StatusCode::BAD_REQUEST, "Invalid cards parameter"))?;

    let deck = registry.create(shuffled, cards);

    Ok(Json(json!({
        "deck_id":   deck.deck_id,
        "shuffled":  deck.shuffled,
        "remaining": deck.remaining,
    })))
}

// ---------------------------------------------------------------------------
// GET /v1/decks/:deck_id
// ---------------------------------------------------------------------------

pub async fn get_deck(
    State(registry): State<SharedRegistry>,
    Path(deck_id): Path<String>,
) -> ApiResult {
    let deck_id = parse_deck_id(&deck_id)?;
    let deck = registry.get(deck_id)?;
    Ok(Json(json!(deck)))
}

// ---------------------------------------------------------------------------
// POST /v1/decks/:deck_id/draw/:number
// ---------------------------------------------------------------------------

pub async fn draw_cards(
    State(registry): State<SharedRegistry>,
    Path((deck_id, number)): Path<(String, String)>,
) -> ApiResult {
    let deck_id = parse_deck_id(&deck_id)?;
    let count = parse_draw_count(&number)?;
    let cards = registry.draw(deck_id, count)?;
    Ok(Json(json!({ "cards": cards })))
}

// ---------------------------------------------------------------------------
// Request logging
// ---------------------------------------------------------------------------

pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "request handled"
    );
    response
}
