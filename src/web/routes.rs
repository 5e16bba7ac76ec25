use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::app::AppState;
use crate::web::handlers::{board, card, health};

// Paths sharing a prefix must share the parameter name, so every id segment is `:id`.
// GET /lists/:id takes a board id, GET /cards/:id a list id and GET /comments/:id a card id.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/boards", get(board::list_boards).post(board::create_board))
        .route("/boards/:id", put(board::update_board))
        .route("/lists", post(board::create_list))
        .route("/lists/:id", get(board::list_lists))
        .route("/cards", post(card::create_card))
        .route(
            "/cards/:id",
            get(card::list_cards)
                .put(card::update_card)
                .delete(card::delete_card),
        )
        .route("/comments", post(card::create_comment))
        .route(
            "/comments/:id",
            get(card::list_comments)
                .put(card::update_comment)
                .delete(card::delete_comment),
        )
        .route("/health-check", get(health::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
