use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

use crate::core::app::AppState;
use crate::core::error::{parse_id, AppResult};
use crate::core::types::{
    Card, Comment, CreateCardRequest, CreateCommentRequest, UpdateCardRequest, UpdateCommentRequest,
};

pub async fn list_cards(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<String>,
) -> AppResult<Json<Vec<Card>>> {
    let list_id = parse_id(&list_id, "list")?;
    let cards = state.card_service.cards_for_list(list_id).await?;
    Ok(Json(cards))
}

pub async fn create_card(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateCardRequest>,
) -> AppResult<Json<Vec<Card>>> {
    let cards = state.card_service.create_card(request).await?;
    Ok(Json(cards))
}

pub async fn update_card(
    State(state): State<Arc<AppState>>,
    Path(card_id): Path<String>,
    Json(request): Json<UpdateCardRequest>,
) -> AppResult<Json<Vec<Card>>> {
    let card_id = parse_id(&card_id, "card")?;
    let cards = state.card_service.rename_card(card_id, request.name).await?;
    Ok(Json(cards))
}

pub async fn delete_card(
    State(state): State<Arc<AppState>>,
    Path(card_id): Path<String>,
) -> AppResult<Json<Vec<Card>>> {
    let card_id = parse_id(&card_id, "card")?;
    let cards = state.card_service.delete_card(card_id).await?;
    Ok(Json(cards))
}

pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    Path(card_id): Path<String>,
) -> AppResult<Json<Vec<Comment>>> {
    let card_id = parse_id(&card_id, "card")?;
    let comments = state.card_service.comments_for_card(card_id).await?;
    Ok(Json(comments))
}

pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateCommentRequest>,
) -> AppResult<Json<Vec<Comment>>> {
    let comments = state.card_service.create_comment(request).await?;
    Ok(Json(comments))
}

pub async fn update_comment(
    State(state): State<Arc<AppState>>,
    Path(comment_id): Path<String>,
    Json(request): Json<UpdateCommentRequest>,
) -> AppResult<Json<Vec<Comment>>> {
    let comment_id = parse_id(&comment_id, "comment")?;
    let comments = state
        .card_service
        .update_comment(comment_id, request.text)
        .await?;
    Ok(Json(comments))
}

pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    Path(comment_id): Path<String>,
) -> AppResult<Json<Vec<Comment>>> {
    let comment_id = parse_id(&comment_id, "comment")?;
    let comments = state.card_service.delete_comment(comment_id).await?;
    Ok(Json(comments))
}
