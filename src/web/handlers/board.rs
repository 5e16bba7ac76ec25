use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

use crate::core::app::AppState;
use crate::core::error::{parse_id, AppResult};
use crate::core::types::{Board, CreateBoardRequest, CreateListRequest, List, UpdateBoardRequest};

pub async fn list_boards(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Board>>> {
    let boards = state.board_service.list_boards().await?;
    Ok(Json(boards))
}

pub async fn create_board(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateBoardRequest>,
) -> AppResult<Json<Vec<Board>>> {
    let boards = state.board_service.create_board(request).await?;
    Ok(Json(boards))
}

pub async fn update_board(
    State(state): State<Arc<AppState>>,
    Path(board_id): Path<String>,
    Json(request): Json<UpdateBoardRequest>,
) -> AppResult<Json<Vec<Board>>> {
    let board_id = parse_id(&board_id, "board")?;
    let boards = state
        .board_service
        .update_board_colour(board_id, request.colour)
        .await?;
    Ok(Json(boards))
}

pub async fn list_lists(
    State(state): State<Arc<AppState>>,
    Path(board_id): Path<String>,
) -> AppResult<Json<Vec<List>>> {
    let board_id = parse_id(&board_id, "board")?;
    let lists = state.board_service.lists_for_board(board_id).await?;
    Ok(Json(lists))
}

pub async fn create_list(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateListRequest>,
) -> AppResult<Json<Vec<List>>> {
    let lists = state.board_service.create_list(request).await?;
    Ok(Json(lists))
}
