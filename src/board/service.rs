use std::sync::Arc;

use crate::core::error::AppResult;
use crate::core::types::{Board, CreateBoardRequest, CreateListRequest, List};
use crate::storage::database::Database;
use crate::storage::query_log::{QueryLogger, SqlParam};

const SELECT_BOARDS: &str = "select * from boards";
const INSERT_BOARD: &str = "insert into boards (name) values ($1) returning *";
const UPDATE_BOARD_COLOUR: &str = "update boards set colour = $1 where board_id = $2 returning *";
const SELECT_LISTS_FOR_BOARD: &str = "select * from lists where board_id = $1";
const INSERT_LIST: &str = "insert into lists (board_id, name) values ($1, $2) returning *";

/// Boards and the lists they own.
pub struct BoardService {
    db: Arc<Database>,
    log: Arc<QueryLogger>,
}

impl BoardService {
    pub fn new(db: Arc<Database>, log: Arc<QueryLogger>) -> Self {
        Self { db, log }
    }

    /// Get all boards
    pub async fn list_boards(&self) -> AppResult<Vec<Board>> {
        let boards = self.log.fetch_all(self.db.pool(), SELECT_BOARDS, &[]).await?;
        Ok(boards)
    }

    /// Create a new board
    pub async fn create_board(&self, request: CreateBoardRequest) -> AppResult<Vec<Board>> {
        let boards = self
            .log
            .fetch_all(self.db.pool(), INSERT_BOARD, &[SqlParam::Text(request.name)])
            .await?;
        Ok(boards)
    }

    /// Set a board's colour. An unknown id yields an empty result, not an error.
    pub async fn update_board_colour(&self, board_id: i64, colour: String) -> AppResult<Vec<Board>> {
        let boards = self
            .log
            .fetch_all(
                self.db.pool(),
                UPDATE_BOARD_COLOUR,
                &[SqlParam::Text(colour), SqlParam::Int(board_id)],
            )
            .await?;
        Ok(boards)
    }

    /// Get the lists on a board
    pub async fn lists_for_board(&self, board_id: i64) -> AppResult<Vec<List>> {
        let lists = self
            .log
            .fetch_all(self.db.pool(), SELECT_LISTS_FOR_BOARD, &[SqlParam::Int(board_id)])
            .await?;
        Ok(lists)
    }

    /// Create a new list on a board
    pub async fn create_list(&self, request: CreateListRequest) -> AppResult<Vec<List>> {
        let lists = self
            .log
            .fetch_all(
                self.db.pool(),
                INSERT_LIST,
                &[SqlParam::Int(request.board_id), SqlParam::Text(request.name)],
            )
            .await?;
        Ok(lists)
    }
}
