use std::sync::Arc;

use crate::core::error::AppResult;
use crate::core::types::{Card, Comment, CreateCardRequest, CreateCommentRequest};
use crate::storage::database::Database;
use crate::storage::query_log::{QueryLogger, SqlParam};

const SELECT_CARDS_FOR_LIST: &str = "select * from cards where list_id = $1";
const INSERT_CARD: &str = "insert into cards (list_id, name) values ($1, $2) returning *";
const RENAME_CARD: &str = "update cards set name = $1 where card_id = $2 returning *";
const DELETE_CARD_COMMENTS: &str = "delete from comments where card_id = $1";
const DELETE_CARD: &str = "delete from cards where card_id = $1 returning *";

const SELECT_COMMENTS_FOR_CARD: &str = "select * from comments where card_id = $1";
const INSERT_COMMENT: &str = "insert into comments (card_id, text) values ($1, $2) returning *";
const UPDATE_COMMENT: &str = "update comments set text = $1 where comment_id = $2 returning *";
const DELETE_COMMENT: &str = "delete from comments where comment_id = $1 returning *";

/// Cards and their comments.
pub struct CardService {
    db: Arc<Database>,
    log: Arc<QueryLogger>,
}

impl CardService {
    pub fn new(db: Arc<Database>, log: Arc<QueryLogger>) -> Self {
        Self { db, log }
    }

    /// Get the cards in a list
    pub async fn cards_for_list(&self, list_id: i64) -> AppResult<Vec<Card>> {
        let cards = self
            .log
            .fetch_all(self.db.pool(), SELECT_CARDS_FOR_LIST, &[SqlParam::Int(list_id)])
            .await?;
        Ok(cards)
    }

    /// Create a new card in a list
    pub async fn create_card(&self, request: CreateCardRequest) -> AppResult<Vec<Card>> {
        let cards = self
            .log
            .fetch_all(
                self.db.pool(),
                INSERT_CARD,
                &[SqlParam::Int(request.list_id), SqlParam::Text(request.name)],
            )
            .await?;
        Ok(cards)
    }

    /// Rename a card. An unknown id yields an empty result
    pub async fn rename_card(&self, card_id: i64, name: String) -> AppResult<Vec<Card>> {
        let cards = self
            .log
            .fetch_all(
                self.db.pool(),
                RENAME_CARD,
                &[SqlParam::Text(name), SqlParam::Int(card_id)],
            )
            .await?;
        Ok(cards)
    }

    /// Delete a card together with its comments.
    ///
    /// Both statements share one transaction: if either fails nothing is removed.
    pub async fn delete_card(&self, card_id: i64) -> AppResult<Vec<Card>> {
        let params = [SqlParam::Int(card_id)];
        let mut tx = self.db.pool().begin().await?;

        self.log.execute(&mut *tx, DELETE_CARD_COMMENTS, &params).await?;
        let cards = self.log.fetch_all(&mut *tx, DELETE_CARD, &params).await?;

        tx.commit().await?;
        Ok(cards)
    }

    /// Get the comments on a card
    pub async fn comments_for_card(&self, card_id: i64) -> AppResult<Vec<Comment>> {
        let comments = self
            .log
            .fetch_all(self.db.pool(), SELECT_COMMENTS_FOR_CARD, &[SqlParam::Int(card_id)])
            .await?;
        Ok(comments)
    }

    /// Add a comment to a card
    pub async fn create_comment(&self, request: CreateCommentRequest) -> AppResult<Vec<Comment>> {
        let comments = self
            .log
            .fetch_all(
                self.db.pool(),
                INSERT_COMMENT,
                &[SqlParam::Int(request.card_id), SqlParam::Text(request.text)],
            )
            .await?;
        Ok(comments)
    }

    /// Replace a comment's text
    pub async fn update_comment(&self, comment_id: i64, text: String) -> AppResult<Vec<Comment>> {
        let comments = self
            .log
            .fetch_all(
                self.db.pool(),
                UPDATE_COMMENT,
                &[SqlParam::Text(text), SqlParam::Int(comment_id)],
            )
            .await?;
        Ok(comments)
    }

    /// Delete a single comment
    pub async fn delete_comment(&self, comment_id: i64) -> AppResult<Vec<Comment>> {
        let comments = self
            .log
            .fetch_all(self.db.pool(), DELETE_COMMENT, &[SqlParam::Int(comment_id)])
            .await?;
        Ok(comments)
    }
}
