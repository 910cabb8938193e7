//! # Lookup Pipeline
//!
//! Three dependent fetches, each a single attempt:
//!
//! ```text
//! find_board(board_id) ──► find_list(board, name) ──► find_cards(list)
//! ```
//!
//! Each stage wraps the client's [`ApiError`](crate::error::ApiError) with the
//! identifier that matters to the user at that point: the board id before the
//! board is known, the board *name* afterwards, then the list name.
//! [`fetch_digest`] chains the three with `?`, so the first failure wins and
//! nothing fetched before it survives.

use crate::client::TrelloApi;
use crate::error::{HifiError, Result};
use crate::model::{Board, Card, List};
use tracing::{debug, info};

/// Everything the renderer needs from Trello for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    pub board: Board,
    pub list: List,
    pub cards: Vec<Card>,
}

pub fn find_board<C: TrelloApi + ?Sized>(client: &C, board_id: &str) -> Result<Board> {
    let board = client.board(board_id).map_err(|source| HifiError::Board {
        id: board_id.to_string(),
        source,
    })?;
    info!(id = %board.id, name = %board.name, "resolved board");
    Ok(board)
}

pub fn find_list<C: TrelloApi + ?Sized>(client: &C, board: &Board, name: &str) -> Result<List> {
    let lists = client
        .board_lists(&board.id)
        .map_err(|source| HifiError::Lists {
            board: board.name.clone(),
            source,
        })?;
    debug!(board = %board.name, count = lists.len(), "fetched lists");

    let list = select_list(lists, name).ok_or_else(|| HifiError::ListNotFound {
        name: name.to_string(),
        board: board.name.clone(),
    })?;
    info!(id = %list.id, name = %list.name, "resolved list");
    Ok(list)
}

/// First list whose name matches exactly. Duplicate names resolve to the earliest.
pub fn select_list(lists: Vec<List>, name: &str) -> Option<List> {
    lists.into_iter().find(|l| l.name == name)
}

pub fn find_cards<C: TrelloApi + ?Sized>(client: &C, list: &List) -> Result<Vec<Card>> {
    let cards = client
        .list_cards(&list.id)
        .map_err(|source| HifiError::Cards {
            list: list.name.clone(),
            source,
        })?;
    info!(list = %list.name, count = cards.len(), "fetched cards");
    Ok(cards)
}

/// Runs the whole board → list → cards chain.
pub fn fetch_digest<C: TrelloApi + ?Sized>(
    client: &C,
    board_id: &str,
    list_name: &str,
) -> Result<Digest> {
    let board = find_board(client, board_id)?;
    let list = find_list(client, &board, list_name)?;
    let cards = find_cards(client, &list)?;
    Ok(Digest { board, list, cards })
}
