use super::{ApiResult, TrelloApi};
use crate::error::ApiError;
use crate::model::{Board, Card, List};
use std::cell::RefCell;

/// Identifies one of the [`TrelloApi`] operations, for call recording and failure injection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Board(String),
    BoardLists(String),
    ListCards(String),
}

/// In-memory Trello, serving whatever it was seeded with.
///
/// Unknown ids answer like Trello does: `400 invalid id`.
#[derive(Debug, Default)]
pub struct InMemoryTrello {
    boards: Vec<Board>,
    lists: Vec<List>,
    cards: Vec<Card>,
    failures: Vec<(Call, u16, String)>,
    calls: RefCell<Vec<Call>>,
}

impl InMemoryTrello {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board(mut self, id: &str, name: &str) -> Self {
        self.boards.push(Board::new(id, name));
        self
    }

    pub fn with_list(mut self, board_id: &str, id: &str, name: &str) -> Self {
        self.lists.push(List::new(id, name, board_id));
        self
    }

    pub fn with_card(mut self, list_id: &str, name: &str, desc: &str) -> Self {
        let id = format!("card-{}", self.cards.len() + 1);
        self.cards.push(Card::new(id, name, desc, list_id));
        self
    }

    /// Makes `call` fail with the given HTTP status and body.
    pub fn failing(mut self, call: Call, status: u16, body: &str) -> Self {
        self.failures.push((call, status, body.to_string()));
        self
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        self.calls.borrow_mut().push(call.clone());
        match self.failures.iter().find(|(c, _, _)| *c == call) {
            Some((_, status, body)) => Err(ApiError::Status {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn invalid_id() -> ApiError {
    ApiError::Status {
        status: 400,
        body: "invalid id".to_string(),
    }
}

impl TrelloApi for InMemoryTrello {
    fn board(&self, board_id: &str) -> ApiResult<Board> {
        self.record(Call::Board(board_id.to_string()))?;
        self.boards
            .iter()
            .find(|b| b.id == board_id)
            .cloned()
            .ok_or_else(invalid_id)
    }

    fn board_lists(&self, board_id: &str) -> ApiResult<Vec<List>> {
        self.record(Call::BoardLists(board_id.to_string()))?;
        if !self.boards.iter().any(|b| b.id == board_id) {
            return Err(invalid_id());
        }
        Ok(self
            .lists
            .iter()
            .filter(|l| l.id_board == board_id)
            .cloned()
            .collect())
    }

    fn list_cards(&self, list_id: &str) -> ApiResult<Vec<Card>> {
        self.record(Call::ListCards(list_id.to_string()))?;
        if !self.lists.iter().any(|l| l.id == list_id) {
            return Err(invalid_id());
        }
        Ok(self
            .cards
            .iter()
            .filter(|c| c.id_list == list_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_seeded_data_scoped_by_parent() {
        let trello = InMemoryTrello::new()
            .with_board("b1", "Hifi")
            .with_board("b2", "Other")
            .with_list("b1", "l1", "Hacks")
            .with_list("b2", "l2", "Hacks")
            .with_card("l1", "Parser", "Built a parser")
            .with_card("l2", "Elsewhere", "");

        assert_eq!(trello.board("b1").unwrap().name, "Hifi");
        let lists = trello.board_lists("b1").unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].id, "l1");
        let cards = trello.list_cards("l1").unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name, "Parser");
    }

    #[test]
    fn unknown_ids_are_invalid() {
        let trello = InMemoryTrello::new();
        let err = trello.board("nope").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 400: invalid id");
    }

    #[test]
    fn injected_failures_and_call_log() {
        let trello = InMemoryTrello::new()
            .with_board("b1", "Hifi")
            .failing(Call::BoardLists("b1".into()), 401, "unauthorized");

        assert!(trello.board("b1").is_ok());
        let err = trello.board_lists("b1").unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 401, .. }));
        assert_eq!(
            trello.calls(),
            vec![Call::Board("b1".into()), Call::BoardLists("b1".into())]
        );
    }
}
