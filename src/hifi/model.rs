use serde::{Deserialize, Serialize};

/// Snapshot of a Trello board. Lists are fetched separately through the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub closed: bool,
}

impl Board {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            desc: String::new(),
            url: String::new(),
            closed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: String,
    pub name: String,
    #[serde(rename = "idBoard", default)]
    pub id_board: String,
    #[serde(default)]
    pub closed: bool,
}

impl List {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        id_board: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            id_board: id_board.into(),
            closed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    // Trello sends "" for cards without a description, older payloads omit it
    #[serde(default)]
    pub desc: String,
    #[serde(rename = "idList", default)]
    pub id_list: String,
    #[serde(default)]
    pub url: String,
}

impl Card {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        desc: impl Into<String>,
        id_list: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            desc: desc.into(),
            id_list: id_list.into(),
            url: String::new(),
        }
    }
}
