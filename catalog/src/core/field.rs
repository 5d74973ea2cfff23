//! Record fields that searches and edits can match on.

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};

use crate::book::Book;

/// A matchable field of [`Book`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Title,
    Author,
    Year,
    Status,
}

impl Field {
    /// Fields accepted by `search`, in menu order.
    pub const SEARCHABLE: [Field; 5] = [
        Field::Id,
        Field::Title,
        Field::Author,
        Field::Year,
        Field::Status,
    ];

    /// True for the fields `delete` and `update_status` may select on.
    pub fn is_selector(self) -> bool {
        matches!(self, Field::Title | Field::Author)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Title => "title",
            Field::Author => "author",
            Field::Year => "year",
            Field::Status => "status",
        }
    }

    /// Text form of this field's value on `book`.
    pub fn text(self, book: &Book) -> String {
        match self {
            Field::Id => book.id.to_string(),
            Field::Title => book.title.clone(),
            Field::Author => book.author.clone(),
            Field::Year => book.year.to_string(),
            Field::Status => book.status.as_str().to_string(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        let wanted = raw.trim().to_lowercase();
        Field::SEARCHABLE
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| anyhow!("unknown field '{}'", raw.trim()))
    }
}
