use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Availability of a single book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    #[default]
    Available,
    CheckedOut,
}

impl BookStatus {
    /// Stable label used in the catalog file and in user-facing output.
    pub fn as_str(self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::CheckedOut => "checked_out",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "available" => Ok(BookStatus::Available),
            "checked_out" | "checked out" | "checked-out" => Ok(BookStatus::CheckedOut),
            _ => Err(anyhow!(
                "invalid status '{}': use 'available' or 'checked_out'",
                raw.trim()
            )),
        }
    }
}

/// One record of the catalog, persisted as-is.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: BookStatus,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Year: {}, Status: {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_labels_and_spellings() {
        assert_eq!("available".parse::<BookStatus>().unwrap(), BookStatus::Available);
        assert_eq!(" Checked_Out ".parse::<BookStatus>().unwrap(), BookStatus::CheckedOut);
        assert_eq!("checked out".parse::<BookStatus>().unwrap(), BookStatus::CheckedOut);
        let err = " Lost ".parse::<BookStatus>().expect_err("unknown status");
        assert!(err.to_string().starts_with("invalid status 'Lost'"));
    }

    /// Pins the on-disk labels; changing them breaks existing catalog files.
    #[test]
    fn status_serializes_as_snake_case() {
        let json = serde_json::to_string(&BookStatus::CheckedOut).expect("serialize");
        assert_eq!(json, "\"checked_out\"");
        let parsed: BookStatus = serde_json::from_str("\"available\"").expect("parse");
        assert_eq!(parsed, BookStatus::Available);
    }

    #[test]
    fn book_display_lists_every_field() {
        let book = Book {
            id: 3,
            title: "Dracula".to_string(),
            author: "Bram Stoker".to_string(),
            year: 1897,
            status: BookStatus::CheckedOut,
        };
        assert_eq!(
            book.to_string(),
            "ID: 3, Title: Dracula, Author: Bram Stoker, Year: 1897, Status: checked_out"
        );
    }
}
