//! Case-insensitive equality matching over the collection.

use crate::book::Book;
use crate::core::field::Field;

/// True if `book`'s `field` equals `value`, ignoring case and surrounding whitespace.
pub fn matches(book: &Book, field: Field, value: &str) -> bool {
    field.text(book).trim().to_lowercase() == value.trim().to_lowercase()
}

/// Indices of every matching record, in collection order.
pub fn find_matches(books: &[Book], field: Field, value: &str) -> Vec<usize> {
    books
        .iter()
        .enumerate()
        .filter(|(_, book)| matches(book, field, value))
        .map(|(idx, _)| idx)
        .collect()
}
