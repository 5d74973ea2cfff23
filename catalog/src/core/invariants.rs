//! Collection checks that the JSON Schema cannot express.

use std::collections::BTreeMap;

use crate::book::Book;

/// True if `year` is not after the configured cutoff.
pub fn year_allowed(year: i32, max_year: i32) -> bool {
    year <= max_year
}

/// Next id for an appended record: current count + 1.
///
/// Not a persistent counter, so ids can repeat after deletions.
pub fn next_id(books: &[Book]) -> u32 {
    u32::try_from(books.len()).map_or(u32::MAX, |len| len.saturating_add(1))
}

/// Report ids carried by more than one record, in ascending id order.
pub fn duplicate_ids(books: &[Book]) -> Vec<String> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for book in books {
        *counts.entry(book.id).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, count)| format!("id {} is shared by {} records", id, count))
        .collect()
}
