//! Numbered text menu over any line-based input and output.
//!
//! The menu is a thin loop over [`BookStore`]: every rejected input prints a
//! message and returns to the menu. End of input exits like choice `6`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::book::Book;
use crate::core::field::Field;
use crate::store::{AddOutcome, BookStore, EditOutcome};

const MENU: &str = "\nMenu:\n\
1. Add a book\n\
2. Delete a book\n\
3. Search books\n\
4. List all books\n\
5. Update book status\n\
6. Exit";

/// Run the interactive menu until the user exits or input ends.
pub fn run_menu<R: BufRead, W: Write>(store: &mut BookStore, input: R, output: W) -> Result<()> {
    Menu { input, output }.run(store)
}

struct Menu<R, W> {
    input: R,
    output: W,
}

/// Answer to the title/author selector prompts.
enum Selector {
    Chosen(Field, String),
    Invalid,
    Closed,
}

/// Which edit an ambiguous match should be retried for.
#[derive(Clone, Copy)]
enum Edit<'a> {
    Delete,
    Status(&'a str),
}

impl<R: BufRead, W: Write> Menu<R, W> {
    fn run(&mut self, store: &mut BookStore) -> Result<()> {
        loop {
            self.say(MENU)?;
            let Some(choice) = self.ask("Choose an action: ")? else {
                return Ok(());
            };
            debug!(choice = %choice, "menu choice");
            let keep_going = match choice.as_str() {
                "1" => self.add(store),
                "2" => self.delete(store),
                "3" => self.search(store),
                "4" => self.list(store).map(|()| true),
                "5" => self.update_status(store),
                "6" => {
                    self.say("Goodbye.")?;
                    return Ok(());
                }
                _ => self.say("Invalid choice.").map(|()| true),
            };
            match keep_going {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(err) => self.say(&format!("Error: {:#}", err))?,
            }
        }
    }

    /// Handlers return `Ok(false)` when input ended mid-dialog.
    fn add(&mut self, store: &mut BookStore) -> Result<bool> {
        let Some(title) = self.ask("Enter the title: ")? else {
            return Ok(false);
        };
        let Some(author) = self.ask("Enter the author: ")? else {
            return Ok(false);
        };
        let Some(year) = self.ask("Enter the publication year: ")? else {
            return Ok(false);
        };
        let Ok(year) = year.parse::<i32>() else {
            self.say("Invalid year.")?;
            return Ok(true);
        };
        match store.add(&title, &author, year)? {
            AddOutcome::Added(_) => self.say("Book added.")?,
            AddOutcome::FutureYear { year, .. } => {
                self.say(&format!("The year {} has not come yet.", year))?;
            }
        }
        Ok(true)
    }

    fn delete(&mut self, store: &mut BookStore) -> Result<bool> {
        match self.ask_selector()? {
            Selector::Chosen(field, value) => self.edit(store, field, &value, Edit::Delete),
            Selector::Invalid => Ok(true),
            Selector::Closed => Ok(false),
        }
    }

    fn update_status(&mut self, store: &mut BookStore) -> Result<bool> {
        let (field, value) = match self.ask_selector()? {
            Selector::Chosen(field, value) => (field, value),
            Selector::Invalid => return Ok(true),
            Selector::Closed => return Ok(false),
        };
        let Some(status) = self.ask("Enter the new status (available/checked_out): ")? else {
            return Ok(false);
        };
        self.edit(store, field, &value, Edit::Status(status.as_str()))
    }

    fn search(&mut self, store: &mut BookStore) -> Result<bool> {
        let Some(field) = self.ask("Search by (id/title/author/year/status): ")? else {
            return Ok(false);
        };
        let Ok(field) = field.parse::<Field>() else {
            self.say("Invalid search field.")?;
            return Ok(true);
        };
        let Some(value) = self.ask("Enter the value to search for: ")? else {
            return Ok(false);
        };
        let results = store.search(field, &value);
        if results.is_empty() {
            self.say("No books found.")?;
        }
        for book in results {
            self.say(&book.to_string())?;
        }
        Ok(true)
    }

    fn list(&mut self, store: &BookStore) -> Result<()> {
        if store.is_empty() {
            return self.say("The library is empty.");
        }
        self.say("Books:")?;
        for book in store.list() {
            self.say(&book.to_string())?;
        }
        Ok(())
    }

    /// Ask for a title/author selector and the value to match.
    fn ask_selector(&mut self) -> Result<Selector> {
        let Some(field) = self.ask("Select by (title/author): ")? else {
            return Ok(Selector::Closed);
        };
        let field = match field.parse::<Field>() {
            Ok(field) if field.is_selector() => field,
            _ => {
                self.say("Invalid field.")?;
                return Ok(Selector::Invalid);
            }
        };
        let Some(value) = self.ask(&format!("Enter the {}: ", field))? else {
            return Ok(Selector::Closed);
        };
        Ok(Selector::Chosen(field, value))
    }

    /// Apply `edit`, asking the user to pick when several books match.
    fn edit(
        &mut self,
        store: &mut BookStore,
        field: Field,
        value: &str,
        edit: Edit<'_>,
    ) -> Result<bool> {
        let mut pick = None;
        loop {
            let outcome = match edit {
                Edit::Delete => store.delete(field, value, pick)?,
                Edit::Status(status) => store.update_status(field, value, status, pick)?,
            };
            match outcome {
                EditOutcome::Done(_) => {
                    self.say(match edit {
                        Edit::Delete => "Book deleted.",
                        Edit::Status(_) => "Status updated.",
                    })?;
                    return Ok(true);
                }
                EditOutcome::NotFound => {
                    self.say("Book not found.")?;
                    return Ok(true);
                }
                EditOutcome::InvalidChoice { .. } => {
                    self.say("Invalid choice.")?;
                    return Ok(true);
                }
                EditOutcome::Ambiguous(candidates) => {
                    self.say("Several books found:")?;
                    for (pos, book) in candidates.iter().enumerate() {
                        self.say(&format!("{}. {}", pos + 1, candidate_line(book)))?;
                    }
                    let Some(raw) = self.ask("Enter the number of the book: ")? else {
                        return Ok(false);
                    };
                    let Ok(chosen) = raw.parse::<usize>() else {
                        self.say("Invalid choice.")?;
                        return Ok(true);
                    };
                    pick = Some(chosen);
                }
            }
        }
    }

    /// Prompt and read one trimmed line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).context("write prompt")?;
        self.output.flush().context("flush prompt")?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message).context("write output")
    }
}

fn candidate_line(book: &Book) -> String {
    format!(
        "{} - {} ({}), status: {}",
        book.title, book.author, book.year, book.status
    )
}
