//! CLI tests for the one-shot catalog subcommands.
//!
//! Spawns the catalog binary inside a temp dir (so the default
//! `library.json` and `catalog.toml` land there) and checks exit codes and
//! the persisted file.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use catalog::book::BookStatus;
use catalog::exit_codes;
use catalog::io::catalog_file::load_books;

fn catalog(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_catalog"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run catalog")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn add(dir: &Path, title: &str, author: &str, year: &str) -> Output {
    catalog(
        dir,
        &["add", "--title", title, "--author", author, "--year", year],
    )
}

#[test]
fn add_list_and_search() {
    let temp = tempfile::tempdir().expect("tempdir");
    assert_eq!(add(temp.path(), "Dracula", "Bram Stoker", "1897").status.code(), Some(exit_codes::OK));
    assert_eq!(add(temp.path(), "Emma", "Jane Austen", "1815").status.code(), Some(exit_codes::OK));

    let list = catalog(temp.path(), &["list"]);
    assert_eq!(list.status.code(), Some(exit_codes::OK));
    let listed = stdout(&list);
    assert!(listed.contains("ID: 1, Title: Dracula"));
    assert!(listed.contains("ID: 2, Title: Emma"));

    let found = catalog(temp.path(), &["search", "--by", "year", "1815"]);
    assert_eq!(found.status.code(), Some(exit_codes::OK));
    assert!(stdout(&found).contains("Emma"));

    let missing = catalog(temp.path(), &["search", "--by", "title", "Ulysses"]);
    assert_eq!(missing.status.code(), Some(exit_codes::NOT_FOUND));
}

#[test]
fn future_year_is_rejected_without_writing() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = add(temp.path(), "Tomorrow", "Someone", "2026");
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(!temp.path().join("library.json").exists());
}

#[test]
fn config_cutoff_and_data_override_apply() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("catalog.toml"),
        "max_year = 2030\ndata_file = \"shelf.json\"\n",
    )
    .expect("write config");

    assert_eq!(add(temp.path(), "Soon", "Someone", "2026").status.code(), Some(exit_codes::OK));
    assert_eq!(load_books(&temp.path().join("shelf.json")).len(), 1);

    let other = catalog(
        temp.path(),
        &["add", "--title", "T", "--author", "A", "--year", "1900", "--data", "other.json"],
    );
    assert_eq!(other.status.code(), Some(exit_codes::OK));
    assert_eq!(load_books(&temp.path().join("other.json")).len(), 1);
}

#[test]
fn ambiguous_remove_needs_pick() {
    let temp = tempfile::tempdir().expect("tempdir");
    add(temp.path(), "Emma", "Jane Austen", "1815");
    add(temp.path(), "Persuasion", "Jane Austen", "1817");

    let ambiguous = catalog(temp.path(), &["remove", "--by", "author", "jane austen"]);
    assert_eq!(ambiguous.status.code(), Some(exit_codes::AMBIGUOUS));
    assert!(stdout(&ambiguous).contains("2. ID: 2, Title: Persuasion"));

    let bad_pick = catalog(temp.path(), &["remove", "--by", "author", "jane austen", "--pick", "5"]);
    assert_eq!(bad_pick.status.code(), Some(exit_codes::INVALID));

    let removed = catalog(temp.path(), &["remove", "--by", "author", "jane austen", "--pick", "2"]);
    assert_eq!(removed.status.code(), Some(exit_codes::OK));

    let books = load_books(&temp.path().join("library.json"));
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Emma");
}

#[test]
fn status_update_is_persisted() {
    let temp = tempfile::tempdir().expect("tempdir");
    add(temp.path(), "Emma", "Jane Austen", "1815");

    let updated = catalog(temp.path(), &["status", "EMMA", "checked_out"]);
    assert_eq!(updated.status.code(), Some(exit_codes::OK));
    let books = load_books(&temp.path().join("library.json"));
    assert_eq!(books[0].status, BookStatus::CheckedOut);

    let invalid = catalog(temp.path(), &["status", "Emma", "lost"]);
    assert_eq!(invalid.status.code(), Some(exit_codes::INVALID));

    let missing = catalog(temp.path(), &["status", "Ulysses", "available"]);
    assert_eq!(missing.status.code(), Some(exit_codes::NOT_FOUND));
}

#[test]
fn ambiguous_status_update_needs_pick() {
    let temp = tempfile::tempdir().expect("tempdir");
    add(temp.path(), "Emma", "Jane Austen", "1815");
    add(temp.path(), "Persuasion", "Jane Austen", "1817");

    let ambiguous = catalog(temp.path(), &["status", "--by", "author", "jane austen", "checked_out"]);
    assert_eq!(ambiguous.status.code(), Some(exit_codes::AMBIGUOUS));
    let books = load_books(&temp.path().join("library.json"));
    assert!(books.iter().all(|book| book.status == BookStatus::Available));

    let updated = catalog(
        temp.path(),
        &["status", "--by", "author", "jane austen", "checked_out", "--pick", "2"],
    );
    assert_eq!(updated.status.code(), Some(exit_codes::OK));
    let books = load_books(&temp.path().join("library.json"));
    assert_eq!(books[0].status, BookStatus::Available);
    assert_eq!(books[1].status, BookStatus::CheckedOut);
}

#[test]
fn malformed_file_lists_empty_but_fails_check() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("library.json"), "not json at all").expect("write");

    let list = catalog(temp.path(), &["list"]);
    assert_eq!(list.status.code(), Some(exit_codes::OK));
    assert!(stdout(&list).is_empty());

    let check = catalog(temp.path(), &["check"]);
    assert_eq!(check.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn check_reports_ok_for_valid_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    add(temp.path(), "Emma", "Jane Austen", "1815");
    let check = catalog(temp.path(), &["check"]);
    assert_eq!(check.status.code(), Some(exit_codes::OK));
    assert!(stdout(&check).contains("1 records ok"));
}

#[test]
fn init_writes_config_once() {
    let temp = tempfile::tempdir().expect("tempdir");
    let first = catalog(temp.path(), &["init"]);
    assert_eq!(first.status.code(), Some(exit_codes::OK));
    assert!(temp.path().join("catalog.toml").exists());

    let second = catalog(temp.path(), &["init"]);
    assert_eq!(second.status.code(), Some(exit_codes::INVALID));

    let forced = catalog(temp.path(), &["init", "--force"]);
    assert_eq!(forced.status.code(), Some(exit_codes::OK));
}
