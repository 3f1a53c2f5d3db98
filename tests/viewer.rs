//! End-to-end tests: real documents, real key map, in-memory terminal.

mod common;

use common::ViewerTestHarness;
use crossterm::event::KeyCode;

const TRANSACTION: &str = include_str!("data/transaction.json");

#[test]
fn test_initial_screen_shows_numbered_document() {
    let mut harness = ViewerTestHarness::new(TRANSACTION, 60, 10).unwrap();
    harness.render().unwrap();

    // The cursor line carries its absolute number, the rest their distance.
    harness.assert_screen_contains("   1   {");
    harness.assert_screen_contains("    1    \"auth_code\": \"000001\",");
    harness.assert_screen_contains("    2    \"other\": {");
}

#[test]
fn test_cursor_motion_scrolls_the_window() {
    let mut harness = ViewerTestHarness::new(TRANSACTION, 60, 5).unwrap();
    for _ in 0..6 {
        harness.send_key(KeyCode::Char('j'));
    }
    harness.render().unwrap();

    assert_eq!(harness.app.cursor().row, 6);
    assert_eq!(harness.app.viewport().unwrap().offset, 2);
    // Cursor sits on the last visible row with its absolute number.
    harness.assert_screen_contains("   7     },");
}

#[test]
fn test_half_page_jump() {
    let mut harness = ViewerTestHarness::new(TRANSACTION, 60, 9).unwrap();
    harness.send_key(KeyCode::Char('J'));
    harness.render().unwrap();

    assert_eq!(harness.app.cursor().row, 4);
    harness.assert_screen_contains("   5       \"false\": false,");
}

#[test]
fn test_descend_shows_the_subtree_from_the_top() {
    let mut harness = ViewerTestHarness::new(TRANSACTION, 60, 10).unwrap();
    for _ in 0..8 {
        harness.send_key(KeyCode::Char('j'));
    }
    harness.send_key(KeyCode::Char('t'));
    harness.render().unwrap();

    assert_eq!(harness.app.cursor().row, 0);
    assert_eq!(harness.app.viewport().unwrap().offset, 0);
    harness.assert_screen_contains("   1   {");
    harness.assert_screen_contains("\"city\": \"Melbourne\",");
    harness.assert_screen_contains("\"category_code\": \"4829\",");
}

#[test]
fn test_failed_descend_keeps_the_screen() {
    let mut harness =
        ViewerTestHarness::with_query(TRANSACTION, 60, 10, "merchant.missing").unwrap();
    harness.render().unwrap();
    let before = harness.screen_to_string();

    harness.send_key(KeyCode::Char('t'));
    harness.render().unwrap();

    assert_eq!(harness.screen_to_string(), before);
}

#[test]
fn test_shrinking_window_keeps_cursor_on_last_row() {
    let mut harness = ViewerTestHarness::new(TRANSACTION, 80, 10).unwrap();
    for _ in 0..8 {
        harness.send_key(KeyCode::Char('j'));
    }
    assert_eq!(harness.app.viewport().unwrap().offset, 0);

    harness.resize(80, 3);
    harness.render().unwrap();

    assert_eq!(harness.app.viewport().unwrap().offset, 6);
    harness.assert_screen_contains("    1    \"numbers\": [");
    harness.assert_screen_contains("   9       1,");
}

#[test]
fn test_horizontal_scroll_slices_every_line() {
    let mut harness = ViewerTestHarness::new(TRANSACTION, 60, 10).unwrap();
    harness.send_key(KeyCode::Char('l'));
    harness.send_key(KeyCode::Char('l'));
    harness.render().unwrap();

    assert_eq!(harness.app.viewport().unwrap().x_offset, 2);
    // Two columns of indentation are gone.
    harness.assert_screen_contains("    1  \"auth_code\": \"000001\",");

    harness.send_key(KeyCode::Char('h'));
    harness.send_key(KeyCode::Char('h'));
    harness.send_key(KeyCode::Char('h'));
    assert_eq!(harness.app.viewport().unwrap().x_offset, 0);
}

#[test]
fn test_quit_key() {
    let mut harness = ViewerTestHarness::new(TRANSACTION, 60, 10).unwrap();
    assert!(!harness.app.should_quit());
    harness.send_key(KeyCode::Char('q'));
    assert!(harness.app.should_quit());
}

#[test]
fn test_loading_from_a_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.json");
    std::fs::write(&path, TRANSACTION).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let mut harness = ViewerTestHarness::new(&text, 60, 10).unwrap();
    harness.render().unwrap();
    harness.assert_screen_contains("\"auth_code\"");
}
