use chrono::{Local, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use moodgit::entry::Entry;
use moodgit::mood::Mood;
use moodgit::ui::components::{EntryRow, EntryTable};
use moodgit::ui::core::{Action, Component};

fn row(i: usize) -> EntryRow {
    EntryRow {
        date: "2024/03/01 12:00".to_string(),
        mood: "calm".to_string(),
        intensity: "05/10".to_string(),
        message: format!("row {i}"),
        tags: String::new(),
    }
}

fn table_with(rows: usize, body_height: usize) -> EntryTable {
    let mut table = EntryTable::new();
    table.set_body_height(body_height);
    table.set_rows((0..rows).map(row).collect());
    table
}

fn press(table: &mut EntryTable, code: KeyCode) {
    let action = table.update(Action::Navigate(KeyEvent::new(code, KeyModifiers::NONE)));
    assert_eq!(action, Action::None);
}

#[test]
fn test_row_projection() {
    let created_at = Utc.with_ymd_and_hms(2024, 3, 9, 18, 45, 0).unwrap();
    let entry = Entry {
        id: 1,
        intensity: 7,
        mood: Mood::Excited,
        message: "this message is definitely longer than the column".to_string(),
        tags: vec!["work".to_string(), "launch".to_string()],
        created_at,
        updated_at: created_at,
    };

    let row = EntryRow::from_entry(&entry);

    let local = created_at.with_timezone(&Local);
    assert_eq!(row.date, local.format("%Y/%m/%d %H:%M").to_string());
    assert_eq!(row.mood, "excited");
    assert_eq!(row.intensity, "07/10");
    assert_eq!(row.message, "this message is definitel...");
    assert_eq!(row.message.chars().count(), 28);
    assert_eq!(row.tags, "work, launch");
}

#[test]
fn test_short_message_is_kept() {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 0).unwrap();
    let entry = Entry {
        id: 2,
        intensity: 0,
        mood: Mood::Tired,
        message: "nap".to_string(),
        tags: Vec::new(),
        created_at,
        updated_at: created_at,
    };

    let row = EntryRow::from_entry(&entry);
    assert_eq!(row.intensity, "00/10");
    assert_eq!(row.message, "nap");
    assert_eq!(row.tags, "");
}

#[test]
fn test_empty_table_has_no_selection() {
    let mut table = table_with(0, 5);
    assert!(table.is_empty());
    assert_eq!(table.selected(), None);

    press(&mut table, KeyCode::Down);
    press(&mut table, KeyCode::End);
    assert_eq!(table.selected(), None);
    assert_eq!(table.offset(), 0);
}

#[test]
fn test_cursor_stays_within_rows() {
    let mut table = table_with(3, 5);
    assert_eq!(table.selected(), Some(0));

    press(&mut table, KeyCode::Up);
    assert_eq!(table.selected(), Some(0));

    press(&mut table, KeyCode::Char('j'));
    press(&mut table, KeyCode::Down);
    press(&mut table, KeyCode::Down);
    assert_eq!(table.selected(), Some(2));

    press(&mut table, KeyCode::Char('k'));
    assert_eq!(table.selected(), Some(1));
}

#[test]
fn test_home_end_and_paging() {
    let mut table = table_with(10, 3);

    press(&mut table, KeyCode::End);
    assert_eq!(table.selected(), Some(9));
    assert_eq!(table.offset(), 7);

    press(&mut table, KeyCode::Home);
    assert_eq!(table.selected(), Some(0));
    assert_eq!(table.offset(), 0);

    press(&mut table, KeyCode::PageDown);
    assert_eq!(table.selected(), Some(3));
    assert_eq!(table.offset(), 1);

    press(&mut table, KeyCode::PageDown);
    press(&mut table, KeyCode::PageDown);
    press(&mut table, KeyCode::PageDown);
    assert_eq!(table.selected(), Some(9));

    press(&mut table, KeyCode::PageUp);
    assert_eq!(table.selected(), Some(6));
    assert_eq!(table.offset(), 6);

    press(&mut table, KeyCode::Char('G'));
    assert_eq!(table.selected(), Some(9));
    press(&mut table, KeyCode::Char('g'));
    assert_eq!(table.selected(), Some(0));
}

#[test]
fn test_selection_stays_visible_while_scrolling() {
    let mut table = table_with(8, 3);

    for expected in 1..8 {
        press(&mut table, KeyCode::Down);
        let selected = table.selected().unwrap();
        assert_eq!(selected, expected);
        assert!(selected >= table.offset());
        assert!(selected < table.offset() + table.body_height());
    }
}

#[test]
fn test_new_rows_reclamp_cursor() {
    let mut table = table_with(10, 4);
    press(&mut table, KeyCode::End);
    assert_eq!(table.selected(), Some(9));

    table.set_rows((0..4).map(row).collect());
    assert_eq!(table.selected(), Some(3));
    assert_eq!(table.offset(), 0);

    table.set_rows(Vec::new());
    assert_eq!(table.selected(), None);
}

#[test]
fn test_other_actions_pass_through() {
    let mut table = table_with(2, 4);
    assert_eq!(table.update(Action::Refresh), Action::Refresh);
    assert_eq!(table.selected(), Some(0));
}
