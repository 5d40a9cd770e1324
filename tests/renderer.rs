use chrono::{TimeZone, Utc};
use moodgit::entry::Entry;
use moodgit::mood::{Mood, MoodFilter};
use moodgit::ui::components::header::{header_line, stats_line};
use moodgit::ui::components::help_panel::help_text;
use moodgit::ui::components::status_bar::status_text;
use moodgit::ui::components::EntryTable;
use moodgit::ui::state::AppState;
use moodgit::ui::view;
use ratatui::{backend::TestBackend, Terminal};

fn sample_entries() -> Vec<Entry> {
    let at = Utc.with_ymd_and_hms(2024, 2, 14, 20, 30, 0).unwrap();
    vec![
        Entry {
            id: 2,
            intensity: 9,
            mood: Mood::Excited,
            message: "got the promotion".to_string(),
            tags: vec!["work".to_string()],
            created_at: at,
            updated_at: at,
        },
        Entry {
            id: 1,
            intensity: 3,
            mood: Mood::Tired,
            message: String::new(),
            tags: Vec::new(),
            created_at: at,
            updated_at: at,
        },
    ]
}

fn draw(state: &AppState, table: &mut EntryTable, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| view::draw(f, state, table)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
        .collect()
}

#[test]
fn test_stats_line_variants() {
    let mut state = AppState::new(10);
    assert_eq!(stats_line(&state), "total: 0 entries | filter: all");

    state.apply_page(sample_entries(), 25, 1);
    state.filter_mode = MoodFilter::Only(Mood::Excited);
    assert_eq!(stats_line(&state), "total: 25 entries | filter: excited | page: 2/3");

    state.enter_search();
    state.push_search_char('p');
    assert_eq!(
        stats_line(&state),
        "total: 25 entries | filter: excited | page: 2/3 | search: p_"
    );

    state.commit_search();
    assert_eq!(
        stats_line(&state),
        "total: 25 entries | filter: excited | page: 1/3 | search: \"p\""
    );
}

#[test]
fn test_header_line_starts_with_title() {
    let state = AppState::new(10);
    assert_eq!(header_line(&state), "🎭 moodgit interactive  total: 0 entries | filter: all");
}

#[test]
fn test_status_text_fits_width() {
    let narrow = status_text(20);
    assert_eq!(narrow.chars().count(), 20);
    assert!(narrow.ends_with("..."));

    let wide = status_text(120);
    assert_eq!(wide.chars().count(), 120);
    assert!(wide.starts_with("↑/↓,j/k: navigate | q: quit"));
}

#[test]
fn test_table_view_layout() {
    let mut state = AppState::new(10);
    let entries = sample_entries();
    state.apply_page(entries.clone(), 2, 0);
    let mut table = EntryTable::new();
    table.set_entries(&entries);

    let lines = draw(&state, &mut table, 100, 12);

    assert!(lines[0].contains("total: 2 entries | filter: all | page: 1/1"));
    assert!(lines.iter().any(|line| line.contains("date") && line.contains("intensity")));
    assert!(lines.iter().any(|line| line.contains("excited") && line.contains("09/10")));
    assert!(lines.iter().any(|line| line.contains("got the promotion")));
    assert!(lines.iter().any(|line| line.contains("tired") && line.contains("03/10")));
    assert!(lines[11].contains("q: quit"));
}

#[test]
fn test_status_bar_follows_last_known_width() {
    let mut state = AppState::new(10);
    state.resize(40, 10);
    let mut table = EntryTable::new();

    let lines = draw(&state, &mut table, 100, 10);

    assert_eq!(lines[9].trim_end(), status_text(40));
    assert!(lines[9].trim_end().ends_with("..."));
}

#[test]
fn test_empty_view_shows_zero_total() {
    let state = AppState::new(10);
    let mut table = EntryTable::new();

    let lines = draw(&state, &mut table, 100, 10);

    assert!(lines[0].contains("total: 0 entries | filter: all"));
    assert!(!lines[0].contains("page:"));
    assert!(lines.iter().any(|line| line.contains("No entries match")));
}

#[test]
fn test_table_learns_its_height_from_the_frame() {
    let state = AppState::new(10);
    let mut table = EntryTable::new();

    draw(&state, &mut table, 80, 20);

    // Header and status lines, two borders and the column header
    assert_eq!(table.body_height(), 20 - 2 - 3);
}

#[test]
fn test_help_view_replaces_table() {
    let mut state = AppState::new(10);
    state.apply_page(sample_entries(), 25, 1);
    state.toggle_help();
    let mut table = EntryTable::new();
    table.set_entries(&state.entries);

    let lines = draw(&state, &mut table, 100, 45);
    let screen = lines.join("\n");

    assert!(screen.contains("moodgit interactive log - help"));
    assert!(screen.contains("page size: 10 entries per page"));
    assert!(screen.contains("current: page 2/3"));
    assert!(!screen.contains("got the promotion"));
}

#[test]
fn test_help_text_reports_context() {
    let mut state = AppState::new(5);
    state.apply_page(Vec::new(), 12, 0);
    state.filter_mode = MoodFilter::Only(Mood::Calm);
    state.enter_search();
    for c in "beach".chars() {
        state.push_search_char(c);
    }
    state.commit_search();

    let help = help_text(&state);

    assert!(help.contains("page size: 5 entries per page"));
    assert!(help.contains("current: page 1/3"));
    assert!(help.contains("total entries: 12"));
    assert!(help.contains("current filter: calm"));
    assert!(help.contains("current search: \"beach\""));
    assert!(help.contains("press ? again to return to the table view."));
}
