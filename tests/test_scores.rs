use zombie_jumper::scores::{ScoreBoard, ScoreEntry, MAX_ENTRIES};

fn entry(name: &str, score: u32) -> ScoreEntry {
    ScoreEntry { name: name.to_string(), score }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

#[test]
fn parse_sorts_descending() {
    let board = ScoreBoard::parse("ann,300\nbob,700\ncol,500\n");
    assert_eq!(
        board.entries(),
        &[entry("bob", 700), entry("col", 500), entry("ann", 300)]
    );
}

#[test]
fn parse_skips_malformed_lines() {
    // A corrupt line must not abort the load — it is dropped instead
    let text = "ann,300\n\
                garbage without a comma\n\
                bob,not_a_number\n\
                \n\
                col,500\n";
    let board = ScoreBoard::parse(text);
    assert_eq!(board.entries(), &[entry("col", 500), entry("ann", 300)]);
}

#[test]
fn parse_splits_on_the_first_comma_only() {
    // The second field must be the whole remainder; a comma inside it makes
    // the score unparsable and the line is skipped, never mis-attributed
    let board = ScoreBoard::parse("ann,300\nodd,name,500\n");
    assert_eq!(board.entries(), &[entry("ann", 300)]);
}

#[test]
fn parse_trims_whitespace_around_score() {
    let board = ScoreBoard::parse("ann, 300\r\n");
    assert_eq!(board.entries(), &[entry("ann", 300)]);
}

#[test]
fn parse_caps_at_top_ten() {
    let mut text = String::new();
    for i in 0..15 {
        text.push_str(&format!("p{},{}\n", i, i * 100));
    }
    let board = ScoreBoard::parse(&text);
    assert_eq!(board.entries().len(), MAX_ENTRIES);
    assert_eq!(board.best(), Some(1400));
    // The five lowest scores fell off
    assert_eq!(board.entries().last().map(|e| e.score), Some(500));
}

// ── Load / save ───────────────────────────────────────────────────────────────

#[test]
fn missing_file_loads_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let board = ScoreBoard::load(&dir.path().join("does_not_exist"));
    assert!(board.entries().is_empty());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scores.txt");

    let mut board = ScoreBoard::default();
    board.record("ann".to_string(), 300);
    board.record("bob".to_string(), 700);
    board.save(&path).expect("save");

    let loaded = ScoreBoard::load(&path);
    assert_eq!(loaded, board);
    assert_eq!(loaded.entries()[0], entry("bob", 700));
}

#[test]
fn save_overwrites_previous_contents() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scores.txt");

    let mut first = ScoreBoard::default();
    first.record("ann".to_string(), 300);
    first.save(&path).expect("save");

    let second = ScoreBoard::default();
    second.save(&path).expect("save");

    assert!(ScoreBoard::load(&path).entries().is_empty());
}

// ── Qualification & records ───────────────────────────────────────────────────

#[test]
fn any_score_qualifies_on_a_short_board() {
    let board = ScoreBoard::default();
    assert!(board.qualifies(0));
}

#[test]
fn full_board_requires_beating_the_lowest() {
    let mut board = ScoreBoard::default();
    for i in 0..MAX_ENTRIES as u32 {
        board.record(format!("p{}", i), (i + 1) * 100);
    }
    assert!(!board.qualifies(100)); // ties the lowest → out
    assert!(board.qualifies(101));
}

#[test]
fn record_keeps_the_board_sorted_and_capped() {
    let mut board = ScoreBoard::default();
    for i in 0..MAX_ENTRIES as u32 {
        board.record(format!("p{}", i), (i + 1) * 100);
    }
    board.record("new".to_string(), 650);

    assert_eq!(board.entries().len(), MAX_ENTRIES);
    assert_eq!(board.best(), Some(1000));
    // 650 slots in between 700 and 600; the old lowest (100) fell off
    assert!(board.entries().iter().any(|e| e.name == "new"));
    assert!(board.entries().iter().all(|e| e.score >= 200));
    let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
    let mut sorted = scores.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted);
}
