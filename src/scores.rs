/// High-score persistence — a flat text file of `name,score` lines, sorted
/// descending by score and capped at the top 10.
///
/// Lines split on the first comma; names are written without escaping, so
/// callers should keep commas out of them.  Malformed lines are skipped on
/// load rather than aborting, and a missing file is just an empty board.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const MAX_ENTRIES: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    entries: Vec<ScoreEntry>,
}

/// Default score-file location, `~/.zombie_jumper_scores`.
pub fn high_score_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".zombie_jumper_scores")
}

fn parse_line(line: &str) -> Option<ScoreEntry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (name, score) = line.split_once(',')?;
    let score = score.trim().parse().ok()?;
    Some(ScoreEntry { name: name.to_string(), score })
}

impl ScoreBoard {
    /// Parse score-file text, silently dropping anything unreadable.
    pub fn parse(text: &str) -> Self {
        let mut entries: Vec<ScoreEntry> = text.lines().filter_map(parse_line).collect();
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_ENTRIES);
        ScoreBoard { entries }
    }

    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(_) => ScoreBoard::default(),
        }
    }

    /// Overwrite `path` with the current top-10 list.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.name);
            out.push(',');
            out.push_str(&entry.score.to_string());
            out.push('\n');
        }
        fs::write(path, out)
    }

    /// Would `score` make the table?
    pub fn qualifies(&self, score: u32) -> bool {
        self.entries.len() < MAX_ENTRIES
            || self.entries.last().map_or(true, |last| score > last.score)
    }

    /// Insert a new record, keeping the list sorted and capped.
    pub fn record(&mut self, name: String, score: u32) {
        self.entries.push(ScoreEntry { name, score });
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn best(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}
