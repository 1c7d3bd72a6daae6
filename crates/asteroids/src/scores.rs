//! Best-score table
//!
//! Stored as plain text, one `name,score` record per line. The name is
//! everything before the first comma.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Name used when a record is submitted without one
pub const ANONYMOUS: &str = "Anonymous";

/// Best-score errors
#[derive(Error, Debug)]
pub enum ScoreError {
    /// Reading or writing the score file failed
    #[error("Score file {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A line did not hold a valid record
    #[error("Invalid score record on line {line}: {text:?}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Offending line
        text: String,
    },
}

/// One name/score record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordScore {
    /// Player name
    pub name: String,
    /// Final score
    pub score: u32,
}

impl RecordScore {
    /// Create a record
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl fmt::Display for RecordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}   {}", self.name, self.score)
    }
}

/// Bounded table of the highest scores, highest first
#[derive(Debug, Clone)]
pub struct BestScores {
    records: Vec<RecordScore>,
    capacity: usize,
    path: Option<PathBuf>,
}

impl BestScores {
    /// Empty table that is never written to disk
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
            path: None,
        }
    }

    /// Load the table from `path`; a missing file yields an empty table
    pub fn load(path: impl AsRef<Path>, capacity: usize) -> Result<Self, ScoreError> {
        let path = path.as_ref();
        let mut table = Self {
            records: Vec::new(),
            capacity,
            path: Some(path.to_path_buf()),
        };

        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No best scores at {}, starting empty", path.display());
                return Ok(table);
            }
            Err(source) => {
                return Err(ScoreError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        table.records = parse_records(&text)?;
        table.normalize();
        log::debug!("Loaded {} best scores from {}", table.records.len(), path.display());
        Ok(table)
    }

    /// Records, highest first
    pub fn records(&self) -> &[RecordScore] {
        &self.records
    }

    /// Maximum number of records kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether `score` would earn a place in the table
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 || self.capacity == 0 {
            return false;
        }
        if self.records.len() < self.capacity {
            return true;
        }
        self.records.last().is_some_and(|lowest| score > lowest.score)
    }

    /// Insert a record; returns its rank if it made the table
    pub fn register(&mut self, name: &str, score: u32) -> Option<usize> {
        // After every record with an equal or higher score
        let rank = self.records.partition_point(|r| r.score >= score);
        if rank >= self.capacity {
            return None;
        }
        self.records.insert(rank, RecordScore::new(sanitize_name(name), score));
        self.records.truncate(self.capacity);
        Some(rank)
    }

    /// Rewrite the backing file with the kept records
    pub fn save(&self) -> Result<(), ScoreError> {
        let Some(path) = &self.path else {
            log::debug!("Best scores have no backing file, not saving");
            return Ok(());
        };

        let contents: String = self
            .records
            .iter()
            .map(|r| format!("{},{}\n", r.name, r.score))
            .collect();

        let io_error = |source| ScoreError::Io {
            path: path.clone(),
            source,
        };
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(io_error)?;
        }
        std::fs::write(path, contents).map_err(io_error)?;
        log::info!("Saved {} best scores to {}", self.records.len(), path.display());
        Ok(())
    }

    /// Text block shown on the game-over splash
    pub fn display_lines(&self) -> Vec<String> {
        let mut lines = vec!["Best Scores:".to_string(), String::from(" "), String::from(" ")];
        lines.extend(self.records.iter().map(ToString::to_string));
        lines
    }

    fn normalize(&mut self) {
        // Stable: equal scores keep their insertion order
        self.records.sort_by(|a, b| b.score.cmp(&a.score));
        self.records.truncate(self.capacity);
    }
}

fn parse_records(text: &str) -> Result<Vec<RecordScore>, ScoreError> {
    let mut records = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim_end();
        if line.trim().is_empty() {
            continue;
        }
        let parse_error = || ScoreError::Parse {
            line: index + 1,
            text: line.to_string(),
        };

        let (name, score) = line.split_once(',').ok_or_else(parse_error)?;
        let score = score.trim().parse::<u32>().map_err(|_| parse_error())?;
        records.push(RecordScore::new(name, score));
    }
    Ok(records)
}

fn sanitize_name(name: &str) -> String {
    let name = name.trim().replace([',', '\n', '\r'], " ");
    if name.is_empty() {
        ANONYMOUS.to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(records: &[(&str, u32)], capacity: usize) -> BestScores {
        let mut scores = BestScores::new(capacity);
        for (name, score) in records {
            scores.register(name, *score);
        }
        scores
    }

    #[test]
    fn test_records_sorted_and_bounded() {
        let scores = table(&[("a", 10), ("b", 50), ("c", 30), ("d", 40)], 3);
        let values: Vec<u32> = scores.records().iter().map(|r| r.score).collect();
        assert_eq!(values, vec![50, 40, 30]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let scores = table(&[("first", 10), ("second", 10)], 5);
        assert_eq!(scores.records()[0].name, "first");
        assert_eq!(scores.records()[1].name, "second");
    }

    #[test]
    fn test_qualifies() {
        let scores = table(&[("a", 100), ("b", 50)], 2);
        assert!(!scores.qualifies(0));
        assert!(!scores.qualifies(50));
        assert!(scores.qualifies(51));

        let roomy = table(&[("a", 100)], 2);
        assert!(roomy.qualifies(1));
    }

    #[test]
    fn test_register_reports_rank() {
        let mut scores = table(&[("a", 100), ("b", 50)], 2);
        assert_eq!(scores.register("c", 75), Some(1));
        assert_eq!(scores.register("d", 10), None);
    }

    #[test]
    fn test_duplicate_at_cutoff_is_rejected() {
        let mut scores = table(&[("A", 5)], 1);
        assert_eq!(scores.register("A", 5), None);
        assert_eq!(scores.len(), 1);

        let mut scores = table(&[("A", 9), ("B", 5)], 3);
        assert_eq!(scores.register("B", 5), Some(2));
        assert_eq!(scores.register("B", 5), None);
        assert_eq!(scores.records()[2].name, "B");
    }

    #[test]
    fn test_name_sanitizing() {
        let mut scores = BestScores::new(5);
        scores.register("  ", 10);
        scores.register("x,y", 5);
        assert_eq!(scores.records()[0].name, ANONYMOUS);
        assert_eq!(scores.records()[1].name, "x y");
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let scores = BestScores::load(dir.path().join("none.txt"), 10).unwrap();
        assert!(scores.is_empty());
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        std::fs::write(&path, "bob,20\n\nalice, 300\r\ncarol,100\n").unwrap();

        let mut scores = BestScores::load(&path, 10).unwrap();
        let names: Vec<&str> = scores.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["alice", "carol", "bob"]);

        scores.register("dave", 150);
        scores.save().unwrap();
        let saved = std::fs::read_to_string(&path).unwrap();
        assert_eq!(saved, "alice,300\ndave,150\ncarol,100\nbob,20\n");
    }

    #[test]
    fn test_save_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("scores.txt");
        let mut scores = BestScores::load(&path, 10).unwrap();
        scores.register("eve", 7);
        scores.save().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "eve,7\n");
    }

    #[test]
    fn test_malformed_line_reports_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        std::fs::write(&path, "bob,20\nbroken\n").unwrap();

        match BestScores::load(&path, 10) {
            Err(ScoreError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_display_lines() {
        let scores = table(&[("zed", 42)], 10);
        assert_eq!(scores.display_lines(), vec!["Best Scores:", " ", " ", "zed   42"]);
    }
}
