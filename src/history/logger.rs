//! Append-only calculation history log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{FincalcError, FincalcResult};

use super::entry::HistoryEntry;

/// Handles writing history entries to the log file
pub struct HistoryLogger {
    /// Path to the history log file
    log_path: PathBuf,
}

impl HistoryLogger {
    /// Create a new HistoryLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry as one JSON line
    pub fn log(&self, entry: &HistoryEntry) -> FincalcResult<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| FincalcError::Io(format!("Failed to create history directory: {}", e)))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| FincalcError::Io(format!("Failed to open history log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| FincalcError::Json(format!("Failed to serialize history entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| FincalcError::Io(format!("Failed to write history entry: {}", e)))?;

        file.flush()
            .map_err(|e| FincalcError::Io(format!("Failed to flush history log: {}", e)))?;

        Ok(())
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> FincalcResult<Vec<HistoryEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| FincalcError::Io(format!("Failed to open history log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                FincalcError::Io(format!("Failed to read history line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: HistoryEntry = serde_json::from_str(&line).map_err(|e| {
                FincalcError::Json(format!(
                    "Failed to parse history entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries from the log
    pub fn read_recent(&self, count: usize) -> FincalcResult<Vec<HistoryEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Get the number of entries in the log
    pub fn entry_count(&self) -> FincalcResult<usize> {
        if !self.log_path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.log_path)
            .map_err(|e| FincalcError::Io(format!("Failed to open history log: {}", e)))?;

        let reader = BufReader::new(file);
        let count = reader
            .lines()
            .filter_map(Result::ok)
            .filter(|l| !l.trim().is_empty())
            .count();

        Ok(count)
    }

    /// Delete the log, returning how many entries it held
    pub fn clear(&self) -> FincalcResult<usize> {
        let count = self.entry_count()?;
        if self.log_path.exists() {
            std::fs::remove_file(&self.log_path)
                .map_err(|e| FincalcError::Io(format!("Failed to remove history log: {}", e)))?;
        }
        Ok(count)
    }

    /// Get the path to the history log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::entry::CalculatorKind;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_logger() -> (HistoryLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("history.log");
        let logger = HistoryLogger::new(log_path);
        (logger, temp_dir)
    }

    fn entry(index: usize) -> HistoryEntry {
        HistoryEntry::new(
            CalculatorKind::CompoundInterest,
            &json!({"principal": index}),
            format!("run {}", index),
        )
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        logger.log(&entry(0)).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].calculator, CalculatorKind::CompoundInterest);
        assert_eq!(entries[0].result_summary, "run 0");
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();
        for i in 0..10 {
            logger.log(&entry(i)).unwrap();
        }

        assert_eq!(logger.entry_count().unwrap(), 10);

        let recent = logger.read_recent(3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].result_summary, "run 7");
        assert_eq!(recent[2].result_summary, "run 9");
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();
        assert_eq!(logger.entry_count().unwrap(), 0);
        assert!(logger.read_all().unwrap().is_empty());
        assert_eq!(logger.clear().unwrap(), 0);
    }

    #[test]
    fn test_clear() {
        let (logger, _temp) = create_test_logger();
        logger.log(&entry(1)).unwrap();
        logger.log(&entry(2)).unwrap();

        assert_eq!(logger.clear().unwrap(), 2);
        assert!(!logger.path().exists());
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let logger = HistoryLogger::new(temp_dir.path().join("nested").join("history.log"));

        logger.log(&entry(0)).unwrap();
        assert_eq!(logger.entry_count().unwrap(), 1);
    }

    #[test]
    fn test_corrupt_line_is_reported() {
        let (logger, _temp) = create_test_logger();
        logger.log(&entry(0)).unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(logger.path())
            .and_then(|mut f| writeln!(f, "not json"))
            .unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(matches!(err, FincalcError::Json(_)));
        assert!(err.to_string().contains("line 2"));
    }
}
