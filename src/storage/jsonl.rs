//! JSONL writer - append-only serde records, one JSON object per line.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{PromptrError, Result};

/// Append-only JSONL file of serde records
pub struct JsonlWriter {
    path: PathBuf,
    /// Serializes appends so concurrent writers never interleave lines
    write_lock: Mutex<()>,
}

impl JsonlWriter {
    /// Create a writer for the given file path, creating parent
    /// directories as needed
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the underlying JSONL file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record as one JSON line
    pub fn append<T: Serialize>(&self, record: &T) -> Result<()> {
        let line = serde_json::to_string(record)?;
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| PromptrError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    /// Read all records back, skipping blank lines
    pub fn read_all<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                records.push(serde_json::from_str(&line)?);
            }
        }
        Ok(records)
    }

    /// Number of records in the file
    pub fn count(&self) -> Result<usize> {
        if !self.path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut count = 0;
        for line in reader.lines() {
            if !line?.trim().is_empty() {
                count += 1;
            }
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestRecord {
        id: String,
        answer: String,
    }

    fn create_test_writer() -> (JsonlWriter, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let writer = JsonlWriter::new(temp_dir.path().join("completions.jsonl")).unwrap();
        (writer, temp_dir)
    }

    #[test]
    fn test_append_and_read() {
        let (writer, _temp) = create_test_writer();
        let record = TestRecord {
            id: "1".to_string(),
            answer: "42".to_string(),
        };

        writer.append(&record).unwrap();
        let all: Vec<TestRecord> = writer.read_all().unwrap();

        assert_eq!(all, vec![record]);
    }

    #[test]
    fn test_append_preserves_order() {
        let (writer, _temp) = create_test_writer();
        for i in 0..5 {
            writer
                .append(&TestRecord {
                    id: i.to_string(),
                    answer: "42".to_string(),
                })
                .unwrap();
        }

        let all: Vec<TestRecord> = writer.read_all().unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].id, "0");
        assert_eq!(all[4].id, "4");
    }

    #[test]
    fn test_read_missing_file() {
        let (writer, _temp) = create_test_writer();
        let all: Vec<TestRecord> = writer.read_all().unwrap();
        assert!(all.is_empty());
    }

    #[test]
    fn test_count() {
        let (writer, _temp) = create_test_writer();
        assert_eq!(writer.count().unwrap(), 0);

        writer
            .append(&TestRecord {
                id: "1".to_string(),
                answer: "42".to_string(),
            })
            .unwrap();
        writer
            .append(&TestRecord {
                id: "2".to_string(),
                answer: "3/8".to_string(),
            })
            .unwrap();

        assert_eq!(writer.count().unwrap(), 2);
    }

    #[test]
    fn test_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("log.jsonl");
        let writer = JsonlWriter::new(&nested).unwrap();

        writer
            .append(&TestRecord {
                id: "1".to_string(),
                answer: "42".to_string(),
            })
            .unwrap();

        assert!(nested.exists());
    }

    #[test]
    fn test_skips_blank_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.jsonl");
        std::fs::write(&path, "{\"id\":\"1\",\"answer\":\"42\"}\n\n\n").unwrap();

        let writer = JsonlWriter::new(&path).unwrap();
        let all: Vec<TestRecord> = writer.read_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(writer.count().unwrap(), 1);
    }

    #[test]
    fn test_persistence_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.jsonl");

        {
            let writer = JsonlWriter::new(&path).unwrap();
            writer
                .append(&TestRecord {
                    id: "1".to_string(),
                    answer: "42".to_string(),
                })
                .unwrap();
        }

        {
            let writer = JsonlWriter::new(&path).unwrap();
            let all: Vec<TestRecord> = writer.read_all().unwrap();
            assert_eq!(all.len(), 1);
        }
    }

    #[test]
    fn test_path() {
        let (writer, temp) = create_test_writer();
        assert_eq!(writer.path(), temp.path().join("completions.jsonl"));
    }
}
