// 💾 Inventory Logger - JSON file persistence
//
// Semantics:
// - save: whole list -> file (overwrite), pretty-printed
// - load: file -> whole list (replace); missing or malformed file leaves the list as is
// Failures are caught here and reported; they never propagate to the caller.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::inventory_log::item::InventoryEntity;

// ============================================================================
// OUTCOMES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { count: usize },
    Failed { reason: String },
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// List replaced with `count` items from the file
    Loaded { count: usize },

    /// File does not exist; list untouched
    NoData,

    /// File unreadable or malformed; list untouched
    Failed { reason: String },
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

// ============================================================================
// LOGGER
// ============================================================================

/// Append-only log of entities bound to one JSON file
#[derive(Debug, Clone)]
pub struct InventoryLogger<T> {
    log: Vec<T>,
    file_path: PathBuf,
}

impl<T> InventoryLogger<T>
where
    T: InventoryEntity + Serialize + DeserializeOwned + Clone,
{
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        InventoryLogger {
            log: Vec::new(),
            file_path: file_path.into(),
        }
    }

    pub fn add(&mut self, item: T) {
        tracing::debug!(id = item.id(), "item logged");
        self.log.push(item);
    }

    /// Snapshot of the log in insertion order
    pub fn get_all(&self) -> Vec<T> {
        self.log.clone()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Write the whole log to the file, replacing its content
    pub fn save_to_file(&self) -> SaveOutcome {
        match self.write_json() {
            Ok(()) => {
                println!("Data successfully saved to {}", self.file_path.display());
                SaveOutcome::Saved {
                    count: self.log.len(),
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "save failed");
                println!("Error saving to file: {:#}", err);
                SaveOutcome::Failed {
                    reason: format!("{:#}", err),
                }
            }
        }
    }

    /// Replace the log with the file's content
    pub fn load_from_file(&mut self) -> LoadOutcome {
        if !self.file_path.exists() {
            println!("File does not exist. No data loaded.");
            return LoadOutcome::NoData;
        }

        match self.read_json() {
            Ok(items) => {
                self.log = items;
                println!("Data successfully loaded from {}", self.file_path.display());
                LoadOutcome::Loaded {
                    count: self.log.len(),
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "load failed");
                println!("Error loading from file: {:#}", err);
                LoadOutcome::Failed {
                    reason: format!("{:#}", err),
                }
            }
        }
    }

    fn write_json(&self) -> Result<()> {
        let file = File::create(&self.file_path)
            .with_context(|| format!("Failed to create file: {}", self.file_path.display()))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.log)
            .context("Failed to serialize inventory log")?;
        writer.flush()?;

        Ok(())
    }

    fn read_json(&self) -> Result<Vec<T>> {
        let file = File::open(&self.file_path)
            .with_context(|| format!("Failed to open file: {}", self.file_path.display()))?;

        let items = serde_json::from_reader(BufReader::new(file)).with_context(|| {
            format!("Failed to parse JSON in {}", self.file_path.display())
        })?;

        Ok(items)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory_log::item::LoggedItem;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn sample_items() -> Vec<LoggedItem> {
        let day = |d: u32| {
            NaiveDate::from_ymd_opt(2024, 6, d)
                .unwrap()
                .and_hms_opt(8, 15, 0)
                .unwrap()
        };
        vec![
            LoggedItem::new(1, "Laptop", 10, day(1)),
            LoggedItem::new(2, "Mouse", 50, day(6)),
            LoggedItem::new(3, "Keyboard", 30, day(4)),
            LoggedItem::new(4, "Monitor", 15, day(8)),
            LoggedItem::new(5, "USB Drive", 100, day(11)),
        ]
    }

    #[test]
    fn test_round_trip_into_fresh_logger() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");

        let mut logger = InventoryLogger::new(&path);
        for item in sample_items() {
            logger.add(item);
        }
        assert_eq!(logger.save_to_file(), SaveOutcome::Saved { count: 5 });

        let mut fresh: InventoryLogger<LoggedItem> = InventoryLogger::new(&path);
        assert_eq!(fresh.load_from_file(), LoadOutcome::Loaded { count: 5 });
        assert_eq!(fresh.get_all(), sample_items());
    }

    #[test]
    fn test_saved_file_is_indented_json_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");

        let mut logger = InventoryLogger::new(&path);
        logger.add(sample_items().remove(0));
        logger.save_to_file();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n"));
        assert!(content.contains("\"dateAdded\""));
    }

    #[test]
    fn test_load_missing_file_keeps_existing_items() {
        let dir = TempDir::new().unwrap();
        let mut logger = InventoryLogger::new(dir.path().join("absent.json"));
        logger.add(sample_items().remove(0));

        assert_eq!(logger.load_from_file(), LoadOutcome::NoData);
        assert_eq!(logger.len(), 1);
    }

    #[test]
    fn test_load_malformed_file_keeps_existing_items() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let mut logger = InventoryLogger::new(&path);
        logger.add(sample_items().remove(1));

        let outcome = logger.load_from_file();
        assert!(matches!(outcome, LoadOutcome::Failed { .. }));
        assert_eq!(logger.get_all()[0].name, "Mouse");
    }

    #[test]
    fn test_load_replaces_rather_than_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");

        let mut writer = InventoryLogger::new(&path);
        writer.add(sample_items().remove(2));
        writer.save_to_file();

        let mut reader = InventoryLogger::new(&path);
        reader.add(sample_items().remove(0));
        reader.add(sample_items().remove(1));
        reader.load_from_file();

        let names: Vec<String> = reader.get_all().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Keyboard"]);
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");

        let mut first = InventoryLogger::new(&path);
        for item in sample_items() {
            first.add(item);
        }
        first.save_to_file();

        let empty: InventoryLogger<LoggedItem> = InventoryLogger::new(&path);
        empty.save_to_file();

        let mut reader: InventoryLogger<LoggedItem> = InventoryLogger::new(&path);
        assert_eq!(reader.load_from_file(), LoadOutcome::Loaded { count: 0 });
        assert!(reader.is_empty());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        // Parent directory does not exist
        let path = dir.path().join("missing_dir").join("inventory.json");

        let logger: InventoryLogger<LoggedItem> = InventoryLogger::new(path);
        assert!(!logger.save_to_file().is_saved());
    }
}
