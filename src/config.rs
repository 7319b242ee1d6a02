// ⚙️ Program configuration - file locations, overridable by positional arguments

use std::path::PathBuf;

pub const DEFAULT_STUDENT_INPUT: &str = "students.txt";
pub const DEFAULT_STUDENT_REPORT: &str = "students_report.txt";
pub const DEFAULT_INVENTORY_LOG: &str = "inventory.json";

/// Input and output files of the student result processor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentReportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for StudentReportConfig {
    fn default() -> Self {
        StudentReportConfig {
            input: PathBuf::from(DEFAULT_STUDENT_INPUT),
            output: PathBuf::from(DEFAULT_STUDENT_REPORT),
        }
    }
}

impl StudentReportConfig {
    /// `[input] [output]`; missing arguments keep their defaults
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        if let Some(input) = args.next() {
            config.input = PathBuf::from(input);
        }
        if let Some(output) = args.next() {
            config.output = PathBuf::from(output);
        }
        config
    }
}

/// JSON file backing the inventory logger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryLogConfig {
    pub path: PathBuf,
}

impl Default for InventoryLogConfig {
    fn default() -> Self {
        InventoryLogConfig {
            path: PathBuf::from(DEFAULT_INVENTORY_LOG),
        }
    }
}

impl InventoryLogConfig {
    /// `[path]`
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        args.into_iter()
            .next()
            .map(|path| InventoryLogConfig {
                path: PathBuf::from(path),
            })
            .unwrap_or_default()
    }
}
