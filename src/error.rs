// ⚠️ Error Types - validation and I/O failures shared by the programs
//
// Two families:
// - InventoryError: raised by the typed inventory repository (duplicate / missing / bad quantity)
// - GradingError: raised by the student result parser and report writer
//
// The JSON inventory logger never raises; it reports through SaveOutcome / LoadOutcome.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// INVENTORY ERRORS
// ============================================================================

/// Errors raised by `InventoryRepository` operations
///
/// # Categories
///
/// - **Validation**: `InvalidQuantity`
/// - **State**: `DuplicateItem`, `ItemNotFound`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// An item with the same ID is already stored
    #[error("Item with ID {0} already exists.")]
    DuplicateItem(u32),

    /// No item with the given ID is stored
    #[error("Item with ID {0} not found.")]
    ItemNotFound(u32),

    /// Requested quantity was negative
    #[error("Quantity cannot be negative.")]
    InvalidQuantity,
}

impl InventoryError {
    /// Returns true if the input itself was rejected, independent of repository state
    pub fn is_validation_error(&self) -> bool {
        matches!(self, InventoryError::InvalidQuantity)
    }

    /// Returns true if the repository state made the operation impossible
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            InventoryError::DuplicateItem(_) | InventoryError::ItemNotFound(_)
        )
    }
}

// ============================================================================
// GRADING ERRORS
// ============================================================================

/// Which numeric column of a student line failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    Id,
    Score,
}

impl StudentField {
    pub fn label(&self) -> &'static str {
        match self {
            StudentField::Id => "ID",
            StudentField::Score => "score",
        }
    }
}

/// Errors raised while reading student results or writing the report
#[derive(Debug, Error)]
pub enum GradingError {
    /// Line did not have exactly three fields
    #[error("Line {line}: Missing field(s). Expected 3 fields but found {found}.")]
    MissingField { line: u64, found: usize },

    /// ID or score was not an integer
    #[error("Line {line}: Invalid {label} '{value}'.", label = .field.label())]
    InvalidFormat {
        line: u64,
        field: StudentField,
        value: String,
    },

    /// Input file does not exist
    #[error("Could not find file '{}'.", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GradingError {
    /// Returns true for malformed input (as opposed to a missing file or I/O failure)
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            GradingError::MissingField { .. } | GradingError::InvalidFormat { .. }
        )
    }

    /// 1-indexed line number of a parse failure
    pub fn line(&self) -> Option<u64> {
        match self {
            GradingError::MissingField { line, .. } | GradingError::InvalidFormat { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}
