//! Error types for registration, lookup and input validation

use thiserror::Error;

use crate::grid::GridError;
use crate::version::Version;

/// Registry and dispatch errors
#[derive(Debug, Error)]
pub enum SlotError {
    #[error("slot implementation '{id}' already registered with a different definition")]
    DuplicateId { id: String },
    #[error("slot implementation '{id}' not found")]
    NotFound { id: String },
    #[error("slot implementation '{id}' is not compatible with {system_id} {version}")]
    Incompatible {
        id: String,
        system_id: String,
        version: Version,
    },
    #[error("slot implementation '{id}' targets unknown slot '{slot_name}' of system {system_id}")]
    UnknownSlot {
        id: String,
        system_id: String,
        slot_name: String,
    },
    #[error("system '{system_id}' already registered at version {existing}")]
    SystemConflict {
        system_id: String,
        existing: Version,
    },
    #[error("slot implementation '{id}' implements {actual}, not {expected}")]
    SignatureMismatch {
        id: String,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("invalid input for '{id}': {source}")]
    InvalidInput {
        id: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode output of '{id}': {source}")]
    Output {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Malformed slot input, rejected before any implementation runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("declared board size {rows}x{cols} does not match the {grid_rows}x{grid_cols} grid")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        grid_rows: usize,
        grid_cols: usize,
    },
    #[error("{field} must be at least {min}, got {value}")]
    BelowMinimum {
        field: &'static str,
        min: u32,
        value: u32,
    },
}

impl InputError {
    /// Reject `value` when it is below `min`
    pub fn check_min(field: &'static str, value: u32, min: u32) -> Result<(), InputError> {
        if value < min {
            return Err(InputError::BelowMinimum { field, min, value });
        }
        Ok(())
    }
}
