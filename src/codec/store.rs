//! Canvas records on disk, stored as JSON.

use std::fs;
use std::path::Path;

use crate::error::{ChalkError, Result};

use super::CanvasRecord;

/// File suffix for canvas records.
pub const CANVAS_EXTENSION: &str = ".canvas.json";

/// Read a record from a JSON file.
pub fn read_record(path: &Path) -> Result<CanvasRecord> {
    let content = fs::read_to_string(path).map_err(|e| ChalkError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read canvas: {}", e),
    })?;

    serde_json::from_str(&content).map_err(|e| ChalkError::Parse {
        message: format!("Invalid canvas record {}: {}", path.display(), e),
        help: Some("Expected {\"pixels\": [...], \"lit\": bool, \"version\": 2}".to_string()),
    })
}

/// Write a record as pretty-printed JSON.
pub fn write_record(path: &Path, record: &CanvasRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record).map_err(|e| ChalkError::Parse {
        message: format!("Failed to serialize canvas: {}", e),
        help: None,
    })?;

    fs::write(path, json + "\n").map_err(|e| ChalkError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write canvas: {}", e),
    })
}
