//! Sheet import/export boundary.
//!
//! File formats live outside the core. Adapters implement
//! [`SheetFileManager`] and collapse every internal failure to
//! [`FileStatus::Failure`]; the document forwards the status unchanged.

use crate::service::sheet::Sheet;
use std::fmt::Debug;

/// Binary outcome reported by a file manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Success,
    Failure,
}

impl FileStatus {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

impl From<bool> for FileStatus {
    fn from(value: bool) -> Self {
        if value {
            Self::Success
        } else {
            Self::Failure
        }
    }
}

/// Adapter contract for converting sheets to and from external files.
pub trait SheetFileManager: Debug {
    /// Reads a sheet from `source` (path, URL or format-specific locator).
    fn import_sheet(&self, source: &str) -> FileStatus;
    /// Writes `sheet` in `format` (e.g. `pdf`, `png`, `xmind`).
    fn export_sheet(&self, sheet: &Sheet, format: &str) -> FileStatus;
    /// Writes `sheet` to `destination` in the native format.
    fn save_sheet_as(&self, sheet: &Sheet, destination: &str) -> FileStatus;
}

/// Stand-in adapter that accepts every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFileManager;

impl SheetFileManager for NoopFileManager {
    fn import_sheet(&self, _source: &str) -> FileStatus {
        FileStatus::Success
    }

    fn export_sheet(&self, _sheet: &Sheet, _format: &str) -> FileStatus {
        FileStatus::Success
    }

    fn save_sheet_as(&self, _sheet: &Sheet, _destination: &str) -> FileStatus {
        FileStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::FileStatus;

    #[test]
    fn status_maps_from_bool() {
        assert_eq!(FileStatus::from(true), FileStatus::Success);
        assert_eq!(FileStatus::from(false), FileStatus::Failure);
        assert!(FileStatus::Success.is_success());
        assert_eq!(FileStatus::Failure.as_str(), "failure");
    }
}
