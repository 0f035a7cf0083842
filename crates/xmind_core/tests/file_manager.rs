use std::sync::Arc;
use xmind_core::{
    FileStatus, MindmapConfig, MindmapError, Sheet, SheetFileManager, Xmind,
};

#[derive(Debug)]
struct RejectingPdf;

impl SheetFileManager for RejectingPdf {
    fn import_sheet(&self, source: &str) -> FileStatus {
        source.ends_with(".xmind").into()
    }

    fn export_sheet(&self, _sheet: &Sheet, format: &str) -> FileStatus {
        (format != "pdf").into()
    }

    fn save_sheet_as(&self, sheet: &Sheet, destination: &str) -> FileStatus {
        (!destination.is_empty() && !sheet.name().is_empty()).into()
    }
}

#[test]
fn default_file_manager_reports_success() {
    let document = Xmind::new();
    let id = document.first_sheet().unwrap().id();

    assert_eq!(document.import_sheet("file.xmind"), FileStatus::Success);
    assert_eq!(document.export_sheet(id, "pdf").unwrap(), FileStatus::Success);
    assert_eq!(
        document.save_sheet_as(id, "file.xmind").unwrap(),
        FileStatus::Success
    );
}

#[test]
fn adapter_status_is_forwarded_unchanged() {
    let document = Xmind::with_file_manager(
        Arc::new(MindmapConfig::default()),
        Box::new(RejectingPdf),
    );
    let id = document.first_sheet().unwrap().id();

    assert_eq!(document.import_sheet("notes.txt"), FileStatus::Failure);
    assert_eq!(document.export_sheet(id, "pdf").unwrap(), FileStatus::Failure);
    assert_eq!(document.export_sheet(id, "png").unwrap(), FileStatus::Success);
    assert_eq!(document.save_sheet_as(id, "").unwrap(), FileStatus::Failure);
}

#[test]
fn export_of_missing_sheet_is_not_found() {
    let document = Xmind::new();
    let missing = uuid::Uuid::from_u128(u128::MAX);

    assert_eq!(
        document.export_sheet(missing, "pdf"),
        Err(MindmapError::SheetNotFound(missing))
    );
}
