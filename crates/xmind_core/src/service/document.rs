//! Document: ordered collection of sheets.
//!
//! # Responsibility
//! - Create, delete and duplicate sheets.
//! - Own the id allocator and configuration shared by every sheet.
//! - Forward import/export requests to the file manager.
//!
//! # Invariants
//! - A new document holds exactly one populated sheet named `Sheet 1`.
//! - New sheet numbering derives from the current sheet count.
//! - Deleting the last sheet is allowed; `first_sheet` then reports
//!   `EmptyDocument`.

use crate::config::MindmapConfig;
use crate::error::{MindmapError, MindmapResult};
use crate::extension::file_manager::{FileStatus, NoopFileManager, SheetFileManager};
use crate::model::id::{IdAllocator, SheetId};
use crate::service::sheet::Sheet;
use log::{debug, info};
use std::sync::Arc;

/// Mind map document.
#[derive(Debug)]
pub struct Xmind {
    sheets: Vec<Sheet>,
    ids: Arc<IdAllocator>,
    config: Arc<MindmapConfig>,
    file_manager: Box<dyn SheetFileManager>,
}

impl Xmind {
    /// Creates a document with default configuration and one default sheet.
    pub fn new() -> Self {
        Self::with_config(Arc::new(MindmapConfig::default()))
    }

    pub fn with_config(config: Arc<MindmapConfig>) -> Self {
        Self::with_file_manager(config, Box::new(NoopFileManager))
    }

    pub fn with_file_manager(
        config: Arc<MindmapConfig>,
        file_manager: Box<dyn SheetFileManager>,
    ) -> Self {
        let ids = Arc::new(IdAllocator::new(config.ids));
        let mut document = Self {
            sheets: Vec::new(),
            ids,
            config,
            file_manager,
        };
        document.add_new_sheet();
        info!(
            "event=document_create module=document status=ok sheets={} id_strategy={:?}",
            document.sheets.len(),
            document.ids.strategy()
        );
        document
    }

    pub fn config(&self) -> &MindmapConfig {
        &self.config
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn sheet(&self, id: SheetId) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.id() == id)
    }

    pub fn sheet_mut(&mut self, id: SheetId) -> Option<&mut Sheet> {
        self.sheets.iter_mut().find(|sheet| sheet.id() == id)
    }

    pub fn first_sheet(&self) -> MindmapResult<&Sheet> {
        self.sheets.first().ok_or(MindmapError::EmptyDocument)
    }

    pub fn first_sheet_mut(&mut self) -> MindmapResult<&mut Sheet> {
        self.sheets.first_mut().ok_or(MindmapError::EmptyDocument)
    }

    /// Appends a populated sheet named `Sheet {n+1}` for `n` current sheets.
    pub fn add_new_sheet(&mut self) -> &mut Sheet {
        let index = self.sheets.len();
        let sheet = Sheet::new(
            format!("Sheet {}", index + 1),
            Arc::clone(&self.ids),
            Arc::clone(&self.config),
        );
        debug!(
            "event=sheet_add module=document status=ok sheet_id={} index={}",
            sheet.id(),
            index
        );
        self.sheets.push(sheet);
        &mut self.sheets[index]
    }

    /// Removes one sheet. Returns `false` when it does not exist.
    pub fn delete_sheet(&mut self, id: SheetId) -> bool {
        let before = self.sheets.len();
        self.sheets.retain(|sheet| sheet.id() != id);
        let removed = self.sheets.len() != before;
        debug!(
            "event=sheet_delete module=document status={} sheet_id={} remaining={}",
            if removed { "ok" } else { "noop" },
            id,
            self.sheets.len()
        );
        removed
    }

    /// Appends a deep copy of sheet `id` and returns it.
    pub fn duplicate_sheet(&mut self, id: SheetId) -> MindmapResult<&mut Sheet> {
        let copy = self
            .sheet(id)
            .ok_or(MindmapError::SheetNotFound(id))?
            .duplicate();
        let index = self.sheets.len();
        self.sheets.push(copy);
        Ok(&mut self.sheets[index])
    }

    pub fn import_sheet(&self, source: &str) -> FileStatus {
        let status = self.file_manager.import_sheet(source);
        debug!(
            "event=sheet_import module=document status={}",
            status.as_str()
        );
        status
    }

    pub fn export_sheet(&self, id: SheetId, format: &str) -> MindmapResult<FileStatus> {
        let sheet = self.sheet(id).ok_or(MindmapError::SheetNotFound(id))?;
        let status = self.file_manager.export_sheet(sheet, format);
        debug!(
            "event=sheet_export module=document status={} sheet_id={}",
            status.as_str(),
            id
        );
        Ok(status)
    }

    pub fn save_sheet_as(&self, id: SheetId, destination: &str) -> MindmapResult<FileStatus> {
        let sheet = self.sheet(id).ok_or(MindmapError::SheetNotFound(id))?;
        let status = self.file_manager.save_sheet_as(sheet, destination);
        debug!(
            "event=sheet_save module=document status={} sheet_id={}",
            status.as_str(),
            id
        );
        Ok(status)
    }
}

impl Default for Xmind {
    fn default() -> Self {
        Self::new()
    }
}
