use std::path::Path;

use tracing::info;

use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::editor::EditorWidget;
use crate::app::services::file_store::FileStore;
use crate::app::services::text_ops::extract_filename;

/// What a file operation ended up doing when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Opened,
    Saved,
    /// The picker was dismissed or returned an empty path.
    Cancelled,
    /// Plain save on a document that was never opened or saved.
    NothingToSave,
}

/// Identity of the single open document.
///
/// `file_buffer` is the last content known to be on disk, not a mirror of
/// the editor. `dirty` is raised only by [`Session::mark_dirty_if_changed`]
/// and lowered only by a successful open, a successful save, or New.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    filename: Option<String>,
    file_buffer: Option<Vec<u8>>,
    dirty: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn file_buffer(&self) -> Option<&[u8]> {
        self.file_buffer.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_untitled(&self) -> bool {
        self.filename.is_none()
    }

    pub fn display_name(&self) -> String {
        match self.filename {
            Some(ref path) => extract_filename(path),
            None => "Untitled".to_string(),
        }
    }

    /// Discard everything and start an untitled document.
    pub fn new_document(&mut self, editor: &mut dyn EditorWidget) {
        editor.set_text("");
        self.filename = None;
        self.file_buffer = None;
        self.dirty = false;
    }

    pub fn open(
        &mut self,
        path: Option<&str>,
        store: &dyn FileStore,
        editor: &mut dyn EditorWidget,
    ) -> Result<FileOutcome> {
        let Some(path) = path.filter(|p| !p.is_empty()) else {
            return Ok(FileOutcome::Cancelled);
        };

        let contents = store.read(Path::new(path)).map_err(|source| AppError::Read {
            path: path.to_string(),
            source,
        })?;

        editor.set_text(&String::from_utf8_lossy(&contents));
        self.filename = Some(path.to_string());
        self.file_buffer = Some(contents);
        self.dirty = false;
        info!(path, "opened");
        Ok(FileOutcome::Opened)
    }

    pub fn save(&mut self, store: &dyn FileStore, editor: &dyn EditorWidget) -> Result<FileOutcome> {
        let Some(path) = self.filename.clone() else {
            return Ok(FileOutcome::NothingToSave);
        };
        if self.file_buffer.is_none() {
            return Ok(FileOutcome::NothingToSave);
        }

        self.write_to(&path, store, editor)?;
        Ok(FileOutcome::Saved)
    }

    pub fn save_as(
        &mut self,
        path: Option<&str>,
        store: &dyn FileStore,
        editor: &dyn EditorWidget,
    ) -> Result<FileOutcome> {
        let Some(path) = path.filter(|p| !p.is_empty()) else {
            return Ok(FileOutcome::Cancelled);
        };

        self.write_to(path, store, editor)?;
        self.filename = Some(path.to_string());
        Ok(FileOutcome::Saved)
    }

    /// Latch the dirty flag when the editor reports an edit.
    /// Returns true if this call raised the flag.
    pub fn mark_dirty_if_changed(&mut self, text_changed: bool) -> bool {
        if text_changed && !self.dirty {
            self.dirty = true;
            return true;
        }
        false
    }

    fn write_to(&mut self, path: &str, store: &dyn FileStore, editor: &dyn EditorWidget) -> Result<()> {
        let snapshot = editor.text().into_bytes();

        store
            .write(Path::new(path), &snapshot)
            .map_err(|source| AppError::Write {
                path: path.to_string(),
                source,
            })?;

        self.file_buffer = Some(snapshot);
        self.dirty = false;
        info!(path, "saved");
        Ok(())
    }
}
