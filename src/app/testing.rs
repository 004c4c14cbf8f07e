//! In-memory collaborators shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};

use crate::app::services::dialogs::DialogHost;
use crate::app::services::editor::EditorWidget;
use crate::app::services::file_store::FileStore;

#[derive(Debug, Default)]
pub struct FakeEditor {
    text: String,
    changed: bool,
    pub show_whitespace: bool,
    pub selected_all: bool,
    pub calls: Vec<&'static str>,
}

impl FakeEditor {
    /// Simulate the user typing at the end of the buffer.
    pub fn type_text(&mut self, s: &str) {
        self.text.push_str(s);
        self.changed = true;
    }
}

impl EditorWidget for FakeEditor {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn cut(&mut self) {
        self.calls.push("cut");
    }

    fn copy(&mut self) {
        self.calls.push("copy");
    }

    fn paste(&mut self) {
        self.calls.push("paste");
    }

    fn delete(&mut self) {
        self.calls.push("delete");
    }

    fn select_all(&mut self) {
        self.selected_all = true;
        self.calls.push("select_all");
    }

    fn set_show_whitespace(&mut self, show: bool) {
        self.show_whitespace = show;
    }

    fn take_text_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn insert(&self, path: &str, contents: &[u8]) {
        self.files
            .borrow_mut()
            .insert(PathBuf::from(path), contents.to_vec());
    }

    pub fn get(&self, path: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(Path::new(path)).cloned()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn len(&self) -> usize {
        self.files.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }
}

impl FileStore for MemoryStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if self.fail_writes.get() {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}

/// Scripted dialog answers. Unscripted pickers cancel and unscripted
/// confirmations answer "no".
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    pub open_paths: VecDeque<Option<String>>,
    pub save_paths: VecDeque<Option<String>>,
    pub answers: VecDeque<bool>,
    pub prompts: Vec<String>,
    pub alerts: Vec<String>,
    pub about_shown: usize,
}

impl ScriptedDialogs {
    pub fn open_with(mut self, path: &str) -> Self {
        self.open_paths.push_back(Some(path.to_string()));
        self
    }

    pub fn save_with(mut self, path: &str) -> Self {
        self.save_paths.push_back(Some(path.to_string()));
        self
    }

    pub fn answer(mut self, yes: bool) -> Self {
        self.answers.push_back(yes);
        self
    }
}

impl DialogHost for ScriptedDialogs {
    fn pick_open_path(&mut self) -> Option<String> {
        self.open_paths.pop_front().flatten()
    }

    fn pick_save_path(&mut self) -> Option<String> {
        self.save_paths.pop_front().flatten()
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().unwrap_or(false)
    }

    fn show_about(&mut self) {
        self.about_shown += 1;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
