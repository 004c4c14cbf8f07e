pub mod about;

use std::path::Path;

use fltk::{app, dialog, prelude::*, window::Window};

use crate::app::services::dialogs::DialogHost;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};

/// Run a dialog's event loop, automatically closing the dialog if the app
/// is quitting (e.g. user clicks X on the main window while a dialog is open).
pub fn run_dialog(dialog: &Window) {
    while dialog.shown() {
        app::wait();
        if app::should_program_quit() {
            let mut d = dialog.clone();
            d.hide();
        }
    }
}

/// [`DialogHost`] backed by FLTK's native file chooser and message boxes.
#[derive(Debug, Default)]
pub struct FltkDialogs {
    /// Last directory used in a file open/save dialog.
    last_directory: Option<String>,
}

impl FltkDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    fn remember_directory(&mut self, path: Option<&str>) {
        if let Some(parent) = path.and_then(|p| Path::new(p).parent()) {
            self.last_directory = Some(parent.to_string_lossy().to_string());
        }
    }
}

impl DialogHost for FltkDialogs {
    fn pick_open_path(&mut self) -> Option<String> {
        let path = native_open_dialog(self.last_directory.as_deref());
        self.remember_directory(path.as_deref());
        path
    }

    fn pick_save_path(&mut self) -> Option<String> {
        let path = native_save_dialog(self.last_directory.as_deref());
        self.remember_directory(path.as_deref());
        path
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        // Button 0 also answers Escape and window close, so it must be "No"
        matches!(dialog::choice2_default(prompt, "No", "Yes", ""), Some(1))
    }

    fn show_about(&mut self) {
        about::show_about_dialog();
    }

    fn alert(&mut self, message: &str) {
        dialog::alert_default(message);
    }
}
