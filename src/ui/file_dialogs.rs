use std::path::Path;

use fltk::dialog::{FileDialogType, NativeFileChooser, NativeFileChooserOptions};

/// Filter for native dialogs. FLTK format: "Description\tPattern" per line.
pub fn text_files_filter() -> String {
    ["Text Files\t*.txt", "All Files\t*"].join("\n")
}

/// A remembered directory may have been removed since it was last used.
fn usable_directory(dir: &str) -> Option<&str> {
    if Path::new(dir).is_dir() {
        Some(dir)
    } else {
        tracing::debug!(dir, "remembered dialog directory no longer exists");
        None
    }
}

fn run_chooser(mut nfc: NativeFileChooser, directory: Option<&str>) -> Option<String> {
    nfc.set_filter(&text_files_filter());
    if let Some(dir) = directory.and_then(usable_directory) {
        if let Err(e) = nfc.set_directory(&dir) {
            tracing::debug!(dir, error = %e, "could not preselect dialog directory");
        }
    }
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

pub fn native_open_dialog(directory: Option<&str>) -> Option<String> {
    let nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    run_chooser(nfc, directory)
}

/// Save picker. The native chooser asks before overwriting an existing file.
pub fn native_save_dialog(directory: Option<&str>) -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_option(NativeFileChooserOptions::SaveAsConfirm);
    run_chooser(nfc, directory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_format() {
        let filter = text_files_filter();
        assert_eq!(filter.lines().count(), 2);
        assert!(filter.lines().all(|l| l.contains('\t')));
        assert!(filter.starts_with("Text Files\t*.txt"));
    }

    #[test]
    fn test_usable_directory_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().to_string_lossy().to_string();
        let missing = dir.path().join("gone").to_string_lossy().to_string();

        assert_eq!(usable_directory(&existing), Some(existing.as_str()));
        assert_eq!(usable_directory(&missing), None);
    }
}
