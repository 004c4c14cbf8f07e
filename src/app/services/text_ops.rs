use std::path::Path;

use crate::app::domain::session::Session;

pub const APP_NAME: &str = "Notepad";

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Window title for the current session, prefixed with `*` when there are unsaved changes.
pub fn window_title(session: &Session) -> String {
    let prefix = if session.is_dirty() { "*" } else { "" };
    format!("{}{} - {}", prefix, session.display_name(), APP_NAME)
}

/// Text shown in the status bar.
pub fn status_text(session: &Session, line: usize, col: usize) -> String {
    let mut status = format!("Ln {}, Col {}", line, col);
    if session.is_dirty() {
        status.push_str("  |  Modified");
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename_from_path() {
        assert_eq!(extract_filename("/home/user/test.txt"), "test.txt");
        assert_eq!(extract_filename("test.txt"), "test.txt");
        assert_eq!(extract_filename("/path/with/many/levels/file.rs"), "file.rs");
    }

    #[test]
    fn test_extract_filename_edge_cases() {
        assert_eq!(extract_filename("/home/user/"), "user");
        assert_eq!(extract_filename(""), "Unknown");
        assert_eq!(extract_filename("."), "Unknown");
        assert_eq!(extract_filename("/"), "Unknown");
    }

    #[test]
    fn test_window_title_untitled() {
        let session = Session::new();
        assert_eq!(window_title(&session), "Untitled - Notepad");
    }

    #[test]
    fn test_window_title_dirty_marker() {
        let mut session = Session::new();
        session.mark_dirty_if_changed(true);
        assert_eq!(window_title(&session), "*Untitled - Notepad");
    }

    #[test]
    fn test_status_text() {
        let mut session = Session::new();
        assert_eq!(status_text(&session, 3, 7), "Ln 3, Col 7");
        session.mark_dirty_if_changed(true);
        assert_eq!(status_text(&session, 1, 1), "Ln 1, Col 1  |  Modified");
    }
}
