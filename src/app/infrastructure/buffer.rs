use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    enums::{Color, Font},
    prelude::*,
    text::{StyleTableEntryExt, TextAttr, TextBuffer, TextEditor},
};

use crate::app::domain::settings::clamp_tab_size;
use crate::app::services::editor::EditorWidget;

/// Style byte for ordinary text.
pub const STYLE_TEXT: char = 'A';
/// Style byte for spaces and tabs.
pub const STYLE_WHITESPACE: char = 'B';

const WHITESPACE_SHADE: (u8, u8, u8) = (222, 226, 238);

/// Read text from an FLTK TextBuffer without leaking the C-allocated copy.
///
/// fltk-rs's `TextBuffer::text()` copies the `malloc()`'d C string returned by
/// `Fl_Text_Buffer_text()` into a String but never frees the original, leaking
/// the full buffer size on every call. This calls the FFI directly and frees it.
pub fn buffer_text_no_leak(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: buf.as_ptr() is the live FLTK buffer. Fl_Text_Buffer_text returns
    // a malloc'd, null-terminated copy (or null), which we copy out and free
    // exactly once with the matching allocator.
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let cstr = std::ffi::CStr::from_ptr(ptr);
        let result = cstr.to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        result
    }
}

fn style_for_byte(b: u8) -> char {
    match b {
        b' ' | b'\t' => STYLE_WHITESPACE,
        _ => STYLE_TEXT,
    }
}

fn tab_distance(tab_size: u32) -> i32 {
    i32::try_from(clamp_tab_size(tab_size)).unwrap_or(1)
}

/// 1-based column after `line_prefix`, counting characters rather than bytes.
fn char_column(line_prefix: impl Iterator<Item = u8>) -> usize {
    line_prefix.filter(|b| b & 0xC0 != 0x80).count() + 1
}

/// One style character per byte of `text`, as FLTK's highlight data expects.
pub fn whitespace_styles(text: &str) -> String {
    text.bytes().map(style_for_byte).collect()
}

/// [`EditorWidget`] backed by an FLTK `TextEditor`.
///
/// A modify callback on the text buffer raises the change latch on every
/// insert or delete and keeps the parallel style buffer aligned, so toggling
/// whitespace visibility only swaps the style table.
pub struct FltkEditor {
    editor: TextEditor,
    buffer: TextBuffer,
    style_buffer: TextBuffer,
    changed: Rc<Cell<bool>>,
    show_whitespace: bool,
}

impl FltkEditor {
    pub fn new(mut editor: TextEditor, tab_size: u32, show_whitespace: bool) -> Self {
        let mut buffer = TextBuffer::default();
        buffer.set_tab_distance(tab_distance(tab_size));
        let style_buffer = TextBuffer::default();
        let changed = Rc::new(Cell::new(false));

        let latch = changed.clone();
        let source = buffer.clone();
        let mut styles = style_buffer.clone();
        buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                latch.set(true);
                if deleted > 0 {
                    styles.remove(pos, pos + deleted);
                }
                if inserted > 0 {
                    let filler: String = (pos..pos + inserted)
                        .map(|i| style_for_byte(source.byte_at(i)))
                        .collect();
                    styles.insert(pos, &filler);
                }
            }
        });

        editor.set_buffer(buffer.clone());

        let mut this = Self {
            editor,
            buffer,
            style_buffer,
            changed,
            show_whitespace,
        };
        this.apply_style_table();
        this
    }

    pub fn widget(&self) -> &TextEditor {
        &self.editor
    }

    pub fn widget_mut(&mut self) -> &mut TextEditor {
        &mut self.editor
    }

    /// 1-based line and column of the cursor, counted by FLTK in place.
    ///
    /// Only the bytes between the line start and the cursor are visited.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let pos = self.editor.insert_position().max(0);
        let line = self.buffer.count_lines(0, pos).max(0) as usize + 1;
        let start = self.buffer.line_start(pos);
        let col = char_column((start..pos).map(|i| self.buffer.byte_at(i)));
        (line, col)
    }

    fn apply_style_table(&mut self) {
        let font = self.editor.text_font();
        let size = self.editor.text_size();
        let entry = |attr: TextAttr, bgcolor: Color| StyleTableEntryExt {
            color: Color::Foreground,
            font,
            size,
            attr,
            bgcolor,
        };

        let text = entry(TextAttr::None, Color::Background2);
        let whitespace = if self.show_whitespace {
            let (r, g, b) = WHITESPACE_SHADE;
            entry(TextAttr::BgColor, Color::from_rgb(r, g, b))
        } else {
            entry(TextAttr::None, Color::Background2)
        };
        self.editor
            .set_highlight_data_ext(self.style_buffer.clone(), vec![text, whitespace]);
    }
}

impl EditorWidget for FltkEditor {
    fn text(&self) -> String {
        buffer_text_no_leak(&self.buffer)
    }

    fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.editor.set_insert_position(0);
        self.editor.show_insert_position();
        // Programmatic loads are not user edits
        self.changed.set(false);
    }

    fn cut(&mut self) {
        self.editor.kf_cut();
    }

    fn copy(&mut self) {
        self.editor.kf_copy();
    }

    fn paste(&mut self) {
        self.editor.kf_paste();
    }

    fn delete(&mut self) {
        self.editor.kf_delete();
    }

    fn select_all(&mut self) {
        self.editor.kf_select_all();
    }

    fn set_show_whitespace(&mut self, show: bool) {
        self.show_whitespace = show;
        self.apply_style_table();
        self.editor.redraw();
    }

    fn take_text_changed(&mut self) -> bool {
        self.changed.replace(false)
    }
}
