use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::messages::Message;
use crate::app::domain::settings::ViewOptions;

fn toggle_flag(on: bool) -> MenuFlag {
    if on { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle }
}

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, view: &ViewOptions) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Exit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileExit) });

    // Edit
    menu.add("Edit/Cut", Shortcut::Ctrl | 'x', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCut) });
    menu.add("Edit/Copy", Shortcut::Ctrl | 'c', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCopy) });
    menu.add("Edit/Paste", Shortcut::Ctrl | 'v', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditPaste) });
    menu.add("Edit/Delete", Shortcut::None, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::EditDelete) });
    menu.add("Edit/Select All", Shortcut::Ctrl | 'a', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SelectAll) });

    // Format
    menu.add("Format/Word Wrap", Shortcut::None, toggle_flag(view.word_wrap), { let s = *s; move |_| s.send(Message::ToggleWordWrap) });
    menu.add("Format/View Whitespace", Shortcut::None, toggle_flag(view.show_whitespace), { let s = *s; move |_| s.send(Message::ToggleShowWhitespace) });
    menu.add("Format/View Border", Shortcut::None, toggle_flag(view.show_border), { let s = *s; move |_| s.send(Message::ToggleBorder) });

    // View
    menu.add("View/Status Bar", Shortcut::None, toggle_flag(view.show_status_bar), { let s = *s; move |_| s.send(Message::ToggleStatusBar) });

    // Help
    menu.add("Help/About Notepad", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
