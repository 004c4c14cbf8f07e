use fltk::{
    enums::FrameType,
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::WrapMode,
    window::Window,
};

use super::controllers::dispatch::{Collaborators, Controller, Flow};
use super::domain::messages::Message;
use super::domain::settings::AppSettings;
use super::infrastructure::buffer::FltkEditor;
use super::services::file_store::DiskStore;
use super::services::text_ops::{status_text, window_title};
use crate::ui::dialogs::FltkDialogs;
use crate::ui::main_window::{MainWidgets, STATUS_BAR_HEIGHT};
use crate::ui::menu::build_menu;

/// Owns the widgets, the controller and the production collaborators, and
/// keeps the window in step with the controller's state.
pub struct AppState {
    pub window: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub status_bar: Frame,
    editor: FltkEditor,
    dialogs: FltkDialogs,
    store: DiskStore,
    controller: Controller,
    title: String,
}

impl AppState {
    pub fn new(widgets: MainWidgets, settings: AppSettings, sender: &fltk::app::Sender<Message>) -> Self {
        let MainWidgets {
            wind,
            flex,
            mut menu,
            text_editor,
            status_bar,
        } = widgets;

        let controller = Controller::new(settings);
        let view = controller.view();
        build_menu(&mut menu, sender, &view);

        let editor = FltkEditor::new(
            text_editor,
            controller.settings().tab_size,
            view.show_whitespace,
        );

        let mut state = Self {
            window: wind,
            flex,
            menu,
            status_bar,
            editor,
            dialogs: FltkDialogs::new(),
            store: DiskStore,
            controller,
            title: String::new(),
        };
        state.apply_view_options();
        state.refresh();
        state
    }

    pub fn handle(&mut self, message: Message) -> Flow {
        let flow = self.controller.handle(
            message,
            &mut Collaborators {
                editor: &mut self.editor,
                store: &self.store,
                dialogs: &mut self.dialogs,
            },
        );
        self.apply_view_options();
        self.refresh();
        flow
    }

    /// Once per event loop iteration.
    pub fn tick(&mut self) -> Flow {
        let flow = self.controller.tick(&mut Collaborators {
            editor: &mut self.editor,
            store: &self.store,
            dialogs: &mut self.dialogs,
        });
        self.refresh();
        flow
    }

    fn apply_view_options(&mut self) {
        let view = self.controller.view();
        let editor = self.editor.widget_mut();

        if view.word_wrap {
            editor.wrap_mode(WrapMode::AtBounds, 0);
        } else {
            editor.wrap_mode(WrapMode::None, 0);
        }
        editor.set_frame(if view.show_border { FrameType::DownBox } else { FrameType::FlatBox });
        editor.redraw();

        let shown = self.status_bar.visible();
        if view.show_status_bar && !shown {
            self.status_bar.show();
            self.flex.fixed(&self.status_bar, STATUS_BAR_HEIGHT);
            self.window.redraw();
        } else if !view.show_status_bar && shown {
            self.status_bar.hide();
            self.flex.fixed(&self.status_bar, 0);
            self.window.redraw();
        }
    }

    /// Update the window title and status bar from the session
    fn refresh(&mut self) {
        let session = self.controller.session();

        let title = window_title(session);
        if title != self.title {
            self.window.set_label(&title);
            self.title = title;
        }

        if self.controller.view().show_status_bar {
            let (line, col) = self.editor.cursor_line_col();
            let status = format!(" {}", status_text(session, line, col));
            if self.status_bar.label() != status {
                self.status_bar.set_label(&status);
            }
        }
    }
}
