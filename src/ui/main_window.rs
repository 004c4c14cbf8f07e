use fltk::{
    app::{self, Sender},
    enums::{Align, Color, Event, FrameType},
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::domain::messages::Message;

pub const MENU_HEIGHT: i32 = 30;
pub const STATUS_BAR_HEIGHT: i32 = 22;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub status_bar: Frame,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 800, 600, "Untitled - Notepad");
    wind.set_xclass("Notepad");

    let mut flex = Flex::new(0, 0, 800, 600, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_frame(FrameType::FlatBox);

    // Status bar (initially hidden)
    let mut status_bar = Frame::default().with_size(0, 0);
    status_bar.set_frame(FrameType::FlatBox);
    status_bar.set_color(Color::from_rgb(240, 240, 240));
    status_bar.set_label_color(Color::from_rgb(60, 60, 60));
    status_bar.set_label_size(12);
    status_bar.set_align(Align::Left | Align::Inside);
    status_bar.hide();
    flex.fixed(&status_bar, 0);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Closing the window goes through the same confirmation as File/Exit.
    // Escape also fires this callback and is ignored.
    let s = *sender;
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        flex,
        menu,
        text_editor,
        status_bar,
    }
}
