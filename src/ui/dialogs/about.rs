use fltk::{
    button::Button,
    enums::{Color, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::app::services::text_ops::APP_NAME;

/// Build date stamped by the build script, `YYYY-MM-DD` or "unknown".
pub const BUILD_DATE: &str = env!("NOTEPAD_BUILD_DATE");

/// Show About dialog. Returns once the user closes it.
pub fn show_about_dialog() {
    let version = env!("CARGO_PKG_VERSION");
    let mut dialog = Window::default()
        .with_size(360, 250)
        .with_label(&format!("About {}", APP_NAME))
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 340, 230, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default();
    title.set_label(APP_NAME);
    title.set_label_size(22);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 40);

    let mut version_frame = Frame::default();
    version_frame.set_label(&format!("Version {}", version));
    version_frame.set_label_size(14);
    flex.fixed(&version_frame, 25);

    let mut date_frame = Frame::default();
    date_frame.set_label(&format!("Built {}", BUILD_DATE));
    date_frame.set_label_size(12);
    flex.fixed(&date_frame, 20);

    let mut desc_frame = Frame::default();
    desc_frame.set_label(env!("CARGO_PKG_DESCRIPTION"));
    desc_frame.set_label_size(12);
    desc_frame.set_label_color(Color::from_rgb(100, 100, 100));
    desc_frame.set_align(fltk::enums::Align::Center | fltk::enums::Align::Inside | fltk::enums::Align::Wrap);

    let mut close_btn = Button::default().with_label("OK");
    flex.fixed(&close_btn, 35);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    run_dialog(&dialog);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_date_is_stamped() {
        assert!(!BUILD_DATE.is_empty());
        assert!(BUILD_DATE == "unknown" || BUILD_DATE.split('-').count() == 3);
    }
}
