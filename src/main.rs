#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use fltk::{app, prelude::*};

use notepad::app::infrastructure::logging::init_logging;
use notepad::app::state::AppState;
use notepad::app::{AppSettings, Flow, Message};
use notepad::ui::main_window::build_main_window;

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("{}", e);
    }

    let app = app::App::default();
    let settings = AppSettings::load();
    let (sender, receiver) = app::channel::<Message>();

    let widgets = build_main_window(&sender);
    let mut state = AppState::new(widgets, settings, &sender);
    state.window.show();
    tracing::info!("started");

    'event_loop: while app.wait() {
        while let Some(msg) = receiver.recv() {
            if state.handle(msg) == Flow::Quit {
                break 'event_loop;
            }
        }
        if state.tick() == Flow::Quit {
            break;
        }
    }

    tracing::info!("exiting");
    app.quit();
}
