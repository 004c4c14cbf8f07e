use tracing::{debug, warn};

use crate::app::domain::dialog::{ConfirmationGate, DialogResult, PendingDialog, Resolution};
use crate::app::domain::messages::Message;
use crate::app::domain::session::Session;
use crate::app::domain::settings::{AppSettings, ViewOptions};
use crate::app::infrastructure::error::Result;
use crate::app::services::dialogs::DialogHost;
use crate::app::services::editor::EditorWidget;
use crate::app::services::file_store::FileStore;
use crate::app::services::text_ops::APP_NAME;

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Borrowed collaborators for one dispatch or tick.
pub struct Collaborators<'a> {
    pub editor: &'a mut dyn EditorWidget,
    pub store: &'a dyn FileStore,
    pub dialogs: &'a mut dyn DialogHost,
}

/// Owns the document session, the modal gate and the view options, and maps
/// each [`Message`] onto them.
pub struct Controller {
    session: Session,
    gate: ConfirmationGate,
    view: ViewOptions,
    settings: AppSettings,
}

impl Controller {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            session: Session::new(),
            gate: ConfirmationGate::new(),
            view: ViewOptions::from_settings(&settings),
            settings,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn gate(&self) -> &ConfirmationGate {
        &self.gate
    }

    pub fn view(&self) -> ViewOptions {
        self.view
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn handle(&mut self, message: Message, c: &mut Collaborators) -> Flow {
        debug!(?message, "dispatch");
        match message {
            Message::FileNew => {
                if self.may_discard(c.dialogs) {
                    self.session.new_document(c.editor);
                }
            }
            Message::FileOpen => {
                if self.may_discard(c.dialogs) {
                    let path = c.dialogs.pick_open_path();
                    let result = self.session.open(path.as_deref(), c.store, c.editor);
                    self.report(result, c.dialogs);
                }
            }
            Message::FileSave => {
                if self.session.is_untitled() {
                    self.save_as(c);
                } else {
                    let result = self.session.save(c.store, c.editor);
                    self.report(result, c.dialogs);
                }
            }
            Message::FileSaveAs => self.save_as(c),
            Message::FileExit | Message::WindowClose => {
                if !self
                    .settings
                    .exit_confirmation
                    .should_ask(self.session.is_dirty())
                {
                    return Flow::Quit;
                }
                self.gate.request_exit();
            }

            Message::EditCut => c.editor.cut(),
            Message::EditCopy => c.editor.copy(),
            Message::EditPaste => c.editor.paste(),
            Message::EditDelete => c.editor.delete(),
            Message::SelectAll => c.editor.select_all(),

            Message::ToggleWordWrap => self.view.word_wrap = !self.view.word_wrap,
            Message::ToggleShowWhitespace => {
                self.view.show_whitespace = !self.view.show_whitespace;
                c.editor.set_show_whitespace(self.view.show_whitespace);
            }
            Message::ToggleBorder => self.view.show_border = !self.view.show_border,
            Message::ToggleStatusBar => self.view.show_status_bar = !self.view.show_status_bar,

            Message::ShowAbout => self.gate.request_about(),
        }
        Flow::Continue
    }

    /// Per-frame bookkeeping: latch the dirty flag, then present whichever
    /// modal is pending and feed its answer back into the gate.
    pub fn tick(&mut self, c: &mut Collaborators) -> Flow {
        self.session.mark_dirty_if_changed(c.editor.take_text_changed());

        let result = match self.gate.pending() {
            PendingDialog::None => return Flow::Continue,
            PendingDialog::About => {
                c.dialogs.show_about();
                DialogResult::Ok
            }
            PendingDialog::ExitConfirmation => {
                if c.dialogs.confirm(&self.exit_prompt()) {
                    DialogResult::Yes
                } else {
                    DialogResult::No
                }
            }
        };

        match self.gate.resolve(result) {
            Resolution::Exit => Flow::Quit,
            Resolution::Dismissed | Resolution::Ignored => Flow::Continue,
        }
    }

    fn save_as(&mut self, c: &mut Collaborators) {
        let path = c.dialogs.pick_save_path();
        let result = self.session.save_as(path.as_deref(), c.store, c.editor);
        self.report(result, c.dialogs);
    }

    fn may_discard(&self, dialogs: &mut dyn DialogHost) -> bool {
        if !self.settings.confirm_discard_changes || !self.session.is_dirty() {
            return true;
        }
        dialogs.confirm(&format!(
            "\"{}\" has unsaved changes. Discard them?",
            self.session.display_name()
        ))
    }

    fn exit_prompt(&self) -> String {
        if self.session.is_dirty() {
            format!(
                "\"{}\" has unsaved changes.\nExit {} anyway?",
                self.session.display_name(),
                APP_NAME
            )
        } else {
            format!("Are you sure you want to exit {}?", APP_NAME)
        }
    }

    fn report<T>(&self, result: Result<T>, dialogs: &mut dyn DialogHost) {
        if let Err(e) = result {
            warn!(error = %e, "file operation failed");
            if self.settings.report_io_errors {
                dialogs.alert(&e.to_string());
            }
        }
    }
}
