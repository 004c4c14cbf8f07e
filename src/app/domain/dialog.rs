/// Which modal dialog, if any, is waiting to be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingDialog {
    #[default]
    None,
    About,
    ExitConfirmation,
}

/// The answer a modal dialog reports back to the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Ok,
    Yes,
    No,
}

/// What the caller should do after feeding a result into the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The result did not apply to the pending dialog; nothing changed.
    Ignored,
    /// The dialog closed without further action.
    Dismissed,
    /// The user affirmed the exit confirmation.
    Exit,
}

/// Tracks the single modal that is currently showing.
///
/// Requests never stack: asking for a new dialog replaces whatever was
/// pending. Only a `Yes` answer to the exit confirmation produces
/// [`Resolution::Exit`].
#[derive(Debug, Default)]
pub struct ConfirmationGate {
    pending: PendingDialog,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> PendingDialog {
        self.pending
    }

    pub fn is_idle(&self) -> bool {
        self.pending == PendingDialog::None
    }

    pub fn request_about(&mut self) {
        self.pending = PendingDialog::About;
    }

    pub fn request_exit(&mut self) {
        self.pending = PendingDialog::ExitConfirmation;
    }

    pub fn resolve(&mut self, result: DialogResult) -> Resolution {
        match (self.pending, result) {
            (PendingDialog::About, DialogResult::Ok) => {
                self.pending = PendingDialog::None;
                Resolution::Dismissed
            }
            (PendingDialog::ExitConfirmation, DialogResult::Yes) => {
                self.pending = PendingDialog::None;
                Resolution::Exit
            }
            (PendingDialog::ExitConfirmation, _) => {
                self.pending = PendingDialog::None;
                Resolution::Dismissed
            }
            (PendingDialog::About, _) | (PendingDialog::None, _) => Resolution::Ignored,
        }
    }
}
