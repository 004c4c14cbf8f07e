//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Session (the single open document's identity and dirty flag)
//! - ConfirmationGate (which modal dialog is pending)
//! - Application settings and runtime view options
//! - Message types for the event system

pub mod dialog;
pub mod messages;
pub mod session;
pub mod settings;

pub use dialog::{ConfirmationGate, DialogResult, PendingDialog, Resolution};
pub use messages::Message;
pub use session::{FileOutcome, Session};
pub use settings::{AppSettings, ExitConfirmation, ViewOptions};
