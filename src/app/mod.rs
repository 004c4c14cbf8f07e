//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core state machines (Session, ConfirmationGate, Settings, Messages)
//! - `controllers/` - Orchestration (message dispatch, per-frame bookkeeping)
//! - `services/` - Collaborator seams (editor widget, file store, dialogs) and text helpers
//! - `infrastructure/` - External integrations (FLTK buffer, logging, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenient external access
pub use controllers::dispatch::{Collaborators, Controller, Flow};
pub use domain::{
    AppSettings, ConfirmationGate, DialogResult, ExitConfirmation, FileOutcome, Message,
    PendingDialog, Resolution, Session, ViewOptions,
};
pub use infrastructure::error::AppError;
