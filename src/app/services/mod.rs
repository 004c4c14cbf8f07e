//! Services layer - collaborator seams and utilities.
//!
//! This module contains the interfaces the core talks to, plus helpers:
//! - Editor widget
//! - File store (with the on-disk implementation)
//! - Modal dialogs and file pickers
//! - Text operations

pub mod dialogs;
pub mod editor;
pub mod file_store;
pub mod text_ops;
