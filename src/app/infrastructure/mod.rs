//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - FLTK text buffer and editor adapter
//! - Logging subscriber setup
//! - Error types

pub mod buffer;
pub mod error;
pub mod logging;
