//! Controllers layer - orchestration and coordination.
//!
//! This module contains the dispatcher that maps menu messages onto the
//! session, the confirmation gate and the editor, and runs the per-frame
//! bookkeeping.

pub mod dispatch;
