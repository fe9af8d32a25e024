//! Utility helpers shared across board and view modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (timers) and small pure
//! derivations (initials) from page and component logic.

pub mod initials;
pub mod timer;
