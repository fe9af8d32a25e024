//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The page turns browser events into `BoardEvents` calls and delegates
//! rendering details to `components`.

pub mod activities;
