//! Reusable view components for the board page.
//!
//! Components only read signals and report user intent through callbacks;
//! the board owns every write.

pub mod activities_list;
pub mod activity_card;
pub mod notice;
pub mod signup_form;
