//! Client-side view state.
//!
//! DESIGN
//! ======
//! State is split by page region (`list`, `form`, `notice`) so each surface
//! the board writes to is a small focused model; `card` holds the per-activity
//! view models the list is built from.

pub mod card;
pub mod form;
pub mod list;
pub mod notice;
