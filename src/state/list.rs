//! Contents of the activities list area.

use super::card::ActivityCard;

/// Static text shown in place of the list when the catalog cannot be loaded.
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListView {
    /// Before the first load answers.
    #[default]
    Loading,
    Loaded(Vec<ActivityCard>),
    Failed(String),
}
