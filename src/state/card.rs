//! Card view models built from catalog entries.
//!
//! DESIGN
//! ======
//! Rendering decisions (spots left, placeholder row, badges, removal binding)
//! are made here on plain data so the Leptos components only lay them out.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use crate::net::types::{Activity, ActivityCatalog, RemoveTarget};
use crate::util::initials::initials_badge;

/// Placeholder row text for an empty roster.
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

/// One rendered activity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participant_count: usize,
    pub participants: ParticipantList,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParticipantList {
    /// Render a single placeholder row.
    Empty,
    Rows(Vec<ParticipantRow>),
}

/// One roster row: badge, label and the removal it triggers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantRow {
    pub initials: String,
    pub email: String,
    pub remove: RemoveTarget,
}

impl ActivityCard {
    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }

    pub fn participants_heading(&self) -> String {
        format!("Participants ({}):", self.participant_count)
    }
}

/// Build the card for one activity.
pub fn render_activity(name: &str, activity: &Activity) -> ActivityCard {
    let participants = if activity.participants.is_empty() {
        ParticipantList::Empty
    } else {
        ParticipantList::Rows(
            activity
                .participants
                .iter()
                .map(|email| ParticipantRow {
                    initials: initials_badge(email),
                    email: email.clone(),
                    remove: RemoveTarget {
                        activity: name.to_owned(),
                        email: email.clone(),
                    },
                })
                .collect(),
        )
    };

    ActivityCard {
        name: name.to_owned(),
        description: activity.description.clone(),
        schedule: activity.schedule.clone(),
        spots_left: activity.spots_left(),
        participant_count: activity.participants.len(),
        participants,
    }
}

/// Cards for the whole catalog, in catalog order.
pub fn render_catalog(catalog: &ActivityCatalog) -> Vec<ActivityCard> {
    catalog.iter().map(|(name, activity)| render_activity(name, activity)).collect()
}
