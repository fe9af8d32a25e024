//! Card component for one activity and its roster.

use leptos::prelude::*;

use crate::net::types::RemoveTarget;
use crate::state::card::{ActivityCard, NO_PARTICIPANTS_TEXT, ParticipantList, ParticipantRow};

#[component]
pub fn ActivityCardView(card: ActivityCard, on_remove: Callback<RemoveTarget>) -> impl IntoView {
    let availability = card.availability_text();
    let heading = card.participants_heading();
    let rows = match card.participants {
        ParticipantList::Empty => view! { <li class="participant-item">{NO_PARTICIPANTS_TEXT}</li> }.into_any(),
        ParticipantList::Rows(rows) => rows
            .into_iter()
            .map(|row| view! { <ParticipantItem row=row on_remove=on_remove/> })
            .collect::<Vec<_>>()
            .into_any(),
    };

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {card.schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability}
            </p>
            <div class="participants">
                <strong>{heading}</strong>
                <ul class="participants-list">{rows}</ul>
            </div>
        </div>
    }
}

#[component]
fn ParticipantItem(row: ParticipantRow, on_remove: Callback<RemoveTarget>) -> impl IntoView {
    let target = row.remove;

    view! {
        <li class="participant-item">
            <span class="initials">{row.initials}</span>
            <span class="participant-email">{row.email}</span>
            <button
                class="participant-delete"
                title="Remove participant"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    on_remove.run(target.clone());
                }
            >
                "×"
            </button>
        </li>
    }
}
