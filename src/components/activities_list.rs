//! The activities list area: loading text, cards, or the load failure text.

use leptos::prelude::*;

use super::activity_card::ActivityCardView;
use crate::net::types::RemoveTarget;
use crate::state::list::ListView;

#[component]
pub fn ActivitiesListView(list: RwSignal<ListView>, on_remove: Callback<RemoveTarget>) -> impl IntoView {
    view! {
        <div id="activities-list">
            {move || match list.get() {
                ListView::Loading => view! { <p>"Loading activities..."</p> }.into_any(),
                ListView::Failed(text) => view! { <p>{text}</p> }.into_any(),
                ListView::Loaded(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ActivityCardView card=card on_remove=on_remove/> })
                    .collect::<Vec<_>>()
                    .into_any(),
            }}
        </div>
    }
}
