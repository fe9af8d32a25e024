//! The notice area for transient success and error messages.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn NoticeView(notice: RwSignal<NoticeState>) -> impl IntoView {
    view! {
        <div id="message" class=move || notice.with(NoticeState::class_name)>
            {move || notice.with(|n| n.text().to_owned())}
        </div>
    }
}
