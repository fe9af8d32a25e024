//! Activities page: header, the activity cards, and the signup form.

use leptos::prelude::*;

use crate::app::SharedBoard;
use crate::board::signals::BoardSignals;
use crate::components::activities_list::ActivitiesListView;
use crate::components::notice::NoticeView;
use crate::components::signup_form::SignupFormView;
use crate::net::types::RemoveTarget;

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let signals = expect_context::<BoardSignals>();
    let board = expect_context::<SharedBoard>();

    let on_submit = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            use crate::board::BoardEvents as _;
            let board = board.get_value();
            leptos::task::spawn_local(async move { board.on_submit().await });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = board;
        }
    });

    let on_remove = Callback::new(move |target: RemoveTarget| {
        #[cfg(feature = "csr")]
        {
            use crate::board::BoardEvents as _;
            let board = board.get_value();
            leptos::task::spawn_local(async move { board.on_remove(target).await });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (board, target);
        }
    });

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>
        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivitiesListView list=signals.list on_remove=on_remove/>
            </section>
            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupFormView form=signals.form options=signals.options on_submit=on_submit/>
                <NoticeView notice=signals.notice/>
            </section>
        </main>
    }
}
