//! Root application component: builds the board and provides it to the page.

use std::rc::Rc;

use leptos::prelude::*;

use crate::board::ActivityBoard;
use crate::board::signals::BoardSignals;
use crate::config::BoardConfig;
use crate::net::api::HttpActivityApi;
use crate::pages::activities::ActivitiesPage;
use crate::util::timer::BrowserTimer;

/// The page's single board, shared with event handlers through context.
pub type SharedBoard = StoredValue<Rc<ActivityBoard<HttpActivityApi>>, LocalStorage>;

/// Root application component.
///
/// Constructs the board once against the signal-backed surfaces, provides
/// both to the page, and kicks off the initial catalog load.
#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::from_document();
    let signals = BoardSignals::new();
    let board = ActivityBoard::new(
        HttpActivityApi::new(&config),
        signals.surfaces(),
        Rc::new(BrowserTimer),
        config,
    );
    let board: SharedBoard = StoredValue::new_local(Rc::new(board));

    provide_context(signals);
    provide_context(board);

    #[cfg(feature = "csr")]
    {
        use crate::board::BoardEvents as _;
        let board = board.get_value();
        leptos::task::spawn_local(async move { board.on_load().await });
    }

    view! { <ActivitiesPage/> }
}
