//! The activity board: loads the catalog, renders it, and runs the signup and
//! removal flows against the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ActivityBoard` is built once per page with four injected surfaces (list,
//! select, form, notice), an `ActivityApi` and a `HideTimer`. The page wires
//! browser events to the `BoardEvents` methods. In the browser the surfaces
//! are `RwSignal`s (see `signals`); tests substitute in-memory recorders.
//!
//! DESIGN
//! ======
//! - `load_catalog` is the only refresh primitive. Every successful mutation
//!   calls it; nothing is updated optimistically.
//! - Each visible notice schedules its own hide. Timers are never cancelled,
//!   so an earlier timer can hide a later notice.
//! - Overlapping mutations are not serialized; each one reloads on its own.
//!
//! ERROR HANDLING
//! ==============
//! Every failure ends the user action that caused it and leaves the page
//! interactive. Rejections surface the backend's text; transport and decode
//! failures surface a fixed message and are logged.


pub mod signals;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::BoardConfig;
use crate::net::api::ActivityApi;
use crate::net::error::ApiError;
use crate::net::types::{ActivityCatalog, RemoveTarget, SignupRequest};
use crate::state::card::{ActivityCard, render_catalog};
use crate::state::list::LOAD_FAILED_TEXT;
use crate::state::notice::Notice;
use crate::util::timer::HideTimer;

pub const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
pub const SIGNUP_NETWORK_FAILURE: &str = "Failed to sign up. Please try again.";
pub const REMOVE_REJECTED_FALLBACK: &str = "Failed to remove participant";
pub const REMOVE_NETWORK_FAILURE: &str = "Failed to remove participant. Please try again.";

/// The activities list container.
pub trait ActivitiesList {
    /// Replace the list with one card per activity.
    fn show_cards(&self, cards: Vec<ActivityCard>);
    /// Replace the list with a static failure text.
    fn show_failure(&self, text: &str);
}

/// The activity select control.
pub trait ActivitySelect {
    /// Replace every option after the placeholder.
    fn set_options(&self, names: Vec<String>);
}

/// The signup form.
pub trait SignupForm {
    fn values(&self) -> SignupRequest;
    fn reset(&self);
}

/// The single transient-message region.
pub trait NoticeArea {
    fn show(&self, notice: Notice);
    fn hide(&self);
}

/// The four page regions the board writes to.
#[derive(Clone)]
pub struct Surfaces {
    pub list: Rc<dyn ActivitiesList>,
    pub select: Rc<dyn ActivitySelect>,
    pub form: Rc<dyn SignupForm>,
    pub notice: Rc<dyn NoticeArea>,
}

/// Browser events the board reacts to.
#[allow(async_fn_in_trait)]
pub trait BoardEvents {
    /// Page load.
    async fn on_load(&self);
    /// Signup form submission.
    async fn on_submit(&self);
    /// Click on a participant's remove control.
    async fn on_remove(&self, target: RemoveTarget);
}

pub struct ActivityBoard<A> {
    api: A,
    surfaces: Surfaces,
    timer: Rc<dyn HideTimer>,
    config: BoardConfig,
    catalog: RefCell<Option<ActivityCatalog>>,
}

impl<A: ActivityApi> ActivityBoard<A> {
    pub fn new(api: A, surfaces: Surfaces, timer: Rc<dyn HideTimer>, config: BoardConfig) -> Self {
        Self {
            api,
            surfaces,
            timer,
            config,
            catalog: RefCell::new(None),
        }
    }

    /// Catalog from the most recent successful load.
    pub fn catalog(&self) -> Option<ActivityCatalog> {
        self.catalog.borrow().clone()
    }

    /// Fetch the catalog and redraw the list and select from it.
    ///
    /// On failure the list shows a static notice and the select keeps its
    /// previous options.
    pub async fn load_catalog(&self) {
        match self.api.fetch_activities().await {
            Ok(catalog) => {
                log::debug!("loaded {} activities", catalog.len());
                self.surfaces.list.show_cards(render_catalog(&catalog));
                self.surfaces.select.set_options(catalog.names());
                self.catalog.replace(Some(catalog));
            }
            Err(e) => {
                log::error!("error fetching activities: {e}");
                self.surfaces.list.show_failure(LOAD_FAILED_TEXT);
            }
        }
    }

    /// Register `request.email` for `request.activity`.
    pub async fn submit_signup(&self, request: SignupRequest) {
        if request.activity.is_empty() {
            log::warn!("signup submitted without an activity; ignoring");
            return;
        }

        match self.api.sign_up(&request.activity, &request.email).await {
            Ok(ack) => {
                self.show_notice(Notice::success(ack.message));
                self.surfaces.form.reset();
                self.load_catalog().await;
            }
            Err(e) => {
                log_mutation_failure("signing up", &e);
                self.show_notice(Notice::error(signup_failure_text(&e)));
            }
        }
    }

    /// Remove one participant. Success is silent apart from the reload.
    pub async fn remove_participant(&self, target: RemoveTarget) {
        match self.api.remove_participant(&target.activity, &target.email).await {
            Ok(()) => self.load_catalog().await,
            Err(e) => {
                log_mutation_failure("unregistering participant", &e);
                self.show_notice(Notice::error(removal_failure_text(&e)));
            }
        }
    }

    fn show_notice(&self, notice: Notice) {
        self.surfaces.notice.show(notice);
        let area = Rc::clone(&self.surfaces.notice);
        self.timer.schedule(self.config.notice_ttl, Box::new(move || area.hide()));
    }
}

impl<A: ActivityApi> BoardEvents for ActivityBoard<A> {
    async fn on_load(&self) {
        self.load_catalog().await;
    }

    async fn on_submit(&self) {
        let request = self.surfaces.form.values();
        self.submit_signup(request).await;
    }

    async fn on_remove(&self, target: RemoveTarget) {
        self.remove_participant(target).await;
    }
}

fn log_mutation_failure(action: &str, err: &ApiError) {
    if err.is_rejection() {
        log::warn!("backend refused {action}: {err}");
    } else {
        log::error!("error {action}: {err}");
    }
}

/// User-facing text for a failed signup.
pub fn signup_failure_text(err: &ApiError) -> String {
    match err.body() {
        Some(body) => body.detail.clone().unwrap_or_else(|| SIGNUP_REJECTED_FALLBACK.to_owned()),
        None => SIGNUP_NETWORK_FAILURE.to_owned(),
    }
}

/// User-facing text for a failed removal.
pub fn removal_failure_text(err: &ApiError) -> String {
    match err.body() {
        Some(body) => body
            .detail
            .clone()
            .or_else(|| body.message.clone())
            .unwrap_or_else(|| REMOVE_REJECTED_FALLBACK.to_owned()),
        None => REMOVE_NETWORK_FAILURE.to_owned(),
    }
}
