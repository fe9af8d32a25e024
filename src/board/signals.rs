//! Board surfaces backed by Leptos signals.
//!
//! Each page region is one `RwSignal`; the components read them reactively
//! and the board writes them through the surface traits.

use std::rc::Rc;

use leptos::prelude::*;

use super::{ActivitiesList, ActivitySelect, NoticeArea, SignupForm, Surfaces};
use crate::net::types::SignupRequest;
use crate::state::card::ActivityCard;
use crate::state::form::{ActivityOptions, SignupFormState};
use crate::state::list::ListView;
use crate::state::notice::{Notice, NoticeState};

/// Signals for the four board regions, provided to the view via context.
#[derive(Clone, Copy)]
pub struct BoardSignals {
    pub list: RwSignal<ListView>,
    pub options: RwSignal<ActivityOptions>,
    pub form: RwSignal<SignupFormState>,
    pub notice: RwSignal<NoticeState>,
}

impl BoardSignals {
    pub fn new() -> Self {
        Self {
            list: RwSignal::new(ListView::default()),
            options: RwSignal::new(ActivityOptions::default()),
            form: RwSignal::new(SignupFormState::default()),
            notice: RwSignal::new(NoticeState::default()),
        }
    }

    pub fn surfaces(self) -> Surfaces {
        Surfaces {
            list: Rc::new(self.list),
            select: Rc::new(self.options),
            form: Rc::new(self.form),
            notice: Rc::new(self.notice),
        }
    }
}

impl Default for BoardSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivitiesList for RwSignal<ListView> {
    fn show_cards(&self, cards: Vec<ActivityCard>) {
        self.set(ListView::Loaded(cards));
    }

    fn show_failure(&self, text: &str) {
        self.set(ListView::Failed(text.to_owned()));
    }
}

impl ActivitySelect for RwSignal<ActivityOptions> {
    fn set_options(&self, names: Vec<String>) {
        self.set(ActivityOptions { names });
    }
}

impl SignupForm for RwSignal<SignupFormState> {
    fn values(&self) -> SignupRequest {
        self.with_untracked(SignupFormState::to_request)
    }

    fn reset(&self) {
        self.set(SignupFormState::default());
    }
}

impl NoticeArea for RwSignal<NoticeState> {
    fn show(&self, notice: Notice) {
        self.update(|state| state.show(notice));
    }

    fn hide(&self) {
        self.update(NoticeState::hide);
    }
}
