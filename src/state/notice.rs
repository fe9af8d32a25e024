//! Notice area state.
//!
//! DESIGN
//! ======
//! Hiding keeps the last text and kind, so a hidden notice is just a visible
//! one with the `hidden` class added, as in the page's stylesheet.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A message pushed to the notice area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Observable state of the notice area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticePhase {
    Hidden,
    VisibleSuccess,
    VisibleError,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub last: Option<Notice>,
    pub visible: bool,
}

impl NoticeState {
    pub fn show(&mut self, notice: Notice) {
        self.last = Some(notice);
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn phase(&self) -> NoticePhase {
        match (&self.last, self.visible) {
            (Some(n), true) if n.kind == NoticeKind::Success => NoticePhase::VisibleSuccess,
            (Some(_), true) => NoticePhase::VisibleError,
            _ => NoticePhase::Hidden,
        }
    }

    pub fn text(&self) -> &str {
        self.last.as_ref().map_or("", |n| n.text.as_str())
    }

    /// Class attribute for the notice element.
    pub fn class_name(&self) -> String {
        match (&self.last, self.visible) {
            (Some(n), true) => n.kind.class_name().to_owned(),
            (Some(n), false) => format!("{} hidden", n.kind.class_name()),
            (None, _) => "hidden".to_owned(),
        }
    }
}
