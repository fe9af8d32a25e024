//! Runtime configuration for the board.
//!
//! The API base defaults to same-origin. A host page can point the board at
//! another backend with `<meta name="activity-board-api" content="...">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// How long a notice stays visible before its hide timer fires.
pub const NOTICE_TTL: Duration = Duration::from_millis(5000);

#[cfg(feature = "csr")]
const API_META_NAME: &str = "activity-board-api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Prefix for every endpoint path; empty means same-origin.
    pub api_base: String,
    pub notice_ttl: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            notice_ttl: NOTICE_TTL,
        }
    }
}

impl BoardConfig {
    /// Defaults, with `api_base` overridden by the host page's meta tag.
    pub fn from_document() -> Self {
        let mut config = Self::default();
        if let Some(base) = read_api_meta() {
            config = config.with_api_base(&base);
        }
        config
    }

    /// Replace the API base. Blank values keep same-origin.
    #[must_use]
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim().trim_end_matches('/').to_owned();
        self
    }
}

fn read_api_meta() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast as _;

        let doc = web_sys::window()?.document()?;
        let el = doc
            .query_selector(&format!("meta[name=\"{API_META_NAME}\"]"))
            .ok()
            .flatten()?;
        let meta = el.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
        Some(meta.content())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
