//! Page instrumentation — the event sources.
//!
//! Each handler translates one page signal into an [`EventLogger`] record
//! with a fixed event name. The page shell wires these to the matching DOM
//! listeners; tests call them directly with fakes.

use serde_json::{Map, Value};

use crate::dom::{FormHandle, LoadTiming, PageContext, ReviewCard, ScriptError};
use crate::managers::event_logger::EventLogger;

pub const EVENT_VIDEO_CLICK: &str = "video_click";
pub const EVENT_EXTERNAL_LINK_CLICK: &str = "external_link_click";
pub const EVENT_SEARCH: &str = "search";
pub const EVENT_JAVASCRIPT_ERROR: &str = "javascript_error";
pub const EVENT_PAGE_LOAD_TIME: &str = "page_load_time";

/// Event sources for one page load.
pub struct PageInstrumentation<'a> {
    logger: &'a EventLogger<'a>,
    page: &'a dyn PageContext,
    load_sampled: bool,
}

impl<'a> PageInstrumentation<'a> {
    pub fn new(logger: &'a EventLogger<'a>, page: &'a dyn PageContext) -> Self {
        Self {
            logger,
            page,
            load_sampled: false,
        }
    }

    /// Page load: records the page view.
    pub fn on_page_load(&self) {
        self.logger.record_page_view();
    }

    /// Deferred load-timing sample, scheduled one tick after the load event.
    /// Records at most once per page load; missing timing data records
    /// nothing.
    pub fn on_load_timing(&mut self, timing: Option<LoadTiming>) {
        if self.load_sampled {
            return;
        }
        let timing = match timing {
            Some(t) => t,
            None => return,
        };
        self.load_sampled = true;

        let mut data = Map::new();
        data.insert("load_time".to_string(), timing.load_time().into());
        data.insert("page".to_string(), Value::String(self.page.pathname()));
        self.logger.record_event(EVENT_PAGE_LOAD_TIME, data);
    }

    /// Click on a review card. Title fields missing from the card degrade to
    /// absent payload fields.
    pub fn on_review_card_click(&self, card: &dyn ReviewCard) {
        let mut data = Map::new();
        if let Some(title) = card.review_title() {
            data.insert("video_title".to_string(), Value::String(title));
        }
        if let Some(title) = card.movie_title() {
            data.insert("movie_title".to_string(), Value::String(title));
        }
        self.logger.record_event(EVENT_VIDEO_CLICK, data);
    }

    /// Click on a link that opens a new browsing context.
    pub fn on_external_link_click(&self, url: &str, text: &str) {
        let mut data = Map::new();
        data.insert("url".to_string(), Value::String(url.to_string()));
        data.insert("text".to_string(), Value::String(text.to_string()));
        self.logger.record_event(EVENT_EXTERNAL_LINK_CLICK, data);
    }

    /// Submission of a form. Only forms whose action path contains "search"
    /// are tracked, and only when the `q` field is non-empty.
    pub fn on_search_submit(&self, form: &dyn FormHandle) {
        if !form.action().contains("search") {
            return;
        }
        let query = match form.field_value("q") {
            Some(q) if !q.is_empty() => q,
            _ => return,
        };

        let mut data = Map::new();
        data.insert("query".to_string(), Value::String(query));
        self.logger.record_event(EVENT_SEARCH, data);
    }

    /// Uncaught script error surfaced by the global error handler.
    pub fn on_script_error(&self, err: &ScriptError) {
        let mut data = Map::new();
        data.insert("message".to_string(), Value::String(err.message.clone()));
        data.insert("filename".to_string(), Value::String(err.filename.clone()));
        data.insert("lineno".to_string(), err.lineno.into());
        data.insert("colno".to_string(), err.colno.into());
        self.logger.record_event(EVENT_JAVASCRIPT_ERROR, data);
    }
}
