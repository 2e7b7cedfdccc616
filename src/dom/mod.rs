//! Collaborator contracts for the parts of the page this crate reads and writes.
//!
//! The page shell (or a test) implements these traits; the managers and
//! services never touch a document tree directly. This keeps the stateful
//! components testable against fakes.

/// Read access to the current page's location and title.
pub trait PageContext {
    fn url(&self) -> String;
    fn title(&self) -> String;
    /// Path portion of the URL, e.g. `/reviews/42`.
    fn pathname(&self) -> String;
}

/// A plain snapshot of page context. Implements [`PageContext`] directly,
/// which is all the logger needs on a static page.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub url: String,
    pub title: String,
    pub pathname: String,
}

impl PageContext for PageSnapshot {
    fn url(&self) -> String {
        self.url.clone()
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn pathname(&self) -> String {
        self.pathname.clone()
    }
}

/// Access to a form element's identity and fields.
pub trait FormHandle {
    /// The form's id attribute, if present.
    fn id_attr(&self) -> Option<String>;
    /// The form's submission target URL.
    fn action(&self) -> String;
    /// Names of the form's input, textarea and select fields.
    fn field_names(&self) -> Vec<String>;
    fn field_value(&self, name: &str) -> Option<String>;
    fn set_field_value(&mut self, name: &str, value: &str);
}

/// A review card container on the page. Both title sub-elements are
/// optional; a card missing one simply reports `None`.
pub trait ReviewCard {
    fn review_title(&self) -> Option<String>;
    fn movie_title(&self) -> Option<String>;
}

/// Navigation timing data, in milliseconds since navigation start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadTiming {
    pub load_event_start: f64,
    pub load_event_end: f64,
}

impl LoadTiming {
    /// Duration of the load event.
    pub fn load_time(&self) -> f64 {
        self.load_event_end - self.load_event_start
    }
}

/// An uncaught script error surfaced by the global error handler.
#[derive(Debug, Clone)]
pub struct ScriptError {
    pub message: String,
    pub filename: String,
    pub lineno: u32,
    pub colno: u32,
}

/// Opens a URL in a new browsing context (popup window).
pub trait WindowOpener {
    fn open(&mut self, url: &str, features: &str);
}
