//! Unit tests for the page instrumentation event sources.
//!
//! Each source is driven directly with fake collaborators and verified
//! against the events the logger persists.

use std::collections::BTreeMap;

use reviewchill::dom::{FormHandle, LoadTiming, PageSnapshot, ReviewCard, ScriptError};
use reviewchill::managers::event_logger::EventLogger;
use reviewchill::services::instrumentation::{
    PageInstrumentation, EVENT_EXTERNAL_LINK_CLICK, EVENT_JAVASCRIPT_ERROR, EVENT_PAGE_LOAD_TIME,
    EVENT_SEARCH, EVENT_VIDEO_CLICK,
};
use reviewchill::storage::MemoryStore;
use serde_json::Value;

fn page() -> PageSnapshot {
    PageSnapshot {
        url: "https://reviewchill.example/".to_string(),
        title: "ReviewChill".to_string(),
        pathname: "/".to_string(),
    }
}

struct FakeCard {
    review: Option<&'static str>,
    movie: Option<&'static str>,
}

impl ReviewCard for FakeCard {
    fn review_title(&self) -> Option<String> {
        self.review.map(str::to_string)
    }

    fn movie_title(&self) -> Option<String> {
        self.movie.map(str::to_string)
    }
}

struct FakeForm {
    action: &'static str,
    fields: BTreeMap<String, String>,
}

impl FakeForm {
    fn new(action: &'static str, fields: &[(&str, &str)]) -> Self {
        Self {
            action,
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl FormHandle for FakeForm {
    fn id_attr(&self) -> Option<String> {
        None
    }

    fn action(&self) -> String {
        self.action.to_string()
    }

    fn field_names(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    fn field_value(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    fn set_field_value(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }
}

#[test]
fn test_page_load_records_page_view() {
    let store = MemoryStore::new();
    let page = page();
    let logger = EventLogger::new(&store, &page);
    let inst = PageInstrumentation::new(&logger, &page);

    inst.on_page_load();

    assert_eq!(logger.recent_page_views().len(), 1);
}

#[test]
fn test_review_card_click_with_both_titles() {
    let store = MemoryStore::new();
    let page = page();
    let logger = EventLogger::new(&store, &page);
    let inst = PageInstrumentation::new(&logger, &page);

    inst.on_review_card_click(&FakeCard {
        review: Some("Best heist scenes"),
        movie: Some("Heat"),
    });

    let events = logger.recent_events();
    assert_eq!(events[0].name, EVENT_VIDEO_CLICK);
    assert_eq!(
        events[0].data.get("video_title"),
        Some(&Value::String("Best heist scenes".to_string()))
    );
    assert_eq!(
        events[0].data.get("movie_title"),
        Some(&Value::String("Heat".to_string()))
    );
}

#[test]
fn test_review_card_click_missing_titles_degrade_to_absent() {
    let store = MemoryStore::new();
    let page = page();
    let logger = EventLogger::new(&store, &page);
    let inst = PageInstrumentation::new(&logger, &page);

    inst.on_review_card_click(&FakeCard {
        review: Some("Best heist scenes"),
        movie: None,
    });

    let events = logger.recent_events();
    assert!(events[0].data.contains_key("video_title"));
    assert!(!events[0].data.contains_key("movie_title"));
}

#[test]
fn test_external_link_click_payload() {
    let store = MemoryStore::new();
    let page = page();
    let logger = EventLogger::new(&store, &page);
    let inst = PageInstrumentation::new(&logger, &page);

    inst.on_external_link_click("https://youtu.be/abc123", "Watch on YouTube");

    let events = logger.recent_events();
    assert_eq!(events[0].name, EVENT_EXTERNAL_LINK_CLICK);
    assert_eq!(
        events[0].data.get("url"),
        Some(&Value::String("https://youtu.be/abc123".to_string()))
    );
    assert_eq!(
        events[0].data.get("text"),
        Some(&Value::String("Watch on YouTube".to_string()))
    );
}

#[test]
fn test_search_submit_records_query() {
    let store = MemoryStore::new();
    let page = page();
    let logger = EventLogger::new(&store, &page);
    let inst = PageInstrumentation::new(&logger, &page);

    inst.on_search_submit(&FakeForm::new("/reviews/search", &[("q", "matrix")]));

    let events = logger.recent_events();
    assert_eq!(events[0].name, EVENT_SEARCH);
    assert_eq!(
        events[0].data.get("query"),
        Some(&Value::String("matrix".to_string()))
    );
}

#[test]
fn test_search_submit_ignores_non_search_forms_and_empty_queries() {
    let store = MemoryStore::new();
    let page = page();
    let logger = EventLogger::new(&store, &page);
    let inst = PageInstrumentation::new(&logger, &page);

    inst.on_search_submit(&FakeForm::new("/reviews/new", &[("q", "matrix")]));
    inst.on_search_submit(&FakeForm::new("/reviews/search", &[("q", "")]));
    inst.on_search_submit(&FakeForm::new("/reviews/search", &[("title", "matrix")]));

    assert!(logger.recent_events().is_empty());
}

#[test]
fn test_script_error_payload() {
    let store = MemoryStore::new();
    let page = page();
    let logger = EventLogger::new(&store, &page);
    let inst = PageInstrumentation::new(&logger, &page);

    inst.on_script_error(&ScriptError {
        message: "x is not defined".to_string(),
        filename: "main.js".to_string(),
        lineno: 12,
        colno: 3,
    });

    let events = logger.recent_events();
    assert_eq!(events[0].name, EVENT_JAVASCRIPT_ERROR);
    assert_eq!(
        events[0].data.get("message"),
        Some(&Value::String("x is not defined".to_string()))
    );
    assert_eq!(events[0].data.get("lineno"), Some(&Value::from(12)));
    assert_eq!(events[0].data.get("colno"), Some(&Value::from(3)));
}

#[test]
fn test_load_timing_sampled_once_per_page_load() {
    let store = MemoryStore::new();
    let page = page();
    let logger = EventLogger::new(&store, &page);
    let mut inst = PageInstrumentation::new(&logger, &page);

    let timing = LoadTiming {
        load_event_start: 100.0,
        load_event_end: 142.5,
    };
    inst.on_load_timing(Some(timing));
    inst.on_load_timing(Some(timing));

    let events = logger.recent_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, EVENT_PAGE_LOAD_TIME);
    assert_eq!(events[0].data.get("load_time"), Some(&Value::from(42.5)));
    assert_eq!(
        events[0].data.get("page"),
        Some(&Value::String("/".to_string()))
    );
}

#[test]
fn test_missing_timing_data_records_nothing() {
    let store = MemoryStore::new();
    let page = page();
    let logger = EventLogger::new(&store, &page);
    let mut inst = PageInstrumentation::new(&logger, &page);

    inst.on_load_timing(None);
    assert!(logger.recent_events().is_empty());

    // Timing arriving later (after the missing sample) is still accepted.
    inst.on_load_timing(Some(LoadTiming {
        load_event_start: 0.0,
        load_event_end: 10.0,
    }));
    assert_eq!(logger.recent_events().len(), 1);
}
