//! Social share link construction.

use serde_json::{Map, Value};

use crate::dom::WindowOpener;
use crate::managers::event_logger::EventLogger;

/// Window features for the share popup.
pub const POPUP_FEATURES: &str = "width=600,height=400";

/// Social platforms the share buttons support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Facebook,
    Twitter,
    LinkedIn,
}

impl SharePlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            SharePlatform::Facebook => "facebook",
            SharePlatform::Twitter => "twitter",
            SharePlatform::LinkedIn => "linkedin",
        }
    }
}

/// Builds the share link for a platform, percent-encoding the URL and title.
pub fn share_url(platform: SharePlatform, url: &str, title: &str) -> String {
    let encoded_url = urlencoding::encode(url);
    let encoded_title = urlencoding::encode(title);

    match platform {
        SharePlatform::Facebook => format!(
            "https://www.facebook.com/sharer/sharer.php?u={}",
            encoded_url
        ),
        SharePlatform::Twitter => format!(
            "https://twitter.com/intent/tweet?url={}&text={}",
            encoded_url, encoded_title
        ),
        SharePlatform::LinkedIn => format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={}",
            encoded_url
        ),
    }
}

/// Opens the share link in a popup and records a `social_share` event.
pub fn share(
    platform: SharePlatform,
    url: &str,
    title: &str,
    opener: &mut dyn WindowOpener,
    logger: &EventLogger<'_>,
) {
    let link = share_url(platform, url, title);
    opener.open(&link, POPUP_FEATURES);

    let mut data = Map::new();
    data.insert(
        "platform".to_string(),
        Value::String(platform.as_str().to_string()),
    );
    data.insert("url".to_string(), Value::String(url.to_string()));
    data.insert("title".to_string(), Value::String(title.to_string()));
    logger.record_event("social_share", data);
}
