use serde::{Deserialize, Serialize};

/// Video hosting platforms the site knows how to embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoPlatform {
    Youtube,
    Facebook,
}

impl VideoPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoPlatform::Youtube => "youtube",
            VideoPlatform::Facebook => "facebook",
        }
    }
}

/// A platform + video-id pair extracted from a supported video URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRef {
    pub platform: VideoPlatform,
    pub id: String,
}
