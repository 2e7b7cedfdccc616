//! Video URL utilities: platform detection, id extraction, thumbnails.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::video::{VideoPlatform, VideoRef};

fn youtube_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([^&\n?#]+)")
            .expect("valid youtube pattern")
    })
}

/// Extracts a platform + id pair from a supported video URL.
///
/// YouTube URLs are matched on the `watch?v=` and `youtu.be/` forms. Facebook
/// detection is basic: any URL containing `facebook.com`, with the last path
/// segment taken as the id. Unsupported URLs yield `None`.
pub fn extract_video_id(url: &str) -> Option<VideoRef> {
    if let Some(caps) = youtube_re().captures(url) {
        return Some(VideoRef {
            platform: VideoPlatform::Youtube,
            id: caps[1].to_string(),
        });
    }

    if url.contains("facebook.com") {
        let id = url.rsplit('/').next().unwrap_or_default().to_string();
        return Some(VideoRef {
            platform: VideoPlatform::Facebook,
            id,
        });
    }

    None
}

/// Whether a string looks like a video URL on a supported platform.
pub fn validate_video_url(url: &str) -> bool {
    url.contains("youtube.com/watch") || url.contains("youtu.be/") || url.contains("facebook.com")
}

/// Thumbnail image URL for a video. Facebook exposes no stable thumbnail
/// endpoint, so it gets the site placeholder.
pub fn thumbnail_url(video: &VideoRef) -> String {
    match video.platform {
        VideoPlatform::Youtube => format!(
            "https://img.youtube.com/vi/{}/maxresdefault.jpg",
            video.id
        ),
        VideoPlatform::Facebook => "/static/images/facebook-placeholder.png".to_string(),
    }
}
