use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single recorded page view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageViewRecord {
    pub url: String,
    pub title: String,
    pub timestamp: DateTime<Utc>,
}

/// A named interaction event with an arbitrary JSON payload.
///
/// The timestamp and URL are captured by the logger at record time,
/// not supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedEvent {
    pub name: String,
    pub data: Map<String, Value>,
    pub timestamp: DateTime<Utc>,
    pub url: String,
}
