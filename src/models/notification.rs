//! Toast notification model

use serde::Serialize;
use uuid::Uuid;

/// A transient, auto-dismissing message shown after a purchase resolves
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub duration_ms: u64,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>, duration_ms: u64) -> Self {
        Notification {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            duration_ms,
        }
    }
}
