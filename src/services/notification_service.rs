use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::Notification;

pub type NotificationReceiver = mpsc::UnboundedReceiver<Notification>;

/// Publishing half of the toast channel
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Notification>,
}

/// Create a connected notifier and receiver pair
pub fn channel() -> (Notifier, NotificationReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Notifier { tx }, rx)
}

impl Notifier {
    /// Publish a toast. Returns false when nobody is listening anymore.
    pub fn publish(&self, notification: Notification) -> bool {
        let id = notification.id;
        match self.tx.send(notification) {
            Ok(()) => {
                debug!("Published notification {}", id);
                true
            }
            Err(_) => {
                warn!("Notification {} dropped: toast renderer is gone", id);
                false
            }
        }
    }
}

/// Render a toast as a boxed block of text
pub fn format_toast(notification: &Notification) -> String {
    let width = notification
        .title
        .chars()
        .count()
        .max(notification.description.chars().count());
    let border = "─".repeat(width + 2);

    format!(
        "┌{border}┐\n│ {title:<width$} │\n│ {description:<width$} │\n└{border}┘",
        border = border,
        title = notification.title,
        description = notification.description,
        width = width
    )
}

/// Ids of the toasts currently on screen
#[derive(Debug, Clone, Default)]
pub struct ActiveToasts {
    ids: Arc<Mutex<HashSet<Uuid>>>,
}

impl ActiveToasts {
    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<Uuid>> {
        self.ids.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn show(&self, id: Uuid) {
        self.lock().insert(id);
    }

    /// Returns false when the toast was already gone
    fn dismiss(&self, id: Uuid) -> bool {
        self.lock().remove(&id)
    }

    fn dismiss_all(&self) -> usize {
        let mut ids = self.lock();
        let count = ids.len();
        ids.clear();
        count
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.lock().contains(&id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

/// Print every published toast and dismiss it once its duration has elapsed.
/// Toasts still on screen when the channel closes are dismissed immediately.
pub async fn run_toast_renderer(mut rx: NotificationReceiver, active: ActiveToasts) {
    let mut dismissals = JoinSet::new();

    loop {
        tokio::select! {
            received = rx.recv() => {
                let Some(notification) = received else { break };

                println!("{}", format_toast(&notification));
                info!(
                    "Toast shown: {}",
                    serde_json::to_string(&notification).unwrap_or_else(|_| notification.title.clone())
                );
                active.show(notification.id);

                let active = active.clone();
                let duration = Duration::from_millis(notification.duration_ms);
                dismissals.spawn(async move {
                    tokio::time::sleep(duration).await;
                    if active.dismiss(notification.id) {
                        println!("(dismissed: {})", notification.title);
                        debug!("Toast {} dismissed after {}ms", notification.id, duration.as_millis());
                    }
                });
            }
            Some(result) = dismissals.join_next(), if !dismissals.is_empty() => {
                if let Err(e) = result {
                    warn!("Toast dismissal task failed: {}", e);
                }
            }
        }
    }

    dismissals.abort_all();
    let remaining = active.dismiss_all();
    debug!("Toast renderer stopped, {} toast(s) dismissed on shutdown", remaining);
}
