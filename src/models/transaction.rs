//! Transaction history models

use chrono::Duration;
use serde::Deserialize;

/// Direction of a past trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Buy,
    Sell,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Buy => "Purchase",
            TransactionKind::Sell => "Sale",
        }
    }

    /// Arrow shown next to the record: stars coming in or going out
    pub fn arrow(&self) -> &'static str {
        match self {
            TransactionKind::Buy => "↓",
            TransactionKind::Sell => "↑",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Processing",
        }
    }
}

/// A past transaction shown on the history tab
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionRecord {
    pub id: u32,
    pub kind: TransactionKind,
    pub amount: u64,
    pub price: f64,
    pub status: TransactionStatus,
    /// How long ago the transaction happened, in minutes
    pub minutes_ago: u32,
}

impl TransactionRecord {
    pub fn age(&self) -> Duration {
        Duration::minutes(i64::from(self.minutes_ago))
    }

    /// Relative timestamp label such as "15 min ago" or "3 hours ago"
    pub fn time_label(&self) -> String {
        relative_label(self.age())
    }
}

pub fn relative_label(age: Duration) -> String {
    if age.num_minutes() < 1 {
        "just now".to_string()
    } else if age.num_hours() < 1 {
        format!("{} min ago", age.num_minutes())
    } else if age.num_days() < 1 {
        let hours = age.num_hours();
        if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        }
    } else {
        let days = age.num_days();
        if days == 1 {
            "1 day ago".to_string()
        } else {
            format!("{} days ago", days)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_labels() {
        assert_eq!(relative_label(Duration::seconds(20)), "just now");
        assert_eq!(relative_label(Duration::minutes(2)), "2 min ago");
        assert_eq!(relative_label(Duration::minutes(60)), "1 hour ago");
        assert_eq!(relative_label(Duration::minutes(180)), "3 hours ago");
        assert_eq!(relative_label(Duration::hours(49)), "2 days ago");
    }

    #[test]
    fn test_kind_and_status_deserialize_lowercase() {
        let record: TransactionRecord = serde_json::from_str(
            r#"{"id":2,"kind":"sell","amount":500,"price":52.5,"status":"pending","minutes_ago":15}"#,
        )
        .expect("valid record");

        assert_eq!(record.kind, TransactionKind::Sell);
        assert_eq!(record.status, TransactionStatus::Pending);
        assert_eq!(record.time_label(), "15 min ago");
    }
}
