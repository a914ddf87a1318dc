use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, UserId};

/// Raw activity record as supplied by the feed producer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub user_id: String,
    pub timestamp: String, // ISO 8601 instant, e.g. 2013-10-01T14:22:16.719Z
}

impl ActivityRecord {
    pub fn new(user_id: &str, timestamp: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            timestamp: timestamp.to_string(),
        }
    }
}

/// One parsed activity event.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEvent {
    user_id: UserId,
    timestamp: DateTime<FixedOffset>,
}

impl ActivityEvent {
    pub fn new(user_id: UserId, timestamp: DateTime<FixedOffset>) -> Self {
        Self { user_id, timestamp }
    }

    /// Parse a raw record into an event.
    ///
    /// The timestamp must be a full instant (date, time, and offset).
    pub fn from_record(record: &ActivityRecord) -> Result<Self, DomainError> {
        let timestamp = DateTime::parse_from_rfc3339(&record.timestamp).map_err(|e| {
            DomainError::InvalidTimestamp(format!("{}: {}", record.timestamp, e))
        })?;

        Ok(Self {
            user_id: UserId::from_string(&record.user_id),
            timestamp,
        })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Calendar date of the event, in the event's own offset.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// Parse a whole feed, rejecting it on the first unparseable timestamp.
pub fn parse_events(records: &[ActivityRecord]) -> Result<Vec<ActivityEvent>, DomainError> {
    records.iter().map(ActivityEvent::from_record).collect()
}
