use chrono::{NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use thiserror::Error;

use crate::calendar::{CalendarEvent, EventDraft};
use crate::sync::google_api::{
    CalendarApi, GoogleCalendarClient, NewRemoteEvent, RemoteEvent, RemoteEventTime,
};

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("API error: {0}")]
    Api(#[from] crate::sync::google_api::ApiError),
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
    #[error("Time {0} does not exist in the configured zone")]
    NonexistentLocalTime(String),
}

/// Keeps the local event list consistent with the remote calendar under a
/// plain refetch-on-login policy: no incremental sync, no polling, no retry.
pub struct EventSynchronizer {
    calendar_id: String,
    time_zone: Tz,
    base_url: Option<String>,
}

impl EventSynchronizer {
    pub fn new(calendar_id: String, time_zone: &str) -> Result<Self, SyncError> {
        let time_zone: Tz = time_zone
            .parse()
            .map_err(|_| SyncError::UnknownTimeZone(time_zone.to_string()))?;

        Ok(Self {
            calendar_id,
            time_zone,
            base_url: None,
        })
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    fn client(&self, token: &str) -> GoogleCalendarClient {
        let client = GoogleCalendarClient::new(token.to_string());
        match &self.base_url {
            Some(url) => client.with_base_url(url.clone()),
            None => client,
        }
    }

    /// Fetches the calendar's events and normalizes them into the
    /// display-ready shape. Records without an id or a start are skipped.
    pub async fn fetch_events(&self, token: &str) -> Result<Vec<CalendarEvent>, SyncError> {
        let records = self.client(token).list_events(&self.calendar_id).await?;

        let events: Vec<CalendarEvent> = records.into_iter().filter_map(normalize).collect();

        tracing::info!("Fetched {} events", events.len());
        Ok(events)
    }

    /// Creates an event from the prompted draft. An incomplete draft is a
    /// user cancellation: `Ok(None)`, and no remote call is made. A single
    /// failed attempt is terminal for that user action.
    pub async fn add_event(
        &self,
        token: &str,
        draft: &EventDraft,
    ) -> Result<Option<CalendarEvent>, SyncError> {
        if !draft.is_complete() {
            tracing::debug!("Add-event draft incomplete, treating as cancellation");
            return Ok(None);
        }

        let start = self.combine_date_time(&draft.date, &draft.start_time)?;
        let end = self.combine_date_time(&draft.date, &draft.end_time)?;

        let payload = NewRemoteEvent {
            summary: draft.title.clone(),
            start: self.event_time(&start),
            end: self.event_time(&end),
        };

        let created = self
            .client(token)
            .insert_event(&self.calendar_id, &payload)
            .await?;

        Ok(Some(CalendarEvent {
            id: created.id,
            title: draft.title.clone(),
            start,
            end,
        }))
    }

    fn event_time(&self, timestamp: &str) -> RemoteEventTime {
        RemoteEventTime {
            date_time: Some(timestamp.to_string()),
            date: None,
            time_zone: Some(self.time_zone.name().to_string()),
        }
    }

    /// Combines a date and a time of day into an absolute timestamp in the
    /// configured zone, serialized RFC 3339 with the zone's offset.
    fn combine_date_time(&self, date: &str, time: &str) -> Result<String, SyncError> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| SyncError::InvalidDate(date.to_string()))?;
        let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
            .map_err(|_| SyncError::InvalidTime(time.to_string()))?;

        let local = date.and_time(time);
        // earliest() resolves DST-ambiguous wall times; a DST gap has none.
        let resolved = self
            .time_zone
            .from_local_datetime(&local)
            .earliest()
            .ok_or_else(|| SyncError::NonexistentLocalTime(local.to_string()))?;

        Ok(resolved.to_rfc3339())
    }
}

/// Maps one remote record into the local shape: `start` prefers the precise
/// date-time and falls back to the date-only field; `end` additionally falls
/// back to the resolved start when absent entirely.
fn normalize(record: RemoteEvent) -> Option<CalendarEvent> {
    let RemoteEvent {
        id,
        summary,
        start,
        end,
    } = record;

    let id = match id {
        Some(id) if !id.is_empty() => id,
        _ => {
            tracing::warn!("Skipping remote record without id");
            return None;
        }
    };

    let Some(start) = start.and_then(RemoteEventTime::into_timestamp) else {
        tracing::warn!("Skipping remote record {} without start", id);
        return None;
    };

    let end = end
        .and_then(RemoteEventTime::into_timestamp)
        .unwrap_or_else(|| start.clone());

    Some(CalendarEvent {
        id,
        title: summary.unwrap_or_default(),
        start,
        end,
    })
}
