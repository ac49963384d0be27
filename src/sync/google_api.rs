use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Calendar not found: {0}")]
    NotFound(String),
    #[error("Rate limit exceeded")]
    RateLimited,
    #[error("Authentication failed")]
    AuthenticationFailed,
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// An event record as the calendar service sends it. `start`/`end` carry
/// either a precise `dateTime` or a date-only `date`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteEvent {
    pub id: Option<String>,
    pub summary: Option<String>,
    pub start: Option<RemoteEventTime>,
    pub end: Option<RemoteEventTime>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RemoteEventTime {
    #[serde(rename = "dateTime", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "timeZone", skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl RemoteEventTime {
    /// The precise date-time when present, the date-only value otherwise.
    pub fn into_timestamp(self) -> Option<String> {
        self.date_time.or(self.date)
    }
}

/// Creation payload: `{summary, start: {dateTime, timeZone}, end: {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct NewRemoteEvent {
    pub summary: String,
    pub start: RemoteEventTime,
    pub end: RemoteEventTime,
}

#[derive(Debug, Deserialize)]
struct EventListResponse {
    items: Option<Vec<RemoteEvent>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedEvent {
    pub id: String,
}

#[async_trait]
pub trait CalendarApi {
    async fn list_events(&self, calendar_id: &str) -> Result<Vec<RemoteEvent>, ApiError>;

    async fn insert_event(
        &self,
        calendar_id: &str,
        event: &NewRemoteEvent,
    ) -> Result<CreatedEvent, ApiError>;
}

pub struct GoogleCalendarClient {
    base_url: String,
    access_token: String,
    client: reqwest::Client,
}

impl GoogleCalendarClient {
    pub fn new(access_token: String) -> Self {
        Self {
            base_url: "https://www.googleapis.com/calendar/v3".to_string(),
            access_token,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

#[async_trait]
impl CalendarApi for GoogleCalendarClient {
    async fn list_events(&self, calendar_id: &str) -> Result<Vec<RemoteEvent>, ApiError> {
        let url = format!("{}/calendars/{}/events", self.base_url, calendar_id);

        tracing::info!("Fetching events from calendar {}", calendar_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        tracing::info!("List events response status: {}", status);

        if status == 401 {
            tracing::error!("Authentication failed when listing events");
            return Err(ApiError::AuthenticationFailed);
        }

        if status == 404 {
            tracing::error!("Calendar not found: {}", calendar_id);
            return Err(ApiError::NotFound(calendar_id.to_string()));
        }

        if status == 429 {
            tracing::warn!("Rate limit exceeded");
            return Err(ApiError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!("Failed to list events. Status: {}, Body: {}", status, body);
            return Err(ApiError::RequestError(format!("Status {}: {}", status, body)));
        }

        let event_list: EventListResponse = response.json().await?;
        let items = event_list.items.unwrap_or_default();

        tracing::info!("Listed {} remote records", items.len());
        Ok(items)
    }

    async fn insert_event(
        &self,
        calendar_id: &str,
        event: &NewRemoteEvent,
    ) -> Result<CreatedEvent, ApiError> {
        let url = format!("{}/calendars/{}/events", self.base_url, calendar_id);

        tracing::info!("Creating event: {}", event.summary);
        tracing::debug!("POST {} with payload: {:?}", url, event);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(event)
            .send()
            .await?;

        let status = response.status();
        tracing::info!("Insert event response status: {}", status);

        if status == 401 {
            tracing::error!("Authentication failed when creating event");
            return Err(ApiError::AuthenticationFailed);
        }

        if status == 429 {
            tracing::warn!("Rate limit exceeded");
            return Err(ApiError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!("Failed to create event. Status: {}, Body: {}", status, body);
            return Err(ApiError::RequestError(format!("Status {}: {}", status, body)));
        }

        let created: RemoteEvent = response.json().await?;
        let id = created
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ApiError::ParseError("Created record has no id".to_string()))?;

        tracing::info!("Event created successfully with ID: {}", id);
        Ok(CreatedEvent { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_against(server: &MockServer) -> GoogleCalendarClient {
        GoogleCalendarClient::new("test-token".to_string()).with_base_url(server.uri())
    }

    #[test]
    fn client_has_default_base_url() {
        let client = GoogleCalendarClient::new("token".to_string());

        assert_eq!(client.base_url, "https://www.googleapis.com/calendar/v3");
    }

    #[test]
    fn client_can_set_custom_base_url() {
        let client = GoogleCalendarClient::new("token".to_string())
            .with_base_url("http://localhost:8080".to_string());

        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn timestamp_prefers_date_time() {
        let time = RemoteEventTime {
            date_time: Some("2024-06-01T10:00:00Z".to_string()),
            date: Some("2024-06-01".to_string()),
            time_zone: None,
        };

        assert_eq!(time.into_timestamp(), Some("2024-06-01T10:00:00Z".to_string()));
    }

    #[test]
    fn timestamp_falls_back_to_date() {
        let time = RemoteEventTime {
            date_time: None,
            date: Some("2024-06-01".to_string()),
            time_zone: None,
        };

        assert_eq!(time.into_timestamp(), Some("2024-06-01".to_string()));
    }

    #[test]
    fn insert_payload_omits_absent_fields() {
        let event = NewRemoteEvent {
            summary: "Meeting".to_string(),
            start: RemoteEventTime {
                date_time: Some("2024-06-01T09:00:00-07:00".to_string()),
                date: None,
                time_zone: Some("America/Los_Angeles".to_string()),
            },
            end: RemoteEventTime {
                date_time: Some("2024-06-01T10:00:00-07:00".to_string()),
                date: None,
                time_zone: Some("America/Los_Angeles".to_string()),
            },
        };

        let payload = serde_json::to_value(&event).unwrap();

        assert_eq!(
            payload,
            json!({
                "summary": "Meeting",
                "start": {
                    "dateTime": "2024-06-01T09:00:00-07:00",
                    "timeZone": "America/Los_Angeles",
                },
                "end": {
                    "dateTime": "2024-06-01T10:00:00-07:00",
                    "timeZone": "America/Los_Angeles",
                },
            })
        );
    }

    #[tokio::test]
    async fn list_events_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendars/primary/events"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {"id": "e1", "summary": "One", "start": {"date": "2024-06-01"}},
                ],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_against(&server);
        let records = client.list_events("primary").await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.as_deref(), Some("e1"));
    }

    #[tokio::test]
    async fn list_events_with_no_items_field_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendars/primary/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = client_against(&server);
        let records = client.list_events("primary").await.unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn unauthorized_list_maps_to_authentication_failed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendars/primary/events"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = client_against(&server);
        let result = client.list_events("primary").await;

        assert!(matches!(result, Err(ApiError::AuthenticationFailed)));
    }

    #[tokio::test]
    async fn missing_calendar_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendars/nope/events"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_against(&server);
        let result = client.list_events("nope").await;

        assert!(matches!(result, Err(ApiError::NotFound(id)) if id == "nope"));
    }

    #[tokio::test]
    async fn throttled_list_maps_to_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendars/primary/events"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = client_against(&server);
        let result = client.list_events("primary").await;

        assert!(matches!(result, Err(ApiError::RateLimited)));
    }

    #[tokio::test]
    async fn insert_event_returns_remote_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/calendars/primary/events"))
            .and(body_partial_json(json!({"summary": "Meeting"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "abc123",
                "summary": "Meeting",
                "start": {"dateTime": "2024-06-01T09:00:00-07:00"},
                "end": {"dateTime": "2024-06-01T10:00:00-07:00"},
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_against(&server);
        let event = NewRemoteEvent {
            summary: "Meeting".to_string(),
            start: RemoteEventTime {
                date_time: Some("2024-06-01T09:00:00-07:00".to_string()),
                date: None,
                time_zone: Some("America/Los_Angeles".to_string()),
            },
            end: RemoteEventTime {
                date_time: Some("2024-06-01T10:00:00-07:00".to_string()),
                date: None,
                time_zone: Some("America/Los_Angeles".to_string()),
            },
        };

        let created = client.insert_event("primary", &event).await.unwrap();

        assert_eq!(created.id, "abc123");
    }

    #[tokio::test]
    async fn failed_insert_surfaces_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/calendars/primary/events"))
            .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
            .mount(&server)
            .await;

        let client = client_against(&server);
        let event = NewRemoteEvent {
            summary: "Meeting".to_string(),
            start: RemoteEventTime::default(),
            end: RemoteEventTime::default(),
        };

        let result = client.insert_event("primary", &event).await;

        assert!(matches!(result, Err(ApiError::RequestError(msg)) if msg.contains("backend exploded")));
    }
}
