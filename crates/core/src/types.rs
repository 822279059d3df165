//! Wire types for the tracking pipeline — page views, page exits, and
//! clicks, serialized exactly as the collection endpoint expects them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A tracking event submitted to the collection endpoint. The JSON
/// `eventType` field selects the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "eventType")]
pub enum TrackEvent {
    #[serde(rename = "pageview")]
    PageView(PageViewEvent),
    #[serde(rename = "page_exit")]
    PageExit(PageExitEvent),
    #[serde(rename = "click")]
    Click(ClickEvent),
}

/// Discriminator for [`TrackEvent`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    PageView,
    PageExit,
    Click,
}

impl TrackEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            TrackEvent::PageView(_) => EventKind::PageView,
            TrackEvent::PageExit(_) => EventKind::PageExit,
            TrackEvent::Click(_) => EventKind::Click,
        }
    }

    pub fn session_id(&self) -> &str {
        match self {
            TrackEvent::PageView(e) => &e.session_id,
            TrackEvent::PageExit(e) => &e.session_id,
            TrackEvent::Click(e) => &e.session_id,
        }
    }

    pub fn page_path(&self) -> &str {
        match self {
            TrackEvent::PageView(e) => &e.page_path,
            TrackEvent::PageExit(e) => &e.page_path,
            TrackEvent::Click(e) => &e.page_path,
        }
    }
}

/// Emitted once per navigation after the page settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageViewEvent {
    pub session_id: String,
    pub visitor_id: String,
    pub page_path: String,
    pub page_title: String,
    pub referrer: String,
    #[serde(flatten)]
    pub utm: UtmParams,
    pub user_agent: String,
    pub screen_resolution: String,
    pub language: String,
}

/// Emitted when the visitor leaves or hides a page that recorded a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageExitEvent {
    pub session_id: String,
    pub page_path: String,
    pub page_title: String,
    pub duration_ms: u64,
}

/// Emitted when a click resolves to a trackable element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClickEvent {
    pub session_id: String,
    pub page_path: String,
    pub component_id: String,
    pub event_value: String,
}

/// Campaign-tracking query parameters forwarded verbatim into page views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UtmParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_content: Option<String>,
}

impl UtmParams {
    /// Parse UTM parameters out of a raw URL query string. Unknown
    /// parameters are ignored; a missing or empty query yields all-`None`.
    pub fn from_query(query: &str) -> Self {
        let mut utm = UtmParams::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "utm_source" => utm.utm_source = Some(value.into_owned()),
                "utm_medium" => utm.utm_medium = Some(value.into_owned()),
                "utm_campaign" => utm.utm_campaign = Some(value.into_owned()),
                "utm_term" => utm.utm_term = Some(value.into_owned()),
                "utm_content" => utm.utm_content = Some(value.into_owned()),
                _ => {}
            }
        }
        utm
    }

    pub fn is_empty(&self) -> bool {
        self.utm_source.is_none()
            && self.utm_medium.is_none()
            && self.utm_campaign.is_none()
            && self.utm_term.is_none()
            && self.utm_content.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_view_wire_format() {
        let event = TrackEvent::PageView(PageViewEvent {
            session_id: "s-1".into(),
            visitor_id: "v-1".into(),
            page_path: "/projects".into(),
            page_title: "Projects".into(),
            referrer: "https://google.com".into(),
            utm: UtmParams {
                utm_source: Some("newsletter".into()),
                ..Default::default()
            },
            user_agent: "Mozilla/5.0".into(),
            screen_resolution: "1920x1080".into(),
            language: "en-US".into(),
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["eventType"], "pageview");
        assert_eq!(json["sessionId"], "s-1");
        assert_eq!(json["visitorId"], "v-1");
        assert_eq!(json["pagePath"], "/projects");
        assert_eq!(json["utmSource"], "newsletter");
        // Absent UTM fields are omitted entirely
        assert!(json.get("utmMedium").is_none());

        let parsed: TrackEvent = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_page_exit_wire_format() {
        let event = TrackEvent::PageExit(PageExitEvent {
            session_id: "s-1".into(),
            page_path: "/".into(),
            page_title: "Home".into(),
            duration_ms: 4200,
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["eventType"], "page_exit");
        assert_eq!(json["durationMs"], 4200);
        assert_eq!(event.kind(), EventKind::PageExit);
    }

    #[test]
    fn test_click_wire_format() {
        let event = TrackEvent::Click(ClickEvent {
            session_id: "s-1".into(),
            page_path: "/".into(),
            component_id: "cta".into(),
            event_value: "Submit".into(),
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["eventType"], "click");
        assert_eq!(json["componentId"], "cta");
        assert_eq!(json["eventValue"], "Submit");
    }

    #[test]
    fn test_utm_from_query() {
        let utm = UtmParams::from_query("utm_source=x&utm_medium=email&foo=bar&utm_term=");
        assert_eq!(utm.utm_source.as_deref(), Some("x"));
        assert_eq!(utm.utm_medium.as_deref(), Some("email"));
        assert!(utm.utm_campaign.is_none());
        // Empty values are treated as absent
        assert!(utm.utm_term.is_none());

        assert!(UtmParams::from_query("").is_empty());
    }
}
