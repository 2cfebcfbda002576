// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::types::v1::api_enum::ApiEnum;
use crate::types::v1::envelope::list_envelope;
use crate::wire::ApiDocument;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

#[derive(
    Deserialize,
    Serialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    JsonSchema,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EventCategory {
    Unknown,
    HealthEvent,
    LogMessage,
    AuditEvent,
    ActivityEvent,
    HbaseEvent,
    SystemEvent,
}

impl ApiEnum for EventCategory {
    const TYPE_NAME: &'static str = "event category";
}

/// Severity of an event, ordered from least to most severe.
#[derive(
    Deserialize,
    Serialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    JsonSchema,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EventSeverity {
    Unknown,
    Informational,
    Important,
    Critical,
}

impl ApiEnum for EventSeverity {
    const TYPE_NAME: &'static str = "event severity";
}

/// Free-form attribute attached to an event. One name may carry several
/// values.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventAttribute {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_occurred: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_received: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<EventCategory>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<EventSeverity>,

    /// Whether the event was raised as an alert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<EventAttribute>,
}

impl Event {
    /// Values of the first attribute called `name`.
    pub fn attribute(&self, name: &str) -> Option<&[String]> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.values.as_slice())
    }

    /// An unset alert flag reads as `false`.
    pub fn is_alert(&self) -> bool {
        self.alert.unwrap_or(false)
    }
}

impl ApiDocument for Event {
    const XML_ROOT: &'static str = "event";
}

list_envelope! {
    /// Result page of an event query.
    pub struct EventQueryResult {
        events: Event => "events",
        xml(root = "eventQueryResult", item = "event"),
        optional {
            /// Number of events matching the query, which may exceed the
            /// number returned in this page.
            total_results: u64,
        },
        repeated {},
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::types::error::Error;
    use crate::wire::{self, Format};

    #[test]
    fn test_severity_parse() {
        assert_eq!(
            EventSeverity::parse(Some("CRITICAL")).unwrap(),
            EventSeverity::Critical
        );
        assert!(EventSeverity::Important < EventSeverity::Critical);
    }

    #[test]
    fn test_severity_parse_rejects_unknown_and_absent() {
        let err = EventSeverity::parse(Some("SEVERE")).unwrap_err();
        assert!(matches!(err, Error::UnknownVariant { .. }));
        assert_eq!(
            err.to_string(),
            "unknown event severity 'SEVERE', expected one of: UNKNOWN, INFORMATIONAL, IMPORTANT, CRITICAL"
        );

        let err = EventSeverity::parse(None).unwrap_err();
        assert!(matches!(err, Error::MissingValue { .. }));
        assert_eq!(err.to_string(), "missing value for event severity");

        // wire spellings only
        assert!(EventSeverity::parse(Some("critical")).is_err());
    }

    #[test]
    fn test_category_wire_spelling() {
        assert_eq!(EventCategory::HealthEvent.to_string(), "HEALTH_EVENT");
        assert_eq!(
            serde_json::to_string(&EventCategory::AuditEvent).unwrap(),
            "\"AUDIT_EVENT\""
        );
        assert_eq!(
            EventCategory::parse(Some("LOG_MESSAGE")).unwrap(),
            EventCategory::LogMessage
        );
    }

    #[test]
    fn test_unknown_severity_on_the_wire_is_a_decode_error() {
        let json = r#"{"events":[{"id":"e1","severity":"SEVERE"}]}"#;
        let err = wire::decode::<EventQueryResult>(json, Format::Json).unwrap_err();
        assert!(matches!(err, Error::SerdeJson { .. }));
    }

    #[test]
    fn test_query_result_round_trip_keeps_total() {
        let events = crate::tests::sample_events();
        let mut result = EventQueryResult::from_items(events.clone());
        result.total_results = Some(120);

        let json = wire::encode(&result, Format::Json).unwrap();
        assert!(json.ends_with(r#""totalResults":120}"#), "{json}");

        let decoded: EventQueryResult = wire::decode(&json, Format::Json).unwrap();
        assert_eq!(decoded.total_results, Some(120));
        assert_eq!(decoded.events(), Some(events.as_slice()));
    }

    #[test]
    fn test_query_result_xml_keeps_total() {
        let mut result = EventQueryResult::from_items(vec![Event {
            id: Some("e1".to_string()),
            content: Some("disk almost full".to_string()),
            ..Default::default()
        }]);
        result.total_results = Some(1);

        let xml = wire::encode(&result, Format::Xml).unwrap();
        assert!(xml.contains("<totalResults>1</totalResults>"), "{xml}");

        let decoded: EventQueryResult = wire::decode(&xml, Format::Xml).unwrap();
        assert_eq!(decoded.total_results, Some(1));
        assert_eq!(decoded.events(), result.events());
    }

    #[test]
    fn test_event_attribute_lookup() {
        let event = &crate::tests::sample_events()[0];
        assert_eq!(
            event.attribute("HOSTS"),
            Some(&["host-1.example.com".to_string()][..])
        );
        assert_eq!(event.attribute("MISSING"), None);
        assert!(event.is_alert());
        assert!(!Event::default().is_alert());
    }
}
