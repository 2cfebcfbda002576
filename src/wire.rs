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

//! JSON and XML encoding of API documents.

use crate::types::error::{Error, RootMismatchSnafu, XmlDecodeSnafu, XmlEncodeSnafu, XmlSyntaxSnafu};
use quick_xml::events::{BytesText, Event};
use quick_xml::{Reader, Writer};
use serde::Serialize;
use serde::de::DeserializeOwned;
use snafu::ResultExt;
use std::borrow::Cow;
use strum::{Display, EnumString, VariantNames};
use tracing::{debug, warn};

/// Wire format of a request or response body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, VariantNames)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Format {
    Json,
    Xml,
}

/// A top-level API body.
///
/// Plain records get the XML encoding for free from serde, rooted at
/// `XML_ROOT`. List payloads override the XML hooks and `check`.
pub trait ApiDocument: Serialize + DeserializeOwned {
    /// Root element name of the XML representation.
    const XML_ROOT: &'static str;

    /// Rejects documents a producer must not hand to the serializer.
    fn check(&self) -> Result<(), Error> {
        Ok(())
    }

    fn encode_xml(&self) -> Result<String, Error> {
        quick_xml::se::to_string_with_root(Self::XML_ROOT, self).context(XmlEncodeSnafu)
    }

    fn decode_xml(xml: &str) -> Result<Self, Error> {
        quick_xml::de::from_str(xml).context(XmlDecodeSnafu)
    }
}

fn syntax(err: impl std::fmt::Display) -> Error {
    XmlSyntaxSnafu {
        message: err.to_string(),
    }
    .build()
}

fn is_xml_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn char_ref(c: char) -> String {
    format!("&#{};", c as u32)
}

/// Replaces leading and trailing whitespace of already escaped text with
/// character references.
fn escape_edges(raw: &str) -> Cow<'_, str> {
    let head = raw.len() - raw.trim_start_matches(is_xml_space).len();
    if head == raw.len() {
        return Cow::Owned(raw.chars().map(char_ref).collect());
    }

    let tail = raw.trim_end_matches(is_xml_space).len();
    if head == 0 && tail == raw.len() {
        return Cow::Borrowed(raw);
    }

    let mut out: String = raw[..head].chars().map(char_ref).collect();
    out.push_str(&raw[head..tail]);
    out.extend(raw[tail..].chars().map(char_ref));
    Cow::Owned(out)
}

/// Rewrites serializer output so it reads back unchanged.
///
/// The deserializer trims the raw text of every element before resolving
/// references, so `<hostName> a </hostName>` would come back as `a`. Edge
/// whitespace of leaf text is written as `&#32;` and friends instead.
/// With `indent`, nested elements go on their own lines.
fn finish_xml(xml: &str, indent: Option<usize>) -> Result<String, Error> {
    let mut reader = Reader::from_str(xml);
    let mut events = Vec::new();
    loop {
        match reader.read_event().map_err(syntax)? {
            Event::Eof => break,
            event => events.push(event),
        }
    }

    let mut writer = match indent {
        Some(width) => Writer::new_with_indent(Vec::new(), b' ', width),
        None => Writer::new(Vec::new()),
    };
    for (i, event) in events.iter().enumerate() {
        let leaf = i > 0
            && matches!(events[i - 1], Event::Start(_))
            && matches!(events.get(i + 1), Some(Event::End(_)));

        match event {
            Event::Text(text) if leaf => {
                let raw = std::str::from_utf8(text).map_err(syntax)?;
                let escaped = BytesText::from_escaped(escape_edges(raw));
                writer.write_event(Event::Text(escaped)).map_err(syntax)?;
            }
            _ => writer.write_event(event.clone()).map_err(syntax)?,
        }
    }

    String::from_utf8(writer.into_inner()).map_err(syntax)
}

/// Name of the first element of `xml`, skipping the prolog.
fn root_name(xml: &str) -> Result<Option<String>, Error> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event().map_err(syntax)? {
            Event::Start(e) | Event::Empty(e) => {
                return Ok(Some(String::from_utf8_lossy(e.name().as_ref()).into_owned()));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

fn encode_with<D: ApiDocument>(document: &D, format: Format, pretty: bool) -> Result<String, Error> {
    if let Err(e) = document.check() {
        warn!(root = D::XML_ROOT, %format, "refusing to encode document: {}", e);
        return Err(e);
    }

    let encoded = match (format, pretty) {
        (Format::Json, false) => serde_json::to_string(document)?,
        (Format::Json, true) => serde_json::to_string_pretty(document)?,
        (Format::Xml, false) => finish_xml(&document.encode_xml()?, None)?,
        (Format::Xml, true) => finish_xml(&document.encode_xml()?, Some(2))?,
    };

    debug!(root = D::XML_ROOT, %format, pretty, bytes = encoded.len(), "encoded document");
    Ok(encoded)
}

pub fn encode<D: ApiDocument>(document: &D, format: Format) -> Result<String, Error> {
    encode_with(document, format, false)
}

/// Same as [`encode`], with one nested value or element per line.
pub fn encode_pretty<D: ApiDocument>(document: &D, format: Format) -> Result<String, Error> {
    encode_with(document, format, true)
}

pub fn decode<D: ApiDocument>(input: &str, format: Format) -> Result<D, Error> {
    let document = match format {
        Format::Json => serde_json::from_str(input)?,
        Format::Xml => {
            match root_name(input)? {
                Some(found) if found != D::XML_ROOT => {
                    return RootMismatchSnafu {
                        expected: D::XML_ROOT,
                        found,
                    }
                    .fail();
                }
                _ => {}
            }
            D::decode_xml(input)?
        }
    };

    debug!(root = D::XML_ROOT, %format, bytes = input.len(), "decoded document");
    Ok(document)
}

/// Decodes `input` as a `D` and encodes it again in `to`.
pub fn transcode<D: ApiDocument>(input: &str, from: Format, to: Format, pretty: bool) -> Result<String, Error> {
    let document: D = decode(input, from)?;
    encode_with(&document, to, pretty)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::types::v1::command::{BulkCommandList, Command, CommandList};
    use crate::types::v1::envelope::TypedList;
    use crate::types::v1::event::{Event as ApiEvent, EventAttribute, EventQueryResult};
    use crate::types::v1::host::{HostNameList, HostRefList};
    use crate::types::v1::parcel::{Parcel, ParcelList};
    use crate::types::v1::reference::{ClusterRef, HostRef, RoleConfigGroupRef, ServiceRef};
    use crate::types::v1::replication::{
        HdfsReplicationArguments, ReplicationSchedule, ReplicationScheduleList, ReplicationStrategy,
        ScheduleInterval,
    };
    use crate::types::v1::role::{Role, RoleConfigGroup, RoleConfigGroupList, RoleList};
    use crate::types::v1::service::{Service, ServiceList, ServiceState};
    use crate::types::v1::timeseries::{TimeSeries, TimeSeriesData, TimeSeriesResponse, TimeSeriesResponseList};
    use crate::types::v1::user::{PrincipalList, UserSession, UserSessionList};
    use chrono::{TimeZone, Utc};
    use std::fmt::Debug;

    /// Round trips the empty, single and full prefix of `samples` through
    /// both formats.
    fn assert_round_trips<L>(samples: Vec<L::Item>)
    where
        L: TypedList + ApiDocument,
        L::Item: Clone + PartialEq + Debug,
    {
        assert!(samples.len() > 1, "{} needs at least two samples", L::XML_ROOT);

        for n in [0, 1, samples.len()] {
            let items = samples[..n].to_vec();
            let list = L::from_items(items.clone());

            for format in [Format::Json, Format::Xml] {
                for pretty in [false, true] {
                    let encoded = encode_with(&list, format, pretty).unwrap();
                    let decoded: L = decode(&encoded, format).unwrap();
                    assert_eq!(
                        decoded.items(),
                        Some(items.as_slice()),
                        "{} with {n} items changed in {format} (pretty: {pretty}): {encoded}",
                        L::XML_ROOT
                    );
                }
            }
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("XML".parse::<Format>().unwrap(), Format::Xml);
        assert!("yaml".parse::<Format>().is_err());
        assert_eq!(Format::Xml.to_string(), "xml");
    }

    #[test]
    fn test_missing_collection_is_typed_in_both_formats() {
        let mut list = CommandList::from_items(crate::tests::sample_commands());
        list.set_items(None);

        for format in [Format::Json, Format::Xml] {
            let err = encode(&list, format).unwrap_err();
            assert!(
                err.is_missing_collection(),
                "{format} encoding should report the missing collection, got {err}"
            );
            assert_eq!(err.to_string(), "missing required collection 'commands'");
            assert!(encode_pretty(&list, format).unwrap_err().is_missing_collection());
        }
    }

    #[test]
    fn test_transcode_json_to_xml_and_back() {
        let json = r#"{"commands":[{"id":1,"name":"Start","active":false,"success":true}]}"#;

        let xml = transcode::<CommandList>(json, Format::Json, Format::Xml, false).unwrap();
        assert!(xml.starts_with("<commandList><commands><command>"), "{xml}");

        let back = transcode::<CommandList>(&xml, Format::Xml, Format::Json, false).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn test_decode_reports_malformed_input() {
        let err = decode::<CommandList>("{\"commands\":", Format::Json).unwrap_err();
        assert!(matches!(err, Error::SerdeJson { .. }));

        let err = decode::<CommandList>("<commandList><commands>", Format::Xml).unwrap_err();
        assert!(matches!(err, Error::XmlDecode { .. } | Error::XmlSyntax { .. }), "{err}");
    }

    #[test]
    fn test_decode_rejects_foreign_root_element() {
        let xml = "<parcelList><commands><command><id>1</id></command></commands></parcelList>";
        let err = decode::<CommandList>(xml, Format::Xml).unwrap_err();
        assert!(matches!(err, Error::RootMismatch { expected: "commandList", .. }), "{err}");
        assert_eq!(err.to_string(), "expected root element <commandList>, found <parcelList>");

        let err = decode::<Command>("<host><id>1</id></host>", Format::Xml).unwrap_err();
        assert!(matches!(err, Error::RootMismatch { .. }), "{err}");

        let prolog = "<?xml version=\"1.0\"?>\n<!-- cm -->\n<commandList><commands/></commandList>";
        let list: CommandList = decode(prolog, Format::Xml).unwrap();
        assert_eq!(list.commands(), Some(&[][..]));
    }

    #[test]
    fn test_xml_keeps_edge_whitespace() {
        let names = vec![
            " padded ".to_string(),
            String::new(),
            "a<b&c".to_string(),
            "  ".to_string(),
            "\ttabbed\n".to_string(),
        ];
        let mut list = HostNameList::new();
        list.set_host_names(Some(names.clone()));

        let xml = encode(&list, Format::Xml).unwrap();
        assert!(xml.contains("<hostName>&#32;padded&#32;</hostName>"), "{xml}");
        assert!(xml.contains("<hostName>&#32;&#32;</hostName>"), "{xml}");

        let decoded: HostNameList = decode(&xml, Format::Xml).unwrap();
        assert_eq!(decoded.host_names(), Some(names.as_slice()));

        let command = Command {
            result_message: Some(" x ".to_string()),
            ..Command::named(5, "Stop")
        };
        let xml = encode(&command, Format::Xml).unwrap();
        let decoded: Command = decode(&xml, Format::Xml).unwrap();
        assert_eq!(decoded, command);

        let json = encode(&list, Format::Json).unwrap();
        let back = transcode::<HostNameList>(&json, Format::Json, Format::Xml, false)
            .and_then(|xml| transcode::<HostNameList>(&xml, Format::Xml, Format::Json, false))
            .unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn test_pretty_xml_is_indented() {
        let list = CommandList::from_items(vec![Command::named(1, "Start")]);
        let xml = encode_pretty(&list, Format::Xml).unwrap();
        assert!(xml.starts_with("<commandList>\n  <commands>\n    <command>"), "{xml}");
        assert!(xml.contains("<name>Start</name>"), "{xml}");

        let json = encode_pretty(&list, Format::Json).unwrap();
        assert!(json.contains("\n  \"commands\": ["), "{json}");
    }

    #[test]
    fn test_every_list_round_trips_in_both_formats() {
        let at = |hour| Utc.with_ymd_and_hms(2025, 6, 1, hour, 30, 0).unwrap();

        assert_round_trips::<CommandList>(vec![
            Command {
                result_message: Some("  leading and trailing  ".to_string()),
                ..Command::named(1, "Start")
            },
            Command::named(2, " Stop"),
            Command::named(3, "Restart "),
        ]);
        assert_round_trips::<BulkCommandList>(crate::tests::sample_commands());
        assert_round_trips::<EventQueryResult>({
            let mut events = crate::tests::sample_events();
            events.push(ApiEvent {
                content: Some(" indented\nmessage ".to_string()),
                attributes: vec![EventAttribute {
                    name: "ROLE".to_string(),
                    values: vec![" a ".to_string(), "b".to_string()],
                }],
                ..Default::default()
            });
            events
        });
        assert_round_trips::<TimeSeriesResponseList>(vec![
            TimeSeriesResponse {
                time_series: vec![TimeSeries {
                    data: vec![
                        TimeSeriesData {
                            timestamp: at(1),
                            value: 0.5,
                            data_type: Some("SAMPLE".to_string()),
                        },
                        TimeSeriesData {
                            timestamp: at(2),
                            value: -3.0,
                            data_type: None,
                        },
                    ],
                    ..Default::default()
                }],
                warnings: vec![" spaced warning ".to_string()],
                time_series_query: Some("select cpu_percent".to_string()),
            },
            TimeSeriesResponse::default(),
        ]);
        assert_round_trips::<ReplicationScheduleList>(vec![
            ReplicationSchedule {
                id: Some(11),
                display_name: Some(" nightly ".to_string()),
                interval: Some(1),
                interval_unit: Some(ScheduleInterval::Day),
                next_run: Some(at(3)),
                hdfs_arguments: Some(HdfsReplicationArguments {
                    source_service: Some(ServiceRef::new("prod", "hdfs")),
                    source_path: "/data/in".to_string(),
                    destination_path: "/data/out ".to_string(),
                    replication_strategy: Some(ReplicationStrategy::Dynamic),
                    ..Default::default()
                }),
                ..Default::default()
            },
            ReplicationSchedule {
                id: Some(12),
                paused: Some(true),
                ..Default::default()
            },
        ]);
        assert_round_trips::<ParcelList>({
            let mut parcels = crate::tests::sample_parcels();
            parcels.push(Parcel {
                display_name: Some(" Kafka ".to_string()),
                cluster_ref: Some(ClusterRef::new(" prod")),
                ..Parcel::new("KAFKA", "3.4.1")
            });
            parcels
        });
        assert_round_trips::<RoleList>({
            let mut roles = crate::tests::sample_roles();
            roles.push(Role {
                name: Some("  ".to_string()),
                ..Default::default()
            });
            roles
        });
        assert_round_trips::<RoleConfigGroupList>(vec![
            RoleConfigGroup {
                name: Some("hdfs-DATANODE-BASE".to_string()),
                role_type: Some("DATANODE".to_string()),
                base: Some(true),
                service_ref: Some(ServiceRef::new("prod", "hdfs")),
                ..Default::default()
            },
            RoleConfigGroup {
                name: Some("hdfs-DATANODE-ssd".to_string()),
                display_name: Some(" DataNode (SSD) ".to_string()),
                ..Default::default()
            },
        ]);
        assert_round_trips::<ServiceList>(vec![
            Service {
                name: Some("hdfs".to_string()),
                service_type: Some("HDFS".to_string()),
                cluster_ref: Some(ClusterRef::new("prod")),
                service_state: Some(ServiceState::Started),
                ..Default::default()
            },
            Service {
                name: Some("yarn".to_string()),
                display_name: Some("YARN \t".to_string()),
                ..Default::default()
            },
        ]);
        assert_round_trips::<HostRefList>(vec![
            HostRef::new("host-1"),
            HostRef::new(" host-2 "),
            HostRef::new("host-3"),
        ]);
        assert_round_trips::<HostNameList>(vec![
            "host-1.example.com".to_string(),
            " padded ".to_string(),
            "  ".to_string(),
        ]);
        assert_round_trips::<UserSessionList>(vec![
            UserSession {
                name: Some("admin".to_string()),
                remote_addr: Some("10.0.0.1".to_string()),
                last_request: Some(at(4)),
            },
            UserSession {
                name: Some(" guest ".to_string()),
                ..Default::default()
            },
        ]);
        assert_round_trips::<PrincipalList>(vec![
            "hdfs/host-1@EXAMPLE.COM".to_string(),
            " yarn/host-2@EXAMPLE.COM".to_string(),
        ]);

        // the role config group ref is not a list, but shares the text path
        let group = RoleConfigGroupRef::new(" base ");
        let xml = encode(&group, Format::Xml).unwrap();
        assert_eq!(decode::<RoleConfigGroupRef>(&xml, Format::Xml).unwrap(), group);
    }
}
