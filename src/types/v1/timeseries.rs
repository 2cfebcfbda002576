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

use crate::types::v1::envelope::list_envelope;
use crate::wire::ApiDocument;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units_numerators: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

/// A single sample.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesData {
    pub timestamp: DateTime<Utc>,

    /// Always finite; NaN and infinities are refused in both directions.
    #[serde(serialize_with = "serialize_finite", deserialize_with = "deserialize_finite")]
    #[schemars(with = "f64")]
    pub value: f64,

    /// `SAMPLE` for raw points, or the aggregation that produced the value.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

// JSON has no spelling for NaN or infinity, so neither format carries them.
fn serialize_finite<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return Err(serde::ser::Error::custom(format!("non-finite sample value {value}")));
    }
    serializer.serialize_f64(*value)
}

fn deserialize_finite<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(serde::de::Error::custom(format!("non-finite sample value {value}")));
    }
    Ok(value)
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    pub metadata: TimeSeriesMetadata,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<TimeSeriesData>,
}

impl TimeSeries {
    pub fn latest(&self) -> Option<&TimeSeriesData> {
        self.data.iter().max_by_key(|d| d.timestamp)
    }
}

/// Everything one query expression produced.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub time_series: Vec<TimeSeries>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_series_query: Option<String>,
}

impl ApiDocument for TimeSeriesResponse {
    const XML_ROOT: &'static str = "timeSeriesResponse";
}

list_envelope! {
    /// One response per query expression, in request order.
    pub struct TimeSeriesResponseList {
        responses: TimeSeriesResponse => "items",
        xml(root = "timeSeriesResponseList", item = "timeSeriesResponse"),
        optional {},
        repeated {},
    }
}

impl TimeSeriesResponseList {
    /// Warnings of every response, in order.
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.responses
            .iter()
            .flat_map(|r| r.warnings.iter().map(String::as_str))
    }
}
