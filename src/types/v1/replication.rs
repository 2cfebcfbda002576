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
use crate::types::v1::reference::ServiceRef;
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
pub enum ScheduleInterval {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl ApiEnum for ScheduleInterval {
    const TYPE_NAME: &'static str = "schedule interval";
}

/// How copy work is split between map tasks.
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
pub enum ReplicationStrategy {
    /// Files are distributed up front.
    Static,
    /// Mappers pick up chunks as they finish.
    Dynamic,
}

impl ApiEnum for ReplicationStrategy {
    const TYPE_NAME: &'static str = "replication strategy";
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HdfsReplicationArguments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_service: Option<ServiceRef>,

    pub source_path: String,

    pub destination_path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapreduce_service_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<String>,

    /// MB/s per mapper.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth_per_map: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_maps: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_strategy: Option<ReplicationStrategy>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationSchedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,

    /// Number of `interval_unit`s between runs. Zero or unset means the
    /// schedule runs once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_unit: Option<ScheduleInterval>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_run: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_on_start: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_on_success: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_on_fail: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdfs_arguments: Option<HdfsReplicationArguments>,
}

impl ReplicationSchedule {
    pub fn is_recurring(&self) -> bool {
        self.interval.is_some_and(|i| i > 0) && self.interval_unit.is_some()
    }

    /// An unset pause flag reads as not paused.
    pub fn is_paused(&self) -> bool {
        self.paused.unwrap_or(false)
    }
}

impl ApiDocument for ReplicationSchedule {
    const XML_ROOT: &'static str = "replicationSchedule";
}

list_envelope! {
    pub struct ReplicationScheduleList {
        schedules: ReplicationSchedule => "schedules",
        xml(root = "replicationScheduleList", item = "schedule"),
        optional {},
        repeated {},
    }
}
