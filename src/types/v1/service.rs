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
use crate::types::v1::reference::{ClusterRef, ServiceRef};
use crate::types::v1::role::HealthSummary;
use crate::wire::ApiDocument;
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
pub enum ServiceState {
    HistoryNotAvailable,
    Unknown,
    Starting,
    Started,
    Stopping,
    Stopped,
    Na,
}

impl ApiEnum for ServiceState {
    const TYPE_NAME: &'static str = "service state";
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_ref: Option<ClusterRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_state: Option<ServiceState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_summary: Option<HealthSummary>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_stale: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
}

impl Service {
    /// Reference to this service, if both its name and cluster are known.
    pub fn to_ref(&self) -> Option<ServiceRef> {
        let cluster = self.cluster_ref.as_ref()?.cluster_name.as_deref()?;
        let name = self.name.as_deref()?;
        Some(ServiceRef::new(cluster, name))
    }
}

impl ApiDocument for Service {
    const XML_ROOT: &'static str = "service";
}

list_envelope! {
    pub struct ServiceList {
        services: Service => "services",
        xml(root = "serviceList", item = "service"),
        optional {},
        repeated {},
    }
}

impl ServiceList {
    pub fn find(&self, name: &str) -> Option<&Service> {
        self.services
            .iter()
            .find(|s| s.name.as_deref() == Some(name))
    }
}
