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
use crate::types::v1::reference::{HostRef, RoleConfigGroupRef, ServiceRef};
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
pub enum RoleState {
    HistoryNotAvailable,
    Unknown,
    Starting,
    Started,
    Busy,
    Stopping,
    Stopped,
    /// The role type has no run state.
    Na,
}

impl ApiEnum for RoleState {
    const TYPE_NAME: &'static str = "role state";
}

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
pub enum CommissionState {
    Commissioned,
    Decommissioning,
    Decommissioned,
    Unknown,
    Offlining,
    Offlined,
}

impl ApiEnum for CommissionState {
    const TYPE_NAME: &'static str = "commission state";
}

/// Rolled-up health of an entity, ordered from unknown to worst.
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
pub enum HealthSummary {
    Disabled,
    HistoryNotAvailable,
    NotAvailable,
    Good,
    Concerning,
    Bad,
}

impl ApiEnum for HealthSummary {
    const TYPE_NAME: &'static str = "health summary";
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub role_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_ref: Option<HostRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_ref: Option<ServiceRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_state: Option<RoleState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_state: Option<CommissionState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_summary: Option<HealthSummary>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_stale: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,

    /// Unset for roles that were never assigned to a group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_config_group_ref: Option<RoleConfigGroupRef>,
}

impl Role {
    pub fn role_config_group_name(&self) -> Option<&str> {
        self.role_config_group_ref
            .as_ref()
            .and_then(|r| r.role_config_group_name.as_deref())
    }

    /// An unset maintenance flag reads as `false`.
    pub fn in_maintenance(&self) -> bool {
        self.maintenance_mode.unwrap_or(false)
    }
}

impl ApiDocument for Role {
    const XML_ROOT: &'static str = "role";
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleConfigGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_type: Option<String>,

    /// Base groups are created with the service and cannot be deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_ref: Option<ServiceRef>,
}

impl RoleConfigGroup {
    pub fn to_ref(&self) -> RoleConfigGroupRef {
        RoleConfigGroupRef {
            role_config_group_name: self.name.clone(),
        }
    }
}

impl ApiDocument for RoleConfigGroup {
    const XML_ROOT: &'static str = "roleConfigGroup";
}

list_envelope! {
    pub struct RoleList {
        roles: Role => "roles",
        xml(root = "roleList", item = "role"),
        optional {},
        repeated {},
    }
}

list_envelope! {
    pub struct RoleConfigGroupList {
        groups: RoleConfigGroup => "groups",
        xml(root = "roleConfigGroupList", item = "roleConfigGroup"),
        optional {},
        repeated {},
    }
}

impl RoleList {
    pub fn on_host<'a>(&'a self, host: &'a HostRef) -> impl Iterator<Item = &'a Role> + 'a {
        self.roles
            .iter()
            .filter(move |r| r.host_ref.as_ref() == Some(host))
    }

    /// Worst health reported by any role, `None` when no role reports one.
    pub fn worst_health(&self) -> Option<HealthSummary> {
        self.roles.iter().filter_map(|r| r.health_summary).max()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::wire::{self, Format};

    #[test]
    fn test_unset_group_reference_reads_as_none() {
        let role = Role {
            name: Some("hdfs-DATANODE-1".to_string()),
            ..Default::default()
        };
        assert_eq!(role.role_config_group_name(), None);

        let role = Role {
            role_config_group_ref: Some(RoleConfigGroupRef::default()),
            ..Default::default()
        };
        assert_eq!(role.role_config_group_name(), None);
        assert!(!role.in_maintenance());
    }

    #[test]
    fn test_group_to_ref() {
        let group = RoleConfigGroup {
            name: Some("hdfs-DATANODE-BASE".to_string()),
            base: Some(true),
            ..Default::default()
        };
        assert_eq!(group.to_ref(), RoleConfigGroupRef::new("hdfs-DATANODE-BASE"));
    }

    #[test]
    fn test_role_list_queries() {
        let list = RoleList::from_items(crate::tests::sample_roles());
        let host = HostRef::new("host-1");

        let names: Vec<_> = list.on_host(&host).filter_map(|r| r.name.as_deref()).collect();
        assert_eq!(names, vec!["hdfs-NAMENODE-1", "hdfs-DATANODE-1"]);
        assert_eq!(list.worst_health(), Some(HealthSummary::Concerning));
        assert_eq!(RoleList::new().worst_health(), None);
    }

    #[test]
    fn test_role_list_round_trip() {
        let roles = crate::tests::sample_roles();
        let list = RoleList::from_items(roles.clone());

        let json = wire::encode(&list, Format::Json).unwrap();
        assert!(json.starts_with(r#"{"roles":[{"name":"hdfs-NAMENODE-1","type":"NAMENODE""#), "{json}");

        for format in [Format::Json, Format::Xml] {
            let encoded = wire::encode(&list, format).unwrap();
            let decoded: RoleList = wire::decode(&encoded, format).unwrap();
            assert_eq!(decoded.roles(), Some(roles.as_slice()), "{encoded}");
        }
    }

    #[test]
    fn test_group_list_uses_groups_name() {
        let list = RoleConfigGroupList::from_items(vec![RoleConfigGroup {
            name: Some("hdfs-DATANODE-BASE".to_string()),
            ..Default::default()
        }]);
        let xml = wire::encode(&list, Format::Xml).unwrap();
        assert_eq!(
            xml,
            "<roleConfigGroupList><groups><roleConfigGroup><name>hdfs-DATANODE-BASE</name></roleConfigGroup></groups></roleConfigGroupList>"
        );
        let json = wire::encode(&list, Format::Json).unwrap();
        assert_eq!(json, r#"{"groups":[{"name":"hdfs-DATANODE-BASE"}]}"#);
    }
}
