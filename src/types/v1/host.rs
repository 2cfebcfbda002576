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

use crate::types::error::{Error, UnknownVariantSnafu};
use crate::types::v1::api_enum::ApiEnum;
use crate::types::v1::envelope::list_envelope;
use crate::types::v1::reference::HostRef;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString, VariantNames};

/// How hosts come back into service after decommissioning.
#[derive(
    Deserialize,
    Serialize,
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum RecommissionType {
    /// Recommission only; roles stay stopped.
    #[default]
    Recommission,
    /// Recommission and start the roles.
    RecommissionWithStart,
}

impl ApiEnum for RecommissionType {
    const TYPE_NAME: &'static str = "recommission type";

    /// Absent input selects [`RecommissionType::Recommission`].
    fn parse(value: Option<&str>) -> Result<Self, Error> {
        let Some(value) = value else {
            return Ok(Self::default());
        };

        Self::from_str(value).map_err(|_| {
            UnknownVariantSnafu {
                type_name: Self::TYPE_NAME,
                value,
                expected: Self::VARIANTS.join(", "),
            }
            .build()
        })
    }
}

list_envelope! {
    pub struct HostRefList {
        hosts: HostRef => "hosts",
        xml(root = "hostRefList", item = "hostRef"),
        optional {},
        repeated {},
    }
}

list_envelope! {
    /// Bare host names, as accepted by the bulk host commands.
    pub struct HostNameList {
        host_names: String => "hostNames",
        xml(root = "hostNameList", item = "hostName"),
        optional {},
        repeated {},
    }
}

impl HostRefList {
    /// Host ids in order; refs without an id are skipped.
    pub fn host_ids(&self) -> impl Iterator<Item = &str> {
        self.hosts.iter().filter_map(|h| h.host_id.as_deref())
    }
}
