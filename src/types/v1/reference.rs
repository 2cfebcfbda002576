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

//! References point at an entity by its identifying key instead of embedding
//! it. Equality and hashing only ever look at that key.

use crate::types::error::{DanglingReferenceSnafu, Error};
use crate::wire::ApiDocument;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use snafu::OptionExt;

macro_rules! reference_type {
    (
        $(#[$attr:meta])*
        $name:ident { $field:ident, require = $require:ident, kind = $kind:literal, xml = $root:literal }
    ) => {
        $(#[$attr])*
        #[derive(
            Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema,
        )]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub $field: Option<String>,
        }

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self {
                    $field: Some(value.into()),
                }
            }

            /// The identifying value, for consumers that resolve the target.
            pub fn $require(&self) -> Result<&str, Error> {
                self.$field
                    .as_deref()
                    .context(DanglingReferenceSnafu { kind: $kind })
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl ApiDocument for $name {
            const XML_ROOT: &'static str = $root;
        }
    };
}

reference_type! {
    /// A cluster, by name.
    ClusterRef { cluster_name, require = require_cluster_name, kind = "cluster reference", xml = "clusterRef" }
}

reference_type! {
    /// A host, by host id.
    HostRef { host_id, require = require_host_id, kind = "host reference", xml = "hostRef" }
}

reference_type! {
    /// A role config group, by name.
    ///
    /// Roles that never had a group assigned carry no reference at all; an
    /// unset name reads as `None` and is only rejected on resolution.
    RoleConfigGroupRef {
        role_config_group_name,
        require = require_role_config_group_name,
        kind = "role config group reference",
        xml = "roleConfigGroupRef"
    }
}

/// A service, by cluster and service name. Services of a peered deployment
/// also carry the peer name.
#[derive(
    Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
}

impl ServiceRef {
    pub fn new(cluster_name: impl Into<String>, service_name: impl Into<String>) -> Self {
        Self {
            peer_name: None,
            cluster_name: Some(cluster_name.into()),
            service_name: Some(service_name.into()),
        }
    }

    pub fn with_peer(mut self, peer_name: impl Into<String>) -> Self {
        self.peer_name = Some(peer_name.into());
        self
    }

    pub fn require_service_name(&self) -> Result<&str, Error> {
        self.service_name
            .as_deref()
            .context(DanglingReferenceSnafu {
                kind: "service reference",
            })
    }

    pub fn cluster(&self) -> Option<ClusterRef> {
        self.cluster_name.as_deref().map(ClusterRef::new)
    }
}

impl ApiDocument for ServiceRef {
    const XML_ROOT: &'static str = "serviceRef";
}
