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
use crate::types::v1::reference::{ClusterRef, HostRef, ServiceRef};
use crate::wire::ApiDocument;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::Display;

/// A command issued against a cluster, service, role or host.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,

    /// `None` when the server did not report it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Only meaningful once the command is no longer active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_data_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_ref: Option<ClusterRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_ref: Option<ServiceRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_ref: Option<HostRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_retry: Option<bool>,
}

/// Progress of a command folded from its `active`/`success` flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum CommandState {
    Running,
    Succeeded,
    Failed,
    /// The server did not report enough to tell.
    Unknown,
}

impl Command {
    pub fn named(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn state(&self) -> CommandState {
        match (self.active, self.success) {
            (Some(true), _) => CommandState::Running,
            (Some(false), Some(true)) => CommandState::Succeeded,
            (Some(false), Some(false)) => CommandState::Failed,
            _ => CommandState::Unknown,
        }
    }
}

impl ApiDocument for Command {
    const XML_ROOT: &'static str = "command";
}

list_envelope! {
    /// Commands, in the order the server returned them.
    pub struct CommandList {
        commands: Command => "commands",
        xml(root = "commandList", item = "command"),
        optional {},
        repeated {},
    }
}

list_envelope! {
    /// Commands issued by a bulk request, with the errors of the ones that
    /// could not be issued.
    pub struct BulkCommandList {
        commands: Command => "commands",
        xml(root = "bulkCommandList", item = "command"),
        optional {},
        repeated {
            errors: String,
        },
    }
}

impl CommandList {
    pub fn active(&self) -> impl Iterator<Item = &Command> {
        self.commands
            .iter()
            .filter(|c| c.state() == CommandState::Running)
    }
}
