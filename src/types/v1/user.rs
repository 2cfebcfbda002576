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
use serde::{Deserialize, Serialize};

/// An interactive session of a user against the management server.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_addr: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_request: Option<DateTime<Utc>>,
}

impl ApiDocument for UserSession {
    const XML_ROOT: &'static str = "userSession";
}

list_envelope! {
    pub struct UserSessionList {
        sessions: UserSession => "sessions",
        xml(root = "userSessionList", item = "session"),
        optional {},
        repeated {},
    }
}

list_envelope! {
    /// Kerberos principals, with the outcome of the request that produced
    /// them.
    pub struct PrincipalList {
        principals: String => "principals",
        xml(root = "principalList", item = "principal"),
        optional {
            /// Unset when the producer did not report an outcome.
            success: bool,
        },
        repeated {
            warnings: String,
        },
    }
}

impl UserSessionList {
    /// Sessions whose last request is at or after `since`.
    pub fn active_since(&self, since: DateTime<Utc>) -> impl Iterator<Item = &UserSession> {
        self.sessions
            .iter()
            .filter(move |s| s.last_request.is_some_and(|t| t >= since))
    }
}
