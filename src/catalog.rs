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

//! Runtime lookup of document types by name, for tools that only know the
//! kind of a payload as a string.

use crate::types::error::{Error, UnknownDocumentKindSnafu};
use crate::types::v1::command::{BulkCommandList, Command, CommandList};
use crate::types::v1::event::{Event, EventQueryResult};
use crate::types::v1::host::{HostNameList, HostRefList};
use crate::types::v1::parcel::{Parcel, ParcelList};
use crate::types::v1::reference::{ClusterRef, HostRef, RoleConfigGroupRef, ServiceRef};
use crate::types::v1::replication::{ReplicationSchedule, ReplicationScheduleList};
use crate::types::v1::role::{Role, RoleConfigGroup, RoleConfigGroupList, RoleList};
use crate::types::v1::service::{Service, ServiceList};
use crate::types::v1::timeseries::{TimeSeriesResponse, TimeSeriesResponseList};
use crate::types::v1::user::{PrincipalList, UserSession, UserSessionList};
use crate::wire::{self, ApiDocument, Format};
use schemars::Schema;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, VariantNames};

/// Every top-level document of the API. The name of a kind is the root
/// element of its XML representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, VariantNames)]
#[strum(serialize_all = "camelCase")]
pub enum DocumentKind {
    Command,
    CommandList,
    BulkCommandList,
    Event,
    EventQueryResult,
    TimeSeriesResponse,
    TimeSeriesResponseList,
    ReplicationSchedule,
    ReplicationScheduleList,
    Parcel,
    ParcelList,
    Role,
    RoleList,
    RoleConfigGroup,
    RoleConfigGroupList,
    Service,
    ServiceList,
    HostRefList,
    HostNameList,
    UserSession,
    UserSessionList,
    PrincipalList,
    ClusterRef,
    HostRef,
    RoleConfigGroupRef,
    ServiceRef,
}

macro_rules! with_document {
    ($kind:expr, $doc:ident => $body:expr) => {
        match $kind {
            DocumentKind::Command => {
                type $doc = Command;
                $body
            }
            DocumentKind::CommandList => {
                type $doc = CommandList;
                $body
            }
            DocumentKind::BulkCommandList => {
                type $doc = BulkCommandList;
                $body
            }
            DocumentKind::Event => {
                type $doc = Event;
                $body
            }
            DocumentKind::EventQueryResult => {
                type $doc = EventQueryResult;
                $body
            }
            DocumentKind::TimeSeriesResponse => {
                type $doc = TimeSeriesResponse;
                $body
            }
            DocumentKind::TimeSeriesResponseList => {
                type $doc = TimeSeriesResponseList;
                $body
            }
            DocumentKind::ReplicationSchedule => {
                type $doc = ReplicationSchedule;
                $body
            }
            DocumentKind::ReplicationScheduleList => {
                type $doc = ReplicationScheduleList;
                $body
            }
            DocumentKind::Parcel => {
                type $doc = Parcel;
                $body
            }
            DocumentKind::ParcelList => {
                type $doc = ParcelList;
                $body
            }
            DocumentKind::Role => {
                type $doc = Role;
                $body
            }
            DocumentKind::RoleList => {
                type $doc = RoleList;
                $body
            }
            DocumentKind::RoleConfigGroup => {
                type $doc = RoleConfigGroup;
                $body
            }
            DocumentKind::RoleConfigGroupList => {
                type $doc = RoleConfigGroupList;
                $body
            }
            DocumentKind::Service => {
                type $doc = Service;
                $body
            }
            DocumentKind::ServiceList => {
                type $doc = ServiceList;
                $body
            }
            DocumentKind::HostRefList => {
                type $doc = HostRefList;
                $body
            }
            DocumentKind::HostNameList => {
                type $doc = HostNameList;
                $body
            }
            DocumentKind::UserSession => {
                type $doc = UserSession;
                $body
            }
            DocumentKind::UserSessionList => {
                type $doc = UserSessionList;
                $body
            }
            DocumentKind::PrincipalList => {
                type $doc = PrincipalList;
                $body
            }
            DocumentKind::ClusterRef => {
                type $doc = ClusterRef;
                $body
            }
            DocumentKind::HostRef => {
                type $doc = HostRef;
                $body
            }
            DocumentKind::RoleConfigGroupRef => {
                type $doc = RoleConfigGroupRef;
                $body
            }
            DocumentKind::ServiceRef => {
                type $doc = ServiceRef;
                $body
            }
        }
    };
}

impl DocumentKind {
    /// Like `str::parse`, with the crate's error type.
    pub fn lookup(name: &str) -> Result<Self, Error> {
        Self::from_str(name).map_err(|_| UnknownDocumentKindSnafu { kind: name }.build())
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn xml_root(&self) -> &'static str {
        with_document!(self, D => D::XML_ROOT)
    }

    /// JSON Schema of the document's JSON representation.
    pub fn schema(&self) -> Schema {
        with_document!(self, D => schemars::schema_for!(D))
    }

    /// Decodes `input` as this kind and encodes it again, which validates it
    /// on the way.
    pub fn transcode(&self, input: &str, from: Format, to: Format, pretty: bool) -> Result<String, Error> {
        with_document!(self, D => wire::transcode::<D>(input, from, to, pretty))
    }
}
