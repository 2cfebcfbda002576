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
use crate::types::v1::reference::ClusterRef;
use crate::wire::ApiDocument;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// Lifecycle stage of a parcel on a cluster.
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
pub enum ParcelStage {
    AvailableRemotely,
    Downloading,
    Downloaded,
    Distributing,
    Distributed,
    Undistributing,
    Activating,
    Activated,
}

impl ApiEnum for ParcelStage {
    const TYPE_NAME: &'static str = "parcel stage";
}

impl ParcelStage {
    /// Stages during which a command is moving bits around.
    pub fn is_transitional(&self) -> bool {
        matches!(
            self,
            ParcelStage::Downloading
                | ParcelStage::Distributing
                | ParcelStage::Undistributing
                | ParcelStage::Activating
        )
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParcelState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_progress: Option<u64>,

    /// Hosts done so far, during distribution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ParcelState {
    /// Progress as a whole percentage, when both counters are known.
    pub fn progress_percent(&self) -> Option<u8> {
        match (self.progress, self.total_progress) {
            (Some(done), Some(total)) if total > 0 => {
                Some((done.min(total) * 100 / total) as u8)
            }
            _ => None,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    pub product: String,

    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<ParcelStage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ParcelState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_ref: Option<ClusterRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Parcel {
    pub fn new(product: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            version: version.into(),
            ..Default::default()
        }
    }

    /// `product-version`, the name the parcel file is published under.
    pub fn id(&self) -> String {
        format!("{}-{}", self.product, self.version)
    }
}

impl ApiDocument for Parcel {
    const XML_ROOT: &'static str = "parcel";
}

list_envelope! {
    pub struct ParcelList {
        parcels: Parcel => "parcels",
        xml(root = "parcelList", item = "parcel"),
        optional {},
        repeated {},
    }
}

impl ParcelList {
    pub fn in_stage(&self, stage: ParcelStage) -> impl Iterator<Item = &Parcel> {
        self.parcels.iter().filter(move |p| p.stage == Some(stage))
    }
}
