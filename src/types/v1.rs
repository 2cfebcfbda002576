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

//! Version 1 of the API models.

pub mod api_enum;
pub mod envelope;

pub mod command;
pub mod event;
pub mod host;
pub mod parcel;
pub mod reference;
pub mod replication;
pub mod role;
pub mod service;
pub mod timeseries;
pub mod user;
