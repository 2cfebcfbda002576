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

use crate::types::error::{Error, MissingValueSnafu, UnknownVariantSnafu};
use snafu::OptionExt;
use std::str::FromStr;
use strum::VariantNames;

/// String parsing shared by every enumerated API value.
///
/// Wire spellings are SCREAMING_SNAKE_CASE (`CRITICAL`, `HEALTH_EVENT`).
pub trait ApiEnum: FromStr + VariantNames + Sized {
    /// Human readable name used in error messages.
    const TYPE_NAME: &'static str;

    /// Parses a wire value.
    ///
    /// Absent input fails with [`Error::MissingValue`], unknown input with
    /// [`Error::UnknownVariant`] listing the accepted spellings.
    fn parse(value: Option<&str>) -> Result<Self, Error> {
        let value = value.context(MissingValueSnafu {
            type_name: Self::TYPE_NAME,
        })?;

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
