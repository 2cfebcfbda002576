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

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("missing required collection '{}'", collection))]
    MissingCollection { collection: &'static str },

    #[snafu(display("missing value for {}", type_name))]
    MissingValue { type_name: &'static str },

    #[snafu(display(
        "unknown {} '{}', expected one of: {}",
        type_name,
        value,
        expected
    ))]
    UnknownVariant {
        type_name: &'static str,
        value: String,
        expected: String,
    },

    #[snafu(display("{} has no identifying value and cannot be resolved", kind))]
    DanglingReference { kind: &'static str },

    #[snafu(display("unknown document kind '{}'", kind))]
    UnknownDocumentKind { kind: String },

    #[snafu(display("serde_json error: {}", source))]
    SerdeJson { source: serde_json::Error },

    #[snafu(display("xml encode error: {}", source))]
    XmlEncode { source: quick_xml::SeError },

    #[snafu(display("xml decode error: {}", source))]
    XmlDecode { source: quick_xml::DeError },

    #[snafu(display("expected root element <{}>, found <{}>", expected, found))]
    RootMismatch { expected: &'static str, found: String },

    #[snafu(display("malformed xml: {}", message))]
    XmlSyntax { message: String },

    #[snafu(display("serde_yaml error: {}", source))]
    SchemaYaml { source: serde_yaml_ng::Error },
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::SerdeJson { source }
    }
}

impl Error {
    /// Whether the error came from a producer handing over an incomplete
    /// document rather than from malformed wire data.
    pub fn is_missing_collection(&self) -> bool {
        matches!(self, Error::MissingCollection { .. })
    }
}
