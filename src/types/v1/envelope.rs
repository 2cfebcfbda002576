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

//! Typed list envelopes.
//!
//! Every "list of X" payload of the API is a named wrapper around one
//! [`ListEnvelope`]. The wrapper decides the collection name used on the wire
//! (`commands`, `events`, ...) while the envelope owns the ordered items.
//! Wrappers are generated with [`list_envelope!`] so the JSON shape
//! (`{"commands":[...]}`) and the XML shape
//! (`<commandList><commands><command/>...</commands></commandList>`) are
//! always derived from the same declaration.

use crate::types::error::{Error, MissingCollectionSnafu};
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use snafu::OptionExt;
use std::borrow::Cow;

/// Ordered, owned collection of API items.
///
/// The slot may be absent: deserializers see `null`, producers may clear it
/// with [`ListEnvelope::set_items`]. Serializing an absent slot is an error,
/// it is never written out as an empty array.
#[derive(Clone, Debug)]
pub struct ListEnvelope<T> {
    items: Option<Vec<T>>,
}

impl<T> ListEnvelope<T> {
    /// An envelope holding an empty sequence.
    pub fn new() -> Self {
        Self {
            items: Some(Vec::new()),
        }
    }

    /// Wraps `items` as-is, keeping their order.
    pub fn from_items(items: Vec<T>) -> Self {
        Self { items: Some(items) }
    }

    pub fn items(&self) -> Option<&[T]> {
        self.items.as_deref()
    }

    pub fn items_mut(&mut self) -> Option<&mut Vec<T>> {
        self.items.as_mut()
    }

    /// Replaces the wrapped sequence wholesale.
    pub fn set_items(&mut self, items: Option<Vec<T>>) {
        self.items = items;
    }

    pub fn take_items(&mut self) -> Option<Vec<T>> {
        self.items.take()
    }

    pub fn into_items(self) -> Option<Vec<T>> {
        self.items
    }

    pub fn is_present(&self) -> bool {
        self.items.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the items; an absent slot iterates nothing.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.as_deref().unwrap_or_default().iter()
    }

    /// Returns the items, or a missing collection error naming `collection`.
    pub fn require(&self, collection: &'static str) -> Result<&[T], Error> {
        self.items
            .as_deref()
            .context(MissingCollectionSnafu { collection })
    }
}

impl<T> Default for ListEnvelope<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ListEnvelope<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_items(items)
    }
}

impl<T> FromIterator<T> for ListEnvelope<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ListEnvelope<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Serialize> Serialize for ListEnvelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.items {
            Some(items) => items.serialize(serializer),
            None => Err(serde::ser::Error::custom("missing required collection")),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ListEnvelope<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<Vec<T>>::deserialize(deserializer).map(|items| Self { items })
    }
}

impl<T: JsonSchema> JsonSchema for ListEnvelope<T> {
    fn inline_schema() -> bool {
        true
    }
    fn schema_name() -> Cow<'static, str> {
        <Vec<T>>::schema_name()
    }
    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        <Vec<T>>::json_schema(generator)
    }
}

/// Common view over every generated list payload.
///
/// `items` reads the same slot as the payload's own named accessor
/// (`CommandList::commands`, `ParcelList::parcels`, ...).
pub trait TypedList: Default {
    type Item;

    /// Collection name on the wire, identical in JSON and XML.
    const COLLECTION: &'static str;

    fn envelope(&self) -> &ListEnvelope<Self::Item>;

    fn envelope_mut(&mut self) -> &mut ListEnvelope<Self::Item>;

    fn items(&self) -> Option<&[Self::Item]> {
        self.envelope().items()
    }

    fn set_items(&mut self, items: Option<Vec<Self::Item>>) {
        self.envelope_mut().set_items(items);
    }

    fn from_items(items: Vec<Self::Item>) -> Self {
        let mut list = Self::default();
        list.set_items(Some(items));
        list
    }
}

#[doc(hidden)]
pub fn slice_is_empty<T>(items: &&[T]) -> bool {
    items.is_empty()
}

/// Declares a named list payload around a [`ListEnvelope`].
///
/// ```ignore
/// list_envelope! {
///     /// Commands issued by a bulk request.
///     pub struct BulkCommandList {
///         commands: Command => "commands",
///         xml(root = "bulkCommandList", item = "command"),
///         optional {},
///         repeated {
///             errors: String,
///         },
///     }
/// }
/// ```
///
/// Besides the named getter (`commands()`) the wrapper gets a named setter
/// (`set_commands()`), so callers need not import [`TypedList`].
/// `optional` fields become `Option<T>` metadata, `repeated` fields become
/// `Vec<T>` metadata. Both are omitted from the wire when unset.
macro_rules! list_envelope {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident {
            $coll:ident : $item_ty:ty => $wire:tt,
            xml(root = $root:tt, item = $item:tt),
            optional { $( $(#[$oattr:meta])* $oname:ident : $oty:ty ),* $(,)? },
            repeated { $( $(#[$rattr:meta])* $rname:ident : $rty:ty ),* $(,)? } $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Default, ::serde::Serialize, ::serde::Deserialize, ::schemars::JsonSchema)]
        #[serde(rename_all = "camelCase")]
        $vis struct $name {
            #[serde(rename = $wire, default)]
            $coll: $crate::types::v1::envelope::ListEnvelope<$item_ty>,

            $(
                $(#[$oattr])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $oname: Option<$oty>,
            )*

            $(
                $(#[$rattr])*
                #[serde(default, skip_serializing_if = "Vec::is_empty")]
                pub $rname: Vec<$rty>,
            )*
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn from_items(items: Vec<$item_ty>) -> Self {
                <Self as $crate::types::v1::envelope::TypedList>::from_items(items)
            }

            pub fn $coll(&self) -> Option<&[$item_ty]> {
                self.$coll.items()
            }

            ::paste::paste! {
                /// Replaces the collection wholesale; `None` leaves it absent.
                pub fn [<set_ $coll>](&mut self, items: Option<Vec<$item_ty>>) {
                    self.$coll.set_items(items);
                }
            }

            pub fn into_envelope(self) -> $crate::types::v1::envelope::ListEnvelope<$item_ty> {
                self.$coll
            }
        }

        impl From<Vec<$item_ty>> for $name {
            fn from(items: Vec<$item_ty>) -> Self {
                Self::from_items(items)
            }
        }

        impl $crate::types::v1::envelope::TypedList for $name {
            type Item = $item_ty;

            const COLLECTION: &'static str = $wire;

            fn envelope(&self) -> &$crate::types::v1::envelope::ListEnvelope<$item_ty> {
                &self.$coll
            }

            fn envelope_mut(&mut self) -> &mut $crate::types::v1::envelope::ListEnvelope<$item_ty> {
                &mut self.$coll
            }
        }

        const _: () = {
            use $crate::types::error::{Error, XmlDecodeSnafu, XmlEncodeSnafu};
            use ::snafu::ResultExt;

            #[derive(::serde::Serialize)]
            struct ItemsOut<'a> {
                #[serde(rename = $item)]
                items: &'a [$item_ty],
            }

            #[derive(Default, ::serde::Deserialize)]
            struct ItemsIn {
                #[serde(rename = $item, default)]
                items: Vec<$item_ty>,
            }

            #[derive(::serde::Serialize)]
            #[serde(rename = $root, rename_all = "camelCase")]
            struct DocumentOut<'a> {
                #[serde(rename = $wire)]
                $coll: ItemsOut<'a>,
                $(
                    #[serde(skip_serializing_if = "Option::is_none")]
                    $oname: Option<&'a $oty>,
                )*
                $(
                    #[serde(skip_serializing_if = "crate::types::v1::envelope::slice_is_empty")]
                    $rname: &'a [$rty],
                )*
            }

            #[derive(::serde::Deserialize)]
            #[serde(rename_all = "camelCase")]
            struct DocumentIn {
                #[serde(rename = $wire, default)]
                $coll: ItemsIn,
                $(
                    #[serde(default)]
                    $oname: Option<$oty>,
                )*
                $(
                    #[serde(default)]
                    $rname: Vec<$rty>,
                )*
            }

            impl $crate::wire::ApiDocument for $name {
                const XML_ROOT: &'static str = $root;

                fn check(&self) -> Result<(), Error> {
                    self.$coll.require($wire).map(|_| ())
                }

                fn encode_xml(&self) -> Result<String, Error> {
                    let document = DocumentOut {
                        $coll: ItemsOut {
                            items: self.$coll.require($wire)?,
                        },
                        $( $oname: self.$oname.as_ref(), )*
                        $( $rname: self.$rname.as_slice(), )*
                    };
                    ::quick_xml::se::to_string(&document).context(XmlEncodeSnafu)
                }

                fn decode_xml(xml: &str) -> Result<Self, Error> {
                    let document: DocumentIn = ::quick_xml::de::from_str(xml).context(XmlDecodeSnafu)?;
                    Ok(Self {
                        $coll: $crate::types::v1::envelope::ListEnvelope::from_items(document.$coll.items),
                        $( $oname: document.$oname, )*
                        $( $rname: document.$rname, )*
                    })
                }
            }
        };
    };
}

pub(crate) use list_envelope;
