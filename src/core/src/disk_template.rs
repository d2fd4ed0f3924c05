// Copyright 2025 Katapult Rust Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::field_name::FieldName;
use katapult::query::{QueryValues, Queryable};

/// A disk image that new virtual machines can be built from.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct DiskTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub permalink: String,
    pub universal: bool,
    pub latest_version: Option<DiskTemplateVersion>,
}

impl DiskTemplate {
    /// Reduces this object to a single-field reference. Priority: `id`,
    /// then `permalink`.
    pub fn lookup_ref(&self) -> Option<DiskTemplateRef> {
        if !self.id.is_empty() {
            return Some(DiskTemplateRef::Id(self.id.clone()));
        }
        if !self.permalink.is_empty() {
            return Some(DiskTemplateRef::Permalink(self.permalink.clone()));
        }
        None
    }
}

/// A published revision of a disk template.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct DiskTemplateVersion {
    pub id: String,
    pub number: u32,
    pub stable: bool,
    pub size_in_gb: u32,
}

/// A key/value installation option passed alongside a disk template when
/// building a virtual machine.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct DiskTemplateOption {
    pub key: String,
    pub value: String,
}

/// A single-field reference to a disk template.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiskTemplateRef {
    Id(String),
    Permalink(String),
}

impl DiskTemplateRef {
    /// Classifies an ambiguous caller string by the `dtpl_` ID prefix.
    pub fn lookup(id_or_permalink: &str) -> (Self, FieldName) {
        if id_or_permalink.starts_with("dtpl_") {
            (Self::Id(id_or_permalink.to_string()), FieldName::Id)
        } else {
            (Self::Permalink(id_or_permalink.to_string()), FieldName::Permalink)
        }
    }
}

impl Queryable for DiskTemplateRef {
    fn query_values(&self) -> QueryValues {
        let mut v = QueryValues::new();
        match self {
            Self::Id(id) => v.set("disk_template[id]", id.as_str()),
            Self::Permalink(permalink) => v.set("disk_template[permalink]", permalink.as_str()),
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldName;
    use test_case::test_case;

    #[test_case("dtpl_abc123", FieldName::Id; "prefixed id")]
    #[test_case("templates/ubuntu-22-04", FieldName::Permalink; "permalink")]
    fn lookup_classifies(input: &str, expected: FieldName) {
        let (_, field) = DiskTemplateRef::lookup(input);
        assert_eq!(field, expected);
    }

    #[test]
    fn lookup_ref_priority() {
        let template = DiskTemplate {
            id: "dtpl_abc".into(),
            permalink: "templates/debian-12".into(),
            ..Default::default()
        };
        assert_eq!(template.lookup_ref(), Some(DiskTemplateRef::Id("dtpl_abc".into())));

        let template = DiskTemplate {
            permalink: "templates/debian-12".into(),
            ..Default::default()
        };
        assert_eq!(
            template.lookup_ref(),
            Some(DiskTemplateRef::Permalink("templates/debian-12".into()))
        );
    }

    #[test]
    fn ref_query_keys() {
        let v = DiskTemplateRef::Id("dtpl_abc".into()).query_values();
        assert_eq!(v.get("disk_template[id]"), Some("dtpl_abc"));
    }
}
