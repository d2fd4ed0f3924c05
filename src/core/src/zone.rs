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

use crate::data_center::DataCenter;
use katapult::query::{QueryValues, Queryable};

/// A placement zone within a data center.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub permalink: String,
    pub data_center: Option<DataCenter>,
}

impl Zone {
    /// Reduces this object to a single-field reference. Priority: `id`,
    /// then `permalink`.
    pub fn lookup_ref(&self) -> Option<ZoneRef> {
        if !self.id.is_empty() {
            return Some(ZoneRef::Id(self.id.clone()));
        }
        if !self.permalink.is_empty() {
            return Some(ZoneRef::Permalink(self.permalink.clone()));
        }
        None
    }
}

/// A single-field reference to a zone. Zone IDs carry no distinguishing
/// prefix, so there is no string-classifying `lookup` constructor.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneRef {
    Id(String),
    Permalink(String),
}

impl Queryable for ZoneRef {
    fn query_values(&self) -> QueryValues {
        let mut v = QueryValues::new();
        match self {
            Self::Id(id) => v.set("zone[id]", id.as_str()),
            Self::Permalink(permalink) => v.set("zone[permalink]", permalink.as_str()),
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ref_query_keys() {
        let v = ZoneRef::Permalink("north-west".into()).query_values();
        assert_eq!(v.len(), 1);
        assert_eq!(v.get("zone[permalink]"), Some("north-west"));
    }

    #[test]
    fn lookup_ref_empty() {
        assert_eq!(Zone::default().lookup_ref(), None);
    }
}
