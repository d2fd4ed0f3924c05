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

use crate::client::{execute, unwrap_field};
use crate::data_center::DataCenter;
use crate::field_name::FieldName;
use crate::organization::OrganizationRef;
use katapult::query::{QueryValues, Queryable};
use katapult::{Response, Result};
use reqwest::Method;

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Network {
    pub id: String,
    pub name: String,
    pub permalink: String,
    pub data_center: Option<DataCenter>,
}

impl Network {
    /// Reduces this object to a single-field reference. Priority: `id`,
    /// then `permalink`.
    pub fn lookup_ref(&self) -> Option<NetworkRef> {
        if !self.id.is_empty() {
            return Some(NetworkRef::Id(self.id.clone()));
        }
        if !self.permalink.is_empty() {
            return Some(NetworkRef::Permalink(self.permalink.clone()));
        }
        None
    }
}

/// A virtual network available to an organization. Only ever returned
/// alongside [Network] values in list responses.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct VirtualNetwork {
    pub id: String,
    pub name: String,
    pub data_center: Option<DataCenter>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkRef {
    Id(String),
    Permalink(String),
}

impl NetworkRef {
    /// Classifies an ambiguous caller string by the `netw_` ID prefix.
    pub fn lookup(id_or_permalink: &str) -> (Self, FieldName) {
        if id_or_permalink.starts_with("netw_") {
            (Self::Id(id_or_permalink.to_string()), FieldName::Id)
        } else {
            (
                Self::Permalink(id_or_permalink.to_string()),
                FieldName::Permalink,
            )
        }
    }
}

impl Queryable for NetworkRef {
    fn query_values(&self) -> QueryValues {
        let mut v = QueryValues::new();
        match self {
            Self::Id(id) => v.set("network[id]", id.as_str()),
            Self::Permalink(permalink) => v.set("network[permalink]", permalink.as_str()),
        }
        v
    }
}

/// The networks available to an organization.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct AvailableNetworks {
    pub networks: Vec<Network>,
    pub virtual_networks: Vec<VirtualNetwork>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ResponseBody {
    network: Option<Network>,
    networks: Option<Vec<Network>>,
    virtual_networks: Option<Vec<VirtualNetwork>>,
}

#[derive(Clone, Debug)]
pub struct NetworksClient {
    inner: katapult::Client,
}

impl NetworksClient {
    pub fn new(transport: katapult::Client) -> Self {
        Self { inner: transport }
    }

    pub async fn list(&self, org: &OrganizationRef) -> Result<Response<AvailableNetworks>> {
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::GET,
            "core/v1/organizations/_/available_networks",
            &org.query_values(),
            None::<&()>,
        )
        .await?;
        Ok(response.map(|b| AvailableNetworks {
            networks: b.networks.unwrap_or_default(),
            virtual_networks: b.virtual_networks.unwrap_or_default(),
        }))
    }

    /// Fetches by ID or permalink, classifying the string by its prefix.
    pub async fn get(&self, id_or_permalink: &str) -> Result<Response<Network>> {
        let (r, _) = NetworkRef::lookup(id_or_permalink);
        self.get_by_ref(&r).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Response<Network>> {
        self.get_by_ref(&NetworkRef::Id(id.to_string())).await
    }

    pub async fn get_by_permalink(&self, permalink: &str) -> Result<Response<Network>> {
        self.get_by_ref(&NetworkRef::Permalink(permalink.to_string()))
            .await
    }

    async fn get_by_ref(&self, r: &NetworkRef) -> Result<Response<Network>> {
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::GET,
            "core/v1/networks/_",
            &r.query_values(),
            None::<&()>,
        )
        .await?;
        unwrap_field(response.map(|b| b.network), "network")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("netw_zDW7KYAeqqfRfVag", FieldName::Id)]
    #[test_case("public", FieldName::Permalink)]
    fn lookup_classifies(input: &str, want: FieldName) {
        let (_, field) = NetworkRef::lookup(input);
        assert_eq!(field, want);
    }

    #[test]
    fn lookup_ref_priority() {
        let network = Network {
            id: "netw_zDW7KYAeqqfRfVag".into(),
            permalink: "public".into(),
            ..Default::default()
        };
        assert_eq!(
            network.lookup_ref(),
            Some(NetworkRef::Id("netw_zDW7KYAeqqfRfVag".into()))
        );

        let v = network.lookup_ref().query_values();
        assert_eq!(v.len(), 1);
        assert_eq!(v.get("network[id]"), Some("netw_zDW7KYAeqqfRfVag"));
    }

    #[test]
    fn resolution_is_idempotent() {
        let network = Network {
            permalink: "public".into(),
            ..Default::default()
        };
        let first = network.lookup_ref().unwrap();
        let second = first.clone();
        assert_eq!(first.query_values().encode(), second.query_values().encode());
    }
}
