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
use crate::field_name::FieldName;
use crate::network::{Network, NetworkRef};
use crate::organization::OrganizationRef;
use katapult::query::{QueryValues, Queryable, query_values};
use katapult::{ListOptions, Pagination, Response, Result};
use reqwest::Method;

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct IpAddress {
    pub id: String,
    pub address: String,
    pub reverse_dns: String,
    pub vip: bool,
    pub label: String,
    pub address_with_mask: String,
    pub network: Option<Network>,
    pub allocation_id: String,
    pub allocation_type: String,
}

impl IpAddress {
    /// The IP version of [address][IpAddress::address], judged structurally.
    pub fn version(&self) -> IpVersion {
        if self.address.matches(':').count() < 2 {
            IpVersion::V4
        } else {
            IpVersion::V6
        }
    }

    /// Reduces this object to a single-field reference.
    ///
    /// Priority: `id`, then `address`. `None` when neither is populated.
    pub fn lookup_ref(&self) -> Option<IpAddressRef> {
        if !self.id.is_empty() {
            return Some(IpAddressRef::Id(self.id.clone()));
        }
        if !self.address.is_empty() {
            return Some(IpAddressRef::Address(self.address.clone()));
        }
        None
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum IpVersion {
    #[default]
    #[serde(rename = "ipv4")]
    V4,
    #[serde(rename = "ipv6")]
    V6,
}

/// A single-field reference to an IP address.
///
/// Serializes as `{"id": …}` or `{"address": …}` in request bodies, and as
/// an `ip_address[id]`/`ip_address[address]` entry in query filters.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IpAddressRef {
    Id(String),
    Address(String),
}

impl IpAddressRef {
    /// Classifies an ambiguous caller string: values with the `ip_` ID
    /// prefix become [Id][Self::Id] references, everything else an
    /// [Address][Self::Address] reference.
    pub fn lookup(id_or_address: &str) -> (Self, FieldName) {
        if id_or_address.starts_with("ip_") {
            (Self::Id(id_or_address.to_string()), FieldName::Id)
        } else {
            (Self::Address(id_or_address.to_string()), FieldName::Address)
        }
    }
}

impl Queryable for IpAddressRef {
    fn query_values(&self) -> QueryValues {
        let mut v = QueryValues::new();
        match self {
            Self::Id(id) => v.set("ip_address[id]", id.as_str()),
            Self::Address(address) => v.set("ip_address[address]", address.as_str()),
        }
        v
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IpAddressCreateArguments {
    pub network: Option<NetworkRef>,
    pub version: Option<IpVersion>,
    pub vip: Option<bool>,
    pub label: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IpAddressUpdateArguments {
    pub vip: Option<bool>,
    pub label: Option<String>,
    pub reverse_dns: Option<String>,
}

#[derive(serde::Serialize)]
struct CreateRequest<'a> {
    organization: &'a OrganizationRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    network: Option<&'a NetworkRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<IpVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
}

#[derive(serde::Serialize)]
struct UpdateRequest<'a> {
    ip_address: &'a IpAddressRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    vip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reverse_dns: Option<&'a str>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ResponseBody {
    pagination: Option<Pagination>,
    ip_address: Option<IpAddress>,
    ip_addresses: Option<Vec<IpAddress>>,
}

/// Operations on an organization's IP addresses.
#[derive(Clone, Debug)]
pub struct IpAddressesClient {
    inner: katapult::Client,
}

impl IpAddressesClient {
    pub fn new(transport: katapult::Client) -> Self {
        Self { inner: transport }
    }

    pub async fn list(
        &self,
        org: &OrganizationRef,
        opts: Option<ListOptions>,
    ) -> Result<Response<Vec<IpAddress>>> {
        let query = query_values(&[org, &opts]);
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::GET,
            "core/v1/organizations/_/ip_addresses",
            &query,
            None::<&()>,
        )
        .await?;
        let pagination = response.body().pagination.clone();
        Ok(response
            .map(|b| b.ip_addresses.unwrap_or_default())
            .with_pagination(pagination))
    }

    /// Fetches by ID or address, classifying the string by its prefix.
    pub async fn get(&self, id_or_address: &str) -> Result<Response<IpAddress>> {
        let (r, _) = IpAddressRef::lookup(id_or_address);
        self.get_by_ref(&r).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Response<IpAddress>> {
        self.get_by_ref(&IpAddressRef::Id(id.to_string())).await
    }

    pub async fn get_by_address(&self, address: &str) -> Result<Response<IpAddress>> {
        self.get_by_ref(&IpAddressRef::Address(address.to_string()))
            .await
    }

    async fn get_by_ref(&self, r: &IpAddressRef) -> Result<Response<IpAddress>> {
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::GET,
            "core/v1/ip_addresses/_",
            &r.query_values(),
            None::<&()>,
        )
        .await?;
        unwrap_field(response.map(|b| b.ip_address), "ip_address")
    }

    pub async fn create(
        &self,
        org: &OrganizationRef,
        args: &IpAddressCreateArguments,
    ) -> Result<Response<IpAddress>> {
        let body = CreateRequest {
            organization: org,
            network: args.network.as_ref(),
            version: args.version,
            vip: args.vip,
            label: args.label.as_deref(),
        };
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::POST,
            "core/v1/organizations/_/ip_addresses",
            &QueryValues::new(),
            Some(&body),
        )
        .await?;
        unwrap_field(response.map(|b| b.ip_address), "ip_address")
    }

    pub async fn update(
        &self,
        ip: &IpAddressRef,
        args: &IpAddressUpdateArguments,
    ) -> Result<Response<IpAddress>> {
        let body = UpdateRequest {
            ip_address: ip,
            vip: args.vip,
            label: args.label.as_deref(),
            reverse_dns: args.reverse_dns.as_deref(),
        };
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::PATCH,
            "core/v1/ip_addresses/_",
            &QueryValues::new(),
            Some(&body),
        )
        .await?;
        unwrap_field(response.map(|b| b.ip_address), "ip_address")
    }

    pub async fn delete(&self, ip: &IpAddressRef) -> Result<Response<()>> {
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::DELETE,
            "core/v1/ip_addresses/_",
            &ip.query_values(),
            None::<&()>,
        )
        .await?;
        Ok(response.map(|_| ()))
    }

    /// Releases the address from whatever resource currently holds it.
    pub async fn unallocate(&self, ip: &IpAddressRef) -> Result<Response<()>> {
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::POST,
            "core/v1/ip_addresses/_/unallocate",
            &ip.query_values(),
            None::<&()>,
        )
        .await?;
        Ok(response.map(|_| ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("ip_Rhb6skfPqRocACtp", IpAddressRef::Id("ip_Rhb6skfPqRocACtp".into()), FieldName::Id)]
    #[test_case("10.0.0.1", IpAddressRef::Address("10.0.0.1".into()), FieldName::Address)]
    #[test_case("2001:db8::1", IpAddressRef::Address("2001:db8::1".into()), FieldName::Address)]
    fn lookup_classifies(input: &str, want: IpAddressRef, field: FieldName) {
        assert_eq!(IpAddressRef::lookup(input), (want, field));
    }

    #[test]
    fn lookup_ref_prefers_id() {
        let ip = IpAddress {
            id: "ip_Rhb6skfPqRocACtp".into(),
            address: "10.0.0.1".into(),
            ..Default::default()
        };
        assert_eq!(
            ip.lookup_ref(),
            Some(IpAddressRef::Id("ip_Rhb6skfPqRocACtp".into()))
        );
    }

    #[test]
    fn lookup_ref_falls_back_to_address() {
        let ip = IpAddress {
            address: "10.0.0.1".into(),
            ..Default::default()
        };
        let r = ip.lookup_ref().unwrap();
        assert_eq!(r, IpAddressRef::Address("10.0.0.1".into()));
        assert_eq!(r.query_values().get("ip_address[address]"), Some("10.0.0.1"));
    }

    #[test]
    fn lookup_ref_empty_object() {
        let ip = IpAddress::default();
        assert_eq!(ip.lookup_ref(), None);
        assert!(ip.lookup_ref().query_values().is_empty());
    }

    #[test]
    fn ref_query_values_single_entry() {
        let v = IpAddressRef::Id("ip_123".into()).query_values();
        assert_eq!(v.len(), 1);
        assert_eq!(v.get("ip_address[id]"), Some("ip_123"));
    }

    #[test]
    fn ref_serializes_as_single_field_object() {
        let r = IpAddressRef::Address("10.0.0.1".into());
        let got = serde_json::to_value(&r).unwrap();
        assert_eq!(got, serde_json::json!({"address": "10.0.0.1"}));
    }

    #[test_case("192.168.0.1", IpVersion::V4)]
    #[test_case("192.168.0.1:80", IpVersion::V4)]
    #[test_case("2001:db8::1", IpVersion::V6)]
    #[test_case("::ffff:192.168.0.1", IpVersion::V6)]
    fn version_judged_structurally(address: &str, want: IpVersion) {
        let ip = IpAddress {
            address: address.into(),
            ..Default::default()
        };
        assert_eq!(ip.version(), want);
    }
}
