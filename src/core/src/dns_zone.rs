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
use crate::organization::OrganizationRef;
use katapult::query::{QueryValues, Queryable, query_values};
use katapult::{ListOptions, Pagination, Response, Result};
use reqwest::Method;

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct DnsZone {
    pub id: String,
    pub name: String,
    pub ttl: u32,
    pub verified: bool,
    pub infrastructure_zone: bool,
}

impl DnsZone {
    /// Reduces this object to a single-field reference. Priority: `id`,
    /// then `name`.
    pub fn lookup_ref(&self) -> Option<DnsZoneRef> {
        if !self.id.is_empty() {
            return Some(DnsZoneRef::Id(self.id.clone()));
        }
        if !self.name.is_empty() {
            return Some(DnsZoneRef::Name(self.name.clone()));
        }
        None
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DnsZoneRef {
    Id(String),
    Name(String),
}

impl DnsZoneRef {
    /// Classifies an ambiguous caller string by the `dnszone_` ID prefix.
    pub fn lookup(id_or_name: &str) -> (Self, FieldName) {
        if id_or_name.starts_with("dnszone_") {
            (Self::Id(id_or_name.to_string()), FieldName::Id)
        } else {
            (Self::Name(id_or_name.to_string()), FieldName::Name)
        }
    }
}

impl Queryable for DnsZoneRef {
    fn query_values(&self) -> QueryValues {
        let mut v = QueryValues::new();
        match self {
            Self::Id(id) => v.set("dns_zone[id]", id.as_str()),
            Self::Name(name) => v.set("dns_zone[name]", name.as_str()),
        }
        v
    }
}

/// The records required to verify ownership of a zone.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct DnsZoneVerificationDetails {
    pub nameservers: Vec<String>,
    pub txt_record: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DnsZoneCreateArguments {
    pub name: String,
    pub ttl: Option<u32>,
    pub skip_verification: bool,
}

#[derive(serde::Serialize)]
struct CreateRequest<'a> {
    organization: &'a OrganizationRef,
    details: CreateDetails<'a>,
    skip_verification: bool,
}

#[derive(serde::Serialize)]
struct CreateDetails<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<u32>,
}

#[derive(serde::Serialize)]
struct VerifyRequest<'a> {
    dns_zone: &'a DnsZoneRef,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ResponseBody {
    pagination: Option<Pagination>,
    dns_zone: Option<DnsZone>,
    dns_zones: Option<Vec<DnsZone>>,
    details: Option<DnsZoneVerificationDetails>,
}

#[derive(Clone, Debug)]
pub struct DnsZonesClient {
    inner: katapult::Client,
}

impl DnsZonesClient {
    pub fn new(transport: katapult::Client) -> Self {
        Self { inner: transport }
    }

    pub async fn list(
        &self,
        org: &OrganizationRef,
        opts: Option<ListOptions>,
    ) -> Result<Response<Vec<DnsZone>>> {
        let query = query_values(&[org, &opts]);
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::GET,
            "core/v1/organizations/_/dns/zones",
            &query,
            None::<&()>,
        )
        .await?;
        let pagination = response.body().pagination.clone();
        Ok(response
            .map(|b| b.dns_zones.unwrap_or_default())
            .with_pagination(pagination))
    }

    /// Fetches by ID or name, classifying the string by its prefix.
    pub async fn get(&self, id_or_name: &str) -> Result<Response<DnsZone>> {
        match DnsZoneRef::lookup(id_or_name) {
            (_, FieldName::Id) => self.get_by_id(id_or_name).await,
            _ => self.get_by_name(id_or_name).await,
        }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Response<DnsZone>> {
        let path = format!("core/v1/dns/zones/{id}");
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::GET,
            &path,
            &QueryValues::new(),
            None::<&()>,
        )
        .await?;
        unwrap_field(response.map(|b| b.dns_zone), "dns_zone")
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Response<DnsZone>> {
        let r = DnsZoneRef::Name(name.to_string());
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::GET,
            "core/v1/dns/zones/_",
            &r.query_values(),
            None::<&()>,
        )
        .await?;
        unwrap_field(response.map(|b| b.dns_zone), "dns_zone")
    }

    pub async fn create(
        &self,
        org: &OrganizationRef,
        args: &DnsZoneCreateArguments,
    ) -> Result<Response<DnsZone>> {
        let body = CreateRequest {
            organization: org,
            details: CreateDetails {
                name: &args.name,
                ttl: args.ttl,
            },
            skip_verification: args.skip_verification,
        };
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::POST,
            "core/v1/organizations/_/dns/zones",
            &QueryValues::new(),
            Some(&body),
        )
        .await?;
        unwrap_field(response.map(|b| b.dns_zone), "dns_zone")
    }

    pub async fn delete(&self, zone: &DnsZoneRef) -> Result<Response<()>> {
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::DELETE,
            "core/v1/dns/zones/_",
            &zone.query_values(),
            None::<&()>,
        )
        .await?;
        Ok(response.map(|_| ()))
    }

    /// The nameserver and TXT record values needed to verify the zone.
    pub async fn verification_details(
        &self,
        zone: &DnsZoneRef,
    ) -> Result<Response<DnsZoneVerificationDetails>> {
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::GET,
            "core/v1/dns/zones/_/verification_details",
            &zone.query_values(),
            None::<&()>,
        )
        .await?;
        unwrap_field(response.map(|b| b.details), "details")
    }

    /// Asks the API to check the zone's verification records now.
    pub async fn verify(&self, zone: &DnsZoneRef) -> Result<Response<DnsZone>> {
        let body = VerifyRequest { dns_zone: zone };
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::POST,
            "core/v1/dns/zones/_/verify",
            &QueryValues::new(),
            Some(&body),
        )
        .await?;
        unwrap_field(response.map(|b| b.dns_zone), "dns_zone")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("dnszone_k75eFc4UmOZNYSu6", FieldName::Id)]
    #[test_case("example.com", FieldName::Name)]
    fn lookup_classifies(input: &str, want: FieldName) {
        let (_, field) = DnsZoneRef::lookup(input);
        assert_eq!(field, want);
    }

    #[test]
    fn lookup_ref_priority() {
        let zone = DnsZone {
            id: "dnszone_k75eFc4UmOZNYSu6".into(),
            name: "example.com".into(),
            ..Default::default()
        };
        assert_eq!(
            zone.lookup_ref(),
            Some(DnsZoneRef::Id("dnszone_k75eFc4UmOZNYSu6".into()))
        );
    }

    #[test]
    fn name_query_key() {
        let v = DnsZoneRef::Name("example.com".into()).query_values();
        assert_eq!(v.get("dns_zone[name]"), Some("example.com"));
    }
}
