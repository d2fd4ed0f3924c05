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
use katapult::query::{QueryValues, Queryable};
use katapult::{Response, Result};
use reqwest::Method;

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub sub_domain: String,
    pub infrastructure_domain: String,
    pub personal: bool,
    pub created_at: Option<i64>,
    pub suspended: bool,
    pub managed: bool,
    pub billing_name: String,
    pub address1: String,
    pub address2: String,
    pub address3: String,
    pub address4: String,
    pub postcode: String,
    pub vat_number: String,
}

impl Organization {
    /// Reduces this object to a single-field reference. Priority: `id`,
    /// then `sub_domain`.
    pub fn lookup_ref(&self) -> Option<OrganizationRef> {
        if !self.id.is_empty() {
            return Some(OrganizationRef::Id(self.id.clone()));
        }
        if !self.sub_domain.is_empty() {
            return Some(OrganizationRef::SubDomain(self.sub_domain.clone()));
        }
        None
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationRef {
    Id(String),
    SubDomain(String),
}

impl OrganizationRef {
    /// Classifies an ambiguous caller string by the `org_` ID prefix.
    pub fn lookup(id_or_sub_domain: &str) -> (Self, FieldName) {
        if id_or_sub_domain.starts_with("org_") {
            (Self::Id(id_or_sub_domain.to_string()), FieldName::Id)
        } else {
            (
                Self::SubDomain(id_or_sub_domain.to_string()),
                FieldName::SubDomain,
            )
        }
    }
}

impl Queryable for OrganizationRef {
    fn query_values(&self) -> QueryValues {
        let mut v = QueryValues::new();
        match self {
            Self::Id(id) => v.set("organization[id]", id.as_str()),
            Self::SubDomain(sub_domain) => v.set("organization[sub_domain]", sub_domain.as_str()),
        }
        v
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ResponseBody {
    organization: Option<Organization>,
    organizations: Option<Vec<Organization>>,
}

#[derive(Clone, Debug)]
pub struct OrganizationsClient {
    inner: katapult::Client,
}

impl OrganizationsClient {
    pub fn new(transport: katapult::Client) -> Self {
        Self { inner: transport }
    }

    /// Lists the organizations the authenticated identity belongs to.
    pub async fn list(&self) -> Result<Response<Vec<Organization>>> {
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::GET,
            "core/v1/organizations",
            &QueryValues::new(),
            None::<&()>,
        )
        .await?;
        Ok(response.map(|b| b.organizations.unwrap_or_default()))
    }

    /// Fetches by ID or sub-domain, classifying the string by its prefix.
    pub async fn get(&self, id_or_sub_domain: &str) -> Result<Response<Organization>> {
        match OrganizationRef::lookup(id_or_sub_domain) {
            (_, FieldName::Id) => self.get_by_id(id_or_sub_domain).await,
            _ => self.get_by_sub_domain(id_or_sub_domain).await,
        }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Response<Organization>> {
        let path = format!("core/v1/organizations/{id}");
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::GET,
            &path,
            &QueryValues::new(),
            None::<&()>,
        )
        .await?;
        unwrap_field(response.map(|b| b.organization), "organization")
    }

    pub async fn get_by_sub_domain(&self, sub_domain: &str) -> Result<Response<Organization>> {
        let r = OrganizationRef::SubDomain(sub_domain.to_string());
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::GET,
            "core/v1/organizations/_",
            &r.query_values(),
            None::<&()>,
        )
        .await?;
        unwrap_field(response.map(|b| b.organization), "organization")
    }
}
