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
use crate::data_center::DataCenterRef;
use crate::disk_template::{DiskTemplateOption, DiskTemplateRef};
use crate::network::NetworkRef;
use crate::organization::OrganizationRef;
use crate::virtual_machine::VirtualMachine;
use crate::zone::ZoneRef;
use katapult::query::QueryValues;
use katapult::{Response, Result};
use reqwest::Method;

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct VirtualMachineBuild {
    pub id: String,
    pub spec_xml: String,
    pub state: VirtualMachineBuildState,
    pub virtual_machine: Option<VirtualMachine>,
    pub created_at: Option<i64>,
}

impl VirtualMachineBuild {
    pub fn lookup_ref(&self) -> Option<VirtualMachineBuildRef> {
        if self.id.is_empty() {
            return None;
        }
        Some(VirtualMachineBuildRef::Id(self.id.clone()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VirtualMachineBuildState {
    Draft,
    Failed,
    #[default]
    Pending,
    Complete,
    Building,
    #[serde(other)]
    Unknown,
}

/// A reference to a build. Builds are only ever addressed by ID.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VirtualMachineBuildRef {
    Id(String),
}

/// Selections for [VirtualMachineBuildsClient::create]. Placement may be
/// given as either a zone or a data center; both are optional here and the
/// API validates the combination.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VirtualMachineBuildArguments {
    pub zone: Option<ZoneRef>,
    pub data_center: Option<DataCenterRef>,
    pub disk_template: Option<DiskTemplateRef>,
    pub disk_template_options: Vec<DiskTemplateOption>,
    pub network: Option<NetworkRef>,
    pub hostname: Option<String>,
}

#[derive(Debug, serde::Serialize)]
struct CreateRequest<'a> {
    organization: &'a OrganizationRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    hostname: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    zone: Option<&'a ZoneRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_center: Option<&'a DataCenterRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    disk_template: Option<&'a DiskTemplateRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    disk_template_options: &'a Vec<DiskTemplateOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    network: Option<&'a NetworkRef>,
}

// Older API versions returned the build under a `build` key rather than
// `virtual_machine_build`. Both are accepted, preferring the latter.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ResponseBody {
    build: Option<VirtualMachineBuild>,
    virtual_machine_build: Option<VirtualMachineBuild>,
}

impl ResponseBody {
    fn into_build(self) -> Option<VirtualMachineBuild> {
        self.virtual_machine_build.or(self.build)
    }
}

/// Operations on virtual machine build requests.
#[derive(Clone, Debug)]
pub struct VirtualMachineBuildsClient {
    inner: katapult::Client,
}

impl VirtualMachineBuildsClient {
    pub fn new(transport: katapult::Client) -> Self {
        Self { inner: transport }
    }

    pub async fn get(&self, r: &VirtualMachineBuildRef) -> Result<Response<VirtualMachineBuild>> {
        let VirtualMachineBuildRef::Id(id) = r;
        self.get_by_id(id).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Response<VirtualMachineBuild>> {
        let path = format!("core/v1/virtual_machines/builds/{id}");
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::GET,
            &path,
            &QueryValues::new(),
            None::<&()>,
        )
        .await?;
        unwrap_field(response.map(ResponseBody::into_build), "virtual_machine_build")
    }

    /// Queues a build of a new virtual machine in the organization. The
    /// returned build's [Task][crate::Task] can be polled through
    /// [TasksClient][crate::TasksClient].
    pub async fn create(
        &self,
        org: &OrganizationRef,
        args: &VirtualMachineBuildArguments,
    ) -> Result<Response<VirtualMachineBuild>> {
        let body = CreateRequest {
            organization: org,
            hostname: args.hostname.as_deref(),
            zone: args.zone.as_ref(),
            data_center: args.data_center.as_ref(),
            disk_template: args.disk_template.as_ref(),
            disk_template_options: &args.disk_template_options,
            network: args.network.as_ref(),
        };
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::POST,
            "core/v1/organizations/_/virtual_machines/build",
            &QueryValues::new(),
            Some(&body),
        )
        .await?;
        unwrap_field(response.map(ResponseBody::into_build), "virtual_machine_build")
    }
}
