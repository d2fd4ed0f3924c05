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
use crate::ip_address::IpAddress;
use crate::organization::{Organization, OrganizationRef};
use crate::task::Task;
use crate::trash_object::TrashObject;
use crate::zone::Zone;
use katapult::query::{QueryValues, Queryable, query_values};
use katapult::{ListOptions, Pagination, Response, Result};
use reqwest::Method;

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct VirtualMachine {
    pub id: String,
    pub name: String,
    pub hostname: String,
    pub fqdn: String,
    pub description: String,
    pub created_at: Option<i64>,
    pub initial_root_password: String,
    pub state: VirtualMachineState,
    pub zone: Option<Zone>,
    pub organization: Option<Organization>,
    pub tag_names: Vec<String>,
    pub ip_addresses: Vec<IpAddress>,
}

impl VirtualMachine {
    /// Reduces this object to a single-field reference. Priority: `id`,
    /// then `fqdn`.
    pub fn lookup_ref(&self) -> Option<VirtualMachineRef> {
        if !self.id.is_empty() {
            return Some(VirtualMachineRef::Id(self.id.clone()));
        }
        if !self.fqdn.is_empty() {
            return Some(VirtualMachineRef::Fqdn(self.fqdn.clone()));
        }
        None
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VirtualMachineState {
    Stopped,
    Failed,
    Started,
    Starting,
    Resetting,
    Migrating,
    Stopping,
    ShuttingDown,
    Orphaned,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VirtualMachineRef {
    Id(String),
    Fqdn(String),
}

impl VirtualMachineRef {
    /// Classifies an ambiguous caller string by the `vm_` ID prefix.
    pub fn lookup(id_or_fqdn: &str) -> (Self, FieldName) {
        if id_or_fqdn.starts_with("vm_") {
            (Self::Id(id_or_fqdn.to_string()), FieldName::Id)
        } else {
            (Self::Fqdn(id_or_fqdn.to_string()), FieldName::Fqdn)
        }
    }
}

impl Queryable for VirtualMachineRef {
    fn query_values(&self) -> QueryValues {
        let mut v = QueryValues::new();
        match self {
            Self::Id(id) => v.set("virtual_machine[id]", id.as_str()),
            Self::Fqdn(fqdn) => v.set("virtual_machine[fqdn]", fqdn.as_str()),
        }
        v
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ResponseBody {
    pagination: Option<Pagination>,
    task: Option<Task>,
    trash_object: Option<TrashObject>,
    virtual_machine: Option<VirtualMachine>,
    virtual_machines: Option<Vec<VirtualMachine>>,
}

/// Operations on an organization's virtual machines.
#[derive(Clone, Debug)]
pub struct VirtualMachinesClient {
    inner: katapult::Client,
}

impl VirtualMachinesClient {
    pub fn new(transport: katapult::Client) -> Self {
        Self { inner: transport }
    }

    pub async fn list(
        &self,
        org: &OrganizationRef,
        opts: Option<ListOptions>,
    ) -> Result<Response<Vec<VirtualMachine>>> {
        let query = query_values(&[org, &opts]);
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::GET,
            "core/v1/organizations/_/virtual_machines",
            &query,
            None::<&()>,
        )
        .await?;
        let pagination = response.body().pagination.clone();
        Ok(response
            .map(|b| b.virtual_machines.unwrap_or_default())
            .with_pagination(pagination))
    }

    /// Fetches by ID or FQDN, classifying the string by its prefix.
    pub async fn get(&self, id_or_fqdn: &str) -> Result<Response<VirtualMachine>> {
        let (r, _) = VirtualMachineRef::lookup(id_or_fqdn);
        self.get_by_ref(&r).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Response<VirtualMachine>> {
        self.get_by_ref(&VirtualMachineRef::Id(id.to_string())).await
    }

    pub async fn get_by_fqdn(&self, fqdn: &str) -> Result<Response<VirtualMachine>> {
        self.get_by_ref(&VirtualMachineRef::Fqdn(fqdn.to_string()))
            .await
    }

    async fn get_by_ref(&self, r: &VirtualMachineRef) -> Result<Response<VirtualMachine>> {
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::GET,
            "core/v1/virtual_machines/_",
            &r.query_values(),
            None::<&()>,
        )
        .await?;
        unwrap_field(response.map(|b| b.virtual_machine), "virtual_machine")
    }

    /// Moves the virtual machine to the trash. The returned trash object can
    /// be restored or purged through
    /// [TrashObjectsClient][crate::TrashObjectsClient].
    pub async fn delete(&self, vm: &VirtualMachineRef) -> Result<Response<TrashObject>> {
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::DELETE,
            "core/v1/virtual_machines/_",
            &vm.query_values(),
            None::<&()>,
        )
        .await?;
        unwrap_field(response.map(|b| b.trash_object), "trash_object")
    }

    pub async fn start(&self, vm: &VirtualMachineRef) -> Result<Response<Task>> {
        self.state_change(vm, "core/v1/virtual_machines/_/start").await
    }

    pub async fn stop(&self, vm: &VirtualMachineRef) -> Result<Response<Task>> {
        self.state_change(vm, "core/v1/virtual_machines/_/stop").await
    }

    pub async fn shutdown(&self, vm: &VirtualMachineRef) -> Result<Response<Task>> {
        self.state_change(vm, "core/v1/virtual_machines/_/shutdown")
            .await
    }

    pub async fn reset(&self, vm: &VirtualMachineRef) -> Result<Response<Task>> {
        self.state_change(vm, "core/v1/virtual_machines/_/reset").await
    }

    async fn state_change(&self, vm: &VirtualMachineRef, path: &str) -> Result<Response<Task>> {
        let response: Response<ResponseBody> = execute(
            &self.inner,
            Method::POST,
            path,
            &vm.query_values(),
            None::<&()>,
        )
        .await?;
        unwrap_field(response.map(|b| b.task), "task")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("vm_t8yomYsG4bccKw5D", FieldName::Id)]
    #[test_case("web-01.acme.katapult.cloud", FieldName::Fqdn)]
    fn lookup_classifies(input: &str, want: FieldName) {
        let (_, field) = VirtualMachineRef::lookup(input);
        assert_eq!(field, want);
    }

    #[test]
    fn lookup_ref_priority() {
        let vm = VirtualMachine {
            id: "vm_t8yomYsG4bccKw5D".into(),
            fqdn: "web-01.acme.katapult.cloud".into(),
            ..Default::default()
        };
        let r = vm.lookup_ref().unwrap();
        assert_eq!(r, VirtualMachineRef::Id("vm_t8yomYsG4bccKw5D".into()));
        let v = r.query_values();
        assert_eq!(v.len(), 1);
        assert_eq!(v.get("virtual_machine[id]"), Some("vm_t8yomYsG4bccKw5D"));
    }

    #[test]
    fn state_decodes_unknown_values() {
        let got: VirtualMachineState = serde_json::from_str("\"hibernating\"").unwrap();
        assert_eq!(got, VirtualMachineState::Unknown);
        let got: VirtualMachineState = serde_json::from_str("\"shutting_down\"").unwrap();
        assert_eq!(got, VirtualMachineState::ShuttingDown);
    }
}
