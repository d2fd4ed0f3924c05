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

use crate::errors::handle_response_error;
use katapult::query::QueryValues;
use katapult::{Response, Result};

/// A client for the Katapult Core API.
///
/// Thin aggregation of the per-resource clients over a shared transport;
/// cloning is cheap.
#[derive(Clone, Debug)]
pub struct Client {
    transport: katapult::Client,
}

impl Client {
    pub fn new(transport: katapult::Client) -> Self {
        Self { transport }
    }

    pub fn data_centers(&self) -> crate::DataCentersClient {
        crate::DataCentersClient::new(self.transport.clone())
    }

    pub fn dns_zones(&self) -> crate::DnsZonesClient {
        crate::DnsZonesClient::new(self.transport.clone())
    }

    pub fn ip_addresses(&self) -> crate::IpAddressesClient {
        crate::IpAddressesClient::new(self.transport.clone())
    }

    pub fn networks(&self) -> crate::NetworksClient {
        crate::NetworksClient::new(self.transport.clone())
    }

    pub fn organizations(&self) -> crate::OrganizationsClient {
        crate::OrganizationsClient::new(self.transport.clone())
    }

    pub fn tasks(&self) -> crate::TasksClient {
        crate::TasksClient::new(self.transport.clone())
    }

    pub fn trash_objects(&self) -> crate::TrashObjectsClient {
        crate::TrashObjectsClient::new(self.transport.clone())
    }

    pub fn virtual_machines(&self) -> crate::VirtualMachinesClient {
        crate::VirtualMachinesClient::new(self.transport.clone())
    }

    pub fn virtual_machine_builds(&self) -> crate::VirtualMachineBuildsClient {
        crate::VirtualMachineBuildsClient::new(self.transport.clone())
    }
}

/// Issues a Core API request and classifies any error envelope into the
/// taxonomy.
pub(crate) async fn execute<I, O>(
    transport: &katapult::Client,
    method: reqwest::Method,
    path: &str,
    query: &QueryValues,
    body: Option<&I>,
) -> Result<Response<O>>
where
    I: serde::Serialize + ?Sized,
    O: serde::de::DeserializeOwned + Default,
{
    transport
        .execute(method, path, query, body)
        .await
        .map_err(handle_response_error)
}

/// Extracts a required body key, keeping the response metadata.
pub(crate) fn unwrap_field<T>(
    response: Response<Option<T>>,
    key: &str,
) -> Result<Response<T>> {
    let status = response.status();
    let pagination = response.pagination().cloned();
    match response.into_body() {
        Some(body) => Ok(Response::new(status, body).with_pagination(pagination)),
        None => Err(katapult::Error::deser(format!(
            "response body missing the {key} key"
        ))),
    }
}
