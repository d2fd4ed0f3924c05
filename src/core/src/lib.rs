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

//! Clients for the Katapult Core API (`/core/v1/`).
//!
//! Each resource gets a model struct, a single-field reference enum used to
//! identify the resource in requests, and a client with the operations for
//! that resource collection. [Client] bundles the per-resource clients over a
//! shared [katapult::Client] transport.
//!
//! API failures surface as [katapult::Error] values wrapping an [ApiError]
//! when the error code is part of the known taxonomy, or the raw
//! [ResponseError][katapult::error::ResponseError] envelope when it is not.
//! The [ErrorExt] trait provides the accessors for both.
//!
//! ```no_run
//! use katapult_core::{ErrorExt, OrganizationRef};
//!
//! # async fn sample() -> katapult::Result<()> {
//! let transport = katapult::Client::builder()
//!     .api_token("kat_token")
//!     .build()
//!     .expect("valid configuration");
//! let client = katapult_core::Client::new(transport);
//!
//! let org = OrganizationRef::SubDomain("acme".into());
//! match client.virtual_machines().list(&org, None).await {
//!     Ok(response) => println!("{} virtual machines", response.body().len()),
//!     Err(e) if e.category().is_some() => println!("API rejected the call: {e}"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(()) }
//! ```

/// The Katapult Core API error taxonomy.
pub mod errors;

mod client;
mod data_center;
mod disk_template;
mod dns_zone;
mod field_name;
mod ip_address;
mod network;
mod organization;
mod task;
mod trash_object;
mod virtual_machine;
mod virtual_machine_build;
mod zone;

pub use client::Client;
pub use data_center::{DataCenter, DataCenterRef, DataCentersClient};
pub use disk_template::{DiskTemplate, DiskTemplateOption, DiskTemplateRef, DiskTemplateVersion};
pub use dns_zone::{
    DnsZone, DnsZoneCreateArguments, DnsZoneRef, DnsZoneVerificationDetails, DnsZonesClient,
};
pub use errors::{ApiError, ApiErrorKind, ErrorExt};
pub use field_name::FieldName;
pub use ip_address::{
    IpAddress, IpAddressCreateArguments, IpAddressRef, IpAddressUpdateArguments,
    IpAddressesClient, IpVersion,
};
pub use network::{AvailableNetworks, Network, NetworkRef, NetworksClient, VirtualNetwork};
pub use organization::{Organization, OrganizationRef, OrganizationsClient};
pub use task::{Task, TaskStatus, TasksClient};
pub use trash_object::{TrashObject, TrashObjectRef, TrashObjectsClient};
pub use virtual_machine::{
    VirtualMachine, VirtualMachineRef, VirtualMachineState, VirtualMachinesClient,
};
pub use virtual_machine_build::{
    VirtualMachineBuild, VirtualMachineBuildArguments, VirtualMachineBuildRef,
    VirtualMachineBuildState, VirtualMachineBuildsClient,
};
pub use zone::{Zone, ZoneRef};
