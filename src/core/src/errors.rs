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

//! The Core API error taxonomy.
//!
//! The API reports failures as an `{code, description, detail}` envelope.
//! [ApiError::classify] upgrades envelopes with a known `code` into a typed
//! [ApiError], decoding the `detail` object into the payload registered for
//! that code. Envelopes with unknown codes are left as
//! [ResponseError][katapult::error::ResponseError] values so new server-side
//! codes degrade gracefully instead of failing.

use crate::trash_object::TrashObject;
use katapult::error::{Category, ResponseError};

/// A typed Core API error.
///
/// Carries the classified [ApiErrorKind] plus the human-readable description
/// from the wire envelope. Obtain one from a failed call through
/// [ErrorExt::api_error].
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    kind: ApiErrorKind,
    description: String,
}

impl ApiError {
    /// Classifies a wire envelope into a typed error.
    ///
    /// Returns `None` when the envelope's code is not part of the taxonomy.
    /// Never fails on bad `detail` payloads; those decode to `None` inside
    /// the kind's variant.
    pub fn classify(envelope: &ResponseError) -> Option<Self> {
        let kind = ApiErrorKind::classify(&envelope.code, &envelope.detail)?;
        Some(Self {
            kind,
            description: envelope.description.clone(),
        })
    }

    pub fn kind(&self) -> &ApiErrorKind {
        &self.kind
    }

    /// The wire code for this error, e.g. `"virtual_machine_not_found"`.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category(), self.code())?;
        if !self.description.is_empty() {
            write!(f, ": {}", self.description)?;
        }
        if let Some(detail) = self.kind.rendered_detail() {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// One variant per known Core API error code.
///
/// Codes whose `detail` object carries structured data hold the decoded
/// payload; the payload is `None` when the envelope had no detail or the
/// detail did not decode.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ApiErrorKind {
    CertificateNotFound,
    CountryNotFound,
    CountryStateNotFound,
    CurrencyNotFound,
    DnsRecordNotFound,
    DnsZoneNotFound,
    DnsZoneNotVerified,
    DataCenterNotFound,
    DeletionRestricted(Option<DeletionRestrictedDetail>),
    DiskBackupPolicyNotFound,
    DiskNotFound,
    DiskTemplateNotFound,
    DiskTemplateVersionNotFound,
    FlexibleResourcesUnavailableToOrganization,
    IpAddressNotFound,
    IpAlreadyAllocated,
    IdentityNotLinkedToWebSession,
    InterfaceNotFound,
    InvalidIp,
    InvalidSpecXml(Option<InvalidSpecXmlDetail>),
    LoadBalancerNotFound,
    LoadBalancerRuleNotFound,
    LocationRequired,
    NetworkNotFound,
    NetworkSpeedProfileNotFound,
    NoAllocation,
    NoAvailableAddresses,
    NoInterfaceAvailable,
    NoUserAssociatedWithIdentity,
    ObjectInTrash(Option<ObjectInTrashDetail>),
    OperatingSystemNotFound,
    OrganizationLimitReached,
    OrganizationNotActivated,
    OrganizationNotFound,
    OrganizationSuspended,
    PermissionDenied(Option<PermissionDeniedDetail>),
    RateLimitReached(Option<RateLimitReachedDetail>),
    ResourceCreationRestricted(Option<ResourceCreationRestrictedDetail>),
    ResourceDoesNotSupportUnallocation,
    SshKeyNotFound,
    SecurityGroupNotFound,
    SecurityGroupRuleNotFound,
    SpeedProfileAlreadyAssigned,
    TagNotFound,
    TaskNotFound,
    TaskQueueing(Option<TaskQueueingDetail>),
    TrashObjectNotFound,
    Validation(Option<ValidationDetail>),
    VirtualMachineBuildNotFound,
    VirtualMachineGroupNotFound,
    VirtualMachineMustBeStarted(Option<VirtualMachineMustBeStartedDetail>),
    VirtualMachineNetworkInterfaceNotFound,
    VirtualMachineNotFound,
    VirtualMachinePackageNotFound,
    ZoneNotFound,
}

fn decode<T: serde::de::DeserializeOwned>(detail: &serde_json::Value) -> Option<T> {
    serde_json::from_value(detail.clone()).ok()
}

impl ApiErrorKind {
    /// Maps a wire code plus its detail object to the matching variant.
    pub fn classify(code: &str, detail: &serde_json::Value) -> Option<Self> {
        let kind = match code {
            "certificate_not_found" => Self::CertificateNotFound,
            "country_not_found" => Self::CountryNotFound,
            "country_state_not_found" => Self::CountryStateNotFound,
            "currency_not_found" => Self::CurrencyNotFound,
            "dns_record_not_found" => Self::DnsRecordNotFound,
            "dns_zone_not_found" => Self::DnsZoneNotFound,
            "dns_zone_not_verified" => Self::DnsZoneNotVerified,
            "data_center_not_found" => Self::DataCenterNotFound,
            "deletion_restricted" => Self::DeletionRestricted(decode(detail)),
            "disk_backup_policy_not_found" => Self::DiskBackupPolicyNotFound,
            "disk_not_found" => Self::DiskNotFound,
            "disk_template_not_found" => Self::DiskTemplateNotFound,
            "disk_template_version_not_found" => Self::DiskTemplateVersionNotFound,
            "flexible_resources_unavailable_to_organization" => {
                Self::FlexibleResourcesUnavailableToOrganization
            }
            "ip_address_not_found" => Self::IpAddressNotFound,
            "ip_already_allocated" => Self::IpAlreadyAllocated,
            "identity_not_linked_to_web_session" => Self::IdentityNotLinkedToWebSession,
            "interface_not_found" => Self::InterfaceNotFound,
            "invalid_ip" => Self::InvalidIp,
            "invalid_spec_xml" => Self::InvalidSpecXml(decode(detail)),
            "load_balancer_not_found" => Self::LoadBalancerNotFound,
            "load_balancer_rule_not_found" => Self::LoadBalancerRuleNotFound,
            "location_required" => Self::LocationRequired,
            "network_not_found" => Self::NetworkNotFound,
            "network_speed_profile_not_found" => Self::NetworkSpeedProfileNotFound,
            "no_allocation" => Self::NoAllocation,
            "no_available_addresses" => Self::NoAvailableAddresses,
            "no_interface_available" => Self::NoInterfaceAvailable,
            "no_user_associated_with_identity" => Self::NoUserAssociatedWithIdentity,
            "object_in_trash" => Self::ObjectInTrash(decode(detail)),
            "operating_system_not_found" => Self::OperatingSystemNotFound,
            "organization_limit_reached" => Self::OrganizationLimitReached,
            "organization_not_activated" => Self::OrganizationNotActivated,
            "organization_not_found" => Self::OrganizationNotFound,
            "organization_suspended" => Self::OrganizationSuspended,
            "permission_denied" => Self::PermissionDenied(decode(detail)),
            "rate_limit_reached" => Self::RateLimitReached(decode(detail)),
            "resource_creation_restricted" => Self::ResourceCreationRestricted(decode(detail)),
            "resource_does_not_support_unallocation" => Self::ResourceDoesNotSupportUnallocation,
            "ssh_key_not_found" => Self::SshKeyNotFound,
            "security_group_not_found" => Self::SecurityGroupNotFound,
            "security_group_rule_not_found" => Self::SecurityGroupRuleNotFound,
            "speed_profile_already_assigned" => Self::SpeedProfileAlreadyAssigned,
            "tag_not_found" => Self::TagNotFound,
            "task_not_found" => Self::TaskNotFound,
            "task_queueing_error" => Self::TaskQueueing(decode(detail)),
            "trash_object_not_found" => Self::TrashObjectNotFound,
            "validation_error" => Self::Validation(decode(detail)),
            "build_not_found" => Self::VirtualMachineBuildNotFound,
            "virtual_machine_group_not_found" => Self::VirtualMachineGroupNotFound,
            "virtual_machine_must_be_started" => Self::VirtualMachineMustBeStarted(decode(detail)),
            "virtual_machine_network_interface_not_found" => {
                Self::VirtualMachineNetworkInterfaceNotFound
            }
            "virtual_machine_not_found" => Self::VirtualMachineNotFound,
            "package_not_found" => Self::VirtualMachinePackageNotFound,
            "zone_not_found" => Self::ZoneNotFound,
            _ => return None,
        };
        Some(kind)
    }

    /// The wire code for this variant.
    pub fn code(&self) -> &'static str {
        match self {
            Self::CertificateNotFound => "certificate_not_found",
            Self::CountryNotFound => "country_not_found",
            Self::CountryStateNotFound => "country_state_not_found",
            Self::CurrencyNotFound => "currency_not_found",
            Self::DnsRecordNotFound => "dns_record_not_found",
            Self::DnsZoneNotFound => "dns_zone_not_found",
            Self::DnsZoneNotVerified => "dns_zone_not_verified",
            Self::DataCenterNotFound => "data_center_not_found",
            Self::DeletionRestricted(_) => "deletion_restricted",
            Self::DiskBackupPolicyNotFound => "disk_backup_policy_not_found",
            Self::DiskNotFound => "disk_not_found",
            Self::DiskTemplateNotFound => "disk_template_not_found",
            Self::DiskTemplateVersionNotFound => "disk_template_version_not_found",
            Self::FlexibleResourcesUnavailableToOrganization => {
                "flexible_resources_unavailable_to_organization"
            }
            Self::IpAddressNotFound => "ip_address_not_found",
            Self::IpAlreadyAllocated => "ip_already_allocated",
            Self::IdentityNotLinkedToWebSession => "identity_not_linked_to_web_session",
            Self::InterfaceNotFound => "interface_not_found",
            Self::InvalidIp => "invalid_ip",
            Self::InvalidSpecXml(_) => "invalid_spec_xml",
            Self::LoadBalancerNotFound => "load_balancer_not_found",
            Self::LoadBalancerRuleNotFound => "load_balancer_rule_not_found",
            Self::LocationRequired => "location_required",
            Self::NetworkNotFound => "network_not_found",
            Self::NetworkSpeedProfileNotFound => "network_speed_profile_not_found",
            Self::NoAllocation => "no_allocation",
            Self::NoAvailableAddresses => "no_available_addresses",
            Self::NoInterfaceAvailable => "no_interface_available",
            Self::NoUserAssociatedWithIdentity => "no_user_associated_with_identity",
            Self::ObjectInTrash(_) => "object_in_trash",
            Self::OperatingSystemNotFound => "operating_system_not_found",
            Self::OrganizationLimitReached => "organization_limit_reached",
            Self::OrganizationNotActivated => "organization_not_activated",
            Self::OrganizationNotFound => "organization_not_found",
            Self::OrganizationSuspended => "organization_suspended",
            Self::PermissionDenied(_) => "permission_denied",
            Self::RateLimitReached(_) => "rate_limit_reached",
            Self::ResourceCreationRestricted(_) => "resource_creation_restricted",
            Self::ResourceDoesNotSupportUnallocation => "resource_does_not_support_unallocation",
            Self::SshKeyNotFound => "ssh_key_not_found",
            Self::SecurityGroupNotFound => "security_group_not_found",
            Self::SecurityGroupRuleNotFound => "security_group_rule_not_found",
            Self::SpeedProfileAlreadyAssigned => "speed_profile_already_assigned",
            Self::TagNotFound => "tag_not_found",
            Self::TaskNotFound => "task_not_found",
            Self::TaskQueueing(_) => "task_queueing_error",
            Self::TrashObjectNotFound => "trash_object_not_found",
            Self::Validation(_) => "validation_error",
            Self::VirtualMachineBuildNotFound => "build_not_found",
            Self::VirtualMachineGroupNotFound => "virtual_machine_group_not_found",
            Self::VirtualMachineMustBeStarted(_) => "virtual_machine_must_be_started",
            Self::VirtualMachineNetworkInterfaceNotFound => {
                "virtual_machine_network_interface_not_found"
            }
            Self::VirtualMachineNotFound => "virtual_machine_not_found",
            Self::VirtualMachinePackageNotFound => "package_not_found",
            Self::ZoneNotFound => "zone_not_found",
        }
    }

    /// The coarse category this code belongs to.
    pub fn category(&self) -> Category {
        match self {
            Self::IdentityNotLinkedToWebSession | Self::InvalidSpecXml(_) => Category::BadRequest,
            Self::FlexibleResourcesUnavailableToOrganization
            | Self::OrganizationNotActivated
            | Self::OrganizationSuspended
            | Self::PermissionDenied(_)
            | Self::ResourceCreationRestricted(_) => Category::Forbidden,
            Self::ObjectInTrash(_)
            | Self::TaskQueueing(_)
            | Self::VirtualMachineMustBeStarted(_) => Category::NotAcceptable,
            Self::DeletionRestricted(_) | Self::ResourceDoesNotSupportUnallocation => {
                Category::Conflict
            }
            Self::DnsZoneNotVerified
            | Self::IpAlreadyAllocated
            | Self::InvalidIp
            | Self::LocationRequired
            | Self::NoAllocation
            | Self::NoInterfaceAvailable
            | Self::OrganizationLimitReached
            | Self::SpeedProfileAlreadyAssigned
            | Self::Validation(_) => Category::UnprocessableEntity,
            Self::RateLimitReached(_) => Category::TooManyRequests,
            Self::NoAvailableAddresses => Category::ServiceUnavailable,
            _ => Category::NotFound,
        }
    }

    /// Renders the salient detail field for the message, when one is present
    /// and non-empty.
    fn rendered_detail(&self) -> Option<String> {
        match self {
            Self::InvalidSpecXml(Some(d)) if !d.errors.is_empty() => Some(d.errors.clone()),
            Self::ObjectInTrash(Some(d)) => d
                .trash_object
                .as_ref()
                .map(|t| format!("trash_object_id={}", t.id)),
            Self::PermissionDenied(Some(d)) => d
                .details
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            Self::RateLimitReached(Some(d)) if d.total_permitted != 0 => {
                Some(format!("max requests per minute: {}", d.total_permitted))
            }
            Self::ResourceCreationRestricted(Some(d)) if !d.errors.is_empty() => {
                Some(d.errors.join(", "))
            }
            Self::TaskQueueing(Some(d)) if !d.details.is_empty() => Some(d.details.clone()),
            Self::Validation(Some(d)) if !d.errors.is_empty() => Some(d.errors.join(", ")),
            Self::VirtualMachineMustBeStarted(Some(d)) if !d.current_state.is_empty() => {
                Some(format!("current_state={}", d.current_state))
            }
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct DeletionRestrictedDetail {
    pub errors: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct InvalidSpecXmlDetail {
    pub errors: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ObjectInTrashDetail {
    pub trash_object: Option<TrashObject>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PermissionDeniedDetail {
    pub details: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RateLimitReachedDetail {
    pub total_permitted: i64,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ResourceCreationRestrictedDetail {
    pub errors: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct TaskQueueingDetail {
    pub details: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ValidationDetail {
    pub errors: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct VirtualMachineMustBeStartedDetail {
    pub current_state: String,
}

/// Upgrades a transport error carrying a known-code envelope into a typed
/// [ApiError]. Errors that are not service errors, and envelopes with codes
/// outside the taxonomy, pass through unchanged.
pub(crate) fn handle_response_error(err: katapult::Error) -> katapult::Error {
    if let Some(envelope) = err.as_inner::<ResponseError>() {
        match ApiError::classify(envelope) {
            Some(api) => return katapult::Error::service(api),
            None => tracing::debug!("unclassified error code: {}", envelope.code),
        }
    }
    err
}

/// Core API accessors for [katapult::Error].
pub trait ErrorExt {
    /// The typed API error, when this failure was a classified service error.
    fn api_error(&self) -> Option<&ApiError>;

    /// The raw wire envelope, when this failure was a service error whose
    /// code is outside the taxonomy.
    fn response_error(&self) -> Option<&ResponseError>;

    /// The coarse category of a service error, whether classified or not.
    fn category(&self) -> Option<Category>;
}

impl ErrorExt for katapult::Error {
    fn api_error(&self) -> Option<&ApiError> {
        self.as_inner::<ApiError>()
    }

    fn response_error(&self) -> Option<&ResponseError> {
        self.as_inner::<ResponseError>()
    }

    fn category(&self) -> Option<Category> {
        self.api_error()
            .map(ApiError::category)
            .or_else(|| self.response_error().map(|e| e.category()))
    }
}
