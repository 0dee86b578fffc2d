use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

// Legacy API (/api) objects.  VCD returns a lot more than this for every object; we only
// model the fields the cleanup workflow reads, and serde drops everything else.

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgList {
    #[serde(default)]
    pub org: Vec<Reference>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Org {
    pub name: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub link: Vec<Link>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceEntities {
    #[serde(default)]
    pub resource_entity: Vec<Reference>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vdc {
    pub name: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_entities: Option<ResourceEntities>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VApp {
    pub name: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub status: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployed: Option<bool>,
}

impl VApp {
    pub fn status(&self) -> VAppStatus {
        VAppStatus::from_code(self.status)
    }
}

// Maps the integer vApp status codes from the VCD API onto names; the names are the ones
// VCD itself uses in the UI and in the XML schema documentation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VAppStatus {
    FailedCreation,
    Unresolved,
    Resolved,
    Deployed,
    Suspended,
    PoweredOn,
    WaitingForInput,
    Unknown,
    Unrecognized,
    PoweredOff,
    InconsistentState,
    Mixed,
    DescriptorPending,
    CopyingContents,
    DiskContentsPending,
    Quarantined,
    QuarantineExpired,
    Rejected,
    TransferTimeout,
    VAppUndeployed,
    VAppPartiallyDeployed,
    PartiallyPoweredOff,
    PartiallySuspended,
    Other(i32),
}

impl VAppStatus {
    pub fn from_code(code: i32) -> VAppStatus {
        match code {
            -1 => VAppStatus::FailedCreation,
            0 => VAppStatus::Unresolved,
            1 => VAppStatus::Resolved,
            2 => VAppStatus::Deployed,
            3 => VAppStatus::Suspended,
            4 => VAppStatus::PoweredOn,
            5 => VAppStatus::WaitingForInput,
            6 => VAppStatus::Unknown,
            7 => VAppStatus::Unrecognized,
            8 => VAppStatus::PoweredOff,
            9 => VAppStatus::InconsistentState,
            10 => VAppStatus::Mixed,
            11 => VAppStatus::DescriptorPending,
            12 => VAppStatus::CopyingContents,
            13 => VAppStatus::DiskContentsPending,
            14 => VAppStatus::Quarantined,
            15 => VAppStatus::QuarantineExpired,
            16 => VAppStatus::Rejected,
            17 => VAppStatus::TransferTimeout,
            18 => VAppStatus::VAppUndeployed,
            19 => VAppStatus::VAppPartiallyDeployed,
            20 => VAppStatus::PartiallyPoweredOff,
            21 => VAppStatus::PartiallySuspended,
            other => VAppStatus::Other(other),
        }
    }
}

impl fmt::Display for VAppStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VAppStatus::FailedCreation => "FAILED_CREATION",
            VAppStatus::Unresolved => "UNRESOLVED",
            VAppStatus::Resolved => "RESOLVED",
            VAppStatus::Deployed => "DEPLOYED",
            VAppStatus::Suspended => "SUSPENDED",
            VAppStatus::PoweredOn => "POWERED_ON",
            VAppStatus::WaitingForInput => "WAITING_FOR_INPUT",
            VAppStatus::Unknown => "UNKNOWN",
            VAppStatus::Unrecognized => "UNRECOGNIZED",
            VAppStatus::PoweredOff => "POWERED_OFF",
            VAppStatus::InconsistentState => "INCONSISTENT_STATE",
            VAppStatus::Mixed => "MIXED",
            VAppStatus::DescriptorPending => "DESCRIPTOR_PENDING",
            VAppStatus::CopyingContents => "COPYING_CONTENTS",
            VAppStatus::DiskContentsPending => "DISK_CONTENTS_PENDING",
            VAppStatus::Quarantined => "QUARANTINED",
            VAppStatus::QuarantineExpired => "QUARANTINE_EXPIRED",
            VAppStatus::Rejected => "REJECTED",
            VAppStatus::TransferTimeout => "TRANSFER_TIMEOUT",
            VAppStatus::VAppUndeployed => "VAPP_UNDEPLOYED",
            VAppStatus::VAppPartiallyDeployed => "VAPP_PARTIALLY_DEPLOYED",
            VAppStatus::PartiallyPoweredOff => "PARTIALLY_POWERED_OFF",
            VAppStatus::PartiallySuspended => "PARTIALLY_SUSPENDED",
            VAppStatus::Other(code) => return write!(f, "UNKNOWN_STATUS({code})"),
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_error_code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor_error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

pub const TASK_STATUS_SUCCESS: &str = "success";
const TASK_TERMINAL_STATUSES: [&str; 4] = [TASK_STATUS_SUCCESS, "error", "canceled", "aborted"];

impl Task {
    pub fn is_terminal(&self) -> bool {
        TASK_TERMINAL_STATUSES.contains(&self.status.as_str())
    }

    pub fn succeeded(&self) -> bool {
        self.status == TASK_STATUS_SUCCESS
    }
}

// OpenAPI (/cloudapi) objects

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub result_total: usize,
    pub page_count: usize,
    pub page: usize,
    pub page_size: usize,
    #[serde(default = "Vec::new")]
    pub values: Vec<T>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinedEntityType {
    pub id: String,
    pub vendor: String,
    pub nss: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinedEntity {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

// Response from the /oauth token endpoints; only the access token matters to us
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}
