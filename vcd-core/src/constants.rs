use std::time::Duration;

// CAPVCD cluster runtime defined entity type
pub const CAPVCD_RDE_VENDOR: &str = "vmware";
pub const CAPVCD_RDE_NSS: &str = "capvcdCluster";
pub const CAPVCD_RDE_VERSION: &str = "1.3.0";

// Env vars
pub const VCD_API_TOKEN_ENV_VAR: &str = "VCD_API_TOKEN";

// API paths, relative to the control plane root
pub const LEGACY_API_PATH: &str = "/api";
pub const OPENAPI_PATH: &str = "/cloudapi/1.0.0";
pub const PROVIDER_TOKEN_PATH: &str = "/oauth/provider/token";
pub const SYSTEM_ORG: &str = "System";

// Media types
pub const VDC_MEDIA_TYPE: &str = "application/vnd.vmware.vcloud.vdc+xml";
pub const VAPP_MEDIA_TYPE: &str = "application/vnd.vmware.vcloud.vApp+xml";

// Defaults
pub const DEFAULT_API_VERSION: &str = "37.0";
pub const OPENAPI_PAGE_SIZE: usize = 128;

// Timing
pub const DEFAULT_TASK_POLL_INTERVAL: Duration = Duration::from_secs(3);
