pub const TEST_API_TOKEN: &str = "test-api-token";
pub const TEST_ACCESS_TOKEN: &str = "test-access-token";
pub const TEST_ORG: &str = "test-org";
pub const TEST_VDC: &str = "test-vdc";
pub const TEST_CLUSTER_NAME: &str = "test-cluster";

pub const TEST_ORG_ID: &str = "a93c9db9-7471-3192-8d09-a8f7eeda85f9";
pub const TEST_VDC_ID: &str = "5f8c8a4d-6a1c-4d8e-9b2a-3c1f0e7d2b44";
pub const TEST_VAPP_ID: &str = "vapp-0f4b2c9e-8d17-4e3a-a1b5-7c6d5e4f3a21";
pub const TEST_TASK_ID: &str = "e2d9c1b8-3f4a-4b5c-8d6e-7f8091a2b3c4";
pub const TEST_RDE_TYPE_ID: &str = "urn:vcloud:type:vmware:capvcdCluster:1.3.0";
pub const TEST_RDE_ID: &str = "urn:vcloud:entity:vmware:capvcdCluster:7d1c2b3a-4e5f-6a7b-8c9d-0e1f2a3b4c5d";
pub const TEST_OTHER_RDE_ID: &str = "urn:vcloud:entity:vmware:capvcdCluster:1a2b3c4d-5e6f-7a8b-9c0d-1e2f3a4b5c6d";

// vApp status codes, as the VCD API reports them
pub const VAPP_STATUS_RESOLVED: i32 = 1;
pub const VAPP_STATUS_POWERED_ON: i32 = 4;
pub const VAPP_STATUS_POWERED_OFF: i32 = 8;

// Paths on the fake control plane
pub const TENANT_TOKEN_PATH: &str = "/oauth/tenant/test-org/token";
pub const ORG_LIST_PATH: &str = "/api/org/";
pub const RDE_TYPES_PATH: &str = "/cloudapi/1.0.0/entityTypes";
pub const CAPVCD_RDES_PATH: &str = "/cloudapi/1.0.0/entities/types/vmware/capvcdCluster/1.3.0";

pub fn org_path() -> String {
    format!("/api/org/{TEST_ORG_ID}")
}

pub fn vdc_path() -> String {
    format!("/api/vdc/{TEST_VDC_ID}")
}

pub fn vapp_path() -> String {
    format!("/api/vApp/{TEST_VAPP_ID}")
}

pub fn task_path() -> String {
    format!("/api/task/{TEST_TASK_ID}")
}

pub fn rde_path(id: &str) -> String {
    format!("/cloudapi/1.0.0/entities/{id}")
}
