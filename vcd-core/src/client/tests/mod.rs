mod rde_test;

use std::time::Duration;

use httpmock::prelude::*;
use rstest::*;
use tracing_test::traced_test;
use vcd_testutils::*;

use super::*;

fn test_config() -> SessionConfig {
    SessionConfig {
        log_http: true,
        task_poll_interval: Duration::ZERO,
        ..Default::default()
    }
}

async fn connect(fake: &MockServerBuilder) -> VcdClient {
    VcdClient::connect(&fake.base_url(), TEST_ORG, TEST_API_TOKEN, test_config())
        .await
        .unwrap()
}

#[fixture]
fn capvcd_rde_type() -> DefinedEntityType {
    DefinedEntityType {
        id: TEST_RDE_TYPE_ID.into(),
        vendor: CAPVCD_RDE_VENDOR.into(),
        nss: CAPVCD_RDE_NSS.into(),
        version: CAPVCD_RDE_VERSION.into(),
        name: Some("CAPVCD Cluster".into()),
    }
}

#[rstest]
#[case::not_found(VcdError::entity_not_found("vApp foo"), true)]
#[case::not_found_with_context(VcdError::entity_not_found("vApp foo").context("error getting vApp"), true)]
#[case::api_error(VcdError::api_error("500 Internal Server Error"), false)]
#[case::task_failed(VcdError::task_failed("entity not found"), false)]
#[case::untyped(anyhow!("entity not found: vApp foo"), false)]
fn test_is_not_found(#[case] err: anyhow::Error, #[case] expected: bool) {
    assert_eq!(is_not_found(&err), expected);
}
