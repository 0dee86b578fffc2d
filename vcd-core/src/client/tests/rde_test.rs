use super::*;

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_get_rde_type() {
    let mut fake_vcd = make_fake_vcd();
    fake_vcd.handle_token().handle_rde_type().build();
    let client = connect(&fake_vcd).await;

    let rde_type = client
        .get_rde_type(CAPVCD_RDE_VENDOR, CAPVCD_RDE_NSS, CAPVCD_RDE_VERSION)
        .await
        .unwrap();

    fake_vcd.assert();
    assert_eq!(rde_type.id, TEST_RDE_TYPE_ID);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_get_rde_type_not_registered() {
    let mut fake_vcd = make_fake_vcd();
    fake_vcd
        .handle_token()
        .handle(|when, then| {
            when.method(GET).path(RDE_TYPES_PATH);
            then.json_body(empty_page());
        })
        .build();
    let client = connect(&fake_vcd).await;

    let err = client
        .get_rde_type(CAPVCD_RDE_VENDOR, CAPVCD_RDE_NSS, CAPVCD_RDE_VERSION)
        .await
        .unwrap_err();

    fake_vcd.assert();
    assert!(is_not_found(&err));
    assert!(err.to_string().contains("vmware:capvcdCluster:1.3.0"));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_get_rdes_by_name(capvcd_rde_type: DefinedEntityType) {
    let mut fake_vcd = make_fake_vcd();
    fake_vcd.handle_token().handle_rdes(&[TEST_RDE_ID]).build();
    let client = connect(&fake_vcd).await;

    let rdes = client.get_rdes_by_name(&capvcd_rde_type, TEST_CLUSTER_NAME).await.unwrap();

    fake_vcd.assert();
    assert_eq!(rdes.len(), 1);
    assert_eq!(rdes[0].id, TEST_RDE_ID);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_get_rdes_by_name_paginated(capvcd_rde_type: DefinedEntityType) {
    let mut fake_vcd = make_fake_vcd();
    fake_vcd
        .handle_token()
        .handle(|when, then| {
            when.method(GET).path(CAPVCD_RDES_PATH).query_param("page", "1");
            then.json_body(rde_page(&[TEST_RDE_ID], 1, 2, 2));
        })
        .handle(|when, then| {
            when.method(GET).path(CAPVCD_RDES_PATH).query_param("page", "2");
            then.json_body(rde_page(&[TEST_OTHER_RDE_ID], 2, 2, 2));
        })
        .build();
    let client = connect(&fake_vcd).await;

    let rdes = client.get_rdes_by_name(&capvcd_rde_type, TEST_CLUSTER_NAME).await.unwrap();

    fake_vcd.assert();
    let ids: Vec<_> = rdes.iter().map(|rde| rde.id.as_str()).collect();
    assert_eq!(ids, vec![TEST_RDE_ID, TEST_OTHER_RDE_ID]);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_get_rdes_by_name_not_found(capvcd_rde_type: DefinedEntityType) {
    let mut fake_vcd = make_fake_vcd();
    fake_vcd.handle_token().handle_rdes(&[]).build();
    let client = connect(&fake_vcd).await;

    let err = client
        .get_rdes_by_name(&capvcd_rde_type, TEST_CLUSTER_NAME)
        .await
        .unwrap_err();

    fake_vcd.assert();
    assert!(is_not_found(&err));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_delete_rde() {
    let mut fake_vcd = make_fake_vcd();
    fake_vcd.handle_token().handle_rde_delete(TEST_RDE_ID).build();
    let client = connect(&fake_vcd).await;
    let test_rde: DefinedEntity = serde_json::from_value(rde(TEST_RDE_ID)).unwrap();

    client.delete_rde(&test_rde).await.unwrap();

    fake_vcd.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_delete_rde_server_error() {
    let mut fake_vcd = make_fake_vcd();
    fake_vcd
        .handle_token()
        .handle_error(rde_path(TEST_RDE_ID), 500, "entity is locked")
        .build();
    let client = connect(&fake_vcd).await;
    let test_rde: DefinedEntity = serde_json::from_value(rde(TEST_RDE_ID)).unwrap();

    let err = client.delete_rde(&test_rde).await.unwrap_err();

    fake_vcd.assert();
    assert!(matches!(err.downcast_ref::<VcdError>(), Some(VcdError::ApiError(_))));
    assert!(err.to_string().contains("entity is locked"));
}

#[rstest]
#[case::wildcard("test-*")]
#[case::and("test;name==other")]
#[case::or("test,other")]
#[case::not_equal("test!=other")]
#[traced_test]
#[tokio::test]
async fn test_get_rdes_by_name_unfilterable(capvcd_rde_type: DefinedEntityType, #[case] name: &str) {
    let mut fake_vcd = make_fake_vcd();
    fake_vcd.handle_token().build();
    let client = connect(&fake_vcd).await;

    let err = client.get_rdes_by_name(&capvcd_rde_type, name).await.unwrap_err();

    // Nothing besides the token exchange should have gone out
    fake_vcd.assert();
    assert!(matches!(err.downcast_ref::<VcdError>(), Some(VcdError::InvalidFilterValue(_))));
    assert!(!is_not_found(&err));
}
