use serde_json::json;

use crate::constants::*;

// Bodies the fake control plane hands back.  Real VCD responses carry a lot more than this;
// these only have the fields the client reads plus enough noise to make sure extra fields
// are tolerated.

pub fn token_response() -> serde_json::Value {
    json!({
        "access_token": TEST_ACCESS_TOKEN,
        "token_type": "Bearer",
        "expires_in": 2592000,
        "refresh_token": null,
    })
}

pub fn vcd_error(major_code: u16, message: &str) -> serde_json::Value {
    json!({
        "majorErrorCode": major_code,
        "minorErrorCode": "BAD_REQUEST",
        "message": message,
        "stackTrace": null,
    })
}

pub fn org_list(base: &str) -> serde_json::Value {
    json!({
        "href": format!("{base}{ORG_LIST_PATH}"),
        "type": "application/vnd.vmware.vcloud.orgList+json",
        "org": [
            {
                "href": format!("{base}/api/org/00000000-0000-0000-0000-000000000000"),
                "name": "some-other-org",
                "type": "application/vnd.vmware.vcloud.org+json",
            },
            {
                "href": format!("{base}{}", org_path()),
                "name": TEST_ORG,
                "type": "application/vnd.vmware.vcloud.org+json",
            },
        ],
    })
}

pub fn org(base: &str) -> serde_json::Value {
    json!({
        "href": format!("{base}{}", org_path()),
        "id": format!("urn:vcloud:org:{TEST_ORG_ID}"),
        "name": TEST_ORG,
        "fullName": "Test Organization",
        "link": [
            {
                "href": format!("{base}/api/catalog/11111111-2222-3333-4444-555555555555"),
                "rel": "down",
                "type": "application/vnd.vmware.vcloud.catalog+xml",
                "name": TEST_VDC,
            },
            {
                "href": format!("{base}{}", vdc_path()),
                "rel": "down",
                "type": "application/vnd.vmware.vcloud.vdc+xml",
                "name": TEST_VDC,
            },
        ],
    })
}

pub fn vdc(base: &str, with_vapp: bool) -> serde_json::Value {
    let mut entities = vec![json!({
        "href": format!("{base}/api/vAppTemplate/vappTemplate-1234"),
        "name": TEST_CLUSTER_NAME,
        "type": "application/vnd.vmware.vcloud.vAppTemplate+xml",
    })];
    if with_vapp {
        entities.push(json!({
            "href": format!("{base}{}", vapp_path()),
            "name": TEST_CLUSTER_NAME,
            "type": "application/vnd.vmware.vcloud.vApp+xml",
        }));
    }

    json!({
        "href": format!("{base}{}", vdc_path()),
        "id": format!("urn:vcloud:vdc:{TEST_VDC_ID}"),
        "name": TEST_VDC,
        "status": 1,
        "resourceEntities": {
            "resourceEntity": entities,
        },
    })
}

pub fn vapp(base: &str, status: i32) -> serde_json::Value {
    json!({
        "href": format!("{base}{}", vapp_path()),
        "id": format!("urn:vcloud:vapp:{TEST_VAPP_ID}"),
        "name": TEST_CLUSTER_NAME,
        "status": status,
        "deployed": status != VAPP_STATUS_RESOLVED,
        "type": "application/vnd.vmware.vcloud.vApp+xml",
    })
}

pub fn task(base: &str, status: &str) -> serde_json::Value {
    let mut task = json!({
        "href": format!("{base}{}", task_path()),
        "id": format!("urn:vcloud:task:{TEST_TASK_ID}"),
        "name": "task",
        "operationName": "vdcDeleteVapp",
        "status": status,
    });
    if status == "error" {
        task["error"] = vcd_error(500, "the vApp is busy");
    }
    task
}

pub fn rde_type_page() -> serde_json::Value {
    json!({
        "resultTotal": 1,
        "pageCount": 1,
        "page": 1,
        "pageSize": 128,
        "values": [{
            "id": TEST_RDE_TYPE_ID,
            "vendor": "vmware",
            "nss": "capvcdCluster",
            "version": "1.3.0",
            "name": "CAPVCD Cluster",
            "readonly": false,
        }],
    })
}

pub fn empty_page() -> serde_json::Value {
    json!({
        "resultTotal": 0,
        "pageCount": 0,
        "page": 1,
        "pageSize": 128,
        "values": [],
    })
}

pub fn rde(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "entityType": TEST_RDE_TYPE_ID,
        "name": TEST_CLUSTER_NAME,
        "state": "RESOLVED",
        "entity": {
            "kind": "CAPVCDCluster",
            "apiVersion": "capvcd.vmware.com/v1.3",
        },
    })
}

pub fn rde_page(ids: &[&str], page: usize, page_count: usize, result_total: usize) -> serde_json::Value {
    json!({
        "resultTotal": result_total,
        "pageCount": page_count,
        "page": page,
        "pageSize": 128,
        "values": ids.iter().map(|id| rde(id)).collect::<Vec<_>>(),
    })
}
