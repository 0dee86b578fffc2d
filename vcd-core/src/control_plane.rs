use async_trait::async_trait;
#[cfg(feature = "mock")]
use mockall::automock;

use crate::prelude::*;

/// The operations the cleanup workflow needs from a VCD control plane.
///
/// Every lookup fails with [`VcdError::EntityNotFound`] when the thing being looked up doesn't
/// exist (check for it with [`is_not_found`]); everything else is a hard error.  `delete_rde` is
/// synchronous from the caller's point of view, while `delete_vapp` hands back a task that has to
/// be waited on with `wait_task_completion`.
#[cfg_attr(feature = "mock", automock)]
#[async_trait]
pub trait ControlPlane: Send + Sync {
    async fn get_rde_type(&self, vendor: &str, nss: &str, version: &str) -> anyhow::Result<DefinedEntityType>;
    async fn get_rdes_by_name(&self, rde_type: &DefinedEntityType, name: &str) -> anyhow::Result<Vec<DefinedEntity>>;
    async fn delete_rde(&self, rde: &DefinedEntity) -> EmptyResult;

    async fn get_org_by_name(&self, name: &str) -> anyhow::Result<Org>;
    async fn get_vdc_by_name(&self, org: &Org, name: &str, refresh: bool) -> anyhow::Result<Vdc>;
    async fn get_vapp_by_name(&self, vdc: &Vdc, name: &str, refresh: bool) -> anyhow::Result<VApp>;
    async fn delete_vapp(&self, vapp: &VApp) -> anyhow::Result<Task>;
    async fn wait_task_completion(&self, task: &Task) -> anyhow::Result<Task>;
}

#[async_trait]
impl ControlPlane for VcdClient {
    async fn get_rde_type(&self, vendor: &str, nss: &str, version: &str) -> anyhow::Result<DefinedEntityType> {
        VcdClient::get_rde_type(self, vendor, nss, version).await
    }

    async fn get_rdes_by_name(&self, rde_type: &DefinedEntityType, name: &str) -> anyhow::Result<Vec<DefinedEntity>> {
        VcdClient::get_rdes_by_name(self, rde_type, name).await
    }

    async fn delete_rde(&self, rde: &DefinedEntity) -> EmptyResult {
        VcdClient::delete_rde(self, rde).await
    }

    async fn get_org_by_name(&self, name: &str) -> anyhow::Result<Org> {
        VcdClient::get_org_by_name(self, name).await
    }

    async fn get_vdc_by_name(&self, org: &Org, name: &str, refresh: bool) -> anyhow::Result<Vdc> {
        VcdClient::get_vdc_by_name(self, org, name, refresh).await
    }

    async fn get_vapp_by_name(&self, vdc: &Vdc, name: &str, refresh: bool) -> anyhow::Result<VApp> {
        VcdClient::get_vapp_by_name(self, vdc, name, refresh).await
    }

    async fn delete_vapp(&self, vapp: &VApp) -> anyhow::Result<Task> {
        VcdClient::delete_vapp(self, vapp).await
    }

    async fn wait_task_completion(&self, task: &Task) -> anyhow::Result<Task> {
        VcdClient::wait_task_completion(self, task).await
    }
}
