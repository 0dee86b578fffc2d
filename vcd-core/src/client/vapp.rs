use tokio::time::sleep;

use super::*;

impl VcdClient {
    pub async fn get_vapp_by_name(&self, vdc: &Vdc, name: &str, refresh: bool) -> anyhow::Result<VApp> {
        // A vApp that was just created or removed by someone else won't show up in a VDC
        // object we fetched earlier, hence the refresh option
        let refreshed: Vdc;
        let vdc = if refresh {
            refreshed = self.get_json(Api::Legacy, parse_href(&vdc.href)?).await?;
            &refreshed
        } else {
            vdc
        };

        let vapp_ref = vdc
            .resource_entities
            .iter()
            .flat_map(|entities| entities.resource_entity.iter())
            .find(|r| r.type_.as_deref() == Some(VAPP_MEDIA_TYPE) && r.name.as_deref() == Some(name))
            .ok_or_else(|| VcdError::entity_not_found(&format!("vApp {name} in VDC {}", vdc.name)))?;

        self.get_json(Api::Legacy, parse_href(&vapp_ref.href)?).await
    }

    pub async fn delete_vapp(&self, vapp: &VApp) -> anyhow::Result<Task> {
        debug!("issuing delete for vApp {} ({})", vapp.name, vapp.href);
        self.delete_json(Api::Legacy, parse_href(&vapp.href)?).await
    }

    pub async fn wait_task_completion(&self, task: &Task) -> anyhow::Result<Task> {
        let url = parse_href(&task.href)?;
        let mut current = task.clone();
        while !current.is_terminal() {
            debug!("task {} is {}, checking again in {:?}", current.href, current.status, self.config.task_poll_interval);
            sleep(self.config.task_poll_interval).await;
            current = self.get_json(Api::Legacy, url.clone()).await?;
        }

        if !current.succeeded() {
            let reason = current
                .error
                .as_ref()
                .and_then(|err| err.message.clone())
                .unwrap_or_else(|| "no error details reported".into());
            return Err(VcdError::task_failed(&format!(
                "task {} finished with status {}: {reason}",
                current.href, current.status
            )));
        }

        Ok(current)
    }
}
