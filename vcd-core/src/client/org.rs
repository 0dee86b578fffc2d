use super::*;

impl VcdClient {
    pub async fn get_org_by_name(&self, name: &str) -> anyhow::Result<Org> {
        let orgs: OrgList = self.get_json(Api::Legacy, self.url_for(&format!("{LEGACY_API_PATH}/org/"))?).await?;
        let org_ref = orgs
            .org
            .into_iter()
            .find(|r| r.name.as_deref() == Some(name))
            .ok_or_else(|| VcdError::entity_not_found(&format!("org {name}")))?;

        self.get_json(Api::Legacy, parse_href(&org_ref.href)?).await
    }

    pub async fn get_vdc_by_name(&self, org: &Org, name: &str, refresh: bool) -> anyhow::Result<Vdc> {
        let refreshed: Org;
        let org = if refresh {
            refreshed = self.get_json(Api::Legacy, parse_href(&org.href)?).await?;
            &refreshed
        } else {
            org
        };

        let vdc_link = org
            .link
            .iter()
            .find(|l| l.type_.as_deref() == Some(VDC_MEDIA_TYPE) && l.name.as_deref() == Some(name))
            .ok_or_else(|| VcdError::entity_not_found(&format!("VDC {name} in org {}", org.name)))?;

        self.get_json(Api::Legacy, parse_href(&vdc_link.href)?).await
    }
}
