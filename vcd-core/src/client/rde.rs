use super::*;

// FIQL operators and separators, plus the VCD wildcard
const FILTER_RESERVED_CHARS: [char; 10] = [';', ',', '(', ')', '=', '!', '<', '>', '~', '*'];

impl VcdClient {
    pub async fn get_rde_type(&self, vendor: &str, nss: &str, version: &str) -> anyhow::Result<DefinedEntityType> {
        let filter = format!("vendor=={vendor};nss=={nss};version=={version}");
        let mut rde_types: Vec<DefinedEntityType> = self.get_all_pages("/entityTypes", &filter).await?;
        match rde_types.len() {
            0 => Err(VcdError::entity_not_found(&format!("RDE type {vendor}:{nss}:{version}"))),
            1 => Ok(rde_types.remove(0)),
            n => bail!("expected exactly one RDE type {vendor}:{nss}:{version}, found {n}"),
        }
    }

    pub async fn get_rdes_by_name(
        &self,
        rde_type: &DefinedEntityType,
        name: &str,
    ) -> anyhow::Result<Vec<DefinedEntity>> {
        let path = format!("/entities/types/{}/{}/{}", rde_type.vendor, rde_type.nss, rde_type.version);
        let rdes: Vec<DefinedEntity> = self.get_all_pages(&path, &format!("name=={}", filter_value(name)?)).await?;
        if rdes.is_empty() {
            return Err(VcdError::entity_not_found(&format!("RDE {name} of type {}", rde_type.id)));
        }

        Ok(rdes)
    }

    pub async fn delete_rde(&self, rde: &DefinedEntity) -> EmptyResult {
        debug!("issuing delete for RDE {} ({})", rde.name, rde.id);
        self.delete(Api::OpenApi, self.openapi_url(&format!("/entities/{}", rde.id))?)
            .await
    }

    async fn get_all_pages<T: DeserializeOwned>(&self, path: &str, filter: &str) -> anyhow::Result<Vec<T>> {
        let mut values = vec![];
        let mut page_num = 1;
        loop {
            let mut url = self.openapi_url(path)?;
            url.query_pairs_mut()
                .append_pair("filter", filter)
                .append_pair("page", &page_num.to_string())
                .append_pair("pageSize", &OPENAPI_PAGE_SIZE.to_string());

            let page: Page<T> = self.get_json(Api::OpenApi, url).await?;
            values.extend(page.values);
            if page_num >= page.page_count {
                break;
            }
            page_num += 1;
        }

        Ok(values)
    }
}

// Names go into the filter verbatim, so one that would change the meaning of the query (or
// match more than one thing) is refused outright.
fn filter_value(value: &str) -> anyhow::Result<&str> {
    if value.contains(&FILTER_RESERVED_CHARS[..]) {
        return Err(VcdError::invalid_filter_value(value));
    }
    Ok(value)
}
