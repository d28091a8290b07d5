use contracts::domain::a001_client::aggregate::{Client, ClientId};

use crate::shared::data::catalog::get_catalog;

pub async fn list_all() -> anyhow::Result<Vec<Client>> {
    let catalog = get_catalog()?;
    let mut items: Vec<Client> = catalog
        .read()?
        .clients
        .iter()
        .filter(|c| !c.base.metadata.is_deleted)
        .cloned()
        .collect();
    items.sort_by(|a, b| {
        a.base
            .description
            .to_lowercase()
            .cmp(&b.base.description.to_lowercase())
    });
    Ok(items)
}

pub async fn get_by_id(id: ClientId) -> anyhow::Result<Option<Client>> {
    let catalog = get_catalog()?;
    let found = catalog
        .read()?
        .clients
        .iter()
        .find(|c| c.base.id == id && !c.base.metadata.is_deleted)
        .cloned();
    Ok(found)
}

pub async fn insert(aggregate: &Client) -> anyhow::Result<ClientId> {
    let catalog = get_catalog()?;
    catalog.write()?.clients.push(aggregate.clone());
    Ok(aggregate.base.id)
}
