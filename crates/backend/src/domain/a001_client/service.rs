use super::repository;
use contracts::domain::a001_client::aggregate::{Client, ClientDto, ClientId};
use contracts::shared::list::{ListQuery, ListResponse};

/// Создание нового клиента
pub async fn create(dto: ClientDto) -> anyhow::Result<ClientId> {
    let aggregate = Client::new_for_insert(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::insert(&aggregate).await
}

pub async fn get_by_id(id: ClientId) -> anyhow::Result<Option<Client>> {
    repository::get_by_id(id).await
}

/// Получение списка всех клиентов (по имени)
pub async fn list_all() -> anyhow::Result<Vec<Client>> {
    repository::list_all().await
}

/// Страница списка клиентов
pub async fn list_page(query: ListQuery) -> anyhow::Result<ListResponse<Client>> {
    let all = repository::list_all().await?;
    Ok(query.slice(&all))
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> anyhow::Result<()> {
    let data = vec![
        ("CLT-001", "João Silva", "245678901", "joao.silva@example.pt", "+351 912 345 678", "Lisboa", true),
        ("CLT-002", "Maria Conceição", "198765432", "maria.c@example.pt", "+351 913 222 111", "Porto", true),
        ("CLT-003", "António Gonçalves", "287654321", "antonio@example.pt", "", "Coimbra", true),
        ("CLT-004", "Inês Araújo", "176543210", "ines.araujo@example.pt", "+351 962 000 333", "Braga", false),
        ("CLT-005", "Sérgio Magalhães", "265432109", "", "+351 934 555 777", "Évora", true),
        ("CLT-006", "Ana Luísa Fernandes", "254321098", "ana.fernandes@example.pt", "", "Faro", true),
        ("CLT-007", "Padaria São João, Lda.", "501234567", "encomendas@padaria-sj.pt", "+351 229 876 543", "Vila Nova de Gaia", true),
        ("CLT-008", "Rui Patrício", "243210987", "rui.p@example.pt", "", "Setúbal", false),
        ("CLT-009", "Beatriz Simões", "232109876", "beatriz.simoes@example.pt", "+351 917 888 999", "Aveiro", true),
        ("CLT-010", "Café Açores", "509876543", "geral@cafe-acores.pt", "+351 296 123 456", "Ponta Delgada", true),
        ("CLT-011", "Luís Figo Martins", "221098765", "luis.martins@example.pt", "", "Lisboa", true),
        ("CLT-012", "Cátia Vieira", "210987654", "catia.v@example.pt", "+351 968 101 202", "Guimarães", true),
    ];

    for (code, name, tax_id, email, phone, city, active) in data {
        create(ClientDto {
            code: code.into(),
            name: name.into(),
            tax_id: tax_id.into(),
            email: email.into(),
            phone: phone.into(),
            city: city.into(),
            active,
            comment: None,
        })
        .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::catalog::ensure_test_catalog;

    #[tokio::test]
    async fn test_create_and_get() {
        ensure_test_catalog();
        let id = create(ClientDto {
            code: "TST-CLT".into(),
            name: "Zé Povinho".into(),
            email: "ze@example.pt".into(),
            active: true,
            ..ClientDto::default()
        })
        .await
        .unwrap();

        let client = get_by_id(id).await.unwrap().unwrap();
        assert_eq!(client.base.description, "Zé Povinho");
        assert!(list_all().await.unwrap().iter().any(|c| c.base.id == id));
    }

    #[tokio::test]
    async fn test_create_rejects_bad_email() {
        ensure_test_catalog();
        let result = create(ClientDto {
            code: "TST-BAD".into(),
            name: "Sem Email".into(),
            email: "not-an-email".into(),
            ..ClientDto::default()
        })
        .await;
        assert!(result.is_err());
    }
}
