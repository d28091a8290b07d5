use crate::domain::common::{AggregateId, BaseAggregate};
use crate::shared::table::{CellValue, Column, TableRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор клиента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub Uuid);

impl ClientId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ClientId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ClientId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Клиент магазина
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(flatten)]
    pub base: BaseAggregate<ClientId>,

    #[serde(rename = "taxId")]
    pub tax_id: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub active: bool,
}

impl Client {
    pub fn new_for_insert(dto: &ClientDto) -> Self {
        let mut base = BaseAggregate::new(
            ClientId::new_v4(),
            dto.code.clone(),
            dto.name.clone(),
        );
        base.comment = dto.comment.clone();

        Self {
            base,
            tax_id: dto.tax_id.clone(),
            email: dto.email.clone(),
            phone: dto.phone.clone(),
            city: dto.city.clone(),
            active: dto.active,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Имя клиента не может быть пустым".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Код не может быть пустым".into());
        }
        if !self.email.is_empty() && !self.email.contains('@') {
            return Err("Некорректный email".into());
        }
        Ok(())
    }
}

impl TableRecord for Client {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("code", "Код", |c: &Client| CellValue::text(c.base.code.clone())),
            Column::new("name", "Имя", |c: &Client| CellValue::text(c.base.description.clone())),
            Column::new("tax_id", "Налоговый номер", |c: &Client| {
                CellValue::opt_text(Some(c.tax_id.as_str()))
            }),
            Column::new("email", "Email", |c: &Client| CellValue::opt_text(Some(c.email.as_str()))),
            Column::new("phone", "Телефон", |c: &Client| CellValue::opt_text(Some(c.phone.as_str()))),
            Column::new("city", "Город", |c: &Client| CellValue::opt_text(Some(c.city.as_str()))),
            Column::new("active", "Активен", |c: &Client| CellValue::Bool(c.active)),
        ]
    }

    fn search_fields() -> Vec<&'static str> {
        vec!["code", "name", "tax_id", "email", "city"]
    }

    fn row_key(&self) -> String {
        self.to_string_id()
    }
}

// ============================================================================
// DTO
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientDto {
    pub code: String,
    pub name: String,
    #[serde(rename = "taxId")]
    pub tax_id: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub active: bool,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> ClientDto {
        ClientDto {
            code: "CLT-001".into(),
            name: "João Silva".into(),
            tax_id: "123456789".into(),
            email: "joao@example.pt".into(),
            phone: String::new(),
            city: "Lisboa".into(),
            active: true,
            comment: None,
        }
    }

    #[test]
    fn test_validate() {
        assert!(Client::new_for_insert(&dto()).validate().is_ok());

        let mut bad = dto();
        bad.email = "joao.example.pt".into();
        assert!(Client::new_for_insert(&bad).validate().is_err());

        let mut unnamed = dto();
        unnamed.name = "  ".into();
        assert!(Client::new_for_insert(&unnamed).validate().is_err());
    }

    #[test]
    fn test_fields_for_table() {
        let client = Client::new_for_insert(&dto());
        assert_eq!(client.field_text("name").as_deref(), Some("João Silva"));
        assert_eq!(client.field_text("phone"), None);
        assert_eq!(client.field_text("active").as_deref(), Some("Да"));
        assert_eq!(client.row_key(), client.to_string_id());
    }
}
