use serde::{Deserialize, Serialize};

/// Страница коллекции, отдаваемая источником записей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    /// Общее количество записей в коллекции
    pub total: usize,
}

impl<T> ListResponse<T> {
    /// Получена ли вся коллекция целиком
    pub fn is_complete(&self) -> bool {
        self.items.len() >= self.total
    }
}

/// Параметры запроса страницы (`?limit=&offset=`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl ListQuery {
    pub fn first_page(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            offset: None,
        }
    }

    /// Вырезать страницу из полной коллекции
    pub fn slice<T: Clone>(&self, all: &[T]) -> ListResponse<T> {
        let offset = self.offset.unwrap_or(0).min(all.len());
        let end = match self.limit {
            Some(limit) => offset.saturating_add(limit).min(all.len()),
            None => all.len(),
        };
        ListResponse {
            items: all[offset..end].to_vec(),
            total: all.len(),
        }
    }
}
