use super::repository;
use contracts::domain::a002_article::aggregate::{Article, ArticleDto, ArticleId};
use contracts::shared::list::{ListQuery, ListResponse};

pub async fn create(dto: ArticleDto) -> anyhow::Result<ArticleId> {
    let aggregate = Article::new_for_insert(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::insert(&aggregate).await
}

pub async fn get_by_id(id: ArticleId) -> anyhow::Result<Option<Article>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Article>> {
    repository::list_all().await
}

pub async fn list_page(query: ListQuery) -> anyhow::Result<ListResponse<Article>> {
    let all = repository::list_all().await?;
    Ok(query.slice(&all))
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> anyhow::Result<()> {
    let data = vec![
        ("ART-001", "Novidades de Verão", "Inês Araújo", "Notícias", true),
        ("ART-002", "Como escolher um azeite", "João Silva", "Guias", true),
        ("ART-003", "Receitas com bacalhau", "Maria Conceição", "Receitas", true),
        ("ART-004", "Promoções de Outubro", "Equipa Comercial", "Promoções", false),
        ("ART-005", "Vinhos do Douro: uma introdução", "António Gonçalves", "Guias", true),
        ("ART-006", "Horário de Natal", "Equipa Comercial", "Notícias", false),
        ("ART-007", "Pão caseiro em 5 passos", "Beatriz Simões", "Receitas", true),
        ("ART-008", "Queijos de Portugal", "Sérgio Magalhães", "Guias", true),
    ];

    for (code, title, author, category, published) in data {
        create(ArticleDto {
            code: code.into(),
            title: title.into(),
            author: author.into(),
            category: category.into(),
            published,
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
    async fn test_published_before_drafts() {
        ensure_test_catalog();
        let draft = create(ArticleDto {
            code: "TST-DRAFT".into(),
            title: "Rascunho".into(),
            ..ArticleDto::default()
        })
        .await
        .unwrap();
        let published = create(ArticleDto {
            code: "TST-PUB".into(),
            title: "Publicado".into(),
            published: true,
            ..ArticleDto::default()
        })
        .await
        .unwrap();

        let all = list_all().await.unwrap();
        let pos = |id: ArticleId| all.iter().position(|a| a.base.id == id).unwrap();
        assert!(pos(published) < pos(draft));
    }
}
