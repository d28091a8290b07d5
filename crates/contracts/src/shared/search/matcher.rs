//! Сравнение строк без учёта регистра и диакритики.
//!
//! Запрос разбивается на токены по пробелам, совпадение засчитывается,
//! только если каждый токен входит в нормализованную строку как подстрока.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Приводит строку к нижнему регистру и удаляет диакритические знаки
/// ("João" -> "joao", "Ação" -> "acao").
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Запрос, нормализованный один раз для проверки множества строк
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedQuery {
    tokens: Vec<String>,
}

impl NormalizedQuery {
    pub fn new(query: &str) -> Self {
        let tokens = normalize(query)
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self { tokens }
    }

    /// Пустой запрос (нет ни одного токена) совпадает с любой строкой
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Все токены должны входить в строку (AND по токенам)
    pub fn matches(&self, target: &str) -> bool {
        if self.tokens.is_empty() {
            return true;
        }
        let target = normalize(target);
        self.tokens.iter().all(|token| target.contains(token.as_str()))
    }
}

/// Проверка одной строки без предварительной подготовки запроса
pub fn matches(query: &str, target: &str) -> bool {
    NormalizedQuery::new(query).matches(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches("", "anything"));
        assert!(matches("", ""));
        assert!(matches("   \t ", "João"));
    }

    #[test]
    fn test_case_and_accents_are_ignored() {
        assert!(matches("joao", "João"));
        assert!(matches("JOÃO", "joao silva"));
        assert!(matches("acao", "Ação Comercial"));
        assert!(matches("Café", "CAFE"));
    }

    #[test]
    fn test_all_tokens_required() {
        assert!(matches("silva joao", "João da Silva"));
        assert!(!matches("silva pedro", "João da Silva"));
    }

    #[test]
    fn test_substring_not_word_boundary() {
        assert!(matches("ilv", "Silva"));
        assert!(matches("oao da", "João da Silva"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Conceição"), "conceicao");
        assert_eq!(normalize("ÁÉÍÓÚ àèìòù"), "aeiou aeiou");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalized_query_tokens() {
        let q = NormalizedQuery::new("  São   Paulo ");
        assert_eq!(q.tokens(), &["sao".to_string(), "paulo".to_string()]);
        assert!(!q.is_empty());
        assert!(NormalizedQuery::new(" ").is_empty());
    }
}
